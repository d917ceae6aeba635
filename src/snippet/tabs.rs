//! Tab group HTML
//!
//! One `role="tab"` button per snippet and one `role="tabpanel"` holding
//! its code block. Only the selected panel is visible.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::snippet::template::{Snippet, SnippetTemplate};

/// Render a tab group for `snippets` with `selected` visible
///
/// `group_id` prefixes the element ids so several groups can share a page.
pub fn render_tab_group(
    group_id: &str,
    snippets: &[Snippet],
    selected: SnippetTemplate,
) -> String {
    let group_id = encode_double_quoted_attribute(group_id);
    let mut output = String::with_capacity(1024);

    let _ = write!(output, r#"<div class="tabs" id="tabs-{group_id}">"#);

    output.push_str(r#"<div class="tabs-buttons" role="tablist">"#);
    for snippet in snippets {
        let value = snippet.template.value();
        let is_selected = snippet.template == selected;
        let _ = write!(
            output,
            r#"<button role="tab" id="tab-{group_id}-{value}" aria-controls="panel-{group_id}-{value}" aria-selected="{is_selected}" tabindex="{}">{}</button>"#,
            if is_selected { "0" } else { "-1" },
            encode_text(snippet.template.label())
        );
    }
    output.push_str("</div>");

    for snippet in snippets {
        let value = snippet.template.value();
        let hidden = if snippet.template == selected {
            ""
        } else {
            " hidden"
        };
        let _ = write!(
            output,
            r#"<div role="tabpanel" id="panel-{group_id}-{value}" aria-labelledby="tab-{group_id}-{value}"{hidden}><pre><code class="language-{}">{}</code></pre></div>"#,
            snippet.template.language(),
            encode_text(&snippet.code)
        );
    }

    output.push_str("</div>");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippets() -> Vec<Snippet> {
        SnippetTemplate::ALL
            .into_iter()
            .map(|t| Snippet::new(t, "com.example", "mylib", "3.4.0"))
            .collect()
    }

    #[test]
    fn renders_accessible_tab_structure() {
        let html = render_tab_group("imperat", &snippets(), SnippetTemplate::Maven);

        assert!(html.starts_with(r#"<div class="tabs" id="tabs-imperat">"#));
        assert!(html.contains(r#"role="tablist""#));
        assert_eq!(html.matches(r#"role="tab""#).count(), 3);
        assert_eq!(html.matches(r#"role="tabpanel""#).count(), 3);
        assert!(html.contains("Gradle (Kotlin)</button>"));
    }

    #[test]
    fn only_selected_panel_is_visible() {
        let html = render_tab_group("imperat", &snippets(), SnippetTemplate::GradleGroovy);

        assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
        assert_eq!(html.matches(" hidden>").count(), 2);
        assert!(html.contains(
            r#"<div role="tabpanel" id="panel-imperat-gradle-groovy" aria-labelledby="tab-imperat-gradle-groovy"><pre>"#
        ));
    }

    #[test]
    fn escapes_code_content() {
        let html = render_tab_group("imperat", &snippets(), SnippetTemplate::Maven);

        assert!(html.contains(
            r#"<code class="language-xml">&lt;dependency&gt;
  &lt;groupId&gt;com.example&lt;/groupId&gt;"#
        ));
        assert!(!html.contains("<dependency>"));
    }
}
