//! Snippet templates

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown snippet tab {0:?} (expected maven, gradle-groovy or gradle-kotlin)")]
pub struct UnknownTemplate(pub String);

/// One of the fixed dependency declaration templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetTemplate {
    Maven,
    GradleGroovy,
    GradleKotlin,
}

impl SnippetTemplate {
    /// All templates in tab order
    pub const ALL: [SnippetTemplate; 3] = [
        SnippetTemplate::Maven,
        SnippetTemplate::GradleGroovy,
        SnippetTemplate::GradleKotlin,
    ];

    /// Stable tab identifier
    pub fn value(&self) -> &'static str {
        match self {
            SnippetTemplate::Maven => "maven",
            SnippetTemplate::GradleGroovy => "gradle-groovy",
            SnippetTemplate::GradleKotlin => "gradle-kotlin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SnippetTemplate::Maven => "Maven",
            SnippetTemplate::GradleGroovy => "Gradle (Groovy)",
            SnippetTemplate::GradleKotlin => "Gradle (Kotlin)",
        }
    }

    /// Code block language for syntax highlighting
    pub fn language(&self) -> &'static str {
        match self {
            SnippetTemplate::Maven => "xml",
            SnippetTemplate::GradleGroovy => "groovy",
            SnippetTemplate::GradleKotlin => "kotlin",
        }
    }

    /// Substitutes the coordinates into the template; no validation
    pub fn render(&self, group: &str, artifact_id: &str, version: &str) -> String {
        match self {
            SnippetTemplate::Maven => format!(
                "<dependency>\n  <groupId>{group}</groupId>\n  <artifactId>{artifact_id}</artifactId>\n  <version>{version}</version>\n</dependency>"
            ),
            SnippetTemplate::GradleGroovy => {
                format!("implementation '{group}:{artifact_id}:{version}'")
            }
            SnippetTemplate::GradleKotlin => {
                format!("implementation(\"{group}:{artifact_id}:{version}\")")
            }
        }
    }
}

impl fmt::Display for SnippetTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for SnippetTemplate {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SnippetTemplate::ALL
            .into_iter()
            .find(|t| t.value() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

/// A rendered template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub template: SnippetTemplate,
    pub code: String,
}

impl Snippet {
    pub fn new(template: SnippetTemplate, group: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            template,
            code: template.render(group, artifact_id, version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn maven_renders_dependency_block() {
        let code = SnippetTemplate::Maven.render("com.example", "mylib", "3.4.0");

        assert_eq!(
            code,
            "<dependency>\n  <groupId>com.example</groupId>\n  <artifactId>mylib</artifactId>\n  <version>3.4.0</version>\n</dependency>"
        );
    }

    #[rstest]
    #[case(SnippetTemplate::GradleGroovy, "implementation 'com.example:mylib:3.4.0'")]
    #[case(SnippetTemplate::GradleKotlin, "implementation(\"com.example:mylib:3.4.0\")")]
    fn gradle_renders_single_line(#[case] template: SnippetTemplate, #[case] expected: &str) {
        assert_eq!(template.render("com.example", "mylib", "3.4.0"), expected);
    }

    #[test]
    fn empty_coordinates_are_substituted_verbatim() {
        assert_eq!(
            SnippetTemplate::GradleGroovy.render("", "", "loading..."),
            "implementation '::loading...'"
        );
    }

    #[rstest]
    #[case("maven", Ok(SnippetTemplate::Maven))]
    #[case("gradle-groovy", Ok(SnippetTemplate::GradleGroovy))]
    #[case("gradle-kotlin", Ok(SnippetTemplate::GradleKotlin))]
    #[case("sbt", Err(UnknownTemplate("sbt".to_string())))]
    fn from_str_parses_tab_values(
        #[case] input: &str,
        #[case] expected: Result<SnippetTemplate, UnknownTemplate>,
    ) {
        assert_eq!(input.parse::<SnippetTemplate>(), expected);
    }

    #[test]
    fn metadata_matches_tab_order() {
        let labels: Vec<_> = SnippetTemplate::ALL.iter().map(|t| t.label()).collect();
        let languages: Vec<_> = SnippetTemplate::ALL.iter().map(|t| t.language()).collect();

        assert_eq!(labels, vec!["Maven", "Gradle (Groovy)", "Gradle (Kotlin)"]);
        assert_eq!(languages, vec!["xml", "groovy", "kotlin"]);
    }
}
