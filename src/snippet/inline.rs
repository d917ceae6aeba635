//! Bare latest version widget

use html_escape::encode_text;
use tokio::sync::watch;

use crate::version::resolver::VersionResolver;
use crate::version::types::{RepoRef, VersionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestVersionProps {
    pub repo: RepoRef,
    pub strip_v: bool,
    /// Wrap the output in `<code>`
    pub code_block: bool,
}

impl LatestVersionProps {
    pub fn new(repo: RepoRef) -> Self {
        Self {
            repo,
            strip_v: true,
            code_block: true,
        }
    }

    pub fn strip_v(mut self, strip_v: bool) -> Self {
        self.strip_v = strip_v;
        self
    }

    pub fn code_block(mut self, code_block: bool) -> Self {
        self.code_block = code_block;
        self
    }
}

/// Latest tag of a repository, rendered on its own
pub struct LatestVersion {
    props: LatestVersionProps,
    version: watch::Receiver<VersionState>,
}

impl LatestVersion {
    /// Mounts the widget, starting resolution of `props.repo`
    ///
    /// Must be called within a tokio runtime when the tag is not cached.
    pub fn mount(resolver: &VersionResolver, props: LatestVersionProps) -> Self {
        let version = resolver.watch(&props.repo, props.strip_v);
        Self { props, version }
    }

    pub fn props(&self) -> &LatestVersionProps {
        &self.props
    }

    pub fn state(&self) -> VersionState {
        self.version.borrow().clone()
    }

    pub async fn settled(&mut self) -> VersionState {
        if let Ok(state) = self.version.wait_for(VersionState::is_settled).await {
            return state.clone();
        }
        self.version.borrow().clone()
    }

    pub fn render(&self) -> String {
        let state = self.version.borrow();
        if self.props.code_block {
            format!("<code>{}</code>", encode_text(state.display()))
        } else {
            state.display().to_string()
        }
    }

    /// Hands the display string to `f` and returns its output
    pub fn render_with<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self.version.borrow().display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::version::cache::MemoryStore;
    use crate::version::registry::MockTagRegistry;

    fn resolver_returning(tags: Vec<&'static str>) -> VersionResolver {
        let mut registry = MockTagRegistry::new();
        registry
            .expect_fetch_latest_tag()
            .times(1)
            .returning(move |_| Ok(tags.first().map(|t| t.to_string())));
        VersionResolver::new(Arc::new(registry), Arc::new(MemoryStore::new()))
    }

    fn props() -> LatestVersionProps {
        LatestVersionProps::new(RepoRef::new("MeveraStudios", "Imperat").unwrap())
    }

    #[tokio::test]
    async fn renders_loading_then_code_wrapped_tag() {
        let mut widget = LatestVersion::mount(&resolver_returning(vec!["v1.9.6"]), props());

        assert_eq!(widget.render(), "<code>loading...</code>");

        widget.settled().await;

        assert_eq!(widget.render(), "<code>1.9.6</code>");
    }

    #[tokio::test]
    async fn plain_render_keeps_v_when_not_stripping() {
        let mut widget = LatestVersion::mount(
            &resolver_returning(vec!["v1.9.6"]),
            props().strip_v(false).code_block(false),
        );

        widget.settled().await;

        assert_eq!(widget.render(), "v1.9.6");
    }

    #[tokio::test]
    async fn empty_tag_list_renders_unknown() {
        let mut widget = LatestVersion::mount(&resolver_returning(vec![]), props());

        assert_eq!(widget.settled().await, VersionState::Unknown);
        assert_eq!(widget.render(), "<code>unknown</code>");
    }

    #[tokio::test]
    async fn render_with_passes_display_string() {
        let mut widget = LatestVersion::mount(&resolver_returning(vec!["2.0.0"]), props());
        widget.settled().await;

        let badge = widget.render_with(|version| format!("[v{version}]"));

        assert_eq!(badge, "[v2.0.0]");
    }
}
