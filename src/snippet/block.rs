//! Tabbed dependency snippet widget
//!
//! Mounting subscribes to the resolver once. Every snippet is derived from
//! the current [`VersionState`] on demand, so a late resolution shows up in
//! the next render and tab selection never reaches the resolver.

use tokio::sync::watch;

use crate::snippet::tabs::render_tab_group;
use crate::snippet::template::{Snippet, SnippetTemplate};
use crate::version::resolver::VersionResolver;
use crate::version::types::{RepoRef, VersionState};

/// Maven / Gradle snippets for a package, pinned to its repository's latest tag
pub struct LatestVersionBlock {
    repo: RepoRef,
    group: String,
    artifact_id: String,
    version: watch::Receiver<VersionState>,
    selected: SnippetTemplate,
}

impl LatestVersionBlock {
    /// Mounts the widget, starting resolution of `repo` with `v` stripping
    ///
    /// Must be called within a tokio runtime when the tag is not cached.
    pub fn mount(
        resolver: &VersionResolver,
        repo: RepoRef,
        group: impl Into<String>,
        artifact_id: impl Into<String>,
    ) -> Self {
        let version = resolver.watch(&repo, true);

        Self {
            repo,
            group: group.into(),
            artifact_id: artifact_id.into(),
            version,
            selected: SnippetTemplate::Maven,
        }
    }

    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    pub fn state(&self) -> VersionState {
        self.version.borrow().clone()
    }

    /// Waits for resolution to settle and returns the terminal state
    pub async fn settled(&mut self) -> VersionState {
        if let Ok(state) = self.version.wait_for(VersionState::is_settled).await {
            return state.clone();
        }
        // The resolving task is gone; keep whatever it left behind
        self.version.borrow().clone()
    }

    pub fn snippet(&self, template: SnippetTemplate) -> Snippet {
        let state = self.version.borrow();
        Snippet::new(template, &self.group, &self.artifact_id, state.display())
    }

    /// All three snippets in tab order
    pub fn snippets(&self) -> Vec<Snippet> {
        SnippetTemplate::ALL
            .into_iter()
            .map(|template| self.snippet(template))
            .collect()
    }

    pub fn selected(&self) -> SnippetTemplate {
        self.selected
    }

    pub fn select(&mut self, template: SnippetTemplate) {
        self.selected = template;
    }

    /// The snippet of the selected tab
    pub fn visible(&self) -> Snippet {
        self.snippet(self.selected)
    }

    /// Renders the tab group as HTML
    ///
    /// Element ids are derived from the repository and the coordinates, so
    /// several blocks for one repository can share a page.
    pub fn render_html(&self) -> String {
        let group_id = format!(
            "{}-{}-{}-{}",
            self.repo.owner(),
            self.repo.repo(),
            self.group,
            self.artifact_id
        );
        render_tab_group(&group_id, &self.snippets(), self.selected)
    }
}
