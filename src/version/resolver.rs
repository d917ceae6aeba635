//! Latest version resolver
//!
//! Resolves the most recent tag of a repository, consulting the session
//! cache first. Only a resolved tag is cached; `Unknown` and `Error`
//! outcomes are retried by the next resolution.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::version::cache::SessionStore;
use crate::version::error::FailureKind;
use crate::version::registry::TagRegistry;
use crate::version::types::{RepoRef, VersionState};

/// Returns `tag` without one leading `v` when `strip` is set
pub fn strip_leading_v(tag: &str, strip: bool) -> &str {
    if strip {
        tag.strip_prefix('v').unwrap_or(tag)
    } else {
        tag
    }
}

/// Cache-first resolver shared by every widget of a session
#[derive(Clone)]
pub struct VersionResolver {
    registry: Arc<dyn TagRegistry>,
    store: Arc<dyn SessionStore>,
}

impl VersionResolver {
    pub fn new(registry: Arc<dyn TagRegistry>, store: Arc<dyn SessionStore>) -> Self {
        Self { registry, store }
    }

    /// Reads the cached tag without touching the network
    ///
    /// A failing store is treated as a miss.
    pub fn cached(&self, repo: &RepoRef) -> Option<String> {
        let key = repo.cache_key();
        self.store
            .get(&key)
            .inspect_err(|e| warn!("Failed to read cache entry {}: {}", key, e))
            .ok()
            .flatten()
    }

    /// Resolves the latest tag of `repo`
    ///
    /// Returns immediately on a cache hit; otherwise issues one tag listing
    /// request. Never fails: every failure becomes a terminal state.
    pub async fn resolve(&self, repo: &RepoRef, strip_v: bool) -> VersionState {
        if let Some(tag) = self.cached(repo) {
            debug!("Cache hit for {}: {}", repo, tag);
            return VersionState::Resolved(tag);
        }

        self.fetch(repo, strip_v).await
    }

    /// Subscribable form of [`resolve`](Self::resolve)
    ///
    /// On a cache hit the receiver already holds `Resolved` and nothing is
    /// spawned. Otherwise it holds `Loading` until a background task
    /// publishes the terminal state. Dropping every receiver does not
    /// cancel the task; its cache write still happens.
    ///
    /// Must be called within a tokio runtime when the tag is not cached;
    /// spawning the fetch panics otherwise.
    pub fn watch(&self, repo: &RepoRef, strip_v: bool) -> watch::Receiver<VersionState> {
        if let Some(tag) = self.cached(repo) {
            debug!("Cache hit for {}: {}", repo, tag);
            let (_tx, rx) = watch::channel(VersionState::Resolved(tag));
            return rx;
        }

        let (tx, rx) = watch::channel(VersionState::Loading);
        let resolver = self.clone();
        let repo = repo.clone();

        tokio::spawn(async move {
            let state = resolver.fetch(&repo, strip_v).await;
            if tx.send(state).is_err() {
                debug!("No view left for {}; dropping resolved state", repo);
            }
        });

        rx
    }

    async fn fetch(&self, repo: &RepoRef, strip_v: bool) -> VersionState {
        let first = match self.registry.fetch_latest_tag(repo).await {
            Ok(Some(tag)) => tag,
            Ok(None) => {
                info!("No tags published for {}", repo);
                return FailureKind::NoTagsPublished.into();
            }
            Err(e) => {
                warn!("Failed to fetch tags for {}: {}", repo, e);
                return e.kind().into();
            }
        };

        let tag = strip_leading_v(&first, strip_v).to_string();
        let key = repo.cache_key();

        // A failed write only costs a refetch on the next resolution
        let _ = self
            .store
            .set(&key, &tag)
            .inspect_err(|e| warn!("Failed to cache {} for {}: {}", tag, repo, e));

        info!("Resolved {} to {}", repo, tag);
        VersionState::Resolved(tag)
    }
}
