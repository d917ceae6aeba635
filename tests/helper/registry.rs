//! Registry test utilities

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::Notify;

use version_snippet::version::cache::{MemoryStore, SqliteStore};
use version_snippet::version::error::RegistryError;
use version_snippet::version::registry::TagRegistry;
use version_snippet::version::resolver::VersionResolver;
use version_snippet::version::types::RepoRef;

/// Mock registry that counts requests and can hold them until released
pub struct MockRegistry {
    tags: HashMap<String, Vec<String>>,
    failing: Vec<String>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
            failing: Vec::new(),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn with_tags(mut self, repo: &str, tags: Vec<&str>) -> Self {
        self.tags.insert(
            repo.to_string(),
            tags.into_iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    /// Answers requests for `repo` with an upstream error
    pub fn with_failure(mut self, repo: &str) -> Self {
        self.failing.push(repo.to_string());
        self
    }

    /// Blocks every request until `gate` is notified
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TagRegistry for MockRegistry {
    async fn fetch_latest_tag(&self, repo: &RepoRef) -> Result<Option<String>, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let key = repo.to_string();
        if self.failing.contains(&key) {
            return Err(RegistryError::InvalidResponse(
                "Unexpected status: 502 Bad Gateway".to_string(),
            ));
        }

        Ok(self.tags.get(&key).and_then(|tags| tags.first().cloned()))
    }
}

pub fn repo(s: &str) -> RepoRef {
    s.parse().unwrap()
}

/// Resolver over an in-memory session
pub fn memory_resolver(registry: Arc<MockRegistry>) -> VersionResolver {
    VersionResolver::new(registry, Arc::new(MemoryStore::new()))
}

/// Resolver over a SQLite session in `temp_dir`
pub fn sqlite_resolver(
    temp_dir: &TempDir,
    session: &str,
    registry: Arc<MockRegistry>,
) -> VersionResolver {
    let store = SqliteStore::open(&temp_dir.path().join("sessions.db"), session).unwrap();
    VersionResolver::new(registry, Arc::new(store))
}
