//! Registry trait for listing the tags of a repository

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::RepoRef;

/// Trait for listing tags from a source-hosting provider
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TagRegistry: Send + Sync {
    /// Fetches the most recent tag name of a repository
    ///
    /// Only the first element of the provider's default (most recent first)
    /// listing is consulted.
    ///
    /// # Arguments
    /// * `repo` - The repository to list (e.g., "MeveraStudios/Imperat")
    ///
    /// # Returns
    /// * `Ok(Some(name))` - The first tag name
    /// * `Ok(None)` - The repository has no tags
    /// * `Err(RegistryError)` - If the request fails or the first tag is unusable
    async fn fetch_latest_tag(&self, repo: &RepoRef) -> Result<Option<String>, RegistryError>;
}
