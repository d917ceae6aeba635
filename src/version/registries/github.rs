//! GitHub tags API registry implementation

use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::registry::TagRegistry;
use crate::version::types::RepoRef;

/// Registry implementation for the GitHub tags API
pub struct GitHubRegistry {
    client: reqwest::Client,
    base_url: Url,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry with a custom base URL
    pub fn new(base_url: &str) -> Result<Self, RegistryError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RegistryError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(RegistryError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("version-snippet/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// `{base}/repos/{owner}/{repo}/tags` with each segment percent-encoded
    fn tags_url(&self, repo: &RepoRef) -> Result<Url, RegistryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RegistryError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["repos", repo.owner(), repo.repo(), "tags"]);
        Ok(url)
    }
}

/// Name of the first tag in a tags API body; later elements are not inspected
fn first_tag_name(body: Value) -> Result<Option<String>, RegistryError> {
    let Value::Array(tags) = body else {
        return Err(RegistryError::InvalidResponse("Expected a JSON array of tags".to_string()));
    };

    let Some(first) = tags.into_iter().next() else {
        return Ok(None);
    };

    match first.get("name") {
        Some(Value::String(name)) => Ok(Some(name.clone())),
        _ => Err(RegistryError::InvalidResponse("First tag has no string `name`".to_string())),
    }
}

#[async_trait::async_trait]
impl TagRegistry for GitHubRegistry {
    async fn fetch_latest_tag(&self, repo: &RepoRef) -> Result<Option<String>, RegistryError> {
        let url = self.tags_url(repo)?;
        debug!("Fetching tags from {}", url);

        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(repo.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub tags response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        first_tag_name(body).inspect_err(|e| warn!("Unusable GitHub tags response: {}", e))
    }
}
