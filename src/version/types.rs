//! Common types for version resolution

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Shown wherever the version goes while resolution is in flight
pub const LOADING_TEXT: &str = "loading...";
/// Shown when the repository has no tags
pub const UNKNOWN_TEXT: &str = "unknown";
/// Shown when the tags could not be fetched
pub const ERROR_TEXT: &str = "error";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoRefError {
    #[error("repository owner must not be empty")]
    EmptyOwner,

    #[error("repository name must not be empty")]
    EmptyRepo,

    #[error("expected <owner>/<repo>, got {0:?}")]
    Malformed(String),
}

/// Owner/name pair identifying a hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    owner: String,
    repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Result<Self, RepoRefError> {
        let owner = owner.into();
        let repo = repo.into();

        if owner.is_empty() {
            return Err(RepoRefError::EmptyOwner);
        }
        if repo.is_empty() {
            return Err(RepoRefError::EmptyRepo);
        }

        Ok(Self { owner, repo })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Session cache key, `<owner>/<repo>-version`
    pub fn cache_key(&self) -> String {
        format!("{}/{}-version", self.owner, self.repo)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoRef {
    type Err = RepoRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, repo)) if !repo.contains('/') => RepoRef::new(owner, repo),
            _ => Err(RepoRefError::Malformed(s.to_string())),
        }
    }
}

/// Progress of a single resolution
///
/// Starts at `Loading`; the other three variants are terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VersionState {
    #[default]
    Loading,
    Resolved(String),
    Unknown,
    Error,
}

impl VersionState {
    /// Text substituted wherever the version is rendered
    pub fn display(&self) -> &str {
        match self {
            VersionState::Loading => LOADING_TEXT,
            VersionState::Resolved(tag) => tag,
            VersionState::Unknown => UNKNOWN_TEXT,
            VersionState::Error => ERROR_TEXT,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, VersionState::Loading)
    }
}

impl fmt::Display for VersionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}
