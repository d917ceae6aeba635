//! Registry implementations for listing repository tags

pub mod github;

pub use github::GitHubRegistry;
