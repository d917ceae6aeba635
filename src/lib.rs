//! Dependency installation snippets pinned to a repository's latest tag
//!
//! - [`version`]: resolving the latest tag of a GitHub repository with a session cache
//! - [`snippet`]: Maven / Gradle snippet templates and the widgets that render them
//! - [`config`]: configuration file and data directory helpers
//! - [`logging`]: tracing subscriber setup for the binary

pub mod config;
pub mod logging;
pub mod snippet;
pub mod version;
