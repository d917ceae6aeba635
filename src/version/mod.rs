//! Version resolution layer
//!
//! Fetches the most recent tag of a repository and keeps it in a session
//! cache so each repository is fetched at most once per session.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Resolver   │────▶│   Widgets   │
//! │  (fetch)    │     │ (resolve)   │     │  (render)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │    Cache    │
//! │  (github)   │     │  (session)  │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: Session-scoped key/value stores (in-memory and SQLite)
//! - [`registry`]: Registry trait for listing tags from a hosting provider
//! - [`registries`]: Concrete registry implementations
//! - [`resolver`]: Cache-first resolution into a [`types::VersionState`]
//! - [`error`]: Error types for cache and registry operations
//! - [`types`]: Common types like `RepoRef` and `VersionState`

pub mod cache;
pub mod error;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod types;
