//! Dependency snippet rendering
//!
//! # Modules
//!
//! - [`template`]: The three fixed snippet templates (Maven, Gradle Groovy, Gradle Kotlin)
//! - [`tabs`]: Tab group HTML for a set of snippets
//! - [`block`]: `LatestVersionBlock`, the tabbed dependency snippet widget
//! - [`inline`]: `LatestVersion`, the bare version widget

pub mod block;
pub mod inline;
pub mod tabs;
pub mod template;

pub use block::LatestVersionBlock;
pub use inline::{LatestVersion, LatestVersionProps};
pub use template::{Snippet, SnippetTemplate};
