//! Tracing setup for the binary
//!
//! Logs go to a file so stdout only carries rendered snippets.

use std::ffi::OsStr;
use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "VERSION_SNIPPET_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs a JSON file subscriber writing to `log_path`
///
/// The returned guard flushes pending lines when dropped; keep it alive
/// for the whole run.
pub fn init(log_path: &Path) -> anyhow::Result<WorkerGuard> {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new("version-snippet.log"));
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let directives = std::env::var(LOG_ENV).ok();
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}
