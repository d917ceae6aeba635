use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use version_snippet::config::{Config, config_path, data_dir, db_path, log_path};
use version_snippet::logging;
use version_snippet::snippet::{
    LatestVersion, LatestVersionBlock, LatestVersionProps, SnippetTemplate,
};
use version_snippet::version::cache::{MemoryStore, SessionStore, SqliteStore};
use version_snippet::version::registries::GitHubRegistry;
use version_snippet::version::resolver::VersionResolver;
use version_snippet::version::types::RepoRef;

#[derive(Parser)]
#[command(name = "version-snippet")]
#[command(version, about = "Dependency snippets pinned to a repository's latest tag")]
struct Cli {
    /// Config file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Share cached versions with other invocations using this session id
    #[arg(long, global = true)]
    session: Option<String>,

    /// GitHub API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the latest version of a repository
    Version {
        /// Repository as <owner>/<repo>
        repo: RepoRef,

        /// Keep a leading `v` on the tag
        #[arg(long)]
        keep_v: bool,

        /// Print the bare version instead of a <code> element
        #[arg(long)]
        plain: bool,
    },
    /// Print Maven / Gradle snippets for a package
    Block {
        /// Repository as <owner>/<repo>
        repo: RepoRef,

        /// Package group, e.g. com.example
        #[arg(long)]
        group: String,

        /// Artifact id
        #[arg(long)]
        id: String,

        /// Tab to print (maven, gradle-groovy, gradle-kotlin)
        #[arg(long, default_value = "maven")]
        tab: SnippetTemplate,

        /// Print the whole tab group as HTML
        #[arg(long)]
        html: bool,
    },
    /// Drop every version cached for the session
    EndSession,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(&log_path())?;

    let mut config = Config::load(&cli.config.unwrap_or_else(config_path))?;
    if let Some(session) = cli.session {
        config.cache.session = Some(session);
    }
    if let Some(base_url) = cli.base_url {
        config.github.base_url = base_url;
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command, config))
}

fn open_store(session: Option<&str>) -> anyhow::Result<Arc<dyn SessionStore>> {
    let Some(session) = session else {
        return Ok(Arc::new(MemoryStore::new()));
    };

    let data_dir = data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    let store = SqliteStore::open(&db_path(), session)
        .with_context(|| format!("Failed to open session cache for {session}"))?;
    Ok(Arc::new(store))
}

fn build_resolver(
    config: &Config,
    store: Arc<dyn SessionStore>,
) -> anyhow::Result<VersionResolver> {
    let registry =
        GitHubRegistry::new(&config.github.base_url).context("Failed to create GitHub client")?;
    Ok(VersionResolver::new(Arc::new(registry), store))
}

async fn run(command: Command, config: Config) -> anyhow::Result<()> {
    let store = open_store(config.cache.session.as_deref())?;

    match command {
        Command::Version {
            repo,
            keep_v,
            plain,
        } => {
            let resolver = build_resolver(&config, store)?;
            let props = LatestVersionProps::new(repo)
                .strip_v(config.strip_v && !keep_v)
                .code_block(!plain);
            let mut widget = LatestVersion::mount(&resolver, props);
            widget.settled().await;
            println!("{}", widget.render());
        }
        Command::Block {
            repo,
            group,
            id,
            tab,
            html,
        } => {
            let resolver = build_resolver(&config, store)?;
            let mut block = LatestVersionBlock::mount(&resolver, repo, group, id);
            block.select(tab);
            block.settled().await;
            if html {
                println!("{}", block.render_html());
            } else {
                println!("{}", block.visible().code);
            }
        }
        Command::EndSession => {
            if config.cache.session.is_none() {
                bail!("end-session needs --session or cache.session in the config file");
            }
            store.clear()?;
        }
    }

    Ok(())
}
