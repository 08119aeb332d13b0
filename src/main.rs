use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use termfolio::app;
use termfolio::github::GithubClient;
use termfolio::store::{FileStore, KvStore, MemoryStore};
use termfolio::util::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "termfolio", version, about = "A portfolio site for the terminal")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the preferences store (visitor count, theme)
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// Keep preferences in memory only
    #[arg(long, conflicts_with = "store")]
    ephemeral: bool,

    /// GitHub login whose latest push is shown
    #[arg(short, long)]
    user: Option<String>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(user) = cli.user {
        config.github.username = user;
    }
    if let Some(path) = cli.store {
        config.store.path = Some(path);
    }

    let _guard = setup_logging(&config, cli.debug)?;

    info!(user = %config.github.username, "termfolio starting");

    let client = GithubClient::new(
        &config.github.api_url,
        config.github.per_page,
        Duration::from_secs(config.github.timeout_secs),
    )?;

    let store: Box<dyn KvStore> = if cli.ephemeral {
        info!("Preferences kept in memory only");
        Box::new(MemoryStore::new())
    } else {
        let store = FileStore::open(config.store_path());
        info!(path = %store.path().display(), "Preferences store opened");
        Box::new(store)
    };

    app::event_loop::run(config, client, store).await
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "termfolio.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("termfolio=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
