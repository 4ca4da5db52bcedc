//! CLI binary for compare-products.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};
use compare_products::{render, run_lines, AppConfig, OutputFormat, SessionEvent};
use compare_search::{QueryDispatcher, SearchOutcome};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Search two storefronts at once and compare prices per product.
#[derive(Parser)]
#[command(name = "compare-products", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the vendor base URL from the config file.
    #[arg(long)]
    base_url: Option<String>,

    /// Override the per-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print product cards as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Run one comparison and print the ranked products.
    Search {
        /// Search term; multiple words are joined with spaces.
        #[arg(required = true)]
        term: Vec<String>,
    },

    /// Read search terms from stdin, one per line.
    Interactive,

    /// Write a config file with default values.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("compare_products=info,compare_search=info")),
        )
        .init();

    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match cli.command {
        Command::InitConfig { force } => init_config(cli.config, force),
        Command::Search { term } => {
            let dispatcher = build_dispatcher(cli.config, cli.base_url, cli.timeout)?;
            run_search(&dispatcher, &term.join(" "), format).await
        }
        Command::Interactive => {
            let dispatcher = build_dispatcher(cli.config, cli.base_url, cli.timeout)?;
            run_interactive(Arc::new(dispatcher), format).await
        }
    }
}

fn build_dispatcher(
    config_path: Option<PathBuf>,
    base_url: Option<String>,
    timeout: Option<u64>,
) -> anyhow::Result<QueryDispatcher> {
    let config = AppConfig::load(config_path.as_deref())?.with_overrides(base_url, timeout);
    Ok(QueryDispatcher::new(config.search)?)
}

fn init_config(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(AppConfig::default_config_path);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    AppConfig::default().save_to_file(&path)?;
    info!(path = %path.display(), "wrote default config");
    Ok(())
}

async fn run_search(
    dispatcher: &QueryDispatcher,
    term: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match dispatcher.search(term).await {
        Ok(outcome) => print_outcome(&outcome, &dispatcher.config().currency_symbol, format),
        Err(err) => {
            error!(error = %err, "search failed");
            Err(err.into())
        }
    }
}

async fn run_interactive(dispatcher: Arc<QueryDispatcher>, format: OutputFormat) -> anyhow::Result<()> {
    let currency = dispatcher.config().currency_symbol.clone();
    let input = BufReader::new(tokio::io::stdin());
    run_lines(dispatcher, input, |event| match event {
        SessionEvent::Shown(outcome) => {
            if let Err(err) = print_outcome(&outcome, &currency, format) {
                error!(error = %err, "failed to print results");
            }
        }
        SessionEvent::Failed { error: err, .. } => {
            error!(error = %err, "search failed");
            eprintln!("search failed: {err}");
        }
    })
    .await?;
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome, currency: &str, format: OutputFormat) -> anyhow::Result<()> {
    print!("{}", render::render(outcome, currency, format)?);
    Ok(())
}
