//! Tribune CLI - Command-line interface for venue debates

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tribune_core::{extract_with_tier, Tribune, TribuneConfig, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "tribune", version)]
#[command(about = "Tribune - Optimist, Critic and Judge debate a venue description")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run a debate and print the three point lists as JSON
    Debate {
        /// Configuration file path
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Read the venue context from a file instead of stdin
        #[arg(long)]
        context_file: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Extract a point list from raw model output without calling a model
    Extract {
        /// Maximum number of points to keep
        #[arg(short = 'n', long, default_value_t = 6)]
        max_items: usize,

        /// Read raw text from a file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Check configuration validity
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

async fn run_debate(config: &Path, context_file: Option<&Path>, pretty: bool) -> anyhow::Result<()> {
    let config = TribuneConfig::resolve(config).context("invalid configuration")?;
    let context = read_input(context_file)?;
    if context.trim().is_empty() {
        bail!("venue context is empty");
    }

    let tribune = Tribune::new(config)?;
    let result = tribune.debate(context).await;
    tribune.shutdown().await;
    let outcome = result.context("debate failed")?;

    let json = if pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{json}");
    Ok(())
}

fn run_extract(max_items: usize, file: Option<&Path>) -> anyhow::Result<()> {
    let raw = read_input(file)?;
    let extraction = extract_with_tier(&raw, max_items);
    debug!(tier = ?extraction.tier, points = extraction.points.len(), "extraction finished");
    println!("{}", serde_json::to_string_pretty(&extraction)?);
    Ok(())
}

fn run_check(config: &Path) -> anyhow::Result<()> {
    let config = TribuneConfig::resolve(config).context("invalid configuration")?;
    let credentials = config.credentials();

    println!("Configuration OK");
    println!("  endpoint:  {}", config.model.endpoint);
    println!("  model:     {}", config.model.model);
    println!("  workers:   {}", config.pool.workers);
    match config.pool.invocation_timeout_secs {
        Some(secs) => println!("  timeout:   {secs}s"),
        None => println!("  timeout:   none"),
    }
    println!("  api keys:  {}", credentials.len());
    for credential in &credentials {
        println!("    - {}", credential.fingerprint());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Debate {
            config,
            context_file,
            pretty,
        } => {
            info!(config = %config.display(), "starting debate");
            run_debate(&config, context_file.as_deref(), pretty).await
        }
        Commands::Extract { max_items, file } => run_extract(max_items, file.as_deref()),
        Commands::Check { config } => run_check(&config),
    }
}
