//! jupyrest - command-line client for the Jupyter notebook server REST API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jupyrest_client::{JupyterClient, DEFAULT_BASE_URL, TOKEN_ENV_VAR};

mod commands;

use commands::{contents, kernels, kernelspecs, server, sessions, terminals};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// jupyrest - talk to a Jupyter notebook server from the shell
#[derive(Parser)]
#[command(name = "jupyrest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// API root of the notebook server
    #[arg(long, global = true, env = "JUPYTERLAB_API_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// API token
    #[arg(long, global = true, env = "JUPYTERLAB_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the server version
    Version,

    /// Show server activity and load
    Status,

    /// Show the identity behind the token
    Me(server::MeArgs),

    /// Files, notebooks and directories
    Contents(contents::ContentsArgs),

    /// Notebook and console sessions
    Sessions(sessions::SessionsArgs),

    /// List installed kernel specs
    Kernelspecs,

    /// Running kernels
    Kernels(kernels::KernelsArgs),

    /// Running terminals
    Terminals(terminals::TerminalsArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "jupyrest=debug,jupyrest_client=debug,warn"
    } else {
        "jupyrest=info,jupyrest_client=info,warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut builder = JupyterClient::builder()
        .base_url(&cli.url)
        .token_env(TOKEN_ENV_VAR);
    if let Some(token) = cli.token {
        builder = builder.auth_token(token);
    }
    let client = builder.build()?;
    tracing::debug!(url = %client.base_url(), "client configured");

    let ctx = commands::Context {
        client,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Version => server::version(&ctx).await,
        Commands::Status => server::status(&ctx).await,
        Commands::Me(args) => server::me(args, &ctx).await,
        Commands::Contents(args) => contents::run(args, &ctx).await,
        Commands::Sessions(args) => sessions::run(args, &ctx).await,
        Commands::Kernelspecs => kernelspecs::run(&ctx).await,
        Commands::Kernels(args) => kernels::run(args, &ctx).await,
        Commands::Terminals(args) => terminals::run(args, &ctx).await,
    }
}
