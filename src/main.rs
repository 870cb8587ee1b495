//! tillerup - Helm v2 tiller bootstrapper
//!
//! Provisions the namespaces, service account and RBAC objects tiller needs
//! through kubectl, then runs `helm init` with matching arguments.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod operations;
mod provision;
mod ui;

use cli::{Cli, Commands};
use commands::init::ExecSettings;

/// Log filter used when `RUST_LOG` is not set
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose { "tillerup=debug" } else { "warn" }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));

    // A subscriber may already be installed (tests call this more than once)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = ExecSettings {
        kubectl: cli.kubectl,
        helm: cli.helm,
        dry_run: cli.dry_run,
    };

    let result = match cli.command {
        Commands::Init(args) => commands::init::run(&settings, args),
        Commands::Completions(args) => commands::completions::run(args),
        Commands::Version => commands::version::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
