//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - init: Init command and its install modes
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod init;

pub use completions::CompletionsArgs;
pub use init::{InitArgs, InitMode};

/// tillerup - bootstrap Helm v2 tiller onto a cluster
///
/// Creates the namespaces, service account and RBAC tiller needs, then runs `helm init`.
#[derive(Parser, Debug)]
#[command(
    name = "tillerup",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bootstrap Helm v2 tiller onto a Kubernetes cluster",
    long_about = "tillerup creates the namespaces, service account and RBAC objects tiller needs \
                  through kubectl, then runs helm init against them.",
    after_help = "Examples:\n   \
                  tillerup init insecure                            # cluster-admin tiller in kube-system\n   \
                  tillerup init restricted                          # tiller limited to namespace ketchup\n   \
                  tillerup init restricted --namespace ci --other-ns apps\n   \
                  tillerup --dry-run init restricted                # print commands, run nothing\n"
)]
pub struct Cli {
    /// kubectl binary used for cluster operations
    #[arg(long, global = true, env = "TILLERUP_KUBECTL", default_value = "kubectl")]
    pub kubectl: String,

    /// helm (v2) binary used for `helm init`
    #[arg(long, global = true, env = "TILLERUP_HELM", default_value = "helm")]
    pub helm: String,

    /// Print the kubectl and helm commands instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install helm with tiller (helm v2 only)
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    #[command(hide = true)]
    Version,
}
