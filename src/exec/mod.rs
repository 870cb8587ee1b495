//! External command execution
//!
//! The provisioner and orchestrator only see the [`ClusterExecutor`] and
//! [`Installer`] traits. Real implementations shell out to `kubectl` and
//! `helm`; [`DryRun`] prints the commands instead.

mod dry_run;
mod helm;
mod kubectl;

#[cfg(test)]
pub mod memory;

use std::path::Path;

use crate::error::Result;

pub use dry_run::DryRun;
pub use helm::HelmCli;
pub use kubectl::Kubectl;

/// Environment variable Helm v2 reads its home directory from
pub const HELM_HOME_ENV: &str = "HELM_HOME";

/// Runs one privileged cluster command, synchronously and without retries
pub trait ClusterExecutor {
    /// Execute with `args` passed through verbatim; returns stdout on success
    fn execute(&self, args: &[String]) -> Result<String>;
}

/// Runs the package manager's init command
pub trait Installer {
    /// Run `helm <args>` with its home directory set to `helm_home`
    fn init(&self, helm_home: &Path, args: &[String]) -> Result<()>;
}

/// Render a command line for display, quoting tokens a shell would mangle
pub fn render_command(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", render_args(args))
    }
}

/// Render arguments alone, quoted as in [`render_command`]
pub fn render_args(args: &[String]) -> String {
    args.iter()
        .map(|arg| shell_quote(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(token: &str) -> String {
    let needs_quotes = token.is_empty()
        || token
            .chars()
            .any(|c| c.is_whitespace() || "*?[]{}'\"$`\\;&|<>()!#~".contains(c));

    if needs_quotes {
        format!("'{}'", token.replace('\'', r"'\''"))
    } else {
        token.to_string()
    }
}
