//! Init command implementation
//!
//! Picks the real collaborators (kubectl, helm, the user's config directory)
//! or their dry-run stand-ins and hands them to the install paths in
//! [`crate::operations::init`].

use crate::cli::{InitArgs, InitMode};
use crate::config::UserConfigDir;
use crate::error::Result;
use crate::exec::{ClusterExecutor, DryRun, HelmCli, Installer, Kubectl};
use crate::operations::init::{self as init_ops, InitContext, InitOutcome, USAGE_HINT};
use crate::ui::{InteractiveProgressReporter, ProgressReporter, SilentProgressReporter};

/// Where the external tools live and whether to actually run them
#[derive(Debug, Clone)]
pub struct ExecSettings {
    pub kubectl: String,
    pub helm: String,
    pub dry_run: bool,
}

/// Run init command
pub fn run(settings: &ExecSettings, args: InitArgs) -> Result<()> {
    let Some(mode) = args.mode else {
        println!("{USAGE_HINT}");
        return Ok(());
    };

    // Validate before anything is created
    let restricted = match &mode {
        InitMode::Insecure => None,
        InitMode::Restricted(restricted_args) => Some(restricted_args.to_options()?),
    };

    let config_dirs = UserConfigDir::from_env();
    let kubectl = Kubectl::new(&settings.kubectl);
    let helm = HelmCli::new(&settings.helm);
    let dry_run = DryRun::new(&settings.kubectl, &settings.helm);

    let (cluster, installer): (&dyn ClusterExecutor, &dyn Installer) = if settings.dry_run {
        (&dry_run, &dry_run)
    } else {
        (&kubectl, &helm)
    };
    let mut reporter: Box<dyn ProgressReporter> = if settings.dry_run {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new())
    };

    let mut ctx = InitContext {
        config_dirs: &config_dirs,
        cluster,
        installer,
        reporter: reporter.as_mut(),
    };

    let outcome = match restricted {
        Some(opts) => init_ops::init_restricted(&mut ctx, &opts)?,
        None => init_ops::init_insecure(&mut ctx)?,
    };

    if let InitOutcome::Skipped { guidance } = outcome {
        println!("{guidance}");
    }
    Ok(())
}
