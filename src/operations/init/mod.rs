//! Tiller installation orchestration
//!
//! This module handles the two install paths:
//! 1. Resolve the configuration directory and the Helm home inside it
//! 2. Provision namespaces, the tiller service account and its RBAC
//! 3. Build the `helm init` arguments and run the installer once
//!
//! The first failure in any step ends the path and is returned unchanged.

pub mod args;
pub mod options;


use tracing::{debug, info};

use crate::config::{self, ConfigDirResolver};
use crate::error::Result;
use crate::exec::{ClusterExecutor, Installer};
use crate::provision::{InstallationMode, Namespace, Provisioner};
use crate::ui::ProgressReporter;

pub use args::{insecure_args, restricted_args};
pub use options::{DEFAULT_HISTORY_MAX, DEFAULT_NAMESPACE, RestrictedOptions, StorageOverridePolicy};

/// Printed when `init` is run without choosing a mode
pub const USAGE_HINT: &str = "You can use: tillerup init insecure, tillerup init restricted";

/// Printed when a restricted install has no namespace to manage
pub const SCOPE_GUIDANCE: &str =
    "You need to specify --same-ns (default) or --other-ns <some-namespace>";

/// Collaborators an install path runs against
pub struct InitContext<'a> {
    pub config_dirs: &'a dyn ConfigDirResolver,
    pub cluster: &'a dyn ClusterExecutor,
    pub installer: &'a dyn Installer,
    pub reporter: &'a mut dyn ProgressReporter,
}

/// How an install path ended, when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Installed,
    /// Nothing was provisioned or installed; `guidance` says what to pass instead
    Skipped { guidance: &'static str },
}

/// Install tiller in kube-system with cluster-admin
pub fn init_insecure(ctx: &mut InitContext<'_>) -> Result<InitOutcome> {
    let helm_home = config::helm_home(&ctx.config_dirs.resolve()?);
    let args = insecure_args();

    info!("provisioning unrestricted tiller in kube-system");
    Provisioner::new(ctx.cluster, &mut *ctx.reporter)
        .provision(&InstallationMode::Unrestricted, &Namespace::kube_system())?;

    ctx.installer.init(&helm_home, args.tokens())?;
    Ok(InitOutcome::Installed)
}

/// Install tiller restricted to a namespace
pub fn init_restricted(
    ctx: &mut InitContext<'_>,
    opts: &RestrictedOptions,
) -> Result<InitOutcome> {
    let helm_home = config::helm_home(&ctx.config_dirs.resolve()?);
    let args = restricted_args(opts);
    debug!(?args, "helm init arguments");

    let Some(mode) = opts.scope.mode() else {
        info!("neither --same-ns nor --other-ns selected; skipping install");
        return Ok(InitOutcome::Skipped {
            guidance: SCOPE_GUIDANCE,
        });
    };

    info!(namespace = %opts.namespace, ?mode, "provisioning restricted tiller");
    Provisioner::new(ctx.cluster, &mut *ctx.reporter).provision(&mode, &opts.namespace)?;

    ctx.installer.init(&helm_home, args.tokens())?;
    Ok(InitOutcome::Installed)
}
