//! helm-backed installer

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use super::{HELM_HOME_ENV, Installer, render_command};
use crate::error::{Result, TillerError};

/// Runs `helm` with inherited stdio so its own output reaches the user
#[derive(Debug, Clone)]
pub struct HelmCli {
    program: String,
}

impl HelmCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Installer for HelmCli {
    fn init(&self, helm_home: &Path, args: &[String]) -> Result<()> {
        info!(helm_home = %helm_home.display(), "running helm");
        debug!("running {}", render_command(&self.program, args));

        // Only the child sees HELM_HOME; our own environment is left alone.
        let status = Command::new(&self.program)
            .args(args)
            .env(HELM_HOME_ENV, helm_home)
            .status()
            .map_err(|e| TillerError::CommandSpawnFailed {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(TillerError::InstallerFailed {
                status: status.to_string(),
            });
        }
        Ok(())
    }
}
