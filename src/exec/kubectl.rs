//! kubectl-backed cluster executor

use std::process::Command;

use tracing::debug;

use super::{ClusterExecutor, render_args, render_command};
use crate::error::{Result, TillerError};

/// Runs cluster commands through a `kubectl` binary
#[derive(Debug, Clone)]
pub struct Kubectl {
    program: String,
}

impl Kubectl {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ClusterExecutor for Kubectl {
    fn execute(&self, args: &[String]) -> Result<String> {
        debug!("running {}", render_command(&self.program, args));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| TillerError::CommandSpawnFailed {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TillerError::CommandFailed {
                program: self.program.clone(),
                args: render_args(args),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .to_string())
    }
}
