//! Printing executor for `--dry-run`

use std::path::Path;

use super::{ClusterExecutor, HELM_HOME_ENV, Installer, render_command};
use crate::error::Result;

/// Prints each command it is asked to run and reports success
#[derive(Debug, Clone)]
pub struct DryRun {
    kubectl: String,
    helm: String,
}

impl DryRun {
    pub fn new(kubectl: impl Into<String>, helm: impl Into<String>) -> Self {
        Self {
            kubectl: kubectl.into(),
            helm: helm.into(),
        }
    }

    fn installer_line(&self, helm_home: &Path, args: &[String]) -> String {
        format!(
            "{HELM_HOME_ENV}={} {}",
            helm_home.display(),
            render_command(&self.helm, args)
        )
    }
}

impl ClusterExecutor for DryRun {
    fn execute(&self, args: &[String]) -> Result<String> {
        println!("{}", render_command(&self.kubectl, args));
        Ok(String::new())
    }
}

impl Installer for DryRun {
    fn init(&self, helm_home: &Path, args: &[String]) -> Result<()> {
        println!("{}", self.installer_line(helm_home, args));
        Ok(())
    }
}
