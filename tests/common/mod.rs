//! Common test utilities for tillerup integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated home for one test run
pub struct TestEnv {
    /// Temporary directory, removed on drop
    pub temp: TempDir,
    /// Value passed as TILLERUP_CONFIG_DIR
    pub config_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp.path().join("config");
        Self { temp, config_dir }
    }

    /// tillerup with a private config dir and no tool overrides from the caller's environment
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("tillerup").expect("tillerup binary should build");
        cmd.env("TILLERUP_CONFIG_DIR", &self.config_dir)
            .env_remove("TILLERUP_KUBECTL")
            .env_remove("TILLERUP_HELM")
            .env_remove("HELM_HOME")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Path of the call log written by [`TestEnv::recording_tool`] scripts
    pub fn log_path(&self, tool: &str) -> PathBuf {
        self.temp.path().join(format!("{tool}.log"))
    }

    /// Read a tool's call log, one invocation per line
    pub fn calls(&self, tool: &str) -> Vec<String> {
        std::fs::read_to_string(self.log_path(tool))
            .map(|log| log.lines().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    /// Write an executable script standing in for `tool` that logs its
    /// arguments (and HELM_HOME) and exits with `exit_code`
    #[cfg(unix)]
    pub fn recording_tool(&self, tool: &str, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.temp.path().join(tool);
        let body = format!(
            "#!/bin/sh\necho \"HELM_HOME=$HELM_HOME $*\" >> '{}'\nexit {}\n",
            self.log_path(tool).display(),
            exit_code
        );
        std::fs::write(&script, body).expect("Failed to write tool script");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool script executable");
        script
    }
}

/// Strip the HELM_HOME prefix the recording scripts write
pub fn args_of(line: &str) -> &str {
    line.split_once(' ').map_or("", |(_, args)| args)
}

/// HELM_HOME value a recording script saw
pub fn helm_home_of(line: &str) -> &Path {
    let first = line.split(' ').next().unwrap_or_default();
    Path::new(first.trim_start_matches("HELM_HOME="))
}
