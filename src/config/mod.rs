//! Per-user configuration directory
//!
//! tillerup keeps its state under `~/.tillerup`, overridable with the
//! `TILLERUP_CONFIG_DIR` environment variable. Helm's home lives inside it.

use std::path::{Path, PathBuf};

use crate::error::{Result, TillerError};

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "TILLERUP_CONFIG_DIR";

/// Directory name under the user's home directory
const CONFIG_DIR_NAME: &str = ".tillerup";

/// Helm home subdirectory inside the configuration directory
pub const HELM_HOME_DIR: &str = ".helm";

/// Resolves (and creates) the configuration directory
pub trait ConfigDirResolver {
    fn resolve(&self) -> Result<PathBuf>;
}

/// The real per-user configuration directory
#[derive(Debug, Clone, Default)]
pub struct UserConfigDir {
    root: Option<PathBuf>,
}

impl UserConfigDir {
    /// Honour `TILLERUP_CONFIG_DIR` when set and non-empty, else use the home directory
    pub fn from_env() -> Self {
        match std::env::var_os(CONFIG_DIR_ENV) {
            Some(root) if !root.is_empty() => Self::at(root),
            _ => Self::default(),
        }
    }

    /// Use `root` as the configuration directory
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }

        let home = dirs::home_dir().ok_or_else(|| TillerError::ConfigDirUnavailable {
            message: "could not determine home directory".to_string(),
        })?;
        Ok(home.join(CONFIG_DIR_NAME))
    }
}

impl ConfigDirResolver for UserConfigDir {
    fn resolve(&self) -> Result<PathBuf> {
        let path = self.path()?;
        create_private_dir(&path).map_err(|e| TillerError::ConfigDirCreateFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(path)
    }
}

fn create_private_dir(path: &Path) -> std::io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(path)
}

/// Helm home for a given configuration directory
pub fn helm_home(config_dir: &Path) -> PathBuf {
    config_dir.join(HELM_HOME_DIR)
}
