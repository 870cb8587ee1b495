//! Validated options for a restricted install
//!
//! Built once from command-line input before anything touches the cluster.

use crate::error::Result;
use crate::provision::{InstallationMode, Namespace};

/// Namespace tiller is installed into when none is given
pub const DEFAULT_NAMESPACE: &str = "ketchup";

/// Revisions kept per release when none is given; 0 or less means no limit
pub const DEFAULT_HISTORY_MAX: i64 = 200;

/// When to pass the secret-storage override to `helm init`
///
/// Historically the override was gated on a condition that could never hold,
/// so it was never passed. `Legacy` keeps that; `WhenEnabled` passes it
/// whenever secret storage is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageOverridePolicy {
    #[default]
    Legacy,
    WhenEnabled,
}

impl StorageOverridePolicy {
    /// Whether the override flag pair is appended
    pub fn applies(self, secret_storage: bool) -> bool {
        match self {
            StorageOverridePolicy::Legacy => false,
            StorageOverridePolicy::WhenEnabled => secret_storage,
        }
    }
}

/// Where tiller may deploy workloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployScope {
    SameNamespace,
    OtherNamespace(Namespace),
    /// `--same-ns=false` without `--other-ns`: nothing to provision
    Unspecified,
}

impl DeployScope {
    /// Decide the scope from the two flags
    ///
    /// An explicitly given `other_ns` wins over `same_ns`. An explicitly
    /// empty one selects the same-namespace layout.
    pub fn from_flags(same_ns: bool, other_ns: Option<&str>) -> Result<Self> {
        match other_ns {
            Some("") => Ok(DeployScope::SameNamespace),
            Some(other) => Ok(DeployScope::OtherNamespace(Namespace::new(other)?)),
            None if same_ns => Ok(DeployScope::SameNamespace),
            None => Ok(DeployScope::Unspecified),
        }
    }

    pub fn mode(&self) -> Option<InstallationMode> {
        match self {
            DeployScope::SameNamespace => Some(InstallationMode::RestrictedSameNamespace),
            DeployScope::OtherNamespace(other) => {
                Some(InstallationMode::RestrictedCrossNamespace(other.clone()))
            }
            DeployScope::Unspecified => None,
        }
    }
}

/// Options for `init restricted`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictedOptions {
    pub namespace: Namespace,
    pub scope: DeployScope,
    pub secret_storage: bool,
    pub history_max: i64,
    pub storage_override: StorageOverridePolicy,
}

impl RestrictedOptions {
    pub fn new(
        namespace: &str,
        same_ns: bool,
        other_ns: Option<&str>,
        secret_storage: bool,
        history_max: i64,
        storage_override: StorageOverridePolicy,
    ) -> Result<Self> {
        Ok(Self {
            namespace: Namespace::new(namespace)?,
            scope: DeployScope::from_flags(same_ns, other_ns)?,
            secret_storage,
            history_max,
            storage_override,
        })
    }

    /// Options as if no flags were given
    #[cfg(test)]
    pub fn defaults() -> Result<Self> {
        Self::new(
            DEFAULT_NAMESPACE,
            true,
            None,
            true,
            DEFAULT_HISTORY_MAX,
            StorageOverridePolicy::default(),
        )
    }
}
