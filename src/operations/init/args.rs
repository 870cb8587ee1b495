//! `helm init` argument construction

use super::options::RestrictedOptions;
use crate::provision::TILLER_ACCOUNT;

/// Overrides tiller's container command so releases are stored as secrets
pub const SECRET_STORAGE_OVERRIDE: &str =
    "spec.template.spec.containers[0].command={/tiller,--storage=secret}";

/// Ordered tokens passed verbatim to `helm`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallArgs(Vec<String>);

impl InstallArgs {
    /// Start with the `init` subcommand
    pub fn init() -> Self {
        Self(vec!["init".to_string()])
    }

    /// Append `name value`
    pub fn flag(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.0.push(name.to_string());
        self.0.push(value.into());
        self
    }

    /// Append a bare `name`
    pub fn switch(&mut self, name: &str) -> &mut Self {
        self.0.push(name.to_string());
        self
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }
}

/// `init --service-account tiller`
pub fn insecure_args() -> InstallArgs {
    let mut args = InstallArgs::init();
    args.flag("--service-account", TILLER_ACCOUNT);
    args
}

/// Full argument list for a restricted install
pub fn restricted_args(opts: &RestrictedOptions) -> InstallArgs {
    let mut args = InstallArgs::init();
    args.flag("--tiller-namespace", opts.namespace.as_str());

    if opts.storage_override.applies(opts.secret_storage) {
        args.flag("--override", SECRET_STORAGE_OVERRIDE);
    }

    args.flag("--history-max", opts.history_max.to_string())
        .flag("--service-account", TILLER_ACCOUNT)
        .switch("--upgrade");
    args
}
