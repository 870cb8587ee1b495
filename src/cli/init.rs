use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::error::Result;
use crate::operations::init::{
    DEFAULT_HISTORY_MAX, DEFAULT_NAMESPACE, RestrictedOptions, StorageOverridePolicy,
};

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install tiller with cluster-admin:\n    tillerup init insecure\n\n\
                   Install tiller restricted to its own namespace:\n    tillerup init restricted --namespace some-namespace\n\n\
                   Let tiller in one namespace deploy into another:\n    tillerup init restricted --namespace tiller-home --other-ns apps")]
pub struct InitArgs {
    #[command(subcommand)]
    pub mode: Option<InitMode>,
}

#[derive(Subcommand, Debug)]
pub enum InitMode {
    /// Install helm with insecure tiller
    #[command(
        long_about = "Deploy tiller in kube-system namespace with cluster-admin role, no TLS and plaintext configmap storage"
    )]
    Insecure,

    /// Install helm with tiller restricted to a namespace
    Restricted(RestrictedArgs),
}

/// Arguments for `init restricted`
#[derive(Parser, Debug)]
pub struct RestrictedArgs {
    /// Namespace of tiller
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Set RBAC permissions to restrict tiller to deploy in the same namespace it is deployed in
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub same_ns: bool,

    /// Set RBAC permissions to restrict tiller to deploy only in the specified namespace
    #[arg(long, value_name = "NAMESPACE")]
    pub other_ns: Option<String>,

    /// Use secret storage for tiller
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub secret_storage: bool,

    /// Limit the maximum number of revisions saved per release. Use 0 for no limit
    #[arg(long, default_value_t = DEFAULT_HISTORY_MAX, allow_negative_numbers = true)]
    pub history_max: i64,

    /// When to pass the secret-storage override to helm init
    #[arg(long, value_enum, default_value_t = StorageOverrideArg::Legacy)]
    pub storage_override: StorageOverrideArg,
}

/// Command-line spelling of [`StorageOverridePolicy`]
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOverrideArg {
    /// Never pass the override (historical behaviour)
    Legacy,
    /// Pass the override whenever --secret-storage is true
    WhenEnabled,
}

impl From<StorageOverrideArg> for StorageOverridePolicy {
    fn from(arg: StorageOverrideArg) -> Self {
        match arg {
            StorageOverrideArg::Legacy => StorageOverridePolicy::Legacy,
            StorageOverrideArg::WhenEnabled => StorageOverridePolicy::WhenEnabled,
        }
    }
}

impl RestrictedArgs {
    /// Validate into the options the install path runs with
    pub fn to_options(&self) -> Result<RestrictedOptions> {
        RestrictedOptions::new(
            &self.namespace,
            self.same_ns,
            self.other_ns.as_deref(),
            self.secret_storage,
            self.history_max,
            self.storage_override.into(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::operations::init::options::DeployScope;

    fn parse_restricted(extra: &[&str]) -> RestrictedArgs {
        let argv = ["tillerup", "init", "restricted"]
            .iter()
            .chain(extra.iter())
            .copied();
        let cli = Cli::try_parse_from(argv).unwrap_or_else(|e| {
            panic!("Failed to parse CLI arguments: {}", e);
        });
        match cli.command {
            Commands::Init(InitArgs {
                mode: Some(InitMode::Restricted(args)),
            }) => args,
            _ => panic!("Expected init restricted"),
        }
    }

    #[test]
    fn test_cli_parsing_insecure() {
        let cli = Cli::try_parse_from(["tillerup", "init", "insecure"]).expect("parse");
        assert!(matches!(
            cli.command,
            Commands::Init(InitArgs {
                mode: Some(InitMode::Insecure)
            })
        ));
    }

    #[test]
    fn test_cli_parsing_restricted_defaults() {
        let args = parse_restricted(&[]);
        assert_eq!(args.namespace, "ketchup");
        assert!(args.same_ns);
        assert_eq!(args.other_ns, None);
        assert!(args.secret_storage);
        assert_eq!(args.history_max, 200);
        assert_eq!(args.storage_override, StorageOverrideArg::Legacy);

        let opts = args.to_options().expect("valid defaults");
        assert_eq!(opts, RestrictedOptions::defaults().expect("defaults"));
    }

    #[test]
    fn test_cli_parsing_restricted_with_options() {
        let args = parse_restricted(&[
            "--namespace",
            "tiller-home",
            "--other-ns",
            "apps",
            "--secret-storage=false",
            "--history-max",
            "0",
            "--storage-override",
            "when-enabled",
        ]);
        assert_eq!(args.namespace, "tiller-home");
        assert_eq!(args.other_ns.as_deref(), Some("apps"));
        assert!(!args.secret_storage);
        assert_eq!(args.history_max, 0);
        assert_eq!(args.storage_override, StorageOverrideArg::WhenEnabled);
    }

    #[test]
    fn test_cli_parsing_bool_flags() {
        assert!(parse_restricted(&["--same-ns"]).same_ns);
        assert!(parse_restricted(&["--same-ns=true"]).same_ns);
        assert!(!parse_restricted(&["--same-ns=false"]).same_ns);
    }

    #[test]
    fn test_cli_same_ns_false_is_unspecified_scope() {
        let opts = parse_restricted(&["--same-ns=false"])
            .to_options()
            .expect("valid");
        assert_eq!(opts.scope, DeployScope::Unspecified);
    }

    #[test]
    fn test_cli_invalid_namespace_fails_validation() {
        let args = parse_restricted(&["--namespace", "Not_Valid"]);
        assert!(args.to_options().is_err());
    }

    #[test]
    fn test_cli_history_max_accepts_any_int() {
        assert_eq!(parse_restricted(&["--history-max", "-1"]).history_max, -1);
        assert_eq!(parse_restricted(&["--history-max=-1"]).history_max, -1);
        assert_eq!(
            parse_restricted(&["--history-max", "5000000000"]).history_max,
            5_000_000_000
        );
    }

    #[test]
    fn test_cli_negative_history_max_reaches_helm_args() {
        let opts = parse_restricted(&["--history-max", "-1"])
            .to_options()
            .expect("valid");
        let args = crate::operations::init::restricted_args(&opts);
        let tokens = args.tokens();
        let at = tokens
            .iter()
            .position(|t| t == "--history-max")
            .expect("--history-max present");
        assert_eq!(tokens[at + 1], "-1");
    }
}
