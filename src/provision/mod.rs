//! Namespace and RBAC provisioning for tiller
//!
//! This module handles:
//! - Building the ordered operation plan for each [`InstallationMode`]
//! - Applying a plan through a [`ClusterExecutor`], stopping at the first failure
//!
//! Nothing is rolled back: objects created before a failing step stay in the
//! cluster, and a re-run will fail on them because `kubectl create` is not
//! idempotent.

pub mod ops;


use tracing::debug;

use crate::error::Result;
use crate::exec::ClusterExecutor;
use crate::ui::ProgressReporter;

pub use ops::{
    CLUSTER_ADMIN, ClusterOp, ClusterRoleBindingSpec, Namespace, RoleBindingSpec, RoleSpec,
    ServiceAccountSpec, TILLER_ACCOUNT,
};

/// Which privilege layout tiller gets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallationMode {
    /// cluster-admin over the whole cluster
    Unrestricted,
    /// Manage workloads only in tiller's own namespace
    RestrictedSameNamespace,
    /// Manage workloads only in the given namespace; keep release records at home
    RestrictedCrossNamespace(Namespace),
}

/// Plan for an unrestricted install of `account` in `namespace`
pub fn plan_unrestricted(account: &str, namespace: &Namespace) -> Vec<ClusterOp> {
    let sa = ServiceAccountSpec::new(account, namespace);
    let mut ops = Vec::with_capacity(3);

    if !namespace.is_kube_system() {
        ops.push(ClusterOp::CreateNamespace(namespace.clone()));
    }
    ops.push(ClusterOp::CreateServiceAccount(sa.clone()));
    ops.push(ClusterOp::CreateClusterRoleBinding(ClusterRoleBindingSpec {
        name: account.to_string(),
        cluster_role: CLUSTER_ADMIN.to_string(),
        subject: sa,
    }));

    ops
}

/// Plan for a restricted install of tiller in `namespace`
///
/// With `other` set, tiller manages workloads in `other` and only gets
/// configmap access at home.
pub fn plan_restricted(namespace: &Namespace, other: Option<&Namespace>) -> Vec<ClusterOp> {
    let sa = ServiceAccountSpec::tiller(namespace);

    match other {
        None => vec![
            ClusterOp::CreateNamespace(namespace.clone()),
            ClusterOp::CreateServiceAccount(sa.clone()),
            ClusterOp::CreateRole(RoleSpec::workload_manager(namespace)),
            ClusterOp::CreateRoleBinding(RoleBindingSpec::manager(namespace, &sa)),
        ],
        Some(other) => vec![
            ClusterOp::CreateNamespace(namespace.clone()),
            ClusterOp::CreateNamespace(other.clone()),
            ClusterOp::CreateServiceAccount(sa.clone()),
            ClusterOp::CreateRole(RoleSpec::workload_manager(other)),
            ClusterOp::CreateRoleBinding(RoleBindingSpec::manager(other, &sa)),
            ClusterOp::CreateRole(RoleSpec::release_storage(namespace)),
            ClusterOp::CreateRoleBinding(RoleBindingSpec::manager(namespace, &sa)),
        ],
    }
}

/// Applies operation plans against the cluster
pub struct Provisioner<'a> {
    executor: &'a dyn ClusterExecutor,
    reporter: &'a mut dyn ProgressReporter,
}

impl<'a> Provisioner<'a> {
    pub fn new(executor: &'a dyn ClusterExecutor, reporter: &'a mut dyn ProgressReporter) -> Self {
        Self { executor, reporter }
    }

    /// Run `ops` in order; the first failure is returned as-is and nothing after it runs
    pub fn apply(&mut self, ops: &[ClusterOp]) -> Result<()> {
        for (index, op) in ops.iter().enumerate() {
            debug!(step = index + 1, total = ops.len(), "creating {}", op);
            let description = format!("Creating {op}");
            self.reporter.start_step(&description);

            if let Err(err) = self.executor.execute(&op.to_args()) {
                self.reporter.fail_step();
                return Err(err);
            }
            self.reporter.finish_step();
        }
        Ok(())
    }

    /// Give `account` in `namespace` the cluster-admin role
    pub fn add_unrestricted(&mut self, account: &str, namespace: &Namespace) -> Result<()> {
        self.apply(&plan_unrestricted(account, namespace))
    }

    /// Restrict tiller in `namespace` to its own namespace, or to `other` when given
    pub fn add_restricted(&mut self, namespace: &Namespace, other: Option<&Namespace>) -> Result<()> {
        self.apply(&plan_restricted(namespace, other))
    }

    /// Provision tiller living in `namespace` for the given mode
    pub fn provision(&mut self, mode: &InstallationMode, namespace: &Namespace) -> Result<()> {
        match mode {
            InstallationMode::Unrestricted => self.add_unrestricted(TILLER_ACCOUNT, namespace),
            InstallationMode::RestrictedSameNamespace => self.add_restricted(namespace, None),
            InstallationMode::RestrictedCrossNamespace(other) => {
                self.add_restricted(namespace, Some(other))
            }
        }
    }
}
