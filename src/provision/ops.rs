//! Declarative cluster operations
//!
//! Each [`ClusterOp`] describes one object to create and renders to the exact
//! `kubectl` argument vector that creates it.

use std::fmt;

use crate::error::{Result, TillerError};

/// Namespace holding cluster system components; it always exists.
pub const KUBE_SYSTEM: &str = "kube-system";

/// Service account tiller runs as
pub const TILLER_ACCOUNT: &str = "tiller";

/// Role granted to tiller in restricted installs
pub const MANAGER_ROLE: &str = "tiller-manager";

/// Binding of [`MANAGER_ROLE`] to the tiller service account
pub const MANAGER_BINDING: &str = "tiller-binding";

/// Built-in unrestricted cluster role
pub const CLUSTER_ADMIN: &str = "cluster-admin";

const ALL_VERBS: &[&str] = &["*"];

/// Every resource in the core, apps, batch and extensions API groups
const WORKLOAD_RESOURCES: &[&str] = &["*.", "*.apps", "*.batch", "*.extensions"];

/// Tiller stores release records as configmaps in its home namespace
const RELEASE_STORAGE_RESOURCES: &[&str] = &["configmaps"];

const MAX_NAMESPACE_LEN: usize = 63;

/// A validated cluster namespace name (DNS-1123 label)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// Validate and wrap a namespace name
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: &str| TillerError::InvalidNamespace {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if name.len() > MAX_NAMESPACE_LEN {
            return Err(invalid("must be at most 63 characters"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(invalid(
                "may only contain lowercase alphanumerics and '-'",
            ));
        }
        if name.starts_with('-') || name.ends_with('-') {
            return Err(invalid(
                "must start and end with an alphanumeric character",
            ));
        }

        Ok(Self(name))
    }

    /// The `kube-system` namespace
    pub fn kube_system() -> Self {
        Self(KUBE_SYSTEM.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_kube_system(&self) -> bool {
        self.0 == KUBE_SYSTEM
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Service account identity that roles get bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAccountSpec {
    pub name: String,
    pub namespace: Namespace,
}

impl ServiceAccountSpec {
    pub fn new(name: impl Into<String>, namespace: &Namespace) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.clone(),
        }
    }

    /// The tiller service account living in `namespace`
    pub fn tiller(namespace: &Namespace) -> Self {
        Self::new(TILLER_ACCOUNT, namespace)
    }

    /// `namespace:name`, as kubectl expects for `--serviceaccount`
    pub fn subject(&self) -> String {
        format!("{}:{}", self.namespace, self.name)
    }
}

/// Namespaced permission grant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSpec {
    pub name: String,
    pub namespace: Namespace,
    pub verbs: Vec<String>,
    pub resources: Vec<String>,
}

impl RoleSpec {
    fn manager(namespace: &Namespace, resources: &[&str]) -> Self {
        Self {
            name: MANAGER_ROLE.to_string(),
            namespace: namespace.clone(),
            verbs: ALL_VERBS.iter().map(ToString::to_string).collect(),
            resources: resources.iter().map(ToString::to_string).collect(),
        }
    }

    /// All verbs over workload resource groups
    pub fn workload_manager(namespace: &Namespace) -> Self {
        Self::manager(namespace, WORKLOAD_RESOURCES)
    }

    /// All verbs over configmaps only
    pub fn release_storage(namespace: &Namespace) -> Self {
        Self::manager(namespace, RELEASE_STORAGE_RESOURCES)
    }
}

/// Attaches a namespaced role to a service account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleBindingSpec {
    pub name: String,
    pub namespace: Namespace,
    pub role_name: String,
    pub subject: ServiceAccountSpec,
}

impl RoleBindingSpec {
    /// Binds [`MANAGER_ROLE`] in `namespace` to `subject`
    pub fn manager(namespace: &Namespace, subject: &ServiceAccountSpec) -> Self {
        Self {
            name: MANAGER_BINDING.to_string(),
            namespace: namespace.clone(),
            role_name: MANAGER_ROLE.to_string(),
            subject: subject.clone(),
        }
    }
}

/// Attaches a cluster role to a service account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterRoleBindingSpec {
    pub name: String,
    pub cluster_role: String,
    pub subject: ServiceAccountSpec,
}

/// One object creation against the cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterOp {
    CreateNamespace(Namespace),
    CreateServiceAccount(ServiceAccountSpec),
    CreateRole(RoleSpec),
    CreateRoleBinding(RoleBindingSpec),
    CreateClusterRoleBinding(ClusterRoleBindingSpec),
}

impl ClusterOp {
    /// Render the kubectl arguments that perform this operation
    pub fn to_args(&self) -> Vec<String> {
        match self {
            ClusterOp::CreateNamespace(ns) => args(["create", "namespace", ns.as_str()]),
            ClusterOp::CreateServiceAccount(sa) => {
                args(["-n", sa.namespace.as_str(), "create", "sa", &sa.name])
            }
            ClusterOp::CreateRole(role) => args([
                "-n",
                role.namespace.as_str(),
                "create",
                "role",
                &role.name,
                &format!("--verb={}", role.verbs.join(",")),
                &format!("--resource={}", role.resources.join(",")),
            ]),
            ClusterOp::CreateRoleBinding(binding) => args([
                "-n",
                binding.namespace.as_str(),
                "create",
                "rolebinding",
                &binding.name,
                &format!("--role={}", binding.role_name),
                &format!("--serviceaccount={}", binding.subject.subject()),
            ]),
            // kubectl ignores -n for cluster-scoped objects; kept so the command
            // reads against the account's namespace.
            ClusterOp::CreateClusterRoleBinding(binding) => args([
                "-n",
                binding.subject.namespace.as_str(),
                "create",
                "clusterrolebinding",
                &binding.name,
                "--clusterrole",
                &binding.cluster_role,
                &format!("--serviceaccount={}", binding.subject.subject()),
            ]),
        }
    }
}

impl fmt::Display for ClusterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterOp::CreateNamespace(ns) => write!(f, "namespace {ns}"),
            ClusterOp::CreateServiceAccount(sa) => {
                write!(f, "serviceaccount {}/{}", sa.namespace, sa.name)
            }
            ClusterOp::CreateRole(role) => write!(f, "role {}/{}", role.namespace, role.name),
            ClusterOp::CreateRoleBinding(binding) => {
                write!(f, "rolebinding {}/{}", binding.namespace, binding.name)
            }
            ClusterOp::CreateClusterRoleBinding(binding) => write!(
                f,
                "clusterrolebinding {} ({})",
                binding.name, binding.cluster_role
            ),
        }
    }
}

fn args<const N: usize>(parts: [&str; N]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}
