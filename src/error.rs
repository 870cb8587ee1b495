//! Error types and handling for tillerup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! The core never wraps a collaborator error: whatever failed first is what
//! reaches `main`.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tillerup operations
#[derive(Error, Diagnostic, Debug)]
pub enum TillerError {
    // Process execution errors
    #[error("Failed to run {program}: {reason}")]
    #[diagnostic(
        code(tillerup::exec::spawn_failed),
        help("Check that the binary is installed and on PATH, or pass --kubectl / --helm")
    )]
    CommandSpawnFailed { program: String, reason: String },

    #[error("`{program} {args}` exited with {status}: {stderr}")]
    #[diagnostic(
        code(tillerup::exec::command_failed),
        help("Objects created by earlier steps are left in place; delete them before re-running")
    )]
    CommandFailed {
        program: String,
        args: String,
        status: String,
        stderr: String,
    },

    #[error("helm init exited with {status}")]
    #[diagnostic(code(tillerup::exec::installer_failed))]
    InstallerFailed { status: String },

    // Configuration errors
    #[error("Could not determine configuration directory: {message}")]
    #[diagnostic(
        code(tillerup::config::dir_unavailable),
        help("Set TILLERUP_CONFIG_DIR to choose a directory explicitly")
    )]
    ConfigDirUnavailable { message: String },

    #[error("Failed to create configuration directory: {path}: {reason}")]
    #[diagnostic(code(tillerup::config::dir_create_failed))]
    ConfigDirCreateFailed { path: String, reason: String },

    #[error("Invalid namespace '{name}': {reason}")]
    #[diagnostic(
        code(tillerup::options::invalid_namespace),
        help("Namespaces are lowercase alphanumerics and '-', at most 63 characters")
    )]
    InvalidNamespace { name: String, reason: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(tillerup::completions::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TillerError>;
