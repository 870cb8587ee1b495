//! Command implementations for tillerup CLI

pub mod completions;
pub mod init;
pub mod version;
