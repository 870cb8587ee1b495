//! Core operations behind the commands
//!
//! Command modules parse arguments and pick collaborators; the logic that
//! decides what runs, and in which order, lives here.

pub mod init;
