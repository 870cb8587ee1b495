//! In-memory executors that record calls, for tests

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use super::{ClusterExecutor, Installer};
use crate::error::{Result, TillerError};

/// Records every cluster call; optionally fails on the n-th (1-based) one
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: RefCell<Vec<Vec<String>>>,
    fail_on: Option<usize>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            calls: RefCell::default(),
            fail_on: Some(call),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ClusterExecutor for RecordingExecutor {
    fn execute(&self, args: &[String]) -> Result<String> {
        let mut calls = self.calls.borrow_mut();
        calls.push(args.to_vec());

        if self.fail_on == Some(calls.len()) {
            return Err(TillerError::CommandFailed {
                program: "kubectl".to_string(),
                args: args.join(" "),
                status: "exit status: 1".to_string(),
                stderr: format!("call {} rejected", calls.len()),
            });
        }
        Ok(String::new())
    }
}

/// Records installer invocations; optionally fails every one
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    invocations: RefCell<Vec<(PathBuf, Vec<String>)>>,
    fail: bool,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            invocations: RefCell::default(),
            fail: true,
        }
    }

    pub fn invocations(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.invocations.borrow().clone()
    }
}

impl Installer for RecordingInstaller {
    fn init(&self, helm_home: &Path, args: &[String]) -> Result<()> {
        self.invocations
            .borrow_mut()
            .push((helm_home.to_path_buf(), args.to_vec()));

        if self.fail {
            return Err(TillerError::InstallerFailed {
                status: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}
