//! Subtest execution with captured streams
//!
//! Runs one subtest with stdout and stderr redirected to files in the
//! harness scratch directory and its exit disposition folded into a
//! [`ReturnValue`]. Capture files are truncated before every run, so one
//! scratch directory serves any number of sequential subtests.

use crate::verdict::ReturnValue;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// One subtest's recorded outcome: exit disposition plus the capture files.
#[derive(Debug)]
pub struct CapturedRun {
    pub return_value: ReturnValue,
    pub stdout_path: PathBuf,
    pub stderr_path: PathBuf,
}

impl CapturedRun {
    pub fn stdout_is_empty(&self) -> bool {
        file_is_empty(&self.stdout_path)
    }

    pub fn stderr_is_empty(&self) -> bool {
        file_is_empty(&self.stderr_path)
    }

    /// Captured stdout as text
    pub fn stdout(&self) -> String {
        read_lossy(&self.stdout_path)
    }

    /// Captured stderr as text
    pub fn stderr(&self) -> String {
        read_lossy(&self.stderr_path)
    }
}

/// A missing or unreadable capture file counts as empty.
pub(crate) fn file_is_empty(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true)
}

fn read_lossy(path: &Path) -> String {
    fs::read(path)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

/// Run a subtest with both streams captured under `scratch`.
///
/// The command's stream wiring is overridden; args, env, and working
/// directory stay whatever the caller configured.
pub fn run_captured(scratch: &Path, cmd: &mut Command) -> io::Result<CapturedRun> {
    let stdout_path = scratch.join("stdout");
    let stderr_path = scratch.join("stderr");

    // Truncate on create: output from a previous subtest must not leak in
    let stdout_file = File::create(&stdout_path)?;
    let stderr_file = File::create(&stderr_path)?;

    let status = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout_file))
        .stderr(Stdio::from(stderr_file))
        .status()?;

    Ok(CapturedRun {
        return_value: ReturnValue::from_status(status),
        stdout_path,
        stderr_path,
    })
}

/// Run a shell snippet as the subtest (`sh -c`).
pub fn run_shell(scratch: &Path, script: &str) -> io::Result<CapturedRun> {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(script);
    run_captured(scratch, &mut cmd)
}
