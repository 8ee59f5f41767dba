//! Seam to the surrounding test framework
//!
//! The assertion family needs four capabilities from whatever framework
//! hosts it: recording a labeled pass/fail check, the skip flag, a scratch
//! directory for capture files, and the diagnostic stream. [`Harness`]
//! names them; [`Recorder`] is the shipped implementation with an
//! in-memory ledger and diagnostic buffer.

use std::io::{self, Write};
use std::path::Path;
use tempfile::TempDir;

/// Capabilities consumed from the hosting test framework.
pub trait Harness {
    /// Record one labeled sub-check in the framework's ledger.
    fn check(&mut self, label: &str, passed: bool);

    /// Whether the surrounding test is marked skipped.
    fn is_skipping(&self) -> bool;

    /// Directory for per-subtest scratch files.
    fn scratch_dir(&self) -> &Path;

    /// Diagnostic stream (stderr in production).
    fn diag(&mut self) -> &mut dyn Write;
}

/// One recorded sub-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub label: String,
    pub passed: bool,
}

/// In-memory [`Harness`]: a ledger of check results, a settable skip flag,
/// a tempdir for scratch files, and a buffered diagnostic stream.
pub struct Recorder {
    checks: Vec<CheckResult>,
    skipping: bool,
    scratch: TempDir,
    diag: Vec<u8>,
}

impl Recorder {
    pub fn new() -> io::Result<Self> {
        Ok(Recorder {
            checks: Vec::new(),
            skipping: false,
            scratch: TempDir::new()?,
            diag: Vec::new(),
        })
    }

    /// Mark the surrounding test as skipped (or not).
    pub fn set_skipping(&mut self, skipping: bool) {
        self.skipping = skipping;
    }

    /// Everything recorded so far, in call order.
    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    /// Only the failed sub-checks.
    pub fn failures(&self) -> Vec<&CheckResult> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }

    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Diagnostic output captured so far, as text.
    pub fn diag_text(&self) -> String {
        String::from_utf8_lossy(&self.diag).into_owned()
    }
}

impl Harness for Recorder {
    fn check(&mut self, label: &str, passed: bool) {
        self.checks.push(CheckResult {
            label: label.to_string(),
            passed,
        });
    }

    fn is_skipping(&self) -> bool {
        self.skipping
    }

    fn scratch_dir(&self) -> &Path {
        self.scratch.path()
    }

    fn diag(&mut self) -> &mut dyn Write {
        &mut self.diag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_keeps_call_order() {
        let mut recorder = Recorder::new().unwrap();
        recorder.check("first", true);
        recorder.check("second", false);
        recorder.check("third", true);

        let labels: Vec<_> = recorder.checks().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["first", "second", "third"]);
        assert!(!recorder.all_passed());
        assert_eq!(recorder.failures().len(), 1);
        assert_eq!(recorder.failures()[0].label, "second");
    }

    #[test]
    fn skip_flag_round_trips() {
        let mut recorder = Recorder::new().unwrap();
        assert!(!recorder.is_skipping());
        recorder.set_skipping(true);
        assert!(recorder.is_skipping());
    }

    #[test]
    fn diag_buffer_collects_writes() {
        let mut recorder = Recorder::new().unwrap();
        writeln!(recorder.diag(), "a line").unwrap();
        assert_eq!(recorder.diag_text(), "a line\n");
    }

    #[test]
    fn scratch_dir_exists() {
        let recorder = Recorder::new().unwrap();
        assert!(recorder.scratch_dir().is_dir());
    }
}
