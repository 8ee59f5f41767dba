//! Composite assertions over a captured subtest run
//!
//! Each operation records three labeled sub-checks (exit code, stdout,
//! stderr) so a failure pinpoints exactly which dimension diverged. Every
//! sub-check runs even after an earlier one fails; one call can report
//! multiple independent defects. Output dumping is a secondary diagnostic
//! layered on top of the recorded results.

use crate::capture::CapturedRun;
use crate::harness::Harness;
use crate::report;
use crate::verdict::Verdict;
use std::fs;
use std::io::Write;

/// Subtest must succeed silently: exit true with nothing on either stream.
pub fn assert_true_with_no_output(harness: &mut impl Harness, label: &str, run: &CapturedRun) {
    let passed = run.return_value.is_true();
    harness.check(&format!("{}; expected subtest to pass", label), passed);

    // Dump stderr right away on an unexpected failure, ahead of the
    // emptiness checks below
    if !passed {
        if let Ok(contents) = fs::read(&run.stderr_path) {
            let _ = harness.diag().write_all(&contents);
        }
    }

    harness.check(
        &format!("{}; expected no output to stdout", label),
        run.stdout_is_empty(),
    );
    harness.check(
        &format!("{}; expected no output to stderr", label),
        run.stderr_is_empty(),
    );
}

/// Subtest must fail, complaining on stdout with a quiet stderr.
pub fn assert_false_with_output(harness: &mut impl Harness, label: &str, run: &CapturedRun) {
    let stdout_empty = run.stdout_is_empty();
    let stderr_empty = run.stderr_is_empty();

    harness.check(
        &format!("{}; expected subtest to fail", label),
        !run.return_value.is_true(),
    );
    harness.check(
        &format!("{}; expected output to stdout", label),
        !stdout_empty,
    );
    harness.check(
        &format!("{}; expected no output to stderr", label),
        stderr_empty,
    );

    if !(!stdout_empty && stderr_empty) {
        report::show_output(
            harness,
            Verdict::False,
            Some(run.stdout_path.as_path()),
            Some(run.stderr_path.as_path()),
        );
    }
}

/// Subtest must fail, complaining on stderr with a quiet stdout.
pub fn assert_false_with_error(harness: &mut impl Harness, label: &str, run: &CapturedRun) {
    let stdout_empty = run.stdout_is_empty();
    let stderr_empty = run.stderr_is_empty();

    harness.check(
        &format!("{}; expected subtest to fail", label),
        !run.return_value.is_true(),
    );
    harness.check(
        &format!("{}; expected no output to stdout", label),
        stdout_empty,
    );
    harness.check(
        &format!("{}; expected output to stderr", label),
        !stderr_empty,
    );

    if !(stdout_empty && !stderr_empty) {
        report::show_output(
            harness,
            Verdict::False,
            Some(run.stdout_path.as_path()),
            Some(run.stderr_path.as_path()),
        );
    }
}
