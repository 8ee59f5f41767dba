//! Captured-output dump on assertion failure
//!
//! Strictly a secondary diagnostic: by the time this runs, pass/fail has
//! already been recorded through the harness. Markers delimit each stream
//! so the dump stays readable in the middle of framework chatter.

use crate::capture;
use crate::harness::Harness;
use crate::verdict::Verdict;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Dump captured streams to the harness diagnostic stream.
///
/// Nothing is printed when the harness is skipping or when `marker` is the
/// expected [`Verdict::True`] outcome. A stream is dumped under its
/// `>>> STDOUT` / `>>> STDERR` marker only when its path is supplied and
/// the file has content; the closing `<<< end output` line appears whenever
/// at least one path was supplied, even if both files turned out empty.
/// Both paths `None` produces no output at all.
pub fn show_output(
    harness: &mut impl Harness,
    marker: Verdict,
    stdout: Option<&Path>,
    stderr: Option<&Path>,
) {
    if harness.is_skipping() || marker == Verdict::True {
        return;
    }

    dump_stream(harness, ">>> STDOUT", stdout);
    dump_stream(harness, ">>> STDERR", stderr);

    if stdout.is_some() || stderr.is_some() {
        let _ = writeln!(harness.diag(), "<<< end output");
    }
}

fn dump_stream(harness: &mut impl Harness, marker: &str, path: Option<&Path>) {
    let Some(path) = path else { return };
    if capture::file_is_empty(path) {
        return;
    }

    let contents = fs::read(path).unwrap_or_default();
    let diag = harness.diag();
    let _ = writeln!(diag, "{}", marker);
    let _ = diag.write_all(&contents);
}
