//! Test-support helpers for subprocess-driven tests
//!
//! runcheck runs a subtest with both output streams captured to scratch
//! files, then validates the {exit code, stdout, stderr} triple with
//! composite assertions that dump the captured output on failure. The
//! auxiliary helpers belonging to the same workflow ship alongside:
//! leveled stderr logging, fixture section extraction, and unique random
//! value generation.
//!
//! The crate is framework-agnostic: everything it needs from the hosting
//! test framework goes through the [`Harness`] trait, and the bundled
//! [`Recorder`] implements it for stand-alone use.

pub mod assertions;
pub mod capture;
pub mod config;
pub mod fixture;
pub mod harness;
pub mod log;
pub mod random;
pub mod report;
pub mod verdict;

pub use assertions::{assert_false_with_error, assert_false_with_output, assert_true_with_no_output};
pub use capture::{run_captured, run_shell, CapturedRun};
pub use config::HarnessConfig;
pub use fixture::{Fixture, FixtureError};
pub use harness::{CheckResult, Harness, Recorder};
pub use log::{Diagnostics, Level, NullLog, StderrLog};
pub use random::{EntropySource, UniqueRandom};
pub use report::show_output;
pub use verdict::{ReturnValue, Verdict};
