//! Exit-status vocabulary for the assertion family
//!
//! The conventional true(0)/false(nonzero) pair plus a reserved ERROR
//! sentinel meaning "no result was recorded". The sentinel is tracked
//! structurally, never as a magic exit code.

use std::process::ExitStatus;

/// Three-valued outcome of a subtest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Subtest succeeded (exit code 0)
    True,
    /// Subtest failed with a normal nonzero exit
    False,
    /// No result was recorded
    Error,
}

impl Verdict {
    /// Conventional integer code: 0, 1, 2
    pub fn code(self) -> i32 {
        match self {
            Verdict::True => 0,
            Verdict::False => 1,
            Verdict::Error => 2,
        }
    }

    /// Classify a recorded exit code
    pub fn from_exit_code(code: i32) -> Self {
        if code == 0 {
            Verdict::True
        } else {
            Verdict::False
        }
    }
}

/// What a subtest handed back: an exit code, or nothing at all.
///
/// A subtest killed by a signal produced no exit code; that case stays
/// distinct from every real code so it surfaces as [`Verdict::Error`]
/// instead of masquerading as an ordinary failure. A subtest that exits
/// with code 2 is still `Recorded(2)` and queries as [`Verdict::False`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnValue {
    /// The process exited and reported this code
    Recorded(i32),
    /// The process produced no result
    Missing,
}

impl ReturnValue {
    /// Fold a process exit status into a return value
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => ReturnValue::Recorded(code),
            None => ReturnValue::Missing,
        }
    }

    /// Query the recorded result as a verdict
    pub fn verdict(self) -> Verdict {
        match self {
            ReturnValue::Recorded(code) => Verdict::from_exit_code(code),
            ReturnValue::Missing => Verdict::Error,
        }
    }

    /// Recorded code, or the ERROR sentinel's code when nothing was recorded
    pub fn code(self) -> i32 {
        match self {
            ReturnValue::Recorded(code) => code,
            ReturnValue::Missing => Verdict::Error.code(),
        }
    }

    /// True exactly when the subtest exited 0
    pub fn is_true(self) -> bool {
        self.verdict() == Verdict::True
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_codes() {
        assert_eq!(Verdict::True.code(), 0);
        assert_eq!(Verdict::False.code(), 1);
        assert_eq!(Verdict::Error.code(), 2);
    }

    #[test]
    fn zero_exit_is_true() {
        assert_eq!(Verdict::from_exit_code(0), Verdict::True);
    }

    #[test]
    fn nonzero_exit_is_false() {
        assert_eq!(Verdict::from_exit_code(1), Verdict::False);
        assert_eq!(Verdict::from_exit_code(127), Verdict::False);
    }

    #[test]
    fn missing_queries_as_error() {
        assert_eq!(ReturnValue::Missing.verdict(), Verdict::Error);
        assert_eq!(ReturnValue::Missing.code(), 2);
        assert!(!ReturnValue::Missing.is_true());
    }

    #[test]
    fn recorded_zero_queries_as_true() {
        let value = ReturnValue::Recorded(0);
        assert_eq!(value.verdict(), Verdict::True);
        assert_eq!(value.code(), 0);
        assert!(value.is_true());
    }

    #[test]
    fn recorded_sentinel_code_stays_false() {
        // Exit code 2 is a legitimate failure, not a missing result
        let value = ReturnValue::Recorded(2);
        assert_eq!(value.verdict(), Verdict::False);
        assert_eq!(value.code(), 2);
    }
}
