// SPDX-License-Identifier: AGPL-3.0-only

//! Pass/fail check harness for the validation binary.
//!
//! The `validate_flavor` binary follows one pattern:
//!   - hardcoded expected values with provenance
//!   - explicit checks against documented tolerances
//!   - exit code 0 (all checks pass) or 1 (any check fails)
//!   - machine-readable summary on stdout

use std::process;

/// How a threshold is applied to a check.
#[derive(Debug, Clone, Copy)]
pub enum CheckMode {
    /// |observed − expected| < tolerance
    Absolute,
    /// |observed − expected| / |expected| < tolerance
    Relative,
    /// observed < threshold
    UpperBound,
}

impl std::fmt::Display for CheckMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute => write!(f, "abs"),
            Self::Relative => write!(f, "rel"),
            Self::UpperBound => write!(f, "<"),
        }
    }
}

/// A single check with its result.
#[derive(Debug, Clone)]
pub struct Check {
    /// Human-readable label.
    pub label: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Observed value.
    pub observed: f64,
    /// Expected value or threshold.
    pub expected: f64,
    /// Tolerance used.
    pub tolerance: f64,
    /// How the tolerance was applied.
    pub mode: CheckMode,
}

/// Accumulates checks and produces a summary with an exit code.
#[derive(Debug, Default)]
#[must_use]
pub struct CheckHarness {
    /// Name of the validation run.
    pub name: String,
    /// All checks performed.
    pub checks: Vec<Check>,
}

impl CheckHarness {
    /// Create a harness for a named validation run.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checks: Vec::new(),
        }
    }

    /// Absolute check: |observed − expected| < tolerance.
    pub fn check_abs(&mut self, label: &str, observed: f64, expected: f64, tolerance: f64) {
        self.checks.push(Check {
            label: label.to_string(),
            passed: (observed - expected).abs() < tolerance,
            observed,
            expected,
            tolerance,
            mode: CheckMode::Absolute,
        });
    }

    /// Relative check: |observed − expected| / |expected| < tolerance.
    /// Falls back to an absolute comparison when expected is ~0.
    pub fn check_rel(&mut self, label: &str, observed: f64, expected: f64, tolerance: f64) {
        let passed = if expected.abs() > f64::EPSILON {
            ((observed - expected) / expected).abs() < tolerance
        } else {
            observed.abs() < tolerance
        };
        self.checks.push(Check {
            label: label.to_string(),
            passed,
            observed,
            expected,
            tolerance,
            mode: CheckMode::Relative,
        });
    }

    /// Upper-bound check: observed < threshold.
    pub fn check_upper(&mut self, label: &str, observed: f64, threshold: f64) {
        self.checks.push(Check {
            label: label.to_string(),
            passed: observed < threshold,
            observed,
            expected: threshold,
            tolerance: threshold,
            mode: CheckMode::UpperBound,
        });
    }

    /// Boolean pass/fail check.
    pub fn check_bool(&mut self, label: &str, passed: bool) {
        self.checks.push(Check {
            label: label.to_string(),
            passed,
            observed: f64::from(u8::from(passed)),
            expected: 1.0,
            tolerance: 0.0,
            mode: CheckMode::Absolute,
        });
    }

    /// Number of checks that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Total number of checks.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.checks.len()
    }

    /// Whether all checks passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    fn summary(&self) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        let _ = writeln!(
            s,
            "═══ {}: {}/{} checks passed ═══",
            self.name,
            self.passed_count(),
            self.total_count()
        );
        for check in &self.checks {
            let icon = if check.passed { "✓" } else { "✗" };
            let _ = writeln!(
                s,
                "  {icon} {}: observed={:.6e}, expected={:.6e}, tol={:.2e} ({})",
                check.label, check.observed, check.expected, check.tolerance, check.mode
            );
        }
        s
    }

    /// Print the summary and exit: 0 if all checks pass, 1 otherwise.
    pub fn finish(&self) -> ! {
        println!();
        print!("{}", self.summary());
        if self.all_passed() {
            println!("ALL CHECKS PASSED");
            process::exit(0);
        }
        let failed: Vec<&str> = self
            .checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.label.as_str())
            .collect();
        println!("FAILED CHECKS: {}", failed.join(", "));
        process::exit(1);
    }

    /// Summary string without exiting (for tests).
    #[cfg(test)]
    pub fn format_summary(&self) -> String {
        self.summary()
    }
}
