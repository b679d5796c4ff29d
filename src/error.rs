// SPDX-License-Identifier: AGPL-3.0-only

//! Typed errors for model construction and result export.
//!
//! Replaces `Result<_, String>` in public APIs with a proper enum so callers
//! can pattern-match on failure modes (bad generation index, degenerate
//! cluster, export failure) rather than parsing opaque strings.

use std::fmt;

/// Errors arising from model construction or result export.
#[derive(Debug)]
pub enum FlavorError {
    /// Generation index outside {1, 2, 3}.
    InvalidGeneration(u32),

    /// Cluster value that makes a formula denominator zero.
    ///
    /// `cluster = 0` breaks the direct-cluster denominators;
    /// `cluster = 2` breaks the secondary cluster `cluster − 2`.
    InvalidCluster(i64),

    /// Result export failed (path, underlying IO or serialization error).
    Export(String),
}

impl fmt::Display for FlavorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeneration(g) => {
                write!(f, "Generation must be 1, 2, or 3, got {g}")
            }
            Self::InvalidCluster(c) => {
                write!(f, "Cluster {c} makes a formula denominator zero")
            }
            Self::Export(msg) => write!(f, "Result export failed: {msg}"),
        }
    }
}

impl std::error::Error for FlavorError {}
