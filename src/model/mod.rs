// SPDX-License-Identifier: AGPL-3.0-only

//! Generation hierarchy model.
//!
//! The empirical rule behind every prediction:
//!   - generation powers `p_i = 3^(i-1)`, so p₁ = 1, p₂ = 3, p₃ = 9
//!   - cluster number 13 (1 + 12 gauge bosons)
//!   - secondary cluster 11 = 13 − 2
//!
//! Each operation returns a [`Prediction`]: the rational value as f64 plus a
//! human-readable derivation string showing the exact numerator/denominator
//! construction. All operations are pure; calling one twice yields
//! bit-identical output.

mod extended;
mod mixing;

pub use mixing::CrossRelation;

use crate::error::FlavorError;

/// The four integer constants of the generation hierarchy rule.
///
/// Immutable after construction. The canonical instance is
/// `p = (1, 3, 9)`, `cluster = 13`; the generalized constructor
/// [`GenerationConstants::from_rule`] re-derives the powers from a base and
/// accepts any cluster that keeps every formula denominator nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConstants {
    p1: i64,
    p2: i64,
    p3: i64,
    cluster: i64,
}

impl Default for GenerationConstants {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationConstants {
    /// The canonical constants: p_i = 3^(i-1), cluster = 13.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            p1: 1,
            p2: 3,
            p3: 9,
            cluster: 13,
        }
    }

    /// Generalized rule: p_i = base^(i-1) with an arbitrary cluster.
    ///
    /// # Errors
    ///
    /// Returns [`FlavorError::InvalidCluster`] for `cluster == 0` (direct
    /// denominators) or `cluster == 2` (secondary cluster `cluster − 2`).
    pub fn from_rule(base: i64, cluster: i64) -> Result<Self, FlavorError> {
        if cluster == 0 || cluster == 2 {
            return Err(FlavorError::InvalidCluster(cluster));
        }
        Ok(Self {
            p1: 1,
            p2: base,
            p3: base * base,
            cluster,
        })
    }

    /// Power for generation `i`.
    ///
    /// # Errors
    ///
    /// Returns [`FlavorError::InvalidGeneration`] unless `i ∈ {1, 2, 3}`.
    pub fn p(&self, generation: u32) -> Result<i64, FlavorError> {
        match generation {
            1 => Ok(self.p1),
            2 => Ok(self.p2),
            3 => Ok(self.p3),
            g => Err(FlavorError::InvalidGeneration(g)),
        }
    }

    /// Cluster number (13 for the canonical rule).
    #[must_use]
    pub const fn cluster(&self) -> i64 {
        self.cluster
    }

    /// Secondary cluster, `cluster − 2` (11 for the canonical rule).
    #[must_use]
    pub const fn cluster_secondary(&self) -> i64 {
        self.cluster - 2
    }
}

/// One prediction: the rational value as f64 and its derivation.
///
/// Produced fresh on each call; the derivation string is part of the
/// observable output and shows the exact integer construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Value of the rational, evaluated in f64.
    pub value: f64,
    /// Human-readable derivation, e.g. `(p₂×13 - p₁)/13² = (3×13 - 1)/169 = 38/169`.
    pub derivation: String,
}

impl Prediction {
    pub(crate) fn from_ratio(num: i64, denom: i64, derivation: String) -> Self {
        Self {
            value: num as f64 / denom as f64,
            derivation,
        }
    }
}
