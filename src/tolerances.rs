// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized acceptance thresholds with justification.
//!
//! Every tolerance used in the validation binary and tests is defined here
//! with documentation of its origin. No ad-hoc magic numbers.
//!
//! | Category | Basis | Example |
//! |----------|-------|---------|
//! | Machine precision | IEEE 754 f64, one division | 1e-12 for exact rationals |
//! | Trigonometric | `asin`/`to_degrees` rounding | 1e-9 ° for angles |
//! | Published value | PDG rounding of quoted numbers | 0.01 ° vs quoted −129.72 ° |

/// Exact rational predictions: absolute tolerance.
///
/// Each prediction is a single integer division in f64, correctly rounded
/// to ≤ 0.5 ulp (~1e-17 at these magnitudes). 1e-12 leaves five orders of
/// headroom while still catching any wrong numerator or denominator.
pub const EXACT_RATIONAL: f64 = 1e-12;

/// Angle conversions recomputed from the same expression: absolute tolerance
/// in degrees.
///
/// `asin` and the radian→degree scaling each contribute ≤ 1 ulp; 1e-9 °
/// is generous for a two-operation chain near 50°.
pub const ANGLE_RECOMPUTED_DEG: f64 = 1e-9;

/// Angle checks against values quoted to two decimals in the literature
/// (e.g. δ_PMNS ≈ −129.72 °): absolute tolerance in degrees.
pub const ANGLE_QUOTED_DEG: f64 = 0.01;

/// Sigma counts checked against hand-computed examples quoted to three
/// decimals: absolute tolerance.
pub const SIGMA_QUOTED: f64 = 1e-3;

/// Percent deviations checked against hand-computed examples quoted to
/// three decimals: absolute tolerance in percentage points.
pub const DEVIATION_QUOTED_PCT: f64 = 1e-3;

/// Cross-relation ratio (48/2197) / (8/2197): absolute tolerance.
///
/// The ratio of two correctly-rounded divisions by the same denominator is
/// exact to a few ulp of 6; 1e-12 is far above that but below any wrong
/// integer combination.
pub const CROSS_RELATION: f64 = 1e-12;

/// Observed values smaller than this are treated as zero when forming
/// relative deviations (guards the division in percent deviation).
pub const NEAR_ZERO_OBSERVED: f64 = 1e-12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)] // constants sanity check
    fn tolerance_ordering() {
        assert!(ANGLE_RECOMPUTED_DEG < ANGLE_QUOTED_DEG);
        assert!(EXACT_RATIONAL < SIGMA_QUOTED);
        assert!(NEAR_ZERO_OBSERVED <= EXACT_RATIONAL);
    }

    #[test]
    #[allow(clippy::assertions_on_constants)] // constants sanity check
    fn all_tolerances_positive() {
        for t in [
            EXACT_RATIONAL,
            ANGLE_RECOMPUTED_DEG,
            ANGLE_QUOTED_DEG,
            SIGMA_QUOTED,
            DEVIATION_QUOTED_PCT,
            CROSS_RELATION,
            NEAR_ZERO_OBSERVED,
        ] {
            assert!(t > 0.0);
        }
    }
}
