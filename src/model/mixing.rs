// SPDX-License-Identifier: AGPL-3.0-only

//! Core mixing-parameter predictions: CKM and PMNS angles, CP phases, and
//! the Weinberg angle.
//!
//! Every formula is a fixed integer ratio; the denominators are powers of
//! the cluster or the secondary cluster, all nonzero by construction (the
//! generalized constructor rejects clusters 0 and 2).
//!
//! | Parameter | Formula | Exact value |
//! |---|---|---|
//! | CKM sin θ₁₂ | (p₂·13 − p₁) / 13² | 38/169 |
//! | CKM sin θ₂₃ | (13 − (p₃−p₂)) / 13² | 7/169 |
//! | CKM sin θ₁₃ | (p₃ − p₁) / 13³ | 8/2197 |
//! | CKM sin δ | (13 − p₂) / 11 | 10/11 |
//! | PMNS sin²θ₁₂ | (p₁ + p₂) / 13 | 4/13 |
//! | PMNS sin²θ₂₃ | (p₃ − p₂) / 11 | 6/11 |
//! | PMNS sin²θ₁₃ | (13−p₃)(13−p₁) / 13³ | 48/2197 |
//! | PMNS sin δ | −(13 − p₂) / 13 | −10/13 |
//! | Weinberg sin²θ_W | p₂ / 13 | 3/13 |

use super::{GenerationConstants, Prediction};

impl GenerationConstants {
    /// CKM θ₁₂ (Cabibbo angle): sin θ₁₂ = (p₂·13 − p₁)/13² = 38/169.
    #[must_use]
    pub fn sin_theta12_ckm(&self) -> Prediction {
        let c = self.cluster;
        let num = self.p2 * c - self.p1;
        let denom = c * c;
        let derivation = format!(
            "(p₂×{c} - p₁)/{c}² = ({}×{c} - {})/{denom} = {num}/{denom}",
            self.p2, self.p1
        );
        Prediction::from_ratio(num, denom, derivation)
    }

    /// CKM θ₂₃: sin θ₂₃ = [13 − (p₃ − p₂)]/13² = 7/169.
    #[must_use]
    pub fn sin_theta23_ckm(&self) -> Prediction {
        let c = self.cluster;
        let num = c - (self.p3 - self.p2);
        let denom = c * c;
        let derivation = format!(
            "[{c} - (p₃-p₂)]/{c}² = [{c} - ({}-{})]/{denom} = {num}/{denom}",
            self.p3, self.p2
        );
        Prediction::from_ratio(num, denom, derivation)
    }

    /// CKM θ₁₃: sin θ₁₃ = (p₃ − p₁)/13³ = 8/2197.
    #[must_use]
    pub fn sin_theta13_ckm(&self) -> Prediction {
        let c = self.cluster;
        let num = self.p3 - self.p1;
        let denom = c * c * c;
        let derivation = format!(
            "(p₃ - p₁)/{c}³ = ({} - {})/{denom} = {num}/{denom}",
            self.p3, self.p1
        );
        Prediction::from_ratio(num, denom, derivation)
    }

    /// CKM CP phase: sin δ = (13 − p₂)/(13 − 2) = 10/11.
    #[must_use]
    pub fn sin_delta_ckm(&self) -> Prediction {
        let c = self.cluster;
        let num = c - self.p2;
        let denom = self.cluster_secondary();
        let derivation = format!(
            "({c} - p₂)/({c} - 2) = ({c} - {})/{denom} = {num}/{denom}",
            self.p2
        );
        Prediction::from_ratio(num, denom, derivation)
    }

    /// CKM δ in degrees: the direct principal arcsine of sin δ.
    #[must_use]
    pub fn delta_ckm_degrees(&self) -> f64 {
        self.sin_delta_ckm().value.asin().to_degrees()
    }

    /// PMNS θ₁₂ (solar angle): sin²θ₁₂ = (p₁ + p₂)/13 = 4/13.
    #[must_use]
    pub fn sin2_theta12_pmns(&self) -> Prediction {
        let c = self.cluster;
        let num = self.p1 + self.p2;
        let derivation = format!(
            "(p₁ + p₂)/{c} = ({} + {})/{c} = {num}/{c}",
            self.p1, self.p2
        );
        Prediction::from_ratio(num, c, derivation)
    }

    /// PMNS θ₂₃ (atmospheric angle): sin²θ₂₃ = (p₃ − p₂)/(13 − 2) = 6/11.
    #[must_use]
    pub fn sin2_theta23_pmns(&self) -> Prediction {
        let c = self.cluster;
        let num = self.p3 - self.p2;
        let denom = self.cluster_secondary();
        let derivation = format!(
            "(p₃ - p₂)/({c} - 2) = ({} - {})/{denom} = {num}/{denom}",
            self.p3, self.p2
        );
        Prediction::from_ratio(num, denom, derivation)
    }

    /// PMNS θ₁₃ (reactor angle): sin²θ₁₃ = (13−p₃)(13−p₁)/13³ = 48/2197.
    #[must_use]
    pub fn sin2_theta13_pmns(&self) -> Prediction {
        let c = self.cluster;
        let num = (c - self.p3) * (c - self.p1);
        let denom = c * c * c;
        let derivation = format!(
            "({c}-p₃)({c}-p₁)/{c}³ = ({c}-{})({c}-{})/{denom} = {num}/{denom}",
            self.p3, self.p1
        );
        Prediction::from_ratio(num, denom, derivation)
    }

    /// PMNS CP phase: sin δ = −(13 − p₂)/13 = −10/13.
    ///
    /// The negative sign distinguishes leptons from quarks.
    #[must_use]
    pub fn sin_delta_pmns(&self) -> Prediction {
        let c = self.cluster;
        let num = c - self.p2;
        let derivation = format!("-({c} - p₂)/{c} = -({c} - {})/{c} = -{num}/{c}", self.p2);
        Prediction::from_ratio(-num, c, derivation)
    }

    /// PMNS δ in degrees, third-quadrant branch.
    ///
    /// sin δ = −10/13 has two solutions in [−180°, 180°]: the principal
    /// value −50.28° and −180° + 50.28° = −129.72°. The physical angle is
    /// the latter, so this returns `−180° + arcsin(|sin δ|)` in degrees,
    /// not the bare arcsine.
    #[must_use]
    pub fn delta_pmns_degrees(&self) -> f64 {
        let principal = self.sin_delta_pmns().value.abs().asin().to_degrees();
        -180.0 + principal
    }

    /// Weinberg angle: sin²θ_W = p₂/13 = 3/13.
    #[must_use]
    pub fn sin2_theta_weinberg(&self) -> Prediction {
        let c = self.cluster;
        let num = self.p2;
        let derivation = format!("p₂/{c} = {num}/{c} = {num}/{c}");
        Prediction::from_ratio(num, c, derivation)
    }

    /// Cross-relation between the CKM and PMNS θ₁₃ predictions.
    ///
    /// Both share the cluster³ denominator, so the ratio reduces to the
    /// integer quotient of the numerators: 48/8 = 6 for the canonical rule.
    #[must_use]
    pub fn theta13_cross_relation(&self) -> CrossRelation {
        let c = self.cluster;
        let sin_ckm = self.sin_theta13_ckm();
        let sin2_pmns = self.sin2_theta13_pmns();
        let num_pmns = (c - self.p3) * (c - self.p1);
        let num_ckm = self.p3 - self.p1;
        CrossRelation {
            ratio: sin2_pmns.value / sin_ckm.value,
            expected: num_pmns as f64 / num_ckm as f64,
            explanation: format!(
                "sin²(θ₁₃)_PMNS / sin(θ₁₃)_CKM = ({num_pmns}/{c}³) / ({num_ckm}/{c}³) \
                 = {num_pmns}/{num_ckm}"
            ),
        }
    }

    /// CP phase structure: both phases share the numerator 10 = 13 − p₂.
    ///
    /// CKM sin δ = +10/11 (denominator 13 − 2, positive for quarks);
    /// PMNS sin δ = −10/13 (denominator 13, negative for leptons).
    #[must_use]
    pub fn phase_structure(&self) -> String {
        let c = self.cluster;
        let num = c - self.p2;
        format!(
            "CP phase structure:\n\
             \x20 Common numerator: {num} = {c} - p₂ = {c} - {}\n\
             \x20 CKM:  sin(δ) = +{num}/{} = +({c}-p₂)/({c}-2)  →  δ = +{:.1}°\n\
             \x20 PMNS: sin(δ) = -{num}/{c} = -({c}-p₂)/{c}      →  δ = {:.1}°\n\
             \x20 Sign: positive for quarks, negative for leptons",
            self.p2,
            self.cluster_secondary(),
            self.delta_ckm_degrees(),
            self.delta_pmns_degrees(),
        )
    }
}

/// Result of the θ₁₃ cross-relation check.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossRelation {
    /// Computed ratio sin²(θ₁₃)_PMNS / sin(θ₁₃)_CKM.
    pub ratio: f64,
    /// Exact expected value from the integer numerators (6 for the
    /// canonical rule).
    pub expected: f64,
    /// Derivation string.
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerances::{ANGLE_QUOTED_DEG, CROSS_RELATION, EXACT_RATIONAL};

    fn model() -> GenerationConstants {
        GenerationConstants::new()
    }

    #[test]
    fn core_rationals_exact() {
        let m = model();
        let cases = [
            (m.sin_theta12_ckm(), 38.0 / 169.0),
            (m.sin_theta23_ckm(), 7.0 / 169.0),
            (m.sin_theta13_ckm(), 8.0 / 2197.0),
            (m.sin_delta_ckm(), 10.0 / 11.0),
            (m.sin2_theta12_pmns(), 4.0 / 13.0),
            (m.sin2_theta23_pmns(), 6.0 / 11.0),
            (m.sin2_theta13_pmns(), 48.0 / 2197.0),
            (m.sin_delta_pmns(), -10.0 / 13.0),
            (m.sin2_theta_weinberg(), 3.0 / 13.0),
        ];
        for (pred, exact) in cases {
            assert!(
                (pred.value - exact).abs() < EXACT_RATIONAL,
                "{}: got {}, want {exact}",
                pred.derivation,
                pred.value
            );
        }
    }

    #[test]
    fn derivation_strings_show_integer_construction() {
        let m = model();
        assert_eq!(
            m.sin_theta12_ckm().derivation,
            "(p₂×13 - p₁)/13² = (3×13 - 1)/169 = 38/169"
        );
        assert_eq!(
            m.sin_theta23_ckm().derivation,
            "[13 - (p₃-p₂)]/13² = [13 - (9-3)]/169 = 7/169"
        );
        assert_eq!(
            m.sin_theta13_ckm().derivation,
            "(p₃ - p₁)/13³ = (9 - 1)/2197 = 8/2197"
        );
        assert_eq!(
            m.sin_delta_ckm().derivation,
            "(13 - p₂)/(13 - 2) = (13 - 3)/11 = 10/11"
        );
        assert_eq!(
            m.sin2_theta12_pmns().derivation,
            "(p₁ + p₂)/13 = (1 + 3)/13 = 4/13"
        );
        assert_eq!(
            m.sin2_theta23_pmns().derivation,
            "(p₃ - p₂)/(13 - 2) = (9 - 3)/11 = 6/11"
        );
        assert_eq!(
            m.sin2_theta13_pmns().derivation,
            "(13-p₃)(13-p₁)/13³ = (13-9)(13-1)/2197 = 48/2197"
        );
        assert_eq!(
            m.sin_delta_pmns().derivation,
            "-(13 - p₂)/13 = -(13 - 3)/13 = -10/13"
        );
        assert_eq!(m.sin2_theta_weinberg().derivation, "p₂/13 = 3/13 = 3/13");
    }

    #[test]
    fn delta_ckm_is_principal_arcsine() {
        let m = model();
        let deg = m.delta_ckm_degrees();
        // arcsin(10/11) ≈ 65.38°, close to the PDG fit value 65.4°
        assert!((deg - 65.38).abs() < ANGLE_QUOTED_DEG, "got {deg}");
    }

    #[test]
    fn delta_pmns_takes_third_quadrant_branch() {
        let m = model();
        let deg = m.delta_pmns_degrees();
        let principal = (10.0_f64 / 13.0).asin().to_degrees();
        assert!(
            (deg - (-180.0 + principal)).abs() < crate::tolerances::ANGLE_RECOMPUTED_DEG,
            "branch selection must be −180° + principal, got {deg}"
        );
        // ≈ −129.72°, NOT the bare arcsine ≈ −50.28°
        assert!((deg + 129.72).abs() < ANGLE_QUOTED_DEG, "got {deg}");
        assert!((deg + 50.28).abs() > 1.0, "must not be the principal branch");
    }

    #[test]
    fn cross_relation_is_six() {
        let rel = model().theta13_cross_relation();
        assert!(
            (rel.ratio - rel.expected).abs() < CROSS_RELATION,
            "ratio {} vs {}",
            rel.ratio,
            rel.expected
        );
    }

    #[test]
    fn cross_relation_holds_for_other_constants() {
        // Same formula shape: ratio = (c−p₃)(c−p₁)/(p₃−p₁) for any valid rule.
        let c = GenerationConstants::from_rule(2, 7).unwrap();
        let rel = c.theta13_cross_relation();
        let expected = f64::from((7 - 4) * (7 - 1)) / f64::from(4 - 1);
        assert!((rel.ratio - expected).abs() < CROSS_RELATION);
    }

    #[test]
    fn determinism_bitwise() {
        let m = model();
        let run = || -> Vec<u64> {
            vec![
                m.sin_theta12_ckm().value.to_bits(),
                m.sin_theta23_ckm().value.to_bits(),
                m.sin_theta13_ckm().value.to_bits(),
                m.sin_delta_ckm().value.to_bits(),
                m.sin2_theta12_pmns().value.to_bits(),
                m.sin2_theta23_pmns().value.to_bits(),
                m.sin2_theta13_pmns().value.to_bits(),
                m.sin_delta_pmns().value.to_bits(),
                m.sin2_theta_weinberg().value.to_bits(),
                m.delta_ckm_degrees().to_bits(),
                m.delta_pmns_degrees().to_bits(),
            ]
        };
        assert_eq!(run(), run(), "predictions must be bit-identical on rerun");
    }

    #[test]
    fn derivations_identical_on_rerun() {
        let m = model();
        assert_eq!(m.sin_theta12_ckm(), m.sin_theta12_ckm());
        assert_eq!(m.sin_delta_pmns(), m.sin_delta_pmns());
    }

    #[test]
    fn phase_structure_mentions_shared_numerator() {
        let s = model().phase_structure();
        assert!(s.contains("10"));
        assert!(s.contains("+10/11"));
        assert!(s.contains("-10/13"));
    }

    #[test]
    fn pmns_sin_delta_is_negative() {
        assert!(model().sin_delta_pmns().value < 0.0);
    }
}
