// SPDX-License-Identifier: AGPL-3.0-only

//! Comparator: pairs each prediction with its PDG reference value and
//! computes deviation statistics.
//!
//! Invariants:
//!   - `deviation_percent = |predicted − observed| / |observed| × 100`
//!   - `sigma = |predicted − observed| / uncertainty`, present only when the
//!     reference carries a nonzero uncertainty (never a division by zero)
//!
//! CP-phase rows are compared in degrees; the percent deviation there is
//! taken on the signed degree values without sign normalization, matching
//! the published analysis.

use crate::model::GenerationConstants;
use crate::model::Prediction;
use crate::pdg::{Pdg2024, ReferenceValue};
use crate::tolerances::NEAR_ZERO_OBSERVED;
use serde::Serialize;

/// One prediction/observation comparison. Purely derived, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    /// Display name, e.g. `sin(θ₁₂)_CKM`.
    pub parameter: String,
    /// Derivation string from the model.
    pub formula: String,
    /// Predicted value (sine or sin² for angle rows).
    pub predicted: f64,
    /// Observed central value; absent on CP-phase rows (compared in degrees).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<f64>,
    /// Observed 1σ uncertainty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obs_error: Option<f64>,
    /// Predicted phase in degrees (CP-phase rows only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_deg: Option<f64>,
    /// Observed phase in degrees (CP-phase rows only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_deg: Option<f64>,
    /// Uncertainty on the observed phase in degrees (CP-phase rows only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obs_error_deg: Option<f64>,
    /// |predicted − observed| / |observed| × 100.
    pub deviation_percent: f64,
    /// |predicted − observed| / uncertainty; null when no usable uncertainty.
    pub sigma: Option<f64>,
}

fn deviation_percent(predicted: f64, observed: f64) -> f64 {
    if observed.abs() < NEAR_ZERO_OBSERVED {
        return 0.0;
    }
    (predicted - observed).abs() / observed.abs() * 100.0
}

/// Compare a dimensionless prediction against a reference value.
#[must_use]
pub fn compare_value(
    parameter: &str,
    prediction: &Prediction,
    reference: &ReferenceValue,
) -> ComparisonRow {
    let predicted = prediction.value;
    let observed = reference.central;
    let sigma = reference
        .usable_uncertainty()
        .map(|u| (predicted - observed).abs() / u);
    ComparisonRow {
        parameter: parameter.to_string(),
        formula: prediction.derivation.clone(),
        predicted,
        observed: Some(observed),
        obs_error: reference.uncertainty,
        predicted_deg: None,
        observed_deg: None,
        obs_error_deg: None,
        deviation_percent: deviation_percent(predicted, observed),
        sigma,
    }
}

/// Compare a CP phase: the sine prediction carries the formula, the
/// deviation is computed on the angle in degrees.
#[must_use]
pub fn compare_phase(
    parameter: &str,
    sine: &Prediction,
    predicted_deg: f64,
    reference_deg: &ReferenceValue,
) -> ComparisonRow {
    ComparisonRow {
        parameter: parameter.to_string(),
        formula: sine.derivation.clone(),
        predicted: sine.value,
        observed: None,
        obs_error: None,
        predicted_deg: Some(predicted_deg),
        observed_deg: Some(reference_deg.central),
        obs_error_deg: reference_deg.uncertainty,
        deviation_percent: deviation_percent(predicted_deg, reference_deg.central),
        sigma: None,
    }
}

/// The nine core comparison rows, keyed as in the JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSet {
    #[serde(rename = "CKM_theta12")]
    pub ckm_theta12: ComparisonRow,
    #[serde(rename = "CKM_theta23")]
    pub ckm_theta23: ComparisonRow,
    #[serde(rename = "CKM_theta13")]
    pub ckm_theta13: ComparisonRow,
    #[serde(rename = "CKM_delta")]
    pub ckm_delta: ComparisonRow,
    #[serde(rename = "PMNS_theta12")]
    pub pmns_theta12: ComparisonRow,
    #[serde(rename = "PMNS_theta23")]
    pub pmns_theta23: ComparisonRow,
    #[serde(rename = "PMNS_theta13")]
    pub pmns_theta13: ComparisonRow,
    #[serde(rename = "PMNS_delta")]
    pub pmns_delta: ComparisonRow,
    #[serde(rename = "Weinberg")]
    pub weinberg: ComparisonRow,
}

impl ComparisonSet {
    /// Evaluate every core prediction against the reference snapshot.
    #[must_use]
    pub fn evaluate(model: &GenerationConstants, pdg: &Pdg2024) -> Self {
        Self {
            ckm_theta12: compare_value("sin(θ₁₂)_CKM", &model.sin_theta12_ckm(), &pdg.v_us),
            ckm_theta23: compare_value("sin(θ₂₃)_CKM", &model.sin_theta23_ckm(), &pdg.v_cb),
            ckm_theta13: compare_value("sin(θ₁₃)_CKM", &model.sin_theta13_ckm(), &pdg.v_ub),
            ckm_delta: compare_phase(
                "sin(δ)_CKM",
                &model.sin_delta_ckm(),
                model.delta_ckm_degrees(),
                &pdg.delta_ckm_deg,
            ),
            pmns_theta12: compare_value(
                "sin²(θ₁₂)_PMNS",
                &model.sin2_theta12_pmns(),
                &pdg.sin2_theta12_pmns,
            ),
            pmns_theta23: compare_value(
                "sin²(θ₂₃)_PMNS",
                &model.sin2_theta23_pmns(),
                &pdg.sin2_theta23_pmns,
            ),
            pmns_theta13: compare_value(
                "sin²(θ₁₃)_PMNS",
                &model.sin2_theta13_pmns(),
                &pdg.sin2_theta13_pmns,
            ),
            pmns_delta: compare_phase(
                "sin(δ)_PMNS",
                &model.sin_delta_pmns(),
                model.delta_pmns_degrees(),
                &pdg.delta_pmns_deg,
            ),
            weinberg: compare_value(
                "sin²(θ_W)",
                &model.sin2_theta_weinberg(),
                &pdg.sin2_theta_weinberg,
            ),
        }
    }

    /// Rows in export order, with their JSON keys.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, &ComparisonRow); 9] {
        [
            ("CKM_theta12", &self.ckm_theta12),
            ("CKM_theta23", &self.ckm_theta23),
            ("CKM_theta13", &self.ckm_theta13),
            ("CKM_delta", &self.ckm_delta),
            ("PMNS_theta12", &self.pmns_theta12),
            ("PMNS_theta23", &self.pmns_theta23),
            ("PMNS_theta13", &self.pmns_theta13),
            ("PMNS_delta", &self.pmns_delta),
            ("Weinberg", &self.weinberg),
        ]
    }
}

/// Extended comparison rows (console report only, not exported).
#[must_use]
pub fn evaluate_extended(model: &GenerationConstants, pdg: &Pdg2024) -> Vec<ComparisonRow> {
    let no_uncertainty = |central: f64, source: &'static str| ReferenceValue {
        central,
        uncertainty: None,
        unit: "",
        source,
    };
    vec![
        compare_value("α_s", &model.alpha_strong(), &pdg.alpha_s),
        compare_value(
            "1/α_EM",
            &model.alpha_em_inverse(),
            &pdg.alpha_em_inverse,
        ),
        compare_value(
            "m_τ/m_μ",
            &model.lepton_mass_ratio_tau_muon(),
            &no_uncertainty(pdg.tau_muon_ratio(), "PDG 2024 lepton masses"),
        ),
        compare_value(
            "m_μ/m_e",
            &model.lepton_mass_ratio_muon_electron(),
            &no_uncertainty(pdg.muon_electron_ratio(), "PDG 2024 lepton masses"),
        ),
        compare_value(
            "Δm²₃₂/Δm²₂₁",
            &model.neutrino_mass_ratio(),
            &no_uncertainty(pdg.neutrino_splitting_ratio(), "PDG 2024 oscillation fits"),
        ),
        compare_value(
            "m_H/v",
            &model.higgs_vev_ratio(),
            &no_uncertainty(pdg.higgs_vev_ratio(), "PDG 2024 Higgs sector"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdg::PDG_2024;
    use crate::tolerances::{DEVIATION_QUOTED_PCT, SIGMA_QUOTED};

    fn model() -> GenerationConstants {
        GenerationConstants::new()
    }

    #[test]
    fn sigma_known_example() {
        // predicted 4/13 ≈ 0.30769 vs observed 0.307 ± 0.013 → σ ≈ 0.053
        let row = compare_value(
            "sin²(θ₁₂)_PMNS",
            &model().sin2_theta12_pmns(),
            &PDG_2024.sin2_theta12_pmns,
        );
        let sigma = row.sigma.expect("uncertainty is present");
        assert!((sigma - 0.053).abs() < SIGMA_QUOTED, "got {sigma}");
    }

    #[test]
    fn deviation_known_example() {
        // 38/169 ≈ 0.224852 vs 0.2243 → deviation ≈ 0.246 %
        let row = compare_value("sin(θ₁₂)_CKM", &model().sin_theta12_ckm(), &PDG_2024.v_us);
        assert!(
            (row.deviation_percent - 0.246).abs() < DEVIATION_QUOTED_PCT,
            "got {}",
            row.deviation_percent
        );
    }

    #[test]
    fn absent_uncertainty_gives_no_sigma() {
        let reference = ReferenceValue {
            central: 137.036,
            uncertainty: None,
            unit: "",
            source: "test",
        };
        let row = compare_value("1/α_EM", &model().alpha_em_inverse(), &reference);
        assert!(row.sigma.is_none());
    }

    #[test]
    fn zero_uncertainty_gives_no_sigma() {
        let reference = ReferenceValue {
            central: 0.23,
            uncertainty: Some(0.0),
            unit: "",
            source: "test",
        };
        let row = compare_value("sin²(θ_W)", &model().sin2_theta_weinberg(), &reference);
        assert!(row.sigma.is_none(), "zero uncertainty must not divide");
    }

    #[test]
    fn deviation_positive_for_signed_values() {
        // Both predicted and observed PMNS δ are negative; the deviation
        // must still come out positive.
        let row = compare_phase(
            "sin(δ)_PMNS",
            &model().sin_delta_pmns(),
            model().delta_pmns_degrees(),
            &PDG_2024.delta_pmns_deg,
        );
        assert!(row.deviation_percent > 0.0);
        assert!(row.deviation_percent < 1.0, "−129.72° vs −130° is ≈ 0.2 %");
    }

    #[test]
    fn phase_rows_carry_degrees_not_observed_sine() {
        let row = compare_phase(
            "sin(δ)_CKM",
            &model().sin_delta_ckm(),
            model().delta_ckm_degrees(),
            &PDG_2024.delta_ckm_deg,
        );
        assert!(row.observed.is_none());
        assert!(row.predicted_deg.is_some());
        assert!((row.observed_deg.unwrap() - 65.4).abs() < 1e-12);
        assert!(row.sigma.is_none(), "phase rows report no sigma");
    }

    #[test]
    fn near_zero_observed_does_not_divide() {
        let reference = ReferenceValue {
            central: 0.0,
            uncertainty: None,
            unit: "",
            source: "test",
        };
        let row = compare_value("degenerate", &model().sin2_theta_weinberg(), &reference);
        assert!(row.deviation_percent.is_finite());
    }

    #[test]
    fn evaluate_produces_all_nine_rows() {
        let set = ComparisonSet::evaluate(&model(), &PDG_2024);
        let rows = set.rows();
        assert_eq!(rows.len(), 9);
        let keys: Vec<&str> = rows.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys[0], "CKM_theta12");
        assert_eq!(keys[8], "Weinberg");
        for (key, row) in rows {
            assert!(!row.formula.is_empty(), "{key} formula");
            assert!(row.deviation_percent >= 0.0, "{key} deviation");
        }
    }

    #[test]
    fn evaluate_deterministic() {
        let a = ComparisonSet::evaluate(&model(), &PDG_2024);
        let b = ComparisonSet::evaluate(&model(), &PDG_2024);
        for ((ka, ra), (kb, rb)) in a.rows().iter().zip(b.rows().iter()) {
            assert_eq!(ka, kb);
            assert_eq!(ra.predicted.to_bits(), rb.predicted.to_bits(), "{ka}");
            assert_eq!(
                ra.deviation_percent.to_bits(),
                rb.deviation_percent.to_bits(),
                "{ka}"
            );
        }
    }

    #[test]
    fn weinberg_tension_is_large() {
        // 3/13 vs 0.23121 ± 0.00004: known ~10σ tension, preserved as data.
        let set = ComparisonSet::evaluate(&model(), &PDG_2024);
        let sigma = set.weinberg.sigma.expect("uncertainty present");
        assert!(sigma > 5.0, "expected strong tension, got {sigma}σ");
    }

    #[test]
    fn extended_rows_cover_all_six() {
        let rows = evaluate_extended(&model(), &PDG_2024);
        assert_eq!(rows.len(), 6);
        // mass ratios carry no uncertainty → no sigma
        assert!(rows[2].sigma.is_none());
        assert!(rows[3].sigma.is_none());
        // α_s does
        assert!(rows[0].sigma.is_some());
    }
}
