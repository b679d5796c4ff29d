// SPDX-License-Identifier: AGPL-3.0-only

//! Falsifiability criteria for the generation hierarchy hypothesis.
//!
//! The hypothesis makes specific predictions that upcoming experiments
//! (JUNO 2025+, DUNE 2030+) can test. Each criterion carries the window
//! outside which a 3σ measurement falsifies the hypothesis. Windows and
//! future precisions follow the published analysis; predicted values are
//! taken from the model rather than re-hardcoded.

use crate::model::GenerationConstants;
use crate::pdg::Pdg2024;

/// One testable criterion: prediction, current measurement, and the
/// measurement window outside which the hypothesis fails.
#[derive(Debug, Clone)]
pub struct Criterion {
    /// Parameter under test.
    pub parameter: &'static str,
    /// Model prediction.
    pub predicted: f64,
    /// Current experimental central value.
    pub current: f64,
    /// Current 1σ uncertainty.
    pub current_err: f64,
    /// Expected future 1σ precision.
    pub future_precision: f64,
    /// Experiment providing the future measurement.
    pub experiment: &'static str,
    /// Acceptance window `(lo, hi)`: a 3σ measurement outside it falsifies
    /// the hypothesis.
    pub window: (f64, f64),
}

impl Criterion {
    /// Whether a measured central value stays inside the acceptance window.
    #[must_use]
    pub fn accepts(&self, measured: f64) -> bool {
        measured >= self.window.0 && measured <= self.window.1
    }

    /// Current pull of the prediction against the present measurement.
    #[must_use]
    pub fn current_pull(&self) -> f64 {
        (self.predicted - self.current).abs() / self.current_err
    }
}

/// The critical tests, derived from the model and the PDG snapshot.
#[must_use]
pub fn criteria(model: &GenerationConstants, pdg: &Pdg2024) -> Vec<Criterion> {
    vec![
        Criterion {
            parameter: "sin²(θ₁₂)_PMNS",
            predicted: model.sin2_theta12_pmns().value,
            current: pdg.sin2_theta12_pmns.central,
            current_err: pdg.sin2_theta12_pmns.uncertainty.unwrap_or(0.0),
            future_precision: 0.003,
            experiment: "JUNO",
            window: (0.300, 0.315),
        },
        Criterion {
            parameter: "sin²(θ₂₃)_PMNS",
            predicted: model.sin2_theta23_pmns().value,
            current: pdg.sin2_theta23_pmns.central,
            current_err: pdg.sin2_theta23_pmns.uncertainty.unwrap_or(0.0),
            future_precision: 0.01,
            experiment: "DUNE",
            window: (0.515, 0.575),
        },
        Criterion {
            parameter: "δ_CP (PMNS, degrees)",
            predicted: model.delta_pmns_degrees(),
            current: pdg.delta_pmns_deg.central,
            current_err: pdg.delta_pmns_deg.uncertainty.unwrap_or(0.0),
            future_precision: 10.0,
            experiment: "DUNE",
            window: (-150.0, -110.0),
        },
        Criterion {
            parameter: "sin²(θ_W)",
            predicted: model.sin2_theta_weinberg().value,
            current: pdg.sin2_theta_weinberg.central,
            current_err: pdg.sin2_theta_weinberg.uncertainty.unwrap_or(0.0),
            future_precision: 0.00004,
            experiment: "Z-pole precision",
            // Already ~10σ from the current value; the window brackets the
            // prediction itself. Interpretation: 3/13 as the bare value at
            // the unification scale.
            window: (0.2300, 0.2315),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdg::PDG_2024;

    fn all() -> Vec<Criterion> {
        criteria(&GenerationConstants::new(), &PDG_2024)
    }

    #[test]
    fn four_criteria_with_valid_windows() {
        let cs = all();
        assert_eq!(cs.len(), 4);
        for c in &cs {
            assert!(c.window.0 < c.window.1, "{}", c.parameter);
            assert!(c.future_precision > 0.0, "{}", c.parameter);
            assert!(c.current_err > 0.0, "{}", c.parameter);
        }
    }

    #[test]
    fn predictions_sit_inside_their_windows() {
        for c in all() {
            assert!(
                c.accepts(c.predicted),
                "{}: prediction {} outside window {:?}",
                c.parameter,
                c.predicted,
                c.window
            );
        }
    }

    #[test]
    fn current_measurements_inside_pmns_windows() {
        let cs = all();
        for c in &cs[..3] {
            assert!(
                c.accepts(c.current),
                "{}: current value {} should be inside {:?}",
                c.parameter,
                c.current,
                c.window
            );
        }
    }

    #[test]
    fn window_rejects_outside_values() {
        let theta12 = &all()[0];
        assert!(!theta12.accepts(0.320));
        assert!(!theta12.accepts(0.295));
    }

    #[test]
    fn weinberg_pull_reflects_tension() {
        let weinberg = &all()[3];
        assert!(
            weinberg.current_pull() > 5.0,
            "Weinberg prediction is in known tension, pull = {}",
            weinberg.current_pull()
        );
    }

    #[test]
    fn pmns_pulls_are_small() {
        let cs = all();
        for c in &cs[..3] {
            assert!(
                c.current_pull() < 1.0,
                "{}: pull {} should be sub-1σ today",
                c.parameter,
                c.current_pull()
            );
        }
    }
}
