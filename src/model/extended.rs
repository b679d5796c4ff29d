// SPDX-License-Identifier: AGPL-3.0-only

//! Extended predictions beyond flavor mixing: coupling constants, lepton
//! mass ratios, the neutrino mass-splitting ratio, and the Higgs/VEV ratio.
//!
//! These use the same four constants with different fixed-integer
//! combinations. Same purity and determinism contract as the core set;
//! they are exploratory and reported in their own table.

use super::{GenerationConstants, Prediction};

impl GenerationConstants {
    /// Strong coupling: α_s = 1/p₃ = 1/9.
    #[must_use]
    pub fn alpha_strong(&self) -> Prediction {
        let derivation = format!("1/p₃ = 1/{}", self.p3);
        Prediction::from_ratio(1, self.p3, derivation)
    }

    /// Inverse electromagnetic coupling: 1/α_EM = 11×13 − (p₃ − p₂) = 137.
    #[must_use]
    pub fn alpha_em_inverse(&self) -> Prediction {
        let c = self.cluster;
        let sec = self.cluster_secondary();
        let product = sec * c;
        let value = product - (self.p3 - self.p2);
        let derivation = format!(
            "{sec}×{c} - (p₃-p₂) = {product} - ({}-{}) = {product} - {} = {value}",
            self.p3,
            self.p2,
            self.p3 - self.p2
        );
        Prediction::from_ratio(value, 1, derivation)
    }

    /// Tau to muon mass ratio: m_τ/m_μ = 13 + p₂ + p₁ = 17.
    #[must_use]
    pub fn lepton_mass_ratio_tau_muon(&self) -> Prediction {
        let c = self.cluster;
        let value = c + self.p2 + self.p1;
        let derivation = format!(
            "{c} + p₂ + p₁ = {c} + {} + {} = {value}",
            self.p2, self.p1
        );
        Prediction::from_ratio(value, 1, derivation)
    }

    /// Muon to electron mass ratio: m_μ/m_e = 13×(13 + p₂) − p₁ = 207.
    #[must_use]
    pub fn lepton_mass_ratio_muon_electron(&self) -> Prediction {
        let c = self.cluster;
        let inner = c + self.p2;
        let value = c * inner - self.p1;
        let derivation = format!(
            "{c}×({c}+p₂) - p₁ = {c}×({c}+{}) - {} = {c}×{inner} - {} = {value}",
            self.p2, self.p1, self.p1
        );
        Prediction::from_ratio(value, 1, derivation)
    }

    /// Ratio of neutrino mass-squared splittings:
    /// Δm²₃₂/Δm²₂₁ = (p₃ − p₁)(p₂ + p₁) = 32.
    #[must_use]
    pub fn neutrino_mass_ratio(&self) -> Prediction {
        let a = self.p3 - self.p1;
        let b = self.p2 + self.p1;
        let value = a * b;
        let derivation = format!(
            "(p₃-p₁)(p₂+p₁) = ({}-{})({}+{}) = {a}×{b} = {value}",
            self.p3, self.p1, self.p2, self.p1
        );
        Prediction::from_ratio(value, 1, derivation)
    }

    /// Higgs mass to VEV ratio: m_H/v = 1/2 + 1/(p₃×13) = 1/2 + 1/117.
    #[must_use]
    pub fn higgs_vev_ratio(&self) -> Prediction {
        let c = self.cluster;
        let denom = self.p3 * c;
        let derivation = format!("1/2 + 1/(p₃×{c}) = 1/2 + 1/({}×{c}) = 1/2 + 1/{denom}", self.p3);
        Prediction {
            value: 0.5 + 1.0 / denom as f64,
            derivation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerances::EXACT_RATIONAL;

    fn model() -> GenerationConstants {
        GenerationConstants::new()
    }

    #[test]
    fn alpha_strong_is_ninth() {
        let p = model().alpha_strong();
        assert!((p.value - 1.0 / 9.0).abs() < EXACT_RATIONAL);
        assert_eq!(p.derivation, "1/p₃ = 1/9");
    }

    #[test]
    #[allow(clippy::float_cmp)] // small integers are exact in f64
    fn alpha_em_inverse_is_137() {
        let p = model().alpha_em_inverse();
        assert_eq!(p.value, 137.0);
        assert_eq!(p.derivation, "11×13 - (p₃-p₂) = 143 - (9-3) = 143 - 6 = 137");
    }

    #[test]
    #[allow(clippy::float_cmp)] // small integers are exact in f64
    fn tau_muon_ratio_is_17_exactly() {
        let p = model().lepton_mass_ratio_tau_muon();
        assert_eq!(p.value, 17.0);
        assert_eq!(p.derivation, "13 + p₂ + p₁ = 13 + 3 + 1 = 17");
    }

    #[test]
    #[allow(clippy::float_cmp)] // small integers are exact in f64
    fn muon_electron_ratio_is_207() {
        let p = model().lepton_mass_ratio_muon_electron();
        assert_eq!(p.value, 207.0);
        assert_eq!(
            p.derivation,
            "13×(13+p₂) - p₁ = 13×(13+3) - 1 = 13×16 - 1 = 207"
        );
    }

    #[test]
    #[allow(clippy::float_cmp)] // small integers are exact in f64
    fn neutrino_splitting_ratio_is_32() {
        let p = model().neutrino_mass_ratio();
        assert_eq!(p.value, 32.0);
        assert_eq!(p.derivation, "(p₃-p₁)(p₂+p₁) = (9-1)(3+1) = 8×4 = 32");
    }

    #[test]
    fn higgs_vev_ratio_value() {
        let p = model().higgs_vev_ratio();
        assert!((p.value - (0.5 + 1.0 / 117.0)).abs() < EXACT_RATIONAL);
        assert_eq!(p.derivation, "1/2 + 1/(p₃×13) = 1/2 + 1/(9×13) = 1/2 + 1/117");
    }

    #[test]
    fn extended_determinism() {
        let m = model();
        let run = || -> Vec<u64> {
            vec![
                m.alpha_strong().value.to_bits(),
                m.alpha_em_inverse().value.to_bits(),
                m.lepton_mass_ratio_tau_muon().value.to_bits(),
                m.lepton_mass_ratio_muon_electron().value.to_bits(),
                m.neutrino_mass_ratio().value.to_bits(),
                m.higgs_vev_ratio().value.to_bits(),
            ]
        };
        assert_eq!(run(), run());
    }
}
