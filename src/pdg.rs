// SPDX-License-Identifier: AGPL-3.0-only

//! PDG 2024 reference values with provenance.
//!
//! Every observed value the comparator uses is a hardcoded constant frozen
//! from a versioned snapshot of published data. Values are NOT loaded at
//! runtime — this keeps the comparison deterministic and independent of
//! filesystem state. To update, take the next PDG edition and revise the
//! constants here.
//!
//! ## Data sources
//!
//! | Dataset / Publication | DOI | Notes |
//! |----------------------|-----|-------|
//! | PDG 2024 Review of Particle Physics | [10.1103/PhysRevD.110.030001](https://doi.org/10.1103/PhysRevD.110.030001) | CKM and PMNS reviews, electroweak fits |
//! | CKM quark-mixing matrix review | ibid. | \|V_us\|, \|V_cb\|, \|V_ub\|, δ from Jarlskog fit |
//! | Neutrino mixing review | ibid. | sin² values, normal ordering |

/// One published reference value: central value and, where the snapshot
/// quotes one, a symmetric uncertainty.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceValue {
    /// Central value.
    pub central: f64,
    /// Symmetric 1σ uncertainty; `None` where PDG quotes none.
    pub uncertainty: Option<f64>,
    /// Unit, empty for dimensionless quantities.
    pub unit: &'static str,
    /// Publication source.
    pub source: &'static str,
}

impl ReferenceValue {
    /// Uncertainty usable for a sigma count: present and nonzero.
    #[must_use]
    pub fn usable_uncertainty(&self) -> Option<f64> {
        self.uncertainty.filter(|&u| u > 0.0)
    }
}

/// PDG 2024 experimental central values for every compared parameter.
#[derive(Debug, Clone, Copy)]
pub struct Pdg2024 {
    /// |V_us| = sin θ₁₂ (Cabibbo).
    pub v_us: ReferenceValue,
    /// |V_cb| ≈ sin θ₂₃.
    pub v_cb: ReferenceValue,
    /// |V_ub| = sin θ₁₃.
    pub v_ub: ReferenceValue,
    /// CKM CP phase δ in degrees (Jarlskog invariant fit).
    pub delta_ckm_deg: ReferenceValue,
    /// PMNS sin²θ₁₂ (solar).
    pub sin2_theta12_pmns: ReferenceValue,
    /// PMNS sin²θ₂₃ (atmospheric, normal ordering).
    pub sin2_theta23_pmns: ReferenceValue,
    /// PMNS sin²θ₁₃ (reactor).
    pub sin2_theta13_pmns: ReferenceValue,
    /// PMNS CP phase δ in degrees (best fit, large uncertainty).
    pub delta_pmns_deg: ReferenceValue,
    /// sin²θ_W at the M_Z scale (MS-bar).
    pub sin2_theta_weinberg: ReferenceValue,
    /// Strong coupling α_s at M_Z.
    pub alpha_s: ReferenceValue,
    /// Inverse electromagnetic coupling 1/α_EM.
    pub alpha_em_inverse: ReferenceValue,
    /// Tau mass, MeV.
    pub m_tau_mev: f64,
    /// Muon mass, MeV.
    pub m_muon_mev: f64,
    /// Electron mass, MeV.
    pub m_electron_mev: f64,
    /// Higgs mass, GeV.
    pub m_higgs_gev: f64,
    /// Higgs vacuum expectation value, GeV.
    pub v_higgs_gev: f64,
    /// Solar mass-squared splitting Δm²₂₁, eV².
    pub delta_m2_21_ev2: f64,
    /// Atmospheric mass-squared splitting Δm²₃₂ (normal ordering), eV².
    pub delta_m2_32_ev2: f64,
}

impl Pdg2024 {
    /// Observed m_τ/m_μ from the mass constants.
    #[must_use]
    pub fn tau_muon_ratio(&self) -> f64 {
        self.m_tau_mev / self.m_muon_mev
    }

    /// Observed m_μ/m_e from the mass constants.
    #[must_use]
    pub fn muon_electron_ratio(&self) -> f64 {
        self.m_muon_mev / self.m_electron_mev
    }

    /// Observed Δm²₃₂/Δm²₂₁.
    #[must_use]
    pub fn neutrino_splitting_ratio(&self) -> f64 {
        self.delta_m2_32_ev2 / self.delta_m2_21_ev2
    }

    /// Observed m_H/v.
    #[must_use]
    pub fn higgs_vev_ratio(&self) -> f64 {
        self.m_higgs_gev / self.v_higgs_gev
    }
}

const PDG: &str = "PDG 2024";

/// The PDG 2024 snapshot used throughout the crate.
pub const PDG_2024: Pdg2024 = Pdg2024 {
    v_us: ReferenceValue {
        central: 0.2243,
        uncertainty: Some(0.0005),
        unit: "",
        source: PDG,
    },
    v_cb: ReferenceValue {
        central: 0.0422,
        uncertainty: Some(0.0008),
        unit: "",
        source: PDG,
    },
    v_ub: ReferenceValue {
        central: 0.00369,
        uncertainty: Some(0.00011),
        unit: "",
        source: PDG,
    },
    delta_ckm_deg: ReferenceValue {
        central: 65.4,
        uncertainty: Some(3.0),
        unit: "deg",
        source: "PDG 2024, Jarlskog invariant fit",
    },
    sin2_theta12_pmns: ReferenceValue {
        central: 0.307,
        uncertainty: Some(0.013),
        unit: "",
        source: PDG,
    },
    sin2_theta23_pmns: ReferenceValue {
        central: 0.546,
        uncertainty: Some(0.021),
        unit: "",
        source: "PDG 2024, normal ordering",
    },
    sin2_theta13_pmns: ReferenceValue {
        central: 0.0220,
        uncertainty: Some(0.0007),
        unit: "",
        source: PDG,
    },
    delta_pmns_deg: ReferenceValue {
        central: -130.0,
        uncertainty: Some(40.0),
        unit: "deg",
        source: "PDG 2024, global best fit",
    },
    sin2_theta_weinberg: ReferenceValue {
        central: 0.23121,
        uncertainty: Some(0.00004),
        unit: "",
        source: "PDG 2024, MS-bar at M_Z",
    },
    alpha_s: ReferenceValue {
        central: 0.1179,
        uncertainty: Some(0.0009),
        unit: "",
        source: "PDG 2024, at M_Z",
    },
    alpha_em_inverse: ReferenceValue {
        central: 137.036,
        uncertainty: None,
        unit: "",
        source: PDG,
    },
    m_tau_mev: 1776.86,
    m_muon_mev: 105.6584,
    m_electron_mev: 0.51100,
    m_higgs_gev: 125.25,
    v_higgs_gev: 246.22,
    delta_m2_21_ev2: 7.53e-5,
    delta_m2_32_ev2: 2.453e-3,
};
