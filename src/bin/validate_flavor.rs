// SPDX-License-Identifier: AGPL-3.0-only

//! Flavor mixing validation — explicit checks against documented tolerances.
//!
//! # Phases
//!
//! 1. **Exact rationals**: all nine core predictions vs their stated ratios
//! 2. **Branch selection**: PMNS δ on the third-quadrant branch
//! 3. **Comparator**: known sigma and deviation examples, zero-uncertainty path
//! 4. **Cross-relation**: sin²(θ₁₃)_PMNS / sin(θ₁₃)_CKM = 6
//! 5. **Determinism**: bit-identical predictions on rerun
//!
//! Exit 0 when every check passes, 1 otherwise.

use flavor_mixing::compare::{compare_value, ComparisonSet};
use flavor_mixing::model::GenerationConstants;
use flavor_mixing::pdg::{ReferenceValue, PDG_2024};
use flavor_mixing::tolerances;
use flavor_mixing::validation::CheckHarness;

fn main() {
    let mut harness = CheckHarness::new("flavor mixing validation");
    let model = GenerationConstants::new();

    phase1_exact_rationals(&mut harness, &model);
    phase2_branch_selection(&mut harness, &model);
    phase3_comparator(&mut harness, &model);
    phase4_cross_relation(&mut harness, &model);
    phase5_determinism(&mut harness, &model);

    harness.finish();
}

/// Phase 1: every core formula reproduces its exact rational.
fn phase1_exact_rationals(harness: &mut CheckHarness, model: &GenerationConstants) {
    println!("\n── Phase 1: Exact rationals ───────────────────────────");
    let cases: [(&str, f64, f64); 9] = [
        ("CKM sin(θ₁₂) = 38/169", model.sin_theta12_ckm().value, 38.0 / 169.0),
        ("CKM sin(θ₂₃) = 7/169", model.sin_theta23_ckm().value, 7.0 / 169.0),
        ("CKM sin(θ₁₃) = 8/2197", model.sin_theta13_ckm().value, 8.0 / 2197.0),
        ("CKM sin(δ) = 10/11", model.sin_delta_ckm().value, 10.0 / 11.0),
        ("PMNS sin²(θ₁₂) = 4/13", model.sin2_theta12_pmns().value, 4.0 / 13.0),
        ("PMNS sin²(θ₂₃) = 6/11", model.sin2_theta23_pmns().value, 6.0 / 11.0),
        ("PMNS sin²(θ₁₃) = 48/2197", model.sin2_theta13_pmns().value, 48.0 / 2197.0),
        ("PMNS sin(δ) = -10/13", model.sin_delta_pmns().value, -10.0 / 13.0),
        ("Weinberg sin²(θ_W) = 3/13", model.sin2_theta_weinberg().value, 3.0 / 13.0),
    ];
    for (label, observed, expected) in cases {
        println!("  {label}: {observed:.10}");
        harness.check_abs(label, observed, expected, tolerances::EXACT_RATIONAL);
    }
}

/// Phase 2: CP-phase angle conversions.
///
/// The PMNS angle must land on the third-quadrant branch,
/// −180° + arcsin(10/13) ≈ −129.72°, never the principal −50.28°.
fn phase2_branch_selection(harness: &mut CheckHarness, model: &GenerationConstants) {
    println!("\n── Phase 2: CP-phase branch selection ─────────────────");

    let ckm_deg = model.delta_ckm_degrees();
    let pmns_deg = model.delta_pmns_degrees();
    println!("  δ_CKM = {ckm_deg:.4}°, δ_PMNS = {pmns_deg:.4}°");

    harness.check_abs(
        "δ_CKM: principal arcsin(10/11)",
        ckm_deg,
        (10.0_f64 / 11.0).asin().to_degrees(),
        tolerances::ANGLE_RECOMPUTED_DEG,
    );
    harness.check_abs(
        "δ_PMNS: −180° + arcsin(10/13)",
        pmns_deg,
        -180.0 + (10.0_f64 / 13.0).asin().to_degrees(),
        tolerances::ANGLE_RECOMPUTED_DEG,
    );
    harness.check_abs(
        "δ_PMNS ≈ −129.72° (quoted)",
        pmns_deg,
        -129.72,
        tolerances::ANGLE_QUOTED_DEG,
    );
    harness.check_bool(
        "δ_PMNS is not the principal branch",
        (pmns_deg - (-50.28)).abs() > 1.0,
    );
}

/// Phase 3: comparator statistics on known examples.
fn phase3_comparator(harness: &mut CheckHarness, model: &GenerationConstants) {
    println!("\n── Phase 3: Comparator ────────────────────────────────");

    let theta12 = compare_value(
        "sin²(θ₁₂)_PMNS",
        &model.sin2_theta12_pmns(),
        &PDG_2024.sin2_theta12_pmns,
    );
    let sigma = theta12.sigma.unwrap_or(f64::NAN);
    println!("  PMNS θ₁₂: deviation {:.4}%, pull {sigma:.4}σ", theta12.deviation_percent);
    harness.check_abs(
        "PMNS θ₁₂ sigma vs 0.307±0.013",
        sigma,
        0.053,
        tolerances::SIGMA_QUOTED,
    );

    let cabibbo = compare_value("sin(θ₁₂)_CKM", &model.sin_theta12_ckm(), &PDG_2024.v_us);
    println!("  CKM θ₁₂: deviation {:.4}%", cabibbo.deviation_percent);
    harness.check_abs(
        "CKM θ₁₂ deviation vs 0.2243",
        cabibbo.deviation_percent,
        0.246,
        tolerances::DEVIATION_QUOTED_PCT,
    );

    let no_uncertainty = ReferenceValue {
        central: 0.23121,
        uncertainty: None,
        unit: "",
        source: "check",
    };
    let row = compare_value("sin²(θ_W)", &model.sin2_theta_weinberg(), &no_uncertainty);
    harness.check_bool("absent uncertainty → sigma absent", row.sigma.is_none());

    let zero_uncertainty = ReferenceValue {
        uncertainty: Some(0.0),
        ..no_uncertainty
    };
    let row = compare_value("sin²(θ_W)", &model.sin2_theta_weinberg(), &zero_uncertainty);
    harness.check_bool("zero uncertainty → sigma absent", row.sigma.is_none());
}

/// Phase 4: θ₁₃ cross-relation.
fn phase4_cross_relation(harness: &mut CheckHarness, model: &GenerationConstants) {
    println!("\n── Phase 4: Cross-relation ────────────────────────────");
    let rel = model.theta13_cross_relation();
    println!("  {} → ratio {:.12}", rel.explanation, rel.ratio);
    harness.check_abs(
        "sin²(θ₁₃)_PMNS / sin(θ₁₃)_CKM = 6",
        rel.ratio,
        rel.expected,
        tolerances::CROSS_RELATION,
    );
}

/// Phase 5: determinism — rerunning the full comparison must be
/// bit-identical.
fn phase5_determinism(harness: &mut CheckHarness, model: &GenerationConstants) {
    println!("\n── Phase 5: Determinism ───────────────────────────────");
    let a = ComparisonSet::evaluate(model, &PDG_2024);
    let b = ComparisonSet::evaluate(model, &PDG_2024);
    let identical = a
        .rows()
        .iter()
        .zip(b.rows().iter())
        .all(|((_, ra), (_, rb))| {
            ra.predicted.to_bits() == rb.predicted.to_bits()
                && ra.deviation_percent.to_bits() == rb.deviation_percent.to_bits()
                && ra.formula == rb.formula
        });
    println!("  reran full comparison: identical = {identical}");
    harness.check_bool("comparison set bit-identical on rerun", identical);
}
