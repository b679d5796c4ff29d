// SPDX-License-Identifier: AGPL-3.0-only

//! Console report: formulas, grouped comparison tables, extended
//! predictions, and falsifiability criteria.
//!
//! Column widths are cosmetic, not a compatibility surface. The JSON
//! export in [`crate::export`] is the machine-readable output.

use crate::compare::{ComparisonRow, ComparisonSet};
use crate::falsifiability::Criterion;
use crate::model::GenerationConstants;
use crate::pdg::Pdg2024;

const RULE_HEAVY: &str =
    "════════════════════════════════════════════════════════════════════════════════";
const RULE_LIGHT: &str =
    "────────────────────────────────────────────────────────────────────────────────";

/// Banner with the rule the whole model rests on.
pub fn print_header(model: &GenerationConstants) {
    println!("\n{RULE_HEAVY}");
    println!("FLAVOR MIXING PARAMETERS FROM GENERATION HIERARCHY");
    println!("Comparison with PDG 2024 experimental values");
    println!("{RULE_HEAVY}");
    println!("\nGeneration hierarchy rule: p_i = 3^(i-1) for generation i = 1, 2, 3");
    println!(
        "  p₁ = {}, p₂ = {}, p₃ = {}, cluster = {}",
        model.p(1).unwrap_or(0),
        model.p(2).unwrap_or(0),
        model.p(3).unwrap_or(0),
        model.cluster()
    );
}

/// Every derivation string, plus the cross-relation and phase structure.
pub fn print_formulas(model: &GenerationConstants) {
    println!("\n{RULE_LIGHT}");
    println!("CKM matrix formulas");
    println!("{RULE_LIGHT}");
    println!("  sin(θ₁₂) = {}", model.sin_theta12_ckm().derivation);
    println!("  sin(θ₂₃) = {}", model.sin_theta23_ckm().derivation);
    println!("  sin(θ₁₃) = {}", model.sin_theta13_ckm().derivation);
    println!("  sin(δ)   = {}", model.sin_delta_ckm().derivation);

    println!("\n{RULE_LIGHT}");
    println!("PMNS matrix formulas");
    println!("{RULE_LIGHT}");
    println!("  sin²(θ₁₂) = {}", model.sin2_theta12_pmns().derivation);
    println!("  sin²(θ₂₃) = {}", model.sin2_theta23_pmns().derivation);
    println!("  sin²(θ₁₃) = {}", model.sin2_theta13_pmns().derivation);
    println!("  sin(δ)    = {}", model.sin_delta_pmns().derivation);

    println!("\n{RULE_LIGHT}");
    println!("Weinberg angle");
    println!("{RULE_LIGHT}");
    println!("  sin²(θ_W) = {}", model.sin2_theta_weinberg().derivation);

    let rel = model.theta13_cross_relation();
    println!("\n{RULE_LIGHT}");
    println!("Cross-relation");
    println!("{RULE_LIGHT}");
    println!("  {}", rel.explanation);
    println!(
        "  Calculated ratio: {:.1} (expected: {:.0})",
        rel.ratio, rel.expected
    );

    println!("\n{}", model.phase_structure());
}

fn print_value_row(row: &ComparisonRow) {
    let observed = row.observed.unwrap_or(f64::NAN);
    let sigma = row
        .sigma
        .map_or_else(|| "     —".to_string(), |s| format!("{s:6.2}σ"));
    println!(
        "  {:<20} {:>12.6} {:>12.6} {:>9.2}% {sigma}",
        row.parameter, row.predicted, observed, row.deviation_percent
    );
}

fn print_phase_row(label: &str, row: &ComparisonRow) {
    println!(
        "  {:<20} {:>11.2}° {:>11.1}° {:>9.2}%      —",
        label,
        row.predicted_deg.unwrap_or(f64::NAN),
        row.observed_deg.unwrap_or(f64::NAN),
        row.deviation_percent
    );
}

/// Grouped comparison tables: CKM, PMNS, Weinberg.
pub fn print_comparison(set: &ComparisonSet) {
    let header = format!(
        "  {:<20} {:>12} {:>12} {:>10} {:>6}",
        "Parameter", "Predicted", "Observed", "Error %", "Pull"
    );

    println!("\n{RULE_LIGHT}");
    println!("CKM matrix (quarks)");
    println!("{RULE_LIGHT}");
    println!("{header}");
    print_value_row(&set.ckm_theta12);
    print_value_row(&set.ckm_theta23);
    print_value_row(&set.ckm_theta13);
    print_phase_row("δ_CKM (degrees)", &set.ckm_delta);

    println!("\n{RULE_LIGHT}");
    println!("PMNS matrix (leptons)");
    println!("{RULE_LIGHT}");
    println!("{header}");
    print_value_row(&set.pmns_theta12);
    print_value_row(&set.pmns_theta23);
    print_value_row(&set.pmns_theta13);
    print_phase_row("δ_PMNS (degrees)", &set.pmns_delta);

    println!("\n{RULE_LIGHT}");
    println!("Weinberg angle");
    println!("{RULE_LIGHT}");
    println!("{header}");
    print_value_row(&set.weinberg);
}

/// Extended predictions table (exploratory).
pub fn print_extended(rows: &[ComparisonRow]) {
    println!("\n{RULE_HEAVY}");
    println!("EXTENDED PREDICTIONS (exploratory)");
    println!("{RULE_HEAVY}");
    for row in rows {
        let observed = row.observed.unwrap_or(f64::NAN);
        println!(
            "  {:<12} = {}",
            row.parameter, row.formula
        );
        println!(
            "  {:<12}   predicted {:.6}, observed {observed:.6}, error {:.3}%",
            "", row.predicted, row.deviation_percent
        );
    }
}

/// Falsifiability criteria with current pulls.
pub fn print_falsifiability(criteria: &[Criterion]) {
    println!("\n{RULE_HEAVY}");
    println!("FALSIFIABILITY CRITERIA");
    println!("{RULE_HEAVY}");
    println!(
        "  {:<22} {:>10} {:>10} {:>8} {:>8} {:>18}  Window",
        "Parameter", "Predicted", "Current", "±σ", "Pull", "Experiment (±σ')"
    );
    for c in criteria {
        println!(
            "  {:<22} {:>10.4} {:>10.4} {:>8.4} {:>7.2}σ {:>12} (±{:.4})  [{:.4}, {:.4}]",
            c.parameter,
            c.predicted,
            c.current,
            c.current_err,
            c.current_pull(),
            c.experiment,
            c.future_precision,
            c.window.0,
            c.window.1,
        );
    }
    println!(
        "\n  A 3σ measurement outside a window falsifies the hypothesis. \
         JUNO (2025+) and DUNE (2030+) test the PMNS rows; sin²(θ_W) is \
         already in ~10σ tension and is interpreted as the bare value at \
         the unification scale."
    );
}

/// Sanity-check Pdg2024 is threaded through (used by the report binary).
pub fn print_reference_note(pdg: &Pdg2024) {
    println!(
        "\n  Reference snapshot: {} (and companion reviews)",
        pdg.v_us.source
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::evaluate_extended;
    use crate::falsifiability;
    use crate::pdg::PDG_2024;

    // Stdout is not captured here; these verify the printers accept real
    // data without panicking on any row shape.

    #[test]
    fn full_report_prints_without_panic() {
        let model = GenerationConstants::new();
        let set = ComparisonSet::evaluate(&model, &PDG_2024);
        print_header(&model);
        print_formulas(&model);
        print_comparison(&set);
        print_extended(&evaluate_extended(&model, &PDG_2024));
        print_falsifiability(&falsifiability::criteria(&model, &PDG_2024));
        print_reference_note(&PDG_2024);
    }
}
