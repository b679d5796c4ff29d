// SPDX-License-Identifier: AGPL-3.0-only

//! Full report pipeline: formulas, comparison tables, extended predictions,
//! falsifiability criteria, and the JSON export.
//!
//! Takes no arguments. Runs the whole computation once, top to bottom,
//! prints the report, writes `flavor_mixing_results.json` to the working
//! directory, and exits.

use flavor_mixing::compare::{evaluate_extended, ComparisonSet};
use flavor_mixing::export::{write_results, RESULTS_FILENAME};
use flavor_mixing::falsifiability;
use flavor_mixing::model::GenerationConstants;
use flavor_mixing::pdg::PDG_2024;
use flavor_mixing::report;
use std::path::Path;
use std::process;

fn main() {
    let model = GenerationConstants::new();
    let pdg = PDG_2024;

    report::print_header(&model);
    report::print_formulas(&model);

    let results = ComparisonSet::evaluate(&model, &pdg);
    report::print_comparison(&results);

    report::print_extended(&evaluate_extended(&model, &pdg));
    report::print_falsifiability(&falsifiability::criteria(&model, &pdg));
    report::print_reference_note(&pdg);

    match write_results(Path::new(RESULTS_FILENAME), &results) {
        Ok(path) => println!("\nResults exported to {}", path.display()),
        Err(e) => {
            eprintln!("ERROR: {e}");
            process::exit(1);
        }
    }
}
