// SPDX-License-Identifier: AGPL-3.0-only

//! Flavor mixing parameters from a generation hierarchy rule.
//!
//! Verifies the empirical observation that Standard Model flavor mixing
//! parameters can be expressed through a simple integer rule: generation
//! powers `p_i = 3^(i-1)` combined with the cluster number 13 (secondary
//! cluster 11 = 13 − 2). Every prediction is an exact rational evaluated
//! once; the crate compares them against PDG 2024 reference values.
//!
//! ## Modules
//!   - `model` — generation constants and the closed-form predictions
//!   - `pdg` — PDG 2024 reference values with provenance
//!   - `compare` — prediction/observation comparison rows
//!   - `falsifiability` — testable windows for upcoming experiments
//!   - `report` — console tables
//!   - `export` — flat JSON export of the comparison set
//!   - `tolerances` — documented acceptance thresholds
//!   - `validation` — pass/fail check harness for the validation binary
//!
//! ## Binaries
//!   - `flavor_report` — full report pipeline, writes `flavor_mixing_results.json`
//!   - `validate_flavor` — explicit checks against documented tolerances, exit 0/1

pub mod compare;
pub mod error;
pub mod export;
pub mod falsifiability;
pub mod model;
pub mod pdg;
pub mod report;
pub mod tolerances;
pub mod validation;
