// SPDX-License-Identifier: AGPL-3.0-only

//! JSON export of the comparison set.
//!
//! The document's top level maps parameter keys (`CKM_theta12` …
//! `Weinberg`) to flat objects: `parameter`, `formula`, `predicted`,
//! `observed`/`obs_error` (value rows), `predicted_deg`/`observed_deg`/
//! `obs_error_deg` (phase rows), `deviation_percent`, and a nullable
//! `sigma`. All numbers are f64; one file write per run.

use crate::compare::ComparisonSet;
use crate::error::FlavorError;
use std::path::{Path, PathBuf};

/// Default output filename for the report binary.
pub const RESULTS_FILENAME: &str = "flavor_mixing_results.json";

/// Serialize the comparison set to pretty JSON and write it to `path`.
///
/// Returns the written path.
///
/// # Errors
///
/// Returns [`FlavorError::Export`] if serialization or the file write fails.
pub fn write_results(path: &Path, results: &ComparisonSet) -> Result<PathBuf, FlavorError> {
    let json = serde_json::to_string_pretty(results)
        .map_err(|e| FlavorError::Export(format!("JSON serialize: {e}")))?;
    std::fs::write(path, json)
        .map_err(|e| FlavorError::Export(format!("write {}: {e}", path.display())))?;
    Ok(path.to_path_buf())
}
