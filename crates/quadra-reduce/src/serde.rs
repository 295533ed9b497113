use quadra_core::errors::{ErrorInfo, QuadError};

use crate::report::{Reduction, ReductionReport};

fn map_err(err: serde_json::Error, code: &str) -> QuadError {
    QuadError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serialises a reduction report to JSON.
pub fn report_to_json(report: &ReductionReport) -> Result<String, QuadError> {
    serde_json::to_string_pretty(report).map_err(|err| map_err(err, "report-serialize"))
}

/// Restores a reduction report from JSON.
pub fn report_from_json(json: &str) -> Result<ReductionReport, QuadError> {
    serde_json::from_str(json).map_err(|err| map_err(err, "report-deserialize"))
}

/// Serialises a full reduction to JSON.
pub fn reduction_to_json(reduction: &Reduction) -> Result<String, QuadError> {
    serde_json::to_string_pretty(reduction).map_err(|err| map_err(err, "reduction-serialize"))
}

/// Restores a full reduction from JSON.
pub fn reduction_from_json(json: &str) -> Result<Reduction, QuadError> {
    serde_json::from_str(json).map_err(|err| map_err(err, "reduction-deserialize"))
}
