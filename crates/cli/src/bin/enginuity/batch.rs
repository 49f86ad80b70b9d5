//! Batch report rows: one per request, carrying either the result or the error text.

use enginuity::simulation::{AnalysisOutcome, AnalysisRequest, SimulationError};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry<'a> {
    pub analysis: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a AnalysisOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn entries<'a>(
    requests: &[AnalysisRequest],
    results: &'a [Result<AnalysisOutcome, SimulationError>],
) -> Vec<BatchEntry<'a>> {
    requests
        .iter()
        .zip(results)
        .map(|(request, result)| match result {
            Ok(outcome) => BatchEntry {
                analysis: request.kind(),
                result: Some(outcome),
                error: None,
            },
            Err(err) => BatchEntry {
                analysis: request.kind(),
                result: None,
                error: Some(err.to_string()),
            },
        })
        .collect()
}
