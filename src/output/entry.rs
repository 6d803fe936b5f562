use serde::Serialize;

use crate::aggregator::PathOutcome;
use crate::report::FileReport;

#[derive(Debug, Serialize)]
pub struct JsonEntry<'a> {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<&'a FileReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> JsonEntry<'a> {
    pub fn from_outcome(outcome: &'a PathOutcome) -> Self {
        JsonEntry {
            path: outcome.path.display().to_string(),
            report: outcome.report(),
            error: outcome.error().map(|e| e.to_string()),
        }
    }
}
