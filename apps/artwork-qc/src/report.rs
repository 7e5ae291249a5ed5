//! JSON reports printed by the CLI

use chrono::{DateTime, Utc};
use field_recon::ReconReport;
use serde::{Deserialize, Serialize};
use shared_types::{Finding, FindingSummary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    pub model_id: String,
    pub engine_version: String,
    pub run_at: DateTime<Utc>,
}

impl ReportMeta {
    pub fn new(model_id: &str, run_at: DateTime<Utc>) -> Self {
        Self {
            model_id: model_id.to_string(),
            engine_version: crate::VERSION.to_string(),
            run_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub meta: ReportMeta,
    pub summary: FindingSummary,
    /// Most severe first
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileReport {
    pub meta: ReportMeta,
    #[serde(flatten)]
    pub report: ReconReport,
}
