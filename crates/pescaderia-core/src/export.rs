//! # Report Export
//!
//! The downloadable report document: selected period, full analytics
//! aggregate and a generation timestamp, serialized as pretty JSON. Writing
//! the file to disk is the store crate's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::report::{ReportPeriod, SalesAnalytics};

/// A report ready to be offered as a downloadable file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportExport {
    /// The period the analytics were filtered to.
    pub period: ReportPeriod,

    /// The full analytics aggregate.
    pub analytics: SalesAnalytics,

    /// When this document was generated.
    pub generated_at: DateTime<Utc>,
}

impl ReportExport {
    pub fn new(period: ReportPeriod, analytics: SalesAnalytics, generated_at: DateTime<Utc>) -> Self {
        ReportExport {
            period,
            analytics,
            generated_at,
        }
    }

    /// Suggested download name, derived from the generation date:
    /// `reporte-pescaderia-YYYY-MM-DD.json`.
    pub fn file_name(&self) -> String {
        format!(
            "reporte-pescaderia-{}.json",
            self.generated_at.format("%Y-%m-%d")
        )
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
