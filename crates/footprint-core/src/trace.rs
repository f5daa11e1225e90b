use crate::input::Category;
use serde::{Deserialize, Serialize};

pub const TRACE_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceSeverity {
    /// Worth surfacing to the user (degraded category, out-of-range input).
    Important,
    /// Routine fallback (unknown variant defaulted, unknown key skipped).
    Info,
}

/// One fallback-over-failure event recorded during a computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceWarning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub message: String,
    pub severity: TraceSeverity,
}

/// Trace of every estimate-degrading decision the engine took.
///
/// The engine never aborts on a data gap; this is where the gaps show up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeTrace {
    pub trace_schema_version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<TraceWarning>,
}

impl Default for ComputeTrace {
    fn default() -> Self {
        ComputeTrace {
            trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
            warnings: Vec::new(),
        }
    }
}

impl ComputeTrace {
    pub fn warn(
        &mut self,
        category: Option<Category>,
        severity: TraceSeverity,
        message: impl Into<String>,
    ) {
        self.warnings.push(TraceWarning {
            category: category.map(|c| c.key().to_string()),
            message: message.into(),
            severity,
        });
    }
}
