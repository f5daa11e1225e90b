use crate::trace::ComputeTrace;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry in a category breakdown.
///
/// Most items are plain kg CO2e values; recycling nests per-material values
/// under a single key. Serialized untagged so the wire shape stays a number
/// or an object, while consumers in Rust pattern-match explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BreakdownValue {
    Scalar(Decimal),
    Nested(BTreeMap<String, Decimal>),
}

impl BreakdownValue {
    pub fn as_scalar(&self) -> Option<Decimal> {
        match self {
            BreakdownValue::Scalar(v) => Some(*v),
            BreakdownValue::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&BTreeMap<String, Decimal>> {
        match self {
            BreakdownValue::Scalar(_) => None,
            BreakdownValue::Nested(map) => Some(map),
        }
    }
}

/// Successful output of one category calculator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryOutcome {
    pub total: Decimal,
    pub breakdown: BTreeMap<String, BreakdownValue>,
}

impl CategoryOutcome {
    pub(crate) fn add(&mut self, key: &str, value: Decimal) {
        self.breakdown
            .insert(key.to_string(), BreakdownValue::Scalar(value));
        self.total += value;
    }
}

/// Result entry for one category, error-isolated from the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub total: Decimal,
    pub breakdown: BTreeMap<String, BreakdownValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CategoryResult {
    pub fn from_outcome(outcome: CategoryOutcome) -> Self {
        CategoryResult {
            total: outcome.total,
            breakdown: outcome.breakdown,
            error: None,
        }
    }

    /// Zero-total, empty-breakdown entry tagged with the category error.
    pub fn degraded(message: String) -> Self {
        CategoryResult {
            total: Decimal::ZERO,
            breakdown: BTreeMap::new(),
            error: Some(message),
        }
    }
}

/// Full result of one footprint computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    /// Annual kg CO2e. Sum of all non-error category totals.
    pub total: Decimal,
    pub categories: BTreeMap<String, CategoryResult>,
    /// Total divided by household size or employee count, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_capita: Option<Decimal>,
    /// Set only on record-level failure; categories are empty then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Fallback warnings, present when requested via ComputeOptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<ComputeTrace>,
}

impl FootprintResult {
    /// Whole-record degradation: any partial category results are discarded.
    pub fn record_error(message: String) -> Self {
        FootprintResult {
            total: Decimal::ZERO,
            categories: BTreeMap::new(),
            per_capita: None,
            error: Some(message),
            trace: None,
        }
    }
}
