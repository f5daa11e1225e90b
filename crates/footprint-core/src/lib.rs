pub mod compute;
pub mod error;
pub mod factors;
pub mod input;
pub mod recommend;
pub mod trace;

use compute::outcome::FootprintResult;
use factors::schema::FactorTable;
use serde_json::Value;

/// Options for a footprint computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeOptions {
    /// Attach the fallback-warning trace to the result.
    pub include_trace: bool,
}

/// Main API entry point: compute an annual footprint from a submitted record.
///
/// The record is a plain JSON object (see `input::InputRecord` for the
/// shape). All failures come back as data on the result -- a malformed
/// category degrades that category, a malformed record degrades the whole
/// result -- so this function has no error return.
pub fn compute_footprint(record: &Value, factors: &FactorTable) -> FootprintResult {
    compute_footprint_with(record, factors, &ComputeOptions::default())
}

/// Compute with explicit options.
pub fn compute_footprint_with(
    record: &Value,
    factors: &FactorTable,
    options: &ComputeOptions,
) -> FootprintResult {
    compute::engine::compute(record, factors, options)
}
