use crate::compute::outcome::{CategoryResult, FootprintResult};
use crate::compute::{energy, food, products, transport, waste};
use crate::error::CategoryError;
use crate::factors::schema::FactorTable;
use crate::input::{Category, InputRecord, SubjectKind};
use crate::trace::{ComputeTrace, TraceSeverity};
use crate::ComputeOptions;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;

/// Aggregate a submitted record into a footprint result.
///
/// Never returns a Rust error and never panics: category failures degrade
/// that category's entry, record-level failures degrade the whole result.
pub fn compute(record: &Value, factors: &FactorTable, options: &ComputeOptions) -> FootprintResult {
    let input: InputRecord = match serde_json::from_value(record.clone()) {
        Ok(input) => input,
        Err(e) => {
            return FootprintResult::record_error(format!("invalid input record: {}", e));
        }
    };

    let mut trace = ComputeTrace::default();
    let mut categories = BTreeMap::new();
    let mut total = Decimal::ZERO;

    for category in Category::ALL {
        let Some(data) = input.categories.get(category.key()) else {
            continue;
        };

        let result = match run_calculator(category, data, factors, &mut trace) {
            Ok(outcome) => CategoryResult::from_outcome(outcome),
            Err(e) => {
                trace.warn(Some(category), TraceSeverity::Important, e.to_string());
                CategoryResult::degraded(format!("{} calculation failed", category))
            }
        };

        if result.error.is_none() {
            total += result.total;
        }
        categories.insert(category.key().to_string(), result);
    }

    let per_capita = match per_capita(&input, total) {
        Ok(value) => value,
        Err(reason) => return FootprintResult::record_error(reason),
    };

    FootprintResult {
        total,
        categories,
        per_capita,
        error: None,
        trace: options.include_trace.then_some(trace),
    }
}

fn run_calculator(
    category: Category,
    data: &Value,
    factors: &FactorTable,
    trace: &mut ComputeTrace,
) -> Result<crate::compute::outcome::CategoryOutcome, CategoryError> {
    match category {
        Category::Transportation => transport::compute(data, factors, trace),
        Category::Energy => energy::compute(data, factors, trace),
        Category::Waste => waste::compute(data, factors, trace),
        Category::Food => food::compute(data, factors, trace),
        Category::Products => products::compute(data, factors, trace),
    }
}

/// Per-person normalization. A missing or non-positive divisor disables it;
/// only an unrepresentable division degrades the record.
fn per_capita(input: &InputRecord, total: Decimal) -> Result<Option<Decimal>, String> {
    let divisor = match input.subject_kind {
        Some(SubjectKind::Organization) => input.employees,
        Some(SubjectKind::Individual) => input.household_size,
        None => None,
    };

    match divisor {
        Some(divisor) if divisor > Decimal::ZERO => total
            .checked_div(divisor)
            .map(Some)
            .ok_or_else(|| "per capita calculation failed".to_string()),
        _ => Ok(None),
    }
}
