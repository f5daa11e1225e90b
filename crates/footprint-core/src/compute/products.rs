use crate::compute::{
    annualize_monthly,
    outcome::{BreakdownValue, CategoryOutcome},
    percentage_ratio,
};
use crate::error::CategoryError;
use crate::factors::schema::FactorTable;
use crate::input::{Category, ProductsInput};
use crate::trace::{ComputeTrace, TraceSeverity};
use rust_decimal::Decimal;
use serde_json::Value;

/// Purchased goods footprint, spend-based.
///
/// Contributes nothing (not an error) without a monthly_spending record.
pub(crate) fn compute(
    data: &Value,
    factors: &FactorTable,
    trace: &mut ComputeTrace,
) -> Result<CategoryOutcome, CategoryError> {
    let input: ProductsInput = serde_json::from_value(data.clone())
        .map_err(|e| CategoryError::malformed(Category::Products, e))?;

    let mut outcome = CategoryOutcome::default();

    let Some(ref spending) = input.monthly_spending else {
        return Ok(outcome);
    };

    let mut products_total = Decimal::ZERO;
    for (spend_category, monthly_amount) in spending {
        let factor = match factors.products.spending.get(spend_category) {
            Some(factor) => *factor,
            None => {
                trace.warn(
                    Some(Category::Products),
                    TraceSeverity::Info,
                    format!(
                        "no factor for spending category '{}', using the generic average",
                        spend_category
                    ),
                );
                factors.products.generic_spending
            }
        };
        let emissions = annualize_monthly(*monthly_amount) * factor;
        outcome
            .breakdown
            .insert(spend_category.clone(), BreakdownValue::Scalar(emissions));
        products_total += emissions;
    }

    let secondhand_ratio = percentage_ratio(input.secondhand_percentage);
    if secondhand_ratio > Decimal::ZERO {
        let benefit = products_total * secondhand_ratio * factors.products.secondhand_reduction;
        outcome.breakdown.insert(
            "secondhand_benefit".to_string(),
            BreakdownValue::Scalar(-benefit),
        );
        products_total -= benefit;
    }

    outcome.total = products_total;
    Ok(outcome)
}
