use crate::compute::{
    annualize_daily, annualize_weekly,
    outcome::{BreakdownValue, CategoryOutcome},
    percentage_ratio,
};
use crate::error::CategoryError;
use crate::factors::schema::{FactorTable, DEFAULT_DIET_VARIANT};
use crate::input::{Category, FoodInput};
use crate::trace::{ComputeTrace, TraceSeverity};
use rust_decimal::Decimal;
use serde_json::Value;

/// Share of the baseline diet attributable to meat, by diet variant.
///
/// Used to back out the double-counted meat portion when itemized
/// consumption is reported.
fn meat_portion(diet_type: &str) -> Decimal {
    if diet_type == DEFAULT_DIET_VARIANT {
        Decimal::new(5, 1)
    } else {
        Decimal::new(3, 1)
    }
}

/// Food footprint. Steps run in strict order: baseline diet, itemized meat
/// override, then the local-food benefit on the adjusted running total.
pub(crate) fn compute(
    data: &Value,
    factors: &FactorTable,
    trace: &mut ComputeTrace,
) -> Result<CategoryOutcome, CategoryError> {
    let input: FoodInput = serde_json::from_value(data.clone())
        .map_err(|e| CategoryError::malformed(Category::Food, e))?;

    let mut outcome = CategoryOutcome::default();

    // Step 1: baseline from the diet variant, falling back to omnivore.
    let daily = match factors.food.diet.get(&input.diet_type) {
        Some(factor) => *factor,
        None => {
            trace.warn(
                Some(Category::Food),
                TraceSeverity::Info,
                format!(
                    "unknown diet type '{}', using the {} baseline",
                    input.diet_type, DEFAULT_DIET_VARIANT
                ),
            );
            *factors
                .food
                .diet
                .get(DEFAULT_DIET_VARIANT)
                .ok_or_else(|| CategoryError::MissingFactor {
                    category: Category::Food,
                    sub_key: format!("diet.{}", DEFAULT_DIET_VARIANT),
                })?
        }
    };
    let base_diet = annualize_daily(daily);
    outcome.add("base_diet", base_diet);

    // Step 2: itemized meat corrects the baseline's implicit average meat
    // consumption. The meat portion of the baseline is backed out and the
    // itemized total takes its place.
    if let Some(ref meat_consumption) = input.meat_consumption {
        let mut meat_emissions = Decimal::ZERO;

        for (meat_type, weekly_kg) in meat_consumption {
            let Some(factor) = factors.food.meat_and_fish.get(meat_type) else {
                trace.warn(
                    Some(Category::Food),
                    TraceSeverity::Info,
                    format!("unknown meat type '{}' skipped", meat_type),
                );
                continue;
            };
            meat_emissions += annualize_weekly(*weekly_kg) * factor;
        }

        if meat_emissions > Decimal::ZERO {
            let portion = meat_portion(&input.diet_type);
            outcome.breakdown.insert(
                "base_diet".to_string(),
                BreakdownValue::Scalar(base_diet * (Decimal::ONE - portion)),
            );
            outcome.breakdown.insert(
                "specific_meat".to_string(),
                BreakdownValue::Scalar(meat_emissions),
            );
            outcome.total = outcome.total - base_diet * portion + meat_emissions;
        }
    }

    // Step 3: local-food benefit on the running total after step 2.
    let local_ratio = percentage_ratio(input.local_food_percentage);
    if local_ratio > Decimal::ZERO {
        let benefit = outcome.total * local_ratio * factors.food.local_food_reduction;
        outcome.add("local_food_benefit", -benefit);
    }

    Ok(outcome)
}
