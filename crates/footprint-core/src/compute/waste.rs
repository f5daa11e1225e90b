use crate::compute::{annualize_weekly, outcome::BreakdownValue, outcome::CategoryOutcome};
use crate::error::CategoryError;
use crate::factors::schema::FactorTable;
use crate::input::{Category, WasteInput};
use crate::trace::{ComputeTrace, TraceSeverity};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;

/// Share of the general waste stream assumed divertable to compost.
fn compost_diversion_rate() -> Decimal {
    Decimal::new(3, 1)
}

/// Waste footprint: landfilled waste, recycling by material, composting.
///
/// Recycling factors are the net impact of the recycled stream, so they add
/// to the total; composting is the one negative entry.
pub(crate) fn compute(
    data: &Value,
    factors: &FactorTable,
    trace: &mut ComputeTrace,
) -> Result<CategoryOutcome, CategoryError> {
    let input: WasteInput = serde_json::from_value(data.clone())
        .map_err(|e| CategoryError::malformed(Category::Waste, e))?;

    let mut outcome = CategoryOutcome::default();

    if let Some(ref general) = input.general_waste {
        let emissions = annualize_weekly(general.weekly_kg) * factors.waste.general_waste;
        outcome.add("general_waste", emissions);
    }

    if let Some(ref recycling) = input.recycling {
        let mut materials = BTreeMap::new();
        let mut recycling_total = Decimal::ZERO;

        for (material, weekly_kg) in recycling {
            // Unknown materials are skipped, not defaulted.
            let Some(factor) = factors.waste.recycling.get(material) else {
                trace.warn(
                    Some(Category::Waste),
                    TraceSeverity::Info,
                    format!("unknown recycling material '{}' skipped", material),
                );
                continue;
            };
            let emissions = annualize_weekly(*weekly_kg) * factor;
            materials.insert(material.clone(), emissions);
            recycling_total += emissions;
        }

        outcome
            .breakdown
            .insert("recycling".to_string(), BreakdownValue::Nested(materials));
        outcome.total += recycling_total;
    }

    // The 30% diversion is assumed regardless of whether the reported
    // general waste already excludes composted material.
    if input.composting {
        if let Some(ref general) = input.general_waste {
            let diverted_kg = annualize_weekly(general.weekly_kg * compost_diversion_rate());
            let savings = diverted_kg * factors.waste.composting_reduction;
            outcome.add("composting_benefits", -savings);
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::builtin::load_default;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn run(data: Value) -> (Result<CategoryOutcome, CategoryError>, ComputeTrace) {
        let factors = load_default().unwrap();
        let mut trace = ComputeTrace::default();
        let result = compute(&data, &factors, &mut trace);
        (result, trace)
    }

    #[test]
    fn test_general_waste() {
        let (result, _) = run(json!({"general_waste": {"weekly_kg": 10}}));
        // 10*52*0.58
        assert_eq!(result.unwrap().total, dec!(301.6));
    }

    #[test]
    fn test_recycling_nests_per_material_credits() {
        let (result, _) = run(json!({"recycling": {"paper": 5, "glass": 2}}));
        let outcome = result.unwrap();
        let nested = outcome.breakdown["recycling"].as_nested().unwrap();
        // paper 5*52*0.04 = 10.4; glass 2*52*0.03 = 3.12
        assert_eq!(nested["paper"], dec!(10.4));
        assert_eq!(nested["glass"], dec!(3.12));
        // Credits add to the total; they are already-net factors.
        assert_eq!(outcome.total, dec!(13.52));
    }

    #[test]
    fn test_unknown_material_skipped_silently() {
        let (result, trace) = run(json!({"recycling": {"paper": 5, "styrofoam": 10}}));
        let outcome = result.unwrap();
        let nested = outcome.breakdown["recycling"].as_nested().unwrap();
        assert!(!nested.contains_key("styrofoam"));
        assert_eq!(outcome.total, dec!(10.4));
        assert!(trace.warnings[0].message.contains("styrofoam"));
    }

    #[test]
    fn test_recycling_key_present_even_when_all_unknown() {
        let (result, _) = run(json!({"recycling": {"styrofoam": 10}}));
        let outcome = result.unwrap();
        assert!(outcome.breakdown["recycling"].as_nested().unwrap().is_empty());
    }

    #[test]
    fn test_composting_benefit_negative_and_gated_on_general_waste() {
        let (with_general, _) = run(json!({
            "general_waste": {"weekly_kg": 10},
            "composting": true
        }));
        let outcome = with_general.unwrap();
        // -(10 * 0.3 * 52 * 0.55)
        assert_eq!(
            outcome.breakdown["composting_benefits"].as_scalar().unwrap(),
            dec!(-85.8)
        );
        assert_eq!(outcome.total, dec!(301.6) - dec!(85.8));

        let (without_general, _) = run(json!({"composting": true}));
        let outcome = without_general.unwrap();
        assert!(!outcome.breakdown.contains_key("composting_benefits"));
        assert_eq!(outcome.total, Decimal::ZERO);
    }

    #[test]
    fn test_type_mismatch_degrades_category() {
        let (result, _) = run(json!({"recycling": {"paper": "heaps"}}));
        assert!(matches!(result, Err(CategoryError::Malformed { .. })));
    }
}
