//! Integration tests for compute_footprint() end-to-end.
//!
//! Uses the builtin factor table plus a small controlled table parsed via
//! parse_factors_str, so expected values are easy to derive by hand.

use footprint_core::compute::outcome::BreakdownValue;
use footprint_core::factors::builtin::load_default;
use footprint_core::factors::parse_factors_str;
use footprint_core::factors::schema::FactorTable;
use footprint_core::{compute_footprint, compute_footprint_with, ComputeOptions};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

fn controlled_factors() -> FactorTable {
    parse_factors_str(
        &json!({
            "name": "Controlled test factors",
            "version": "test",
            "transportation": {
                "car": {"petrol": "1", "diesel": "2"},
                "public_transport": {"average": "1"},
                "air_travel": {"short_haul": "100", "long_haul": "400"}
            },
            "energy": {
                "electricity": {"grid": "1", "renewable": "0"},
                "natural_gas": "1"
            },
            "waste": {
                "general_waste": "1",
                "recycling": {"paper": "1"},
                "composting_reduction": "1"
            },
            "food": {
                "diet": {"omnivore": "1", "vegan": "0.5"},
                "meat_and_fish": {"red_meat": "10"},
                "local_food_reduction": "0.1"
            },
            "products": {
                "spending": {"clothing": "1"},
                "generic_spending": "0.5",
                "secondhand_reduction": "0.5"
            }
        })
        .to_string(),
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Reconciliation: grand total equals the sum of category totals
// ---------------------------------------------------------------------------
#[test]
fn total_reconciles_across_all_five_categories() {
    let factors = load_default().unwrap();
    let result = compute_footprint(
        &json!({
            "categories": {
                "transportation": {
                    "car": {"weekly_km": 150, "fuel_type": "hybrid"},
                    "public_transport": {"weekly_km": 30},
                    "air_travel": {"short_flights": 2, "long_flights": 1}
                },
                "energy": {
                    "electricity": {"monthly_kwh": 300, "renewable_percentage": 25},
                    "gas": {"monthly_usage": 40}
                },
                "waste": {
                    "general_waste": {"weekly_kg": 8},
                    "recycling": {"paper": 3, "glass": 1, "metal": 1},
                    "composting": true
                },
                "food": {
                    "diet_type": "omnivore",
                    "meat_consumption": {"red_meat": 0.5, "poultry": 1},
                    "local_food_percentage": 20
                },
                "products": {
                    "monthly_spending": {"clothing": 80, "electronics": 40},
                    "secondhand_percentage": 30
                }
            }
        }),
        &factors,
    );

    assert!(result.error.is_none());
    assert_eq!(result.categories.len(), 5);
    assert!(result.categories.values().all(|c| c.error.is_none()));

    let sum: Decimal = result.categories.values().map(|c| c.total).sum();
    assert_eq!(result.total, sum);
}

// ---------------------------------------------------------------------------
// Omitted categories leave no key in the result
// ---------------------------------------------------------------------------
#[test]
fn omitted_category_has_no_entry() {
    let factors = load_default().unwrap();
    let result = compute_footprint(
        &json!({"categories": {"energy": {"gas": {"monthly_usage": 10}}}}),
        &factors,
    );
    assert_eq!(result.categories.len(), 1);
    assert!(result.categories.get("transportation").is_none());
}

// ---------------------------------------------------------------------------
// Unknown fuel variant behaves exactly like petrol
// ---------------------------------------------------------------------------
#[test]
fn unknown_fuel_matches_petrol() {
    let factors = load_default().unwrap();
    let record = |fuel: &str| {
        json!({"categories": {"transportation": {"car": {"weekly_km": 100, "fuel_type": fuel}}}})
    };

    let petrol = compute_footprint(&record("petrol"), &factors);
    let unknown = compute_footprint(&record("unknown"), &factors);

    assert_eq!(
        petrol.categories["transportation"].breakdown["car"],
        unknown.categories["transportation"].breakdown["car"]
    );
}

// ---------------------------------------------------------------------------
// Energy grid/renewable split
// ---------------------------------------------------------------------------
#[test]
fn electricity_splits_grid_and_renewable() {
    let factors = load_default().unwrap();
    let result = compute_footprint(
        &json!({"categories": {"energy": {
            "electricity": {"monthly_kwh": 300, "renewable_percentage": 50}
        }}}),
        &factors,
    );

    // (300*12*0.5)*0.350 + (300*12*0.5)*0.025
    let expected = dec!(1800) * dec!(0.350) + dec!(1800) * dec!(0.025);
    assert_eq!(
        result.categories["energy"].breakdown["electricity"],
        BreakdownValue::Scalar(expected)
    );
}

// ---------------------------------------------------------------------------
// Food ordering: itemized meat overrides the baseline portion
// ---------------------------------------------------------------------------
#[test]
fn food_meat_override_not_additive() {
    let factors = load_default().unwrap();
    let result = compute_footprint(
        &json!({"categories": {"food": {
            "diet_type": "omnivore",
            "meat_consumption": {"red_meat": 1}
        }}}),
        &factors,
    );

    let food = &result.categories["food"];
    // base_diet must be the reduced half, not the full 912.5 baseline.
    assert_eq!(
        food.breakdown["base_diet"],
        BreakdownValue::Scalar(dec!(0.5) * dec!(2.5) * dec!(365))
    );
    assert_eq!(
        food.breakdown["specific_meat"],
        BreakdownValue::Scalar(dec!(52) * dec!(27.0))
    );
}

// ---------------------------------------------------------------------------
// Waste composting gating and value
// ---------------------------------------------------------------------------
#[test]
fn composting_benefit_gated_and_negative() {
    let factors = load_default().unwrap();

    let with_flag = compute_footprint(
        &json!({"categories": {"waste": {
            "general_waste": {"weekly_kg": 10}, "composting": true
        }}}),
        &factors,
    );
    let benefit = with_flag.categories["waste"].breakdown["composting_benefits"]
        .as_scalar()
        .unwrap();
    // -(10 * 0.3 * 52 * 0.55)
    assert_eq!(benefit, dec!(-85.8));

    let without_general = compute_footprint(
        &json!({"categories": {"waste": {"composting": true}}}),
        &factors,
    );
    assert!(!without_general.categories["waste"]
        .breakdown
        .contains_key("composting_benefits"));
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------
#[test]
fn per_capita_divides_by_employees() {
    let factors = controlled_factors();
    // 10 short flights at a flat 100 each: total is exactly 1000.
    let record = |employees: i64| {
        json!({
            "subject_kind": "organization",
            "employees": employees,
            "categories": {"transportation": {"air_travel": {"short_flights": 10}}}
        })
    };

    let result = compute_footprint(&record(5), &factors);
    assert_eq!(result.total, dec!(1000));
    assert_eq!(result.per_capita, Some(dec!(200)));

    let zero = compute_footprint(&record(0), &factors);
    assert_eq!(zero.total, dec!(1000));
    assert!(zero.per_capita.is_none());
    assert!(zero.error.is_none());
}

// ---------------------------------------------------------------------------
// Record-level failure containment
// ---------------------------------------------------------------------------
#[test]
fn invalid_top_level_degrades_to_record_error() {
    let factors = load_default().unwrap();

    for record in [
        json!("just a string"),
        json!(42),
        json!({"subject_kind": "empire"}),
        json!({"categories": ["not", "a", "map"]}),
        json!({"subject_kind": "individual", "household_size": "four", "categories": {}}),
    ] {
        let result = compute_footprint(&record, &factors);
        assert!(result.error.is_some(), "expected record error for {record}");
        assert_eq!(result.total, Decimal::ZERO);
        assert!(result.categories.is_empty());
    }
}

// ---------------------------------------------------------------------------
// Category-level failure containment
// ---------------------------------------------------------------------------
#[test]
fn category_failure_leaves_other_categories_intact() {
    let factors = controlled_factors();
    let result = compute_footprint(
        &json!({"categories": {
            "waste": {"general_waste": {"weekly_kg": {"oops": true}}},
            "food": {"diet_type": "vegan"}
        }}),
        &factors,
    );

    assert!(result.error.is_none());
    assert_eq!(
        result.categories["waste"].error.as_deref(),
        Some("waste calculation failed")
    );
    // vegan 0.5/day * 365
    assert_eq!(result.categories["food"].total, dec!(182.5));
    assert_eq!(result.total, dec!(182.5));
}

// ---------------------------------------------------------------------------
// Idempotence: identical input, identical output
// ---------------------------------------------------------------------------
#[test]
fn repeated_computation_is_identical() {
    let factors = load_default().unwrap();
    let record = json!({
        "subject_kind": "individual",
        "household_size": 3,
        "categories": {
            "transportation": {"car": {"weekly_km": 120, "fuel_type": "mystery"}},
            "waste": {"recycling": {"paper": 4, "tires": 2}},
            "food": {"diet_type": "pescatarian", "local_food_percentage": 10}
        }
    });
    let options = ComputeOptions { include_trace: true };

    let first = compute_footprint_with(&record, &factors, &options);
    let second = compute_footprint_with(&record, &factors, &options);
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

// ---------------------------------------------------------------------------
// Serialized result carries the load-bearing field names
// ---------------------------------------------------------------------------
#[test]
fn result_wire_shape() {
    let factors = load_default().unwrap();
    let result = compute_footprint(
        &json!({
            "subject_kind": "organization",
            "employees": 2,
            "categories": {
                "waste": {"general_waste": {"weekly_kg": 5}, "recycling": {"paper": 1}}
            }
        }),
        &factors,
    );

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("total").is_some());
    assert!(json.get("per_capita").is_some());
    assert!(json.get("error").is_none());
    let waste = &json["categories"]["waste"];
    assert!(waste.get("total").is_some());
    assert!(waste["breakdown"]["general_waste"].is_string());
    assert!(waste["breakdown"]["recycling"].is_object());
}
