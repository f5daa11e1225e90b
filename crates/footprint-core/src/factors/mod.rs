pub mod builtin;
pub mod schema;

use crate::error::FootprintError;
use rust_decimal::Decimal;
use schema::{FactorTable, AVERAGE_TRANSIT_VARIANT, DEFAULT_DIET_VARIANT, DEFAULT_FUEL_VARIANT};
use std::path::Path;

/// Load a factor table from a JSON file.
pub fn load_factors(path: &Path) -> Result<FactorTable, FootprintError> {
    let content = std::fs::read_to_string(path).map_err(|e| FootprintError::FactorsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_factors(&content, path)
}

/// Parse a factor table from a JSON string.
pub fn parse_factors(json: &str, source: &Path) -> Result<FactorTable, FootprintError> {
    let table: FactorTable = serde_json::from_str(json).map_err(|e| FootprintError::FactorsLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_factors(&table)?;
    Ok(table)
}

/// Parse a factor table from a JSON string (no file path context).
pub fn parse_factors_str(json: &str) -> Result<FactorTable, FootprintError> {
    let table: FactorTable = serde_json::from_str(json).map_err(FootprintError::Json)?;
    validate_factors(&table)?;
    Ok(table)
}

/// Validate that a factor table is well-formed.
///
/// The fallback variants the calculators rely on must exist, reduction
/// ratios must stay within [0,1], and no coefficient may be negative
/// (credits are modeled as positive factors applied with a negative sign).
pub fn validate_factors(table: &FactorTable) -> Result<(), FootprintError> {
    if !table.transportation.car.contains_key(DEFAULT_FUEL_VARIANT) {
        return Err(FootprintError::FactorsInvalid(format!(
            "transportation.car must contain the '{}' fallback variant",
            DEFAULT_FUEL_VARIANT
        )));
    }

    if !table
        .transportation
        .public_transport
        .contains_key(AVERAGE_TRANSIT_VARIANT)
    {
        return Err(FootprintError::FactorsInvalid(format!(
            "transportation.public_transport must contain the '{}' variant",
            AVERAGE_TRANSIT_VARIANT
        )));
    }

    if !table.food.diet.contains_key(DEFAULT_DIET_VARIANT) {
        return Err(FootprintError::FactorsInvalid(format!(
            "food.diet must contain the '{}' fallback variant",
            DEFAULT_DIET_VARIANT
        )));
    }

    check_ratio("food.local_food_reduction", table.food.local_food_reduction)?;
    check_ratio(
        "products.secondhand_reduction",
        table.products.secondhand_reduction,
    )?;

    check_map("transportation.car", &table.transportation.car)?;
    check_map(
        "transportation.public_transport",
        &table.transportation.public_transport,
    )?;
    check_factor(
        "transportation.air_travel.short_haul",
        table.transportation.air_travel.short_haul,
    )?;
    check_factor(
        "transportation.air_travel.long_haul",
        table.transportation.air_travel.long_haul,
    )?;
    check_factor("energy.electricity.grid", table.energy.electricity.grid)?;
    check_factor(
        "energy.electricity.renewable",
        table.energy.electricity.renewable,
    )?;
    check_factor("energy.natural_gas", table.energy.natural_gas)?;
    check_factor("waste.general_waste", table.waste.general_waste)?;
    check_factor(
        "waste.composting_reduction",
        table.waste.composting_reduction,
    )?;
    check_map("waste.recycling", &table.waste.recycling)?;
    check_map("food.diet", &table.food.diet)?;
    check_map("food.meat_and_fish", &table.food.meat_and_fish)?;
    check_map("products.spending", &table.products.spending)?;
    check_factor("products.generic_spending", table.products.generic_spending)?;

    Ok(())
}

fn check_factor(field: &str, value: Decimal) -> Result<(), FootprintError> {
    if value.is_sign_negative() {
        return Err(FootprintError::FactorsInvalid(format!(
            "{} must not be negative, got {}",
            field, value
        )));
    }
    Ok(())
}

fn check_map(
    section: &str,
    map: &std::collections::BTreeMap<String, Decimal>,
) -> Result<(), FootprintError> {
    for (key, value) in map {
        if value.is_sign_negative() {
            return Err(FootprintError::FactorsInvalid(format!(
                "{}.{} must not be negative, got {}",
                section, key, value
            )));
        }
    }
    Ok(())
}

fn check_ratio(field: &str, value: Decimal) -> Result<(), FootprintError> {
    if value.is_sign_negative() || value > Decimal::ONE {
        return Err(FootprintError::FactorsInvalid(format!(
            "{} must be a ratio within [0,1], got {}",
            field, value
        )));
    }
    Ok(())
}
