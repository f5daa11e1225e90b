use crate::compute::{annualize_weekly, outcome::CategoryOutcome};
use crate::error::CategoryError;
use crate::factors::schema::{FactorTable, AVERAGE_TRANSIT_VARIANT, DEFAULT_FUEL_VARIANT};
use crate::input::{Category, TransportationInput};
use crate::trace::{ComputeTrace, TraceSeverity};
use rust_decimal::Decimal;
use serde_json::Value;

/// Transportation footprint: car, public transport, and air travel.
///
/// Distances annualize weekly km; flights use flat per-flight factors.
/// No corrective adjustments in this category.
pub(crate) fn compute(
    data: &Value,
    factors: &FactorTable,
    trace: &mut ComputeTrace,
) -> Result<CategoryOutcome, CategoryError> {
    let input: TransportationInput = serde_json::from_value(data.clone())
        .map_err(|e| CategoryError::malformed(Category::Transportation, e))?;

    let mut outcome = CategoryOutcome::default();

    if let Some(ref car) = input.car {
        let factor = car_factor(&car.fuel_type, factors, trace)?;
        outcome.add("car", annualize_weekly(car.weekly_km) * factor);
    }

    if let Some(ref transit) = input.public_transport {
        let factor = lookup(
            &factors.transportation.public_transport,
            AVERAGE_TRANSIT_VARIANT,
            "public_transport",
        )?;
        outcome.add("public_transport", annualize_weekly(transit.weekly_km) * factor);
    }

    if let Some(ref air) = input.air_travel {
        let flights = air.short_flights * factors.transportation.air_travel.short_haul
            + air.long_flights * factors.transportation.air_travel.long_haul;
        outcome.add("air_travel", flights);
    }

    Ok(outcome)
}

fn car_factor(
    fuel_type: &str,
    factors: &FactorTable,
    trace: &mut ComputeTrace,
) -> Result<Decimal, CategoryError> {
    if let Some(factor) = factors.transportation.car.get(fuel_type) {
        return Ok(*factor);
    }

    trace.warn(
        Some(Category::Transportation),
        TraceSeverity::Info,
        format!(
            "unknown fuel type '{}', using the {} factor",
            fuel_type, DEFAULT_FUEL_VARIANT
        ),
    );
    lookup(&factors.transportation.car, DEFAULT_FUEL_VARIANT, "car")
}

fn lookup(
    map: &std::collections::BTreeMap<String, Decimal>,
    variant: &str,
    sub_key: &str,
) -> Result<Decimal, CategoryError> {
    map.get(variant)
        .copied()
        .ok_or_else(|| CategoryError::MissingFactor {
            category: Category::Transportation,
            sub_key: format!("{}.{}", sub_key, variant),
        })
}
