use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fuel variant used when a car's fuel type is not in the table.
pub const DEFAULT_FUEL_VARIANT: &str = "petrol";
/// Public transport variant applied to weekly distance.
pub const AVERAGE_TRANSIT_VARIANT: &str = "average";
/// Diet variant used when the reported diet is not in the table.
pub const DEFAULT_DIET_VARIANT: &str = "omnivore";

/// Immutable emission factor table, injected into every computation.
///
/// Units are mixed by design: per-km, per-kWh, per-kg, per-currency-unit,
/// per-flight, per-day. Each calculator applies the factor matching its own
/// input unit; nothing converts units implicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorTable {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    pub transportation: TransportationFactors,
    pub energy: EnergyFactors,
    pub waste: WasteFactors,
    pub food: FoodFactors,
    pub products: ProductFactors,
    /// Category -> action -> potential. Ratios (<= 1) apply to the category
    /// total; larger values are flat annual savings in kg CO2e.
    #[serde(default)]
    pub reduction_potential: BTreeMap<String, BTreeMap<String, Decimal>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportationFactors {
    /// kg CO2e per km, by fuel variant.
    pub car: BTreeMap<String, Decimal>,
    /// kg CO2e per km, by mode. Must contain "average".
    pub public_transport: BTreeMap<String, Decimal>,
    pub air_travel: AirTravelFactors,
}

/// Flat per-flight factors (kg CO2e per flight, not per km).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirTravelFactors {
    pub short_haul: Decimal,
    pub long_haul: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyFactors {
    pub electricity: ElectricityFactors,
    /// kg CO2e per m3.
    pub natural_gas: Decimal,
}

/// kg CO2e per kWh, split by source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectricityFactors {
    pub grid: Decimal,
    pub renewable: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteFactors {
    /// kg CO2e per kg of landfilled waste.
    pub general_waste: Decimal,
    /// kg CO2e per kg recycled, by material. Net impact after recycling,
    /// not a subtraction from general waste.
    pub recycling: BTreeMap<String, Decimal>,
    /// kg CO2e avoided per kg of waste composted instead of landfilled.
    pub composting_reduction: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodFactors {
    /// kg CO2e per day, by diet variant. Must contain "omnivore".
    pub diet: BTreeMap<String, Decimal>,
    /// kg CO2e per kg, by meat/fish type.
    pub meat_and_fish: BTreeMap<String, Decimal>,
    /// Ratio (0-1) applied to the food total for locally sourced food.
    pub local_food_reduction: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFactors {
    /// kg CO2e per currency unit, by spending category.
    pub spending: BTreeMap<String, Decimal>,
    /// Fallback factor for spending categories not in the table.
    pub generic_spending: Decimal,
    /// Ratio (0-1) applied to the products total for secondhand purchases.
    pub secondhand_reduction: Decimal,
}
