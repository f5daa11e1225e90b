use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Whether the submitted record describes a household or an organization.
///
/// Decides which divisor field (`household_size` / `employees`) applies for
/// per-capita normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    #[serde(alias = "Individual")]
    Individual,
    #[serde(alias = "Organization")]
    Organization,
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectKind::Individual => write!(f, "Individual"),
            SubjectKind::Organization => write!(f, "Organization"),
        }
    }
}

/// The five fixed footprint categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transportation,
    Energy,
    Waste,
    Food,
    Products,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Transportation,
        Category::Energy,
        Category::Waste,
        Category::Food,
        Category::Products,
    ];

    /// Key used for this category in input and result records.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Transportation => "transportation",
            Category::Energy => "energy",
            Category::Waste => "waste",
            Category::Food => "food",
            Category::Products => "products",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Top-level shape of a submitted record.
///
/// Category sub-records stay as raw JSON here; each calculator deserializes
/// its own slice so a type mismatch in one category cannot take down the
/// others (category-level isolation).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputRecord {
    #[serde(default)]
    pub subject_kind: Option<SubjectKind>,
    #[serde(default)]
    pub household_size: Option<Decimal>,
    #[serde(default)]
    pub employees: Option<Decimal>,
    #[serde(default)]
    pub categories: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarUsage {
    #[serde(default)]
    pub weekly_km: Decimal,
    #[serde(default = "default_fuel_type")]
    pub fuel_type: String,
}

pub(crate) fn default_fuel_type() -> String {
    "petrol".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublicTransportUsage {
    #[serde(default)]
    pub weekly_km: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirTravel {
    #[serde(default)]
    pub short_flights: Decimal,
    #[serde(default)]
    pub long_flights: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransportationInput {
    #[serde(default)]
    pub car: Option<CarUsage>,
    #[serde(default)]
    pub public_transport: Option<PublicTransportUsage>,
    #[serde(default)]
    pub air_travel: Option<AirTravel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElectricityUsage {
    #[serde(default)]
    pub monthly_kwh: Decimal,
    /// Share of consumption from renewable sources, 0-100.
    #[serde(default)]
    pub renewable_percentage: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GasUsage {
    #[serde(default)]
    pub monthly_usage: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnergyInput {
    #[serde(default)]
    pub electricity: Option<ElectricityUsage>,
    #[serde(default)]
    pub gas: Option<GasUsage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralWaste {
    #[serde(default)]
    pub weekly_kg: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WasteInput {
    #[serde(default)]
    pub general_waste: Option<GeneralWaste>,
    /// Material name -> weekly kg recycled.
    #[serde(default)]
    pub recycling: Option<BTreeMap<String, Decimal>>,
    /// Only meaningful together with `general_waste`.
    #[serde(default)]
    pub composting: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodInput {
    #[serde(default = "default_diet_type")]
    pub diet_type: String,
    /// Meat/fish type -> weekly kg.
    #[serde(default)]
    pub meat_consumption: Option<BTreeMap<String, Decimal>>,
    /// Share of food sourced locally, 0-100.
    #[serde(default)]
    pub local_food_percentage: Decimal,
}

pub(crate) fn default_diet_type() -> String {
    "omnivore".to_string()
}

impl Default for FoodInput {
    fn default() -> Self {
        FoodInput {
            diet_type: default_diet_type(),
            meat_consumption: None,
            local_food_percentage: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductsInput {
    /// Spending category -> monthly currency amount.
    #[serde(default)]
    pub monthly_spending: Option<BTreeMap<String, Decimal>>,
    /// Share of purchases bought secondhand, 0-100.
    #[serde(default)]
    pub secondhand_percentage: Decimal,
}
