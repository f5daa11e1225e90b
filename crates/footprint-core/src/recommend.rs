use crate::compute::outcome::FootprintResult;
use crate::factors::schema::FactorTable;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A suggested reduction action with its estimated annual savings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub action: String,
    /// kg CO2e per year.
    pub estimated_savings: Decimal,
}

/// Derive reduction recommendations from a computed result.
///
/// Potentials up to 1 are ratios of the category total; larger values are
/// flat annual savings (e.g. kg CO2e per long flight avoided). Categories
/// with an error or a non-positive total yield no recommendations. Sorted
/// by estimated savings, largest first.
pub fn recommend(result: &FootprintResult, factors: &FactorTable) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for (category, entry) in &result.categories {
        if entry.error.is_some() || entry.total <= Decimal::ZERO {
            continue;
        }

        let Some(potentials) = factors.reduction_potential.get(category) else {
            continue;
        };

        for (action, potential) in potentials {
            let estimated_savings = if *potential <= Decimal::ONE {
                entry.total * potential
            } else {
                *potential
            };
            recommendations.push(Recommendation {
                category: category.clone(),
                action: action.clone(),
                estimated_savings,
            });
        }
    }

    recommendations.sort_by(|a, b| {
        b.estimated_savings
            .cmp(&a.estimated_savings)
            .then_with(|| a.action.cmp(&b.action))
    });
    recommendations
}
