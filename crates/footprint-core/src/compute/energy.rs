use crate::compute::{annualize_monthly, outcome::CategoryOutcome, percentage_ratio};
use crate::error::CategoryError;
use crate::factors::schema::FactorTable;
use crate::input::{Category, EnergyInput};
use crate::trace::{ComputeTrace, TraceSeverity};
use rust_decimal::Decimal;
use serde_json::Value;

/// Energy footprint: electricity split by renewable share, plus natural gas.
pub(crate) fn compute(
    data: &Value,
    factors: &FactorTable,
    trace: &mut ComputeTrace,
) -> Result<CategoryOutcome, CategoryError> {
    let input: EnergyInput = serde_json::from_value(data.clone())
        .map_err(|e| CategoryError::malformed(Category::Energy, e))?;

    let mut outcome = CategoryOutcome::default();

    if let Some(ref electricity) = input.electricity {
        // A share outside [0,100] is passed through arithmetically, not
        // clamped; above 100 the grid fraction goes negative.
        if electricity.renewable_percentage < Decimal::ZERO
            || electricity.renewable_percentage > Decimal::ONE_HUNDRED
        {
            trace.warn(
                Some(Category::Energy),
                TraceSeverity::Important,
                format!(
                    "renewable_percentage {} is outside [0,100]",
                    electricity.renewable_percentage
                ),
            );
        }

        let renewable_ratio = percentage_ratio(electricity.renewable_percentage);
        let annual_kwh = annualize_monthly(electricity.monthly_kwh);
        let grid_kwh = annual_kwh * (Decimal::ONE - renewable_ratio);
        let renewable_kwh = annual_kwh * renewable_ratio;

        let emissions = grid_kwh * factors.energy.electricity.grid
            + renewable_kwh * factors.energy.electricity.renewable;
        outcome.add("electricity", emissions);
    }

    if let Some(ref gas) = input.gas {
        let emissions = annualize_monthly(gas.monthly_usage) * factors.energy.natural_gas;
        outcome.add("gas", emissions);
    }

    Ok(outcome)
}
