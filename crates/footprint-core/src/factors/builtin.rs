use crate::error::FootprintError;
use crate::factors::schema::FactorTable;

const DEFAULT_FACTORS_JSON: &str = include_str!("../../../../factors/default-factors.json");

/// Load the builtin emission factor table.
pub fn load_default() -> Result<FactorTable, FootprintError> {
    let table: FactorTable = serde_json::from_str(DEFAULT_FACTORS_JSON)?;
    crate::factors::validate_factors(&table)?;
    Ok(table)
}
