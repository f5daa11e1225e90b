use footprint_core::error::FootprintError;
use footprint_core::factors::{builtin, load_factors};
use footprint_core::recommend::recommend;
use footprint_core::{compute_footprint_with, ComputeOptions};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    factor_file: Option<PathBuf>,
    output_format: &str,
    include_trace: bool,
    with_recommendations: bool,
) -> Result<(), FootprintError> {
    let factors = match factor_file {
        Some(ref path) => load_factors(path)?,
        None => builtin::load_default()?,
    };

    let json_bytes = std::fs::read(&input_file)?;
    let record: serde_json::Value = serde_json::from_slice(&json_bytes)?;

    let options = ComputeOptions { include_trace };
    let result = compute_footprint_with(&record, &factors, &options);

    let recommendations = if with_recommendations {
        recommend(&result, &factors)
    } else {
        Vec::new()
    };

    match output_format {
        "json" => output::json::print(&result, &recommendations)?,
        _ => output::table::print(&result, &recommendations),
    }

    Ok(())
}
