use footprint_core::compute::outcome::FootprintResult;
use footprint_core::error::FootprintError;
use footprint_core::recommend::Recommendation;

pub fn print(
    result: &FootprintResult,
    recommendations: &[Recommendation],
) -> Result<(), FootprintError> {
    if recommendations.is_empty() {
        let json = serde_json::to_string_pretty(result)?;
        println!("{json}");
        return Ok(());
    }

    // With --recommend, wrap both in one document.
    let combined = serde_json::json!({
        "result": result,
        "recommendations": recommendations,
    });
    println!("{}", serde_json::to_string_pretty(&combined)?);
    Ok(())
}
