use footprint_core::compute::outcome::{BreakdownValue, FootprintResult};
use footprint_core::recommend::Recommendation;
use footprint_core::trace::TraceSeverity;
use rust_decimal::Decimal;

pub fn print(result: &FootprintResult, recommendations: &[Recommendation]) {
    // Record-level error: nothing else to show, but it is a notice, not a
    // crash.
    if let Some(ref error) = result.error {
        println!("Note: {}", error);
        println!("\nTotal: {} kg CO2e / year", result.total);
        return;
    }

    println!("=== Annual carbon footprint ===\n");
    println!("  Total: {} kg CO2e / year", result.total);
    if let Some(per_capita) = result.per_capita {
        println!("  Per person: {} kg CO2e / year", per_capita);
    }
    println!();

    for (name, category) in &result.categories {
        if let Some(ref error) = category.error {
            println!("  {:<16} --        (note: {})", name, error);
            continue;
        }

        // Percentages only make sense against a nonzero grand total.
        if result.total != Decimal::ZERO {
            let share = category.total / result.total * Decimal::ONE_HUNDRED;
            println!("  {:<16} {:>12}  ({}%)", name, category.total.to_string(), share.round_dp(1));
        } else {
            println!("  {:<16} {:>12}", name, category.total.to_string());
        }

        for (item, value) in &category.breakdown {
            match value {
                BreakdownValue::Scalar(v) => println!("    {:<22} {}", item, v),
                BreakdownValue::Nested(materials) => {
                    println!("    {}:", item);
                    for (material, v) in materials {
                        println!("      {:<20} {}", material, v);
                    }
                }
            }
        }
    }

    if let Some(ref trace) = result.trace {
        if !trace.warnings.is_empty() {
            println!("\n  Warnings:");
            for warning in &trace.warnings {
                let marker = match warning.severity {
                    TraceSeverity::Important => "!",
                    TraceSeverity::Info => "-",
                };
                match warning.category {
                    Some(ref category) => {
                        println!("    {} [{}] {}", marker, category, warning.message)
                    }
                    None => println!("    {} {}", marker, warning.message),
                }
            }
        }
    }

    if !recommendations.is_empty() {
        println!("\n  Reduction opportunities (estimated kg CO2e / year):");
        let max_action = recommendations
            .iter()
            .map(|r| r.action.len())
            .max()
            .unwrap_or(10);
        for rec in recommendations {
            println!(
                "    {:<width$}  {:>10}  [{}]",
                rec.action,
                rec.estimated_savings.round_dp(1).to_string(),
                rec.category,
                width = max_action
            );
        }
    }
}
