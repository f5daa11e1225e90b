use footprint_core::error::FootprintError;
use footprint_core::factors::{builtin, load_factors};
use std::path::Path;

pub fn show() -> Result<(), FootprintError> {
    let table = builtin::load_default()?;

    println!("{} (version {})\n", table.name, table.version);
    if let Some(ref desc) = table.description {
        println!("{}\n", desc);
    }

    println!("Transportation (kg CO2e per km, flights per flight):");
    for (variant, factor) in &table.transportation.car {
        println!("  car.{:<18} {}", variant, factor);
    }
    for (variant, factor) in &table.transportation.public_transport {
        println!("  public_transport.{:<5} {}", variant, factor);
    }
    println!("  air_travel.short_haul  {}", table.transportation.air_travel.short_haul);
    println!("  air_travel.long_haul   {}", table.transportation.air_travel.long_haul);
    println!();

    println!("Energy:");
    println!("  electricity.grid       {}  (per kWh)", table.energy.electricity.grid);
    println!("  electricity.renewable  {}  (per kWh)", table.energy.electricity.renewable);
    println!("  natural_gas            {}  (per m3)", table.energy.natural_gas);
    println!();

    println!("Waste (kg CO2e per kg):");
    println!("  general_waste          {}", table.waste.general_waste);
    for (material, factor) in &table.waste.recycling {
        println!("  recycling.{:<12} {}", material, factor);
    }
    println!("  composting_reduction   {}", table.waste.composting_reduction);
    println!();

    println!("Food:");
    for (variant, factor) in &table.food.diet {
        println!("  diet.{:<17} {}  (per day)", variant, factor);
    }
    for (kind, factor) in &table.food.meat_and_fish {
        println!("  meat_and_fish.{:<8} {}  (per kg)", kind, factor);
    }
    println!("  local_food_reduction   {}  (ratio)", table.food.local_food_reduction);
    println!();

    println!("Products (kg CO2e per currency unit):");
    for (category, factor) in &table.products.spending {
        println!("  spending.{:<13} {}", category, factor);
    }
    println!("  generic_spending       {}", table.products.generic_spending);
    println!("  secondhand_reduction   {}  (ratio)", table.products.secondhand_reduction);

    Ok(())
}

pub fn schema() -> Result<(), FootprintError> {
    print!(
        r#"JSON Factor Table Schema
========================

A factor table maps activity quantities to kg CO2e. When you run
`footprint compute`, each category calculator multiplies its annualized
input quantities by these factors. Units are mixed by design (per km,
per kWh, per kg, per currency unit, per flight, per day); no unit
conversion happens at compute time.

Top-level fields:
  name            (string, required)  Human-readable name of the table
  description     (string, optional)  What this table is for
  version         (string, required)  Version identifier (e.g., "2025.1")
  transportation  (object, required)
    car               Map of fuel variant -> factor per km.
                      Must contain "petrol" (the fallback variant).
    public_transport  Map of mode -> factor per km.
                      Must contain "average".
    air_travel        {{ short_haul, long_haul }} flat factors per flight.
  energy          (object, required)
    electricity       {{ grid, renewable }} factors per kWh.
    natural_gas       Factor per m3.
  waste           (object, required)
    general_waste     Factor per kg landfilled.
    recycling         Map of material -> net factor per kg recycled.
                      Materials missing here are skipped at compute time.
    composting_reduction  Avoided kg CO2e per kg composted.
  food            (object, required)
    diet              Map of diet variant -> factor per day.
                      Must contain "omnivore" (the fallback variant).
    meat_and_fish     Map of meat type -> factor per kg.
    local_food_reduction  Ratio in [0,1].
  products        (object, required)
    spending          Map of spending category -> factor per currency unit.
    generic_spending  Fallback factor for unlisted spending categories.
    secondhand_reduction  Ratio in [0,1].
  reduction_potential
                  (object, optional)  Category -> action -> potential.
                      Values up to 1 are ratios of the category total;
                      larger values are flat annual savings.

Example:
{{
  "name": "My regional factors",
  "version": "1.0",
  "transportation": {{
    "car": {{ "petrol": "0.180", "diesel": "0.165" }},
    "public_transport": {{ "average": "0.050" }},
    "air_travel": {{ "short_haul": "450", "long_haul": "1650" }}
  }},
  "energy": {{
    "electricity": {{ "grid": "0.250", "renewable": "0.020" }},
    "natural_gas": "2.03"
  }},
  "waste": {{
    "general_waste": "0.58",
    "recycling": {{ "paper": "0.04", "glass": "0.03" }},
    "composting_reduction": "0.55"
  }},
  "food": {{
    "diet": {{ "omnivore": "2.5", "vegan": "1.5" }},
    "meat_and_fish": {{ "red_meat": "27.0" }},
    "local_food_reduction": "0.15"
  }},
  "products": {{
    "spending": {{ "clothing": "0.5" }},
    "generic_spending": "0.5",
    "secondhand_reduction": "0.8"
  }}
}}

Note: factor values should be quoted strings, not bare numbers, to
preserve exact decimal precision (e.g., "0.192" not 0.192).
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), FootprintError> {
    let table = load_factors(file)?;

    println!("Factor table '{}' (v{}) is valid.", table.name, table.version);
    println!("  Car fuel variants: {}", table.transportation.car.len());
    println!("  Recycling materials: {}", table.waste.recycling.len());
    println!("  Diet variants: {}", table.food.diet.len());
    println!("  Spending categories: {}", table.products.spending.len());

    // Warnings for gaps the engine papers over at compute time.
    let mut warnings = Vec::new();
    for variant in ["diesel", "hybrid", "electric"] {
        if !table.transportation.car.contains_key(variant) {
            warnings.push(format!(
                "car has no '{}' variant; such cars will use the petrol factor",
                variant
            ));
        }
    }
    if table.food.meat_and_fish.is_empty() {
        warnings.push("meat_and_fish is empty; itemized meat input will be skipped".to_string());
    }
    if table.reduction_potential.is_empty() {
        warnings.push("reduction_potential is empty; no recommendations available".to_string());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
