//! Resolve command - show where a dopant's formation-energy document lives.

use colored::Colorize;
use dopant::resolve;

pub fn run(
    species: String,
    charge_state: i64,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = resolve(&species, charge_state)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&query)?);
    } else {
        println!(
            "{} {} (charge {})",
            "Lookup for".cyan().bold(),
            species.white().bold(),
            charge_state
        );
        println!("  Collection: {}", query.collection_name.green());
        println!("  Field:      {}", query.field_name);
        println!("  Value:      {}", query.field_value.yellow());
    }

    Ok(())
}
