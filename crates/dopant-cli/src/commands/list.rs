//! List command - print precomputed dopant data.

use colored::Colorize;
use dopant::Catalog;

use crate::cli::{ListTarget, StoreArgs};

pub fn run(
    what: ListTarget,
    store: StoreArgs,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::from_stores(store.open());
    let runtime = tokio::runtime::Runtime::new()?;

    match what {
        ListTarget::Dopants => {
            let records = runtime.block_on(catalog.dopants())?;
            if json_output {
                println!("{}", serde_json::to_string_pretty(&records)?);
                return Ok(());
            }
            println!(
                "{:<10} {:>22} {:>24}",
                "Element".bold(),
                "Formation energy (eV)".bold(),
                "Charge transition (eV)".bold()
            );
            for r in &records {
                println!(
                    "{:<10} {:>22.3} {:>24.3}",
                    r.element, r.formation_energy, r.charge_transition
                );
            }
            println!("{} dopants", records.len().to_string().cyan());
        }
        ListTarget::Ml => {
            let records = runtime.block_on(catalog.predicted_formation_energies())?;
            if json_output {
                println!("{}", serde_json::to_string_pretty(&records)?);
                return Ok(());
            }
            print_prediction_header("Dopant");
            for r in &records {
                println!("{:<10} {:>8.3} {:>8.3} {:>8.3}", r.dopant, r.gpr, r.nn, r.rfr);
            }
            println!("{} predictions", records.len().to_string().cyan());
        }
        ListTarget::BandGap => {
            let records = runtime.block_on(catalog.band_gaps())?;
            if json_output {
                println!("{}", serde_json::to_string_pretty(&records)?);
                return Ok(());
            }
            print_prediction_header("Element");
            for r in &records {
                println!("{:<10} {:>8.3} {:>8.3} {:>8.3}", r.element, r.gpr, r.nn, r.rfr);
            }
            println!("{} predictions", records.len().to_string().cyan());
        }
    }

    Ok(())
}

fn print_prediction_header(name: &str) {
    println!(
        "{:<10} {:>8} {:>8} {:>8}",
        name.bold(),
        "GPR".bold(),
        "NN".bold(),
        "RFR".bold()
    );
}
