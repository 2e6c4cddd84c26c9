//! Check command - verify the store is reachable.

use colored::Colorize;
use dopant::Catalog;

use crate::cli::StoreArgs;

pub fn run(store: StoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::from_stores(store.open());

    let runtime = tokio::runtime::Runtime::new()?;
    let status = runtime.block_on(catalog.check())?;

    println!("{} {}", "Store reachable:".green().bold(), store.location);
    if status.collections.is_empty() {
        println!("  (no collections)");
    }
    for name in &status.collections {
        println!("  - {}", name);
    }

    Ok(())
}
