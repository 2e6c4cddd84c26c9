//! Serve command - run the HTTP API and structure viewer.

use std::net::{IpAddr, SocketAddr};

use colored::Colorize;
use tracing::{error, info};

use crate::cli::StoreArgs;
use crate::server::{app, state::AppState};

pub fn run(
    store: StoreArgs,
    bind: IpAddr,
    port: u16,
    open_browser: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stores = store.open();
    info!("Using {} store at {}", stores.catalog.name(), store.location);

    let state = AppState::new(stores);
    let addr = SocketAddr::new(bind, port);

    // Print server info
    let url = format!("http://{}/dash/", addr);
    println!();
    println!(
        "{} {}",
        "Starting dopant server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Store:   {}", store.location);
    println!("  API:     http://{}/api", addr);
    println!("  Timeout: {} ms", store.timeout_ms);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if open_browser {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, addr).await {
            error!("Server error: {}", e);
            return Err(e);
        }
        Ok(())
    })
}
