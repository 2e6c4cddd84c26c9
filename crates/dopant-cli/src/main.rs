//! dopant CLI - serve CsSnI3 dopant data and crystal structures.

mod cli;
mod commands;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info,tower_http=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serve {
            store,
            bind,
            port,
            open,
        } => commands::serve::run(store, bind, port, open),

        Commands::Resolve {
            species,
            charge_state,
            json,
        } => commands::resolve::run(species, charge_state, json),

        Commands::Check { store } => commands::check::run(store),

        Commands::List { what, store, json } => commands::list::run(what, store, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
