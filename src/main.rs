use std::io;

use anyhow::Context;
use clap::Parser;
use manual_catalog::{Args, CatalogStore, Shell};

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=manual_catalog=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        log::error!("Application error: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    log::info!("Catalog path: {}", args.catalog.display());

    let (store, warnings) = CatalogStore::open(&args.catalog)
        .with_context(|| format!("Failed to open catalog {}", args.catalog.display()))?;

    for warning in &warnings {
        eprintln!("Warning: skipped {warning}");
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(store, args.settings(), stdin.lock(), io::stdout());
    shell.run().context("Terminal I/O failed")?;

    Ok(())
}
