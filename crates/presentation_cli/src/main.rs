//! rumbo CLI
//!
//! Interactive directions client: geocodes two addresses with GraphHopper,
//! computes a route and prints the itinerary in Spanish.

#![allow(clippy::print_stdout)]

mod session;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{DirectionsService, ItineraryPresenter};
use clap::Parser;
use infrastructure::{AppConfig, GraphHopperAdapter};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::session::Session;

/// rumbo CLI
#[derive(Parser)]
#[command(name = "rumbo")]
#[command(author, version, about = "Indicaciones paso a paso con GraphHopper", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: rumbo.toml in the working directory, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// GraphHopper API key, overrides the configured one
    #[arg(long)]
    api_key: Option<String>,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the itinerary
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let outcome = runtime.block_on(run(cli));

    // A pending stdin read cannot be cancelled; exit without joining it
    runtime.shutdown_background();

    outcome
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(api_key) = cli.api_key {
        config = config.with_api_key(api_key);
    }
    config.validate()?;
    info!(config = ?config, "Configuration loaded");

    let adapter = Arc::new(
        GraphHopperAdapter::from_config(&config.graphhopper.to_client_config())
            .context("Failed to initialize GraphHopper clients")?,
    );
    let service = DirectionsService::new(adapter.clone(), adapter);

    let mut session = Session::new(
        service,
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    );

    let outcome = tokio::select! {
        outcome = session.run() => outcome,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupt received, shutting down");
            let rule = ItineraryPresenter::new().rule();
            println!("\n\n{rule}");
            println!("👋 Programa interrumpido. ¡Hasta luego!");
            println!("{rule}");
            Ok(())
        },
    };

    if let Err(e) = outcome {
        println!("\n\n❌ Error inesperado: {e}");
        return Err(e.into());
    }

    Ok(())
}
