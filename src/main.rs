//! statuspage: command-line client for a hosted status page.
#![deny(clippy::all, clippy::pedantic)]

use std::process;

use clap::Parser;
use statuspage::{
    CliArgs, CliError, ComponentRegistry, build_ctx, config::load, dispatch,
    report::print_report, telemetry,
};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        debug!(?error, "command failed");
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let cli = CliArgs::parse();
    let settings = load(&cli)?;
    telemetry::init(&settings.logging)?;

    let ctx = build_ctx(&settings)?;
    let registry = ComponentRegistry::build(&ctx).await?;
    let report = dispatch(&ctx, &registry, settings.latest_incident, &cli.args).await?;
    print_report(&report)
}
