#![warn(unused_imports)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::style)]

use anyhow::Context;
use clap::Parser;
use kafka_ready_cli::cli_args::CliArgs;
use kafka_ready_cli::startup::run;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

fn main() -> Result<(), anyhow::Error> {
    let args = CliArgs::parse();

    let log_level = std::env::var("RUST_LOG").unwrap_or("info".to_owned());

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(log_level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();

    run(&args).context("Kafka cluster is not ready")?;

    Ok(())
}
