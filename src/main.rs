use anyhow::Context;
use clap::Parser;

use rural_health_dataset::args::Args;
use rural_health_dataset::build;

fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    build::run(&args).context("build failed")
}
