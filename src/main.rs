//! FiveThreeOne - 5/3/1 Strength Training Planner
//!
//! Command line entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

use app::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = app::load_app_config(&cli)?;

    let default_filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_filter.clone()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting FiveThreeOne v{}", env!("CARGO_PKG_VERSION"));

    app::run(cli, config)
}
