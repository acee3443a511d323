use anyhow::Context;
use clap::Parser;
use solid_ac::core::showroom;
use solid_ac::utils::logger;
use solid_ac::{AcError, CliConfig};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format)
        .context("could not set up logging")?;

    tracing::info!("Starting solid-ac CLI");
    if config.verbose {
        let dump = serde_json::to_string(&config).map_err(AcError::from)?;
        tracing::debug!("CLI config: {}", dump);
    }

    showroom::run();

    std::io::stdout()
        .flush()
        .map_err(AcError::from)
        .context("could not flush stdout")?;

    Ok(())
}
