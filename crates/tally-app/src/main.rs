use anyhow::Context;
use clap::Parser;
use tally_config::Config;
use tally_lang_english::EnglishProcessor;

pub mod chart;
pub mod cli;
pub mod logging;
pub mod pipeline;


use self::cli::Cli;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply(&mut config);

    logging::init_logging(config.logging.format);
    tracing::debug!(?config, "Resolved configuration");

    let processor = EnglishProcessor::new();
    let command = cli.command.unwrap_or_default();

    if let Some(chart) = pipeline::execute(command, &config, &processor)? {
        print!("{chart}");
    }

    Ok(())
}
