//! PlantUML State Graph

use clap::Parser;
use puml_stategraph::{Config, Result, VERSION, cli, init_logging};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let config = if let Some(config_path) = &args.config {
        Config::from_file(config_path)?
    } else {
        Config::load()?
    };

    init_logging(&config.logging.level);

    tracing::debug!("puml-stategraph v{}", VERSION);
    tracing::debug!("Parsed arguments: {:?}", args);
    tracing::debug!("Loaded configuration: {:?}", config);

    cli::execute(args, config)?;

    Ok(())
}
