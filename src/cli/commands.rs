//! CLI command implementations
//!
//! This module contains the implementation for each CLI command.

use crate::{Result, cli::Cli};
use std::io::Read;
use std::path::Path;

/// Read diagram text from a file, or from stdin when the path is `-`
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Analyze command implementation
pub mod analyze {
    use super::*;
    use crate::Config;
    use crate::cli::{Commands, OutputFormat};
    use crate::state_machine::{Analyzer, StateGraph};

    /// Execute the analyze command
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let Commands::Analyze {
            input,
            output,
            starting_id,
            identity,
            on_unresolved,
        } = args.command;

        let mut analyzer_config = config.analyzer;
        if let Some(starting_id) = starting_id {
            analyzer_config = analyzer_config.with_starting_id(starting_id);
        }
        if let Some(identity) = identity {
            analyzer_config = analyzer_config.with_identity(identity);
        }
        if let Some(policy) = on_unresolved {
            analyzer_config = analyzer_config.with_on_unresolved(policy);
        }

        tracing::info!("Analyzing diagram: {:?}", input);
        tracing::debug!("Using analyzer options: {:?}", analyzer_config);

        let text = read_input(&input)?;
        let analysis = Analyzer::new(analyzer_config).analyze(&text)?;

        let mut stdout = std::io::stdout();
        match output {
            OutputFormat::Json => crate::cli::output::output_json(&mut stdout, &analysis)?,
            OutputFormat::Table => crate::cli::output::output_table(&mut stdout, &analysis)?,
            OutputFormat::Summary => {
                let graph = StateGraph::from_states(&analysis.states);
                crate::cli::output::output_summary(&mut stdout, &graph.stats())?;
            }
        }

        Ok(())
    }
}
