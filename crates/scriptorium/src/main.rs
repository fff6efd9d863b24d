//! Scriptorium CLI binary.
//!
//! This binary provides command-line access to Scriptorium's functionality:
//! - Parse and normalize scripture citations
//! - Print passage text from the canon catalog
//! - Split ranges into per-chapter references
//! - Manage the memo cache

use clap::Parser;
use scriptorium::ScriptoriumConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, handle_cache_command, list_books, parse_citation, split_citation,
        text_of_citation,
    };

    // Pick up RUST_LOG and friends from a local .env
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    scriptorium::telemetry::init_console_telemetry(cli.verbose)?;

    // Commands that need no configuration
    match &cli.command {
        Commands::Parse { citation, json } => {
            parse_citation(citation, *json)?;
            return Ok(());
        }
        Commands::Books => {
            list_books();
            return Ok(());
        }
        _ => {}
    }

    let config = ScriptoriumConfig::load_with(cli.config.as_deref())?;

    match cli.command {
        Commands::Text { citation } => text_of_citation(&config, &citation).await?,
        Commands::Split { citation } => split_citation(&config, &citation).await?,
        Commands::Cache(cache_cmd) => handle_cache_command(&config, cache_cmd).await?,
        Commands::Parse { .. } | Commands::Books => {}
    }

    Ok(())
}
