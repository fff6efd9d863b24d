//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scriptorium - parse scripture citations and resolve them against the canon
#[derive(Parser, Debug)]
#[command(name = "scriptorium")]
#[command(about = "Parse scripture citations and resolve them against the canon", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra configuration file layered over the defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical form of a citation
    Parse {
        /// Citation, or several separated by `;`
        citation: String,

        /// Print the parsed structure as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the text of a citation
    Text {
        /// Citation, or several separated by `;`
        citation: String,
    },

    /// Print one reference per chapter covered by a citation
    Split {
        /// Citation, or several separated by `;`
        citation: String,
    },

    /// List the books of the canon in order
    Books,

    /// Memo cache commands
    #[command(subcommand)]
    Cache(CacheCommands),
}

/// Memo cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Remove every cache entry
    Clear,
}
