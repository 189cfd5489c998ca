pub mod build;
pub mod completions;
pub mod list;

use clap::{Parser, Subcommand};

/// sheetscan - Sprite asset manifest generator
#[derive(Parser, Debug)]
#[command(name = "sheetscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by SHEETSCAN_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan an asset directory and write its manifest
    Build(build::BuildArgs),

    /// Scan an asset directory and print what would be written
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
