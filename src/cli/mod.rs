//! Command-line interface wiring for review-assistant.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod evaluate;
pub mod explore;
pub mod extract;
pub mod run;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Customer-review extraction and evaluation assistant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command. A bare invocation runs the
    /// full pipeline end to end.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command.unwrap_or(Commands::Run) {
            Commands::Run => run::run(settings).await,
            Commands::Explore => explore::run(settings).await,
            Commands::Extract(args) => extract::run(args, settings).await,
            Commands::Evaluate => evaluate::run(settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load, extract, score and report for the annotated sample.
    Run,
    /// Profile the review corpus.
    Explore,
    /// Run entity/aspect extraction over corpus reviews.
    Extract(extract::Args),
    /// Score persisted predictions against the ground truth.
    Evaluate,
}
