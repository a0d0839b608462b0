//! Command-line interface

pub mod commands;
pub mod sample;

use clap::{Parser, Subcommand};
use commands::SampleCommand;

/// Generate CI pipeline definitions
#[derive(Debug, Parser, Clone)]
#[command(name = "shrub")]
#[command(author = "Shrub Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Build CI pipeline definitions programmatically", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render the sample pipeline
    Sample(SampleCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

use std::ffi::OsString;
