//! Command-line argument parsing for TripBuddy
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TripBuddy - a terminal travel assistant with callable tools
#[derive(Parser, Debug)]
#[command(name = "tripbuddy")]
#[command(version = "0.3.0")]
#[command(about = "Terminal travel assistant with a schema-described tool registry", long_about = None)]
pub struct Args {
    /// Assistant persona name (overrides the config file)
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Backend provider (overrides the config file)
    #[arg(long)]
    pub backend: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress banners and progress output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive chat session (default)
    Start,

    /// Run the scripted tool walkthrough
    Demo,

    /// List registered tools and their schemas
    Tools {
        /// Only show tools in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}
