//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Last.fm scrobble history analyzer.
#[derive(Debug, Parser)]
#[command(name = "scrobfm", version, about)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "scrobfm.toml")]
    pub config: PathBuf,

    /// What to analyze.
    #[command(subcommand)]
    pub command: Command,
}

/// Analysis commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare the current period against the previous one.
    Highlights {
        /// Aggregation period: week, month, or year.
        #[arg(short, long)]
        period: String,

        /// Anchor date (YYYY-MM-DD); defaults to today.
        #[arg(short, long)]
        date: Option<String>,

        /// Last.fm username; overrides the configured one.
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Rank artists, albums, or tracks within a period.
    Top {
        /// Aggregation period: week, month, or year.
        #[arg(short, long)]
        period: String,

        /// Ranking category: artist, album, or track.
        #[arg(short = 'C', long)]
        category: String,

        /// Anchor date (YYYY-MM-DD); defaults to today.
        #[arg(short, long)]
        date: Option<String>,

        /// How many rows to print.
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Last.fm username; overrides the configured one.
        #[arg(short, long)]
        user: Option<String>,
    },
}
