//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Marquee - browse top rated movies, grouped by decade, and keep favorites
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Browse top rated movies by decade and keep a list of favorites", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the top rated movies
    Home {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show the catalog grouped by decade, newest decade first
    Decades {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show favorite movies
    Favorites {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show details for one movie
    Show {
        /// Movie id
        id: u64,

        /// Poster size (w92, w154, w185, w342, w500, w780, original)
        #[arg(long, default_value = "w500")]
        size: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Add a movie to favorites, or remove it if already there
    Toggle {
        /// Movie id
        id: u64,
    },

    /// Search titles and overviews
    Search {
        /// Text to look for
        query: String,

        /// Maximum number of results
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show the color theme
    Theme {
        /// Switch to the other theme
        #[arg(long)]
        toggle: bool,
    },
}

/// Output format for movie listings
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable rows
    Human,
    /// JSON output
    Json,
}
