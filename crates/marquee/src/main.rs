//! Marquee CLI binary.
//!
//! This binary provides command-line access to the movie catalog:
//! - List top rated movies and the catalog by decade
//! - Search and show movie details
//! - Toggle favorites and the color theme

use clap::Parser;
use marquee::{init_tracing, MarqueeConfig};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cli::{build_app, handle_command, Cli};

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => MarqueeConfig::from_file(path)?,
        None => MarqueeConfig::load()?,
    };

    // Initialize tracing
    let filter = if cli.verbose {
        "marquee=debug"
    } else {
        config.log_filter_or_default()
    };
    init_tracing(filter)?;

    let app = build_app(&config).await?;
    handle_command(&app, cli.command).await?;

    Ok(())
}
