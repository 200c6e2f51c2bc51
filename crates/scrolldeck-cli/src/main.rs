use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrolldeck_core::DeckConfig;

mod commands;

#[derive(Parser)]
#[command(name = "scrolldeck")]
#[command(author, version, about = "A scroll-driven section deck for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Section to start on (e.g. "benefits")
        #[arg(short, long)]
        start: Option<String>,
    },
    /// List the sections of the deck in order
    Sections,
    /// Print or initialize the configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = DeckConfig::load()?;

    match cli.command {
        Some(Commands::Run { start }) => commands::run::run(config, start),
        None => commands::run::run(config, None),
        Some(Commands::Sections) => commands::sections::run(),
        Some(Commands::Config { init }) => commands::config::run(&config, init),
    }
}
