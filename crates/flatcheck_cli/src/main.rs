mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "flatcheck")]
#[command(version, about = "Validate delimited flat files against column rules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a data file against a configuration
    Validate {
        /// Path to the data file, one record per line
        data: PathBuf,

        /// Path to the configuration file (JSON, YAML or TOML)
        #[arg(short, long)]
        config: PathBuf,

        /// Output format: text, json, log
        #[arg(short, long, default_value = "text", value_parser = ["text", "json", "log"])]
        format: String,
    },

    /// Check a configuration without validating data
    Check {
        /// Path to the configuration file (JSON, YAML or TOML)
        config: PathBuf,

        /// Output format: text, json
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::Validate {
            data,
            config,
            format,
        } => commands::validate::execute(&data, &config, &format),

        Commands::Check { config, format } => commands::check::execute(&config, &format),
    }
}
