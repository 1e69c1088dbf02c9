//! tan-ui CLI - variant resolution and stylesheet builds for the tan-ui kit.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "tan-ui")]
#[command(about = "Variant resolution and stylesheet builds for the tan-ui component kit")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to tan-ui.toml config file
    #[arg(short, long, default_value = "tan-ui.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default tan-ui.toml and styles.d.ts
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate and publish the component stylesheet
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minify the published stylesheet
        #[arg(long)]
        minify: bool,
    },

    /// Verify the style manifest covers every class of every component
    Check,

    /// Print the classes a component resolves to
    Resolve {
        /// Component name (e.g. "button")
        component: String,

        /// Axis selections as axis=value
        selections: Vec<String>,

        /// Extra classes appended after variant classes
        #[arg(long = "class")]
        class: Vec<String>,

        /// Apply conflict merging to the result
        #[arg(long)]
        merge: bool,

        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Render the style manifest page
    Manifest {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Build { output, minify } => {
            commands::build::run(&cli.config, output, minify).await?;
        }
        Commands::Check => {
            commands::check::run()?;
        }
        Commands::Resolve {
            component,
            selections,
            class,
            merge,
            json,
        } => {
            commands::resolve::run(&component, &selections, &class, merge, json)?;
        }
        Commands::Manifest { output } => {
            commands::manifest::run(output)?;
        }
    }

    Ok(())
}
