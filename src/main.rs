//! mycontext-tutorials: build the my-context visual tutorial site
//!
//! Three stages, runnable separately or end to end: generate demo context
//! homes through the my-context CLI, export terminal panels as HTML
//! fragments, and assemble the final tutorial pages.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mycontext_tutorials::{commands, config};

#[derive(Parser)]
#[command(name = "mycontext-tutorials")]
#[command(about = "Generate the my-context visual tutorial site", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Populate the tutorial context homes with demo data
    Generate {
        /// Path to the my-context binary (default: MY_CONTEXT_BIN or ~/.local/bin/my-context)
        #[arg(long)]
        bin: Option<PathBuf>,

        /// Tutorials base directory
        #[arg(long, default_value = config::DEFAULT_BASE_DIR)]
        dir: PathBuf,
    },

    /// Export explorer and detail panels as HTML for every tutorial
    Export {
        /// Tutorials base directory
        #[arg(long, default_value = config::DEFAULT_BASE_DIR)]
        dir: PathBuf,
    },

    /// Build the final tutorial HTML pages
    Build {
        /// Tutorials base directory
        #[arg(long, default_value = config::DEFAULT_BASE_DIR)]
        dir: PathBuf,
    },

    /// Run the full pipeline: generate, export, build
    All {
        /// Path to the my-context binary (default: MY_CONTEXT_BIN or ~/.local/bin/my-context)
        #[arg(long)]
        bin: Option<PathBuf>,

        /// Tutorials base directory
        #[arg(long, default_value = config::DEFAULT_BASE_DIR)]
        dir: PathBuf,
    },
}

fn resolve_bin(bin: Option<PathBuf>) -> Result<PathBuf> {
    match bin {
        Some(bin) => Ok(bin),
        None => config::default_my_context_bin(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { bin, dir } => {
            let bin = resolve_bin(bin)?;
            commands::generate::execute(&bin, &dir)?;
        }

        Commands::Export { dir } => {
            commands::export::execute(&dir)?;
        }

        Commands::Build { dir } => {
            commands::build::execute(&dir)?;
        }

        Commands::All { bin, dir } => {
            let bin = resolve_bin(bin)?;
            commands::generate::execute(&bin, &dir)?;
            commands::export::execute(&dir)?;
            commands::build::execute(&dir)?;
        }
    }

    Ok(())
}
