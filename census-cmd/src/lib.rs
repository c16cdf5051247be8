//! Command implementations for the census CLI.
//!
//! Both subcommands fetch the records once (no retry), lay out the same
//! scene the browser chart draws, and either write it as SVG or print it.

use std::path::PathBuf;

use clap::{Args, Subcommand};

pub mod config;
pub mod render;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// Server hosting the records endpoint, e.g. http://localhost:8000
    #[arg(short = 'u', long)]
    pub base_url: String,

    /// JSON file overriding chart settings (endpoint, size, margins, ...)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Surface width in pixels
    #[arg(long)]
    pub width: Option<f64>,

    /// Surface height in pixels
    #[arg(long)]
    pub height: Option<f64>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the state records and write the bar chart as a standalone SVG
    Render {
        #[command(flatten)]
        chart: ChartArgs,

        /// Output path for the SVG document
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Fetch the state records and print the laid-out scene as JSON
    Scene {
        #[command(flatten)]
        chart: ChartArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render { chart, output } => render::run_render(&chart, &output).await,
        Command::Scene { chart } => render::run_scene(&chart).await,
    }
}
