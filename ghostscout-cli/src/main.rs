//! GhostScout CLI — dataset acquisition and schema inspection commands.
//!
//! Commands:
//! - `download` — fetch the StatsBomb 360 catalog, mirror the Metrica and
//!   SkillCorner repositories, print SoccerNet acquisition guidance
//! - `probe` — load the locally placed Sportec XML pair and print the shape
//!   of the ingested domain objects

use anyhow::Result;
use clap::{Parser, Subcommand};
use ghostscout_core::config::{DataLayout, SportecFiles};
use ghostscout_core::data::{
    run_download, DownloadConfig, StatsBombProvider, StdoutProgress, SystemGit,
};
use ghostscout_core::sportec::{probe_dataset, LoadOptions, ProbeOutcome, ProbeReport};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ghostscout",
    about = "GhostScout CLI — sports tracking/event dataset acquisition"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the raw datasets: catalog, repository mirrors, SoccerNet notice.
    Download {
        /// Base data directory. Defaults to ./data.
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
    /// Load the local Sportec dataset and print its inspection fields.
    Probe {
        /// Base data directory. Defaults to ./data.
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Download { data_dir } => run_download_cmd(data_dir),
        Commands::Probe { data_dir } => run_probe_cmd(data_dir),
    }
}

fn run_download_cmd(data_dir: PathBuf) -> Result<()> {
    let layout = DataLayout::new(data_dir);
    let config = DownloadConfig::default();

    println!("=== GHOSTSCOUT DATA DOWNLOADER ===");
    println!("Saving data under: {}", layout.data_dir.display());

    let provider = StatsBombProvider::new(config.catalog.source_url.clone());
    let report = run_download(&provider, &SystemGit, &layout, &config, &StdoutProgress)?;

    println!("\n=== ACQUISITION FINISHED ===");
    if report.all_succeeded() {
        println!("Raw datasets are in place and ready for the next stage.");
    } else {
        for failure in report.failures() {
            println!("Missing source (recoverable): {}", failure.name);
        }
    }

    Ok(())
}

fn run_probe_cmd(data_dir: PathBuf) -> Result<()> {
    let layout = DataLayout::new(data_dir);
    let files = SportecFiles::default();

    println!("--- Loading Sportec (local files) ---");

    match probe_dataset(&layout, &files, &LoadOptions::default())? {
        ProbeOutcome::MissingInputs { raw_dir } => {
            // Checked condition, not an error: report and return normally
            println!("ERROR: XML files not found in {}", raw_dir.display());
            println!("Download them manually and save them under the expected names:");
            println!("  {} and {}", files.events_file, files.meta_data_file);
        }
        ProbeOutcome::Loaded(report) => print_probe_report(&report),
    }

    Ok(())
}

fn print_probe_report(report: &ProbeReport) {
    println!("\nDataset loaded into memory.");
    println!("Provider: {}", report.provider);
    println!("Field orientation: {}", report.orientation);
    println!("Total events: {}", report.event_count);

    println!("\nFirst event:");
    println!(" - Type: {}", report.first_event.event_name);
    println!(
        " - Player: {}",
        report.first_event.player.as_deref().unwrap_or("(none)")
    );
    match report.first_event.coordinates {
        Some(point) => println!(" - Position: {point}"),
        None => println!(" - Position: (none)"),
    }
    println!(" - Timestamp: {}", format_timestamp(report.first_event.timestamp));
}

/// Render a relative timestamp as `H:MM:SS.mmm`.
fn format_timestamp(d: chrono::Duration) -> String {
    let total_ms = d.num_milliseconds().max(0);
    let ms = total_ms % 1000;
    let secs = (total_ms / 1000) % 60;
    let mins = (total_ms / 60_000) % 60;
    let hours = total_ms / 3_600_000;
    format!("{hours}:{mins:02}:{secs:02}.{ms:03}")
}
