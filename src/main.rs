//! jpg-inventory - Scan filesystems for JPEG images and write a flat inventory.
//!
//! Usage:
//!   jpg-inventory                          Scan every mounted volume
//!   jpg-inventory --roots D:\ E:\Photos    Scan specific roots
//!   jpg-inventory --jpg-only -o out.txt    Only `.jpg`, custom output file
//!   jpg-inventory --help                   Show help

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use jpg_inventory_core::{DEFAULT_OUTPUT, InventoryWriter};
use jpg_inventory_scan::{ExtensionSet, ScanConfig, TreeWalker, host_resolver};

#[derive(Parser)]
#[command(
    name = "jpg-inventory",
    version,
    about = "Scan for JPG images and write a text inventory",
    long_about = "jpg-inventory walks one or more directory trees and writes every \
                  matching image as a `directory<TAB>filename<TAB>size_bytes` line.\n\n\
                  Symbolic links and junctions are never followed, and unreadable \
                  directories are skipped without failing the scan."
)]
struct Cli {
    /// Output text file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Root folders or drives to scan (defaults to all drives)
    #[arg(long, num_args = 0..)]
    roots: Vec<PathBuf>,

    /// Only include .jpg (exclude .jpeg)
    #[arg(long)]
    jpg_only: bool,

    /// Scan for these extensions instead (e.g. --ext png --ext .gif)
    #[arg(long = "ext", value_name = "EXT", conflicts_with = "jpg_only")]
    extensions: Vec<String>,

    /// Log skipped directories and files to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let roots = if cli.roots.is_empty() {
        host_resolver().roots()
    } else {
        cli.roots
    };

    let extensions = if !cli.extensions.is_empty() {
        ExtensionSet::new(&cli.extensions).context("Invalid --ext value")?
    } else if cli.jpg_only {
        ExtensionSet::jpg_only()
    } else {
        ExtensionSet::jpg_and_jpeg()
    };

    let config = ScanConfig::builder()
        .roots(roots)
        .extensions(extensions)
        .build()
        .context("Invalid scan configuration")?;

    let count = run_inventory(config, &cli.output)?;
    println!("Wrote {count} records to {}", cli.output.display());

    Ok(())
}

/// Scan the configured roots and stream every record into `output`.
fn run_inventory(config: ScanConfig, output: &Path) -> Result<u64> {
    let mut writer = InventoryWriter::create(output)
        .with_context(|| format!("Cannot open output file {}", output.display()))?;

    let walker = TreeWalker::new(config);
    info!(
        roots = walker.config().roots.len(),
        extensions = ?walker.config().extensions.iter().collect::<Vec<_>>(),
        "starting scan"
    );
    let mut walk = walker.walk();
    for record in walk.by_ref() {
        writer
            .write_record(&record)
            .with_context(|| format!("Failed writing to {}", output.display()))?;
    }

    let (count, _) = writer
        .finish()
        .with_context(|| format!("Failed writing to {}", output.display()))?;

    let stats = walk.stats();
    info!(
        records = stats.records,
        total = %format_size(stats.total_bytes),
        dirs_visited = stats.dirs_visited,
        dirs_skipped = stats.dirs_skipped,
        files_skipped = stats.files_skipped,
        links_skipped = stats.links_skipped,
        "scan complete"
    );

    Ok(count)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Format bytes as human-readable size.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
