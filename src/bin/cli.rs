// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! t3dkit CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use t3dkit::cli::{discover_t3d_files, init_logging, FileStats, Reporter};
use t3dkit::{io, Brush, T3dConfig};

#[derive(Parser)]
#[command(name = "t3dkit")]
#[command(about = "Read, inspect and write Unreal T3D brush geometry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./t3dkit.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse T3D files and output brushes as JSON
    Parse {
        /// Input .t3d files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rewrite a T3D file in canonical form
    Format {
        /// Input .t3d file
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Snap vertices and locations to this grid size
        #[arg(long, value_name = "GRID")]
        snap: Option<f64>,
    },

    /// Write brushes from a JSON file as T3D
    Build {
        /// Input JSON file, as written by `parse`
        input: PathBuf,

        /// Output .t3d file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show brush statistics
    Stats {
        /// Input .t3d files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => {
            let mut config = T3dConfig::from_file(path)?;
            config.apply_env(|key| std::env::var(key).ok());
            config.validate()?;
            config
        }
        None => T3dConfig::load()?,
    };

    match cli.command {
        Commands::Parse { inputs, output } => parse_command(&inputs, output.as_deref(), &config),
        Commands::Format {
            input,
            output,
            snap,
        } => format_command(&input, output.as_deref(), snap, &config),
        Commands::Build { input, output } => build_command(&input, &output, &config),
        Commands::Stats { inputs } => stats_command(&inputs, &config),
        Commands::Version => {
            println!("t3dkit v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Import every discovered file in parallel, keeping input order
fn import_all(inputs: &[PathBuf], config: &T3dConfig) -> Vec<(PathBuf, Result<Vec<Brush>>)> {
    let files = discover_t3d_files(inputs);
    if files.is_empty() {
        Reporter::report_warning("No .t3d files found");
    }
    files
        .into_par_iter()
        .map(|path| {
            let brushes = io::import_t3d_file(&path, config);
            (path, brushes)
        })
        .collect()
}

fn parse_command(inputs: &[PathBuf], output: Option<&Path>, config: &T3dConfig) -> Result<()> {
    let mut brushes = Vec::new();
    let mut failed = 0;
    for (path, result) in import_all(inputs, config) {
        match result {
            Ok(b) => brushes.extend(b),
            Err(e) => {
                failed += 1;
                Reporter::report_error(&format!("{}: {:#}", path.display(), e));
            }
        }
    }

    let json = serde_json::to_string_pretty(&brushes)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Reporter::success(&format!(
                "Wrote {} brushes to {}",
                brushes.len(),
                path.display()
            ));
        }
        None => println!("{}", json),
    }

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn format_command(
    input: &Path,
    output: Option<&Path>,
    snap: Option<f64>,
    config: &T3dConfig,
) -> Result<()> {
    let mut config = config.clone();
    if let Some(grid) = snap {
        config.snap_vertices = true;
        config.snap_distance = grid;
        config.validate()?;
    }

    let brushes = io::import_t3d_file(input, &config)?;
    match output {
        Some(path) => io::export_t3d_file(&brushes, path, &config)?,
        None if config.wrap_map => print!("{}", io::export_map(&brushes)),
        None => print!("{}", io::export_actors(&brushes)),
    }
    Ok(())
}

fn build_command(input: &Path, output: &Path, config: &T3dConfig) -> Result<()> {
    let file = std::fs::File::open(input)
        .with_context(|| format!("Failed to open JSON file: {}", input.display()))?;
    let brushes: Vec<Brush> =
        serde_json::from_reader(std::io::BufReader::new(file)).context("Failed to parse brushes JSON")?;

    io::export_t3d_file(&brushes, output, config)?;
    Reporter::success(&format!(
        "Built {} brushes -> {}",
        brushes.len(),
        output.display()
    ));
    Ok(())
}

fn stats_command(inputs: &[PathBuf], config: &T3dConfig) -> Result<()> {
    let files = discover_t3d_files(inputs);
    let results: Vec<_> = files
        .par_iter()
        .map(|path| {
            let start = Instant::now();
            let result = io::import_t3d_file(path, config)
                .map(|brushes| FileStats::collect(&brushes, config.texture_size));
            (path, result, start.elapsed())
        })
        .collect();

    let mut failed = 0;
    let mut total_brushes = 0;
    for (path, result, elapsed) in &results {
        match result {
            Ok(stats) => {
                total_brushes += stats.brushes;
                Reporter::report_stats(&path.display().to_string(), stats, *elapsed);
            }
            Err(e) => {
                failed += 1;
                Reporter::report_error(&format!("{}: {:#}", path.display(), e));
            }
        }
    }
    Reporter::report_summary(results.len(), failed, total_brushes);

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
