// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Floormesh CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use floormesh::cli::Reporter;
use floormesh::{io, ConvertConfig, Converter, EndCapPolicy};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "floormesh")]
#[command(about = "Floormesh - floor plan to OBJ mesh converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input floor-plan file
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    output: Option<String>,

    /// Configuration file (defaults to ./floormesh.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every floor of a plan to OBJ files
    Convert {
        /// Input floor-plan file
        input: String,

        /// Output directory
        #[arg(short, long)]
        output: Option<String>,

        /// Wall end treatment (neighbor-adjusted, symmetric)
        #[arg(long)]
        end_caps: Option<EndCapPolicy>,

        /// Output file name prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Convert floors in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Convert all plan files (*.fml, *.xml) below a directory
    Batch {
        /// Directory to search
        dir: String,

        /// Output directory
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Parse a plan and output its floor records as JSON
    Parse {
        /// Input floor-plan file
        input: String,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print per-floor statistics
    Inspect {
        /// Input floor-plan file
        input: String,

        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = ConvertConfig::from_file(path)?;
            config.apply_env(|key| std::env::var(key).ok())?;
            config
        }
        None => ConvertConfig::load()?,
    };

    let all_ok = match &cli.command {
        Some(Commands::Convert {
            input,
            output,
            end_caps,
            prefix,
            parallel,
        }) => {
            if let Some(output) = output {
                config.output_dir = PathBuf::from(output);
            }
            if let Some(end_caps) = end_caps {
                config.end_caps = *end_caps;
            }
            if let Some(prefix) = prefix {
                config.file_prefix = prefix.clone();
            }
            config.parallel |= *parallel;
            convert_command(input, &config, cli.verbose)?
        }
        Some(Commands::Batch { dir, output }) => {
            if let Some(output) = output {
                config.output_dir = PathBuf::from(output);
            }
            batch_command(dir, &config, cli.verbose)?
        }
        Some(Commands::Parse { input, output }) => {
            parse_command(input, output.as_deref(), cli.verbose)?;
            true
        }
        Some(Commands::Inspect { input, json }) => inspect_command(input, &config, *json)?,
        Some(Commands::Version) => {
            println!("Floormesh v{}", env!("CARGO_PKG_VERSION"));
            true
        }
        None => {
            // Default behavior: convert input into the output directory
            if let Some(input) = &cli.input {
                if let Some(output) = &cli.output {
                    config.output_dir = PathBuf::from(output);
                }
                convert_command(input, &config, cli.verbose)?
            } else {
                eprintln!("Error: Input file required");
                eprintln!("Usage: floormesh <INPUT> [--output <DIR>]");
                std::process::exit(1);
            }
        }
    };

    if !all_ok {
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::WARN
    };
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn require_file(input: &str) {
    if !Path::new(input).exists() {
        Reporter::report_error(&format!("Input file not found: {}", input));
        std::process::exit(1);
    }
}

/// Convert one plan file; returns (converted, failed) floor counts
fn convert_file(input: &Path, config: &ConvertConfig, verbose: bool) -> Result<(usize, usize)> {
    let plan = io::import_plan_file(input)
        .with_context(|| format!("Failed to load plan: {}", input.display()))?;

    if plan.floors.is_empty() {
        Reporter::report_warning(&format!("{} contains no floors", input.display()));
    }

    let converter = Converter::new(config);
    let mut converted = 0;
    let mut failed = 0;

    for outcome in converter.convert_plan(&plan) {
        match outcome.result {
            Ok(mesh) => {
                let path = io::export_floor(&mesh, &config.output_dir, &config.file_prefix)
                    .with_context(|| format!("Failed to write floor {}", outcome.floor))?;
                Reporter::report_floor(&mesh, &path, verbose);
                converted += 1;
            }
            Err(e) => {
                Reporter::report_floor_error(&outcome.floor, &e.to_string());
                failed += 1;
            }
        }
    }

    Ok((converted, failed))
}

fn convert_command(input: &str, config: &ConvertConfig, verbose: bool) -> Result<bool> {
    require_file(input);

    if verbose {
        Reporter::report_info(&format!("Converting {} ({:?})", input, config.end_caps));
    }

    let start = Instant::now();
    let (converted, failed) = convert_file(Path::new(input), config, verbose)?;
    Reporter::report_summary(converted, failed, start.elapsed());

    Ok(failed == 0)
}

fn batch_command(dir: &str, config: &ConvertConfig, verbose: bool) -> Result<bool> {
    use indicatif::{ProgressBar, ProgressStyle};
    use walkdir::WalkDir;

    let files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()).map(str::to_lowercase).as_deref(),
                Some("fml") | Some("xml")
            )
        })
        .collect();

    if files.is_empty() {
        Reporter::report_error(&format!("No plan files found in {}", dir));
        return Ok(false);
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .context("Invalid progress template")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let mut converted = 0;
    let mut failed = 0;

    for file in &files {
        progress.set_message(file.display().to_string());

        // Each plan gets its own sub-directory so equal floor names do not collide
        let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or("plan");
        let file_config = ConvertConfig {
            output_dir: config.output_dir.join(stem),
            ..config.clone()
        };

        match progress.suspend(|| convert_file(file, &file_config, verbose)) {
            Ok((ok, bad)) => {
                converted += ok;
                failed += bad;
            }
            Err(e) => {
                progress.suspend(|| Reporter::report_error(&format!("{:#}", e)));
                failed += 1;
            }
        }
        progress.inc(1);
    }

    progress.finish_with_message("done");
    Reporter::report_summary(converted, failed, start.elapsed());

    Ok(failed == 0)
}

fn parse_command(input: &str, output: Option<&str>, verbose: bool) -> Result<()> {
    if verbose {
        println!("Parsing: {}", input);
    }

    require_file(input);

    let plan = io::import_plan_file(input)?;
    let json = serde_json::to_string_pretty(&plan)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        if verbose {
            println!("Records written to: {}", output_path);
        }
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn inspect_command(input: &str, config: &ConvertConfig, json: bool) -> Result<bool> {
    require_file(input);

    let plan = io::import_plan_file(input)?;
    let converter = Converter::new(config);
    let mut all_ok = true;
    let mut report = serde_json::Map::new();

    for outcome in converter.convert_plan(&plan) {
        match outcome.result {
            Ok(mesh) => {
                let stats = mesh.stats();
                if json {
                    report.insert(outcome.floor, serde_json::to_value(&stats)?);
                } else {
                    println!("\nfloor {}", outcome.floor);
                    stats.print();
                }
            }
            Err(e) => {
                Reporter::report_floor_error(&outcome.floor, &e.to_string());
                all_ok = false;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(all_ok)
}
