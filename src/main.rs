//! xivpath CLI - Command-line tool for classifying FFXIV game paths.
//!
//! This is the main entry point for the xivpath command-line application.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

/// Paths classified per progress update in `scan`.
const SCAN_CHUNK: usize = 4096;

/// xivpath - FFXIV game path classification tool
#[derive(Parser)]
#[command(name = "xivpath")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify game paths into descriptors
    Classify {
        /// Game paths to classify
        #[arg(required = true)]
        paths: Vec<String>,

        /// Print descriptors as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print only the object type of game paths
    ObjectType {
        /// Game paths to classify
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Extract animation keys from timeline or animation package paths
    AnimKey {
        /// Game paths to inspect
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Classify every path listed in a file (one per line)
    Scan {
        /// File containing newline-separated game paths
        #[arg(short, long, env = "XIVPATH_INPUT")]
        input: PathBuf,

        /// Print one JSON descriptor per line instead of a summary
        #[arg(short, long)]
        json: bool,

        /// Number of worker threads (defaults to all cores)
        #[arg(short, long)]
        threads: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { paths, json } => {
            cmd_classify(&paths, json)?;
        }
        Commands::ObjectType { paths } => {
            for path in &paths {
                println!("{}\t{}", xivpath::object_type_of(path), path);
            }
        }
        Commands::AnimKey { paths } => {
            for path in &paths {
                println!("{}\t{}", xivpath::extract_animation_key(path), path);
            }
        }
        Commands::Scan { input, json, threads } => {
            cmd_scan(&input, json, threads)?;
        }
    }

    Ok(())
}

fn cmd_classify(paths: &[String], json: bool) -> Result<()> {
    for path in paths {
        let descriptor = xivpath::classify(path);
        if json {
            println!("{}", serde_json::to_string(&descriptor)?);
        } else {
            println!("{}\t{}", descriptor, path);
        }
    }

    Ok(())
}

fn cmd_scan(input: &PathBuf, json: bool, threads: Option<usize>) -> Result<()> {
    if let Some(threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read path list {}", input.display()))?;
    let paths: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();

    let parser = xivpath::default_parser();
    let start = Instant::now();

    let pb = if json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(paths.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let mut descriptors = Vec::with_capacity(paths.len());
    for chunk in paths.chunks(SCAN_CHUNK) {
        descriptors.extend(parser.classify_many(chunk));
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    if json {
        for descriptor in &descriptors {
            println!("{}", serde_json::to_string(descriptor)?);
        }
        return Ok(());
    }

    // (total, fully decoded) per object type
    let mut summary: BTreeMap<&'static str, (usize, usize)> = BTreeMap::new();
    for descriptor in &descriptors {
        let entry = summary.entry(descriptor.object_type().name()).or_default();
        entry.0 += 1;
        if descriptor.is_complete() {
            entry.1 += 1;
        }
    }

    println!("{:<16} {:>10} {:>10}", "Object type", "Paths", "Decoded");
    for (name, (total, decoded)) in &summary {
        println!("{:<16} {:>10} {:>10}", name, total, decoded);
    }
    println!(
        "\nClassified {} paths in {:?}",
        descriptors.len(),
        start.elapsed()
    );

    Ok(())
}
