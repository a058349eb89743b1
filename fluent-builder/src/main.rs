//! Demo CLI for deferred mutation chains.
//!
//! Builds a `Point` from a TOML config plus command-line overrides, or shows
//! what happens when the target cannot be instantiated.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fluent_builder::config::{init_config, load_config};
use fluent_builder::point::{Overrides, point_builder, seeded_builder};
use fluent_builder::{exit_codes, logging};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fluent-builder",
    version,
    about = "Build objects from deferred mutation chains"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` overrides this.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file if none exists.
    Init {
        /// Where to write the config.
        #[arg(short, long, default_value = "fluent-builder.toml")]
        config: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Build a point from config and print it as JSON.
    Point {
        /// Path to the TOML config (missing file means defaults).
        #[arg(short, long, default_value = "fluent-builder.toml")]
        config: PathBuf,
        /// Override `point.x` (still subject to the guard range).
        #[arg(long, allow_hyphen_values = true)]
        x: Option<i64>,
        /// Override `point.y`.
        #[arg(long, allow_hyphen_values = true)]
        y: Option<i64>,
    },
    /// Try to build a type without a zero-argument constructor.
    Unconstructible,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Init { config, force } => cmd_init(&config, force),
        Command::Point { config, x, y } => cmd_point(&config, Overrides { x, y }),
        Command::Unconstructible => cmd_unconstructible(),
    }
}

fn cmd_init(config: &Path, force: bool) -> Result<i32> {
    if init_config(config, force)? {
        info!(path = %config.display(), "wrote default config");
    } else {
        eprintln!("{} exists; pass --force to overwrite", config.display());
    }
    Ok(exit_codes::OK)
}

fn cmd_point(config: &Path, overrides: Overrides) -> Result<i32> {
    let cfg = load_config(config)?;
    let builder = point_builder(&cfg, overrides);
    info!(steps = builder.len(), "built point chain");
    match builder.build() {
        Some(point) => {
            print_json(&point)?;
            Ok(exit_codes::OK)
        }
        None => Ok(exit_codes::NO_VALUE),
    }
}

fn cmd_unconstructible() -> Result<i32> {
    match seeded_builder().build() {
        Some(value) => {
            print_json(&value)?;
            Ok(exit_codes::OK)
        }
        None => {
            eprintln!("no value: target could not be instantiated");
            Ok(exit_codes::NO_VALUE)
        }
    }
}

/// Print `value` as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{}", payload);
    Ok(())
}
