//! taquilla - in-memory console ticket tracker
//!
//! No files, no daemon - tickets live only as long as the process does.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use taquilla_core::{Config, Repository};

mod menu;

#[derive(Parser)]
#[command(name = "taquilla")]
#[command(about = "Gestor de tickets en consola")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// First ticket identifier to mint (overrides the config file)
    #[arg(long, env = "TAQUILLA_SEED")]
    seed: Option<u32>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if cli.no_color || !config.colors {
        colored::control::set_override(false);
    }

    let seed = cli.seed.unwrap_or(config.seed);
    let mut repo = Repository::with_seed(seed);

    menu::run(&mut repo)
}
