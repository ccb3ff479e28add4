//! trueno-snap - inspect snap point zones, resolution, and expressions.
//!
//! Reads a YAML declaration (default `<config_dir>/trueno-snap/config.yaml`)
//! and prints what the engine resolves from it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use trueno_snap::config::Config;
use trueno_snap::prelude::*;

/// trueno-snap: snap point inspector
#[derive(Parser, Debug)]
#[command(name = "trueno-snap")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Inspect snap point zones and expressions", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Axis to inspect
    #[arg(short, long, value_enum, default_value = "scroll", global = true)]
    dimension: DimensionArg,

    /// Viewport size, overriding the config file
    #[arg(long, global = true)]
    viewport: Option<f64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every resolved point with its zones
    Zones,

    /// Resolve raw values to snapped values
    Resolve {
        /// Values to resolve
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Value ignored during impulse resolution
        #[arg(long, allow_negative_numbers = true)]
        ignored: Option<f64>,
    },

    /// Print the conditional and resting point expressions
    Expressions {
        /// Animated target property
        #[arg(long, default_value = "Position.X")]
        target: String,

        /// Scale property
        #[arg(long, default_value = "Scale")]
        scale: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DimensionArg {
    Scroll,
    Zoom,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Scroll => Self::Scroll,
            DimensionArg::Zoom => Self::Zoom,
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Config::load_or_default(
            dirs::config_dir().map(|p| p.join("trueno-snap/config.yaml")).unwrap_or_default(),
        ),
    };
    if cli.viewport.is_some() {
        config.viewport = cli.viewport;
    }
    Ok(config)
}

fn print_zones(collection: &SnapPointCollection) {
    if collection.is_empty() {
        println!("no {} snap points", collection.dimension());
        return;
    }
    for (index, wrapper) in collection.wrappers().iter().enumerate() {
        println!(
            "{index:>3}  {}  zone {}  impulse {}  x{}",
            wrapper.snap_point(),
            wrapper.actual_applicable_zone(),
            wrapper.actual_impulse_applicable_zone(),
            wrapper.combination_count()
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = load_config(&cli)?;
    let mut collection = config
        .collection(cli.dimension.into())
        .context("resolving snap points")?;

    match &cli.command {
        Command::Zones => print_zones(&collection),
        Command::Resolve { values, ignored } => {
            if let Some(ignored) = ignored {
                collection.set_impulse_ignored_value(*ignored)?;
            }
            for &value in values {
                let resolved = collection.resolve(value);
                let snaps_at = collection.snaps_at(value);
                if ignored.is_some() {
                    println!(
                        "{value} -> {resolved} (snaps at: {snaps_at}, impulse: {})",
                        collection.resolve_impulse(value)
                    );
                } else {
                    println!("{value} -> {resolved} (snaps at: {snaps_at})");
                }
            }
        }
        Command::Expressions { target, scale } => {
            let expressions = collection.create_expressions(target, scale);
            for (wrapper, expressions) in collection.wrappers().iter().zip(&expressions) {
                println!("{}", wrapper.snap_point());
                println!("conditional: {}", expressions.conditional);
                println!("resting: {}", expressions.resting_point);
                println!();
            }
        }
    }

    Ok(())
}
