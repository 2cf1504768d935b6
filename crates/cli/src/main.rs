//! BeSquare CLI - Cut rectangular materials into full squares

mod output;
mod settings;

use anyhow::{Context, Result};
use besquare_core::SquareCutter;
use clap::{Parser, ValueEnum};
use output::{CutOutcome, Rejection, Summary};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str = "besquare=info,besquare_core=info";

#[derive(Parser)]
#[command(name = "besquare")]
#[command(about = "Cut rectangular materials into full squares", long_about = None)]
#[command(version)]
struct Cli {
    /// Materials to cut, as WIDTHxHEIGHT (e.g. 25x15); put them after `--`
    /// when one starts with a minus sign
    #[arg(required = true, value_parser = parse_material)]
    materials: Vec<Material>,

    /// Square side length (overrides config file and environment)
    #[arg(short, long)]
    square_size: Option<i64>,

    /// Config file (default: config.toml in the platform config directory)
    #[arg(short, long, env = "BESQUARE_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

/// Raw material dimensions as typed by the user.
///
/// Non-positive values are accepted here so the cutter reports them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Material {
    width: i64,
    height: i64,
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn parse_material(raw: &str) -> std::result::Result<Material, String> {
    let (width, height) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", raw))?;

    let parse = |side: &str, name: &str| {
        side.trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid {} '{}': {}", name, side.trim(), e))
    };

    Ok(Material {
        width: parse(width, "width")?,
        height: parse(height, "height")?,
    })
}

fn init_logging() {
    let log_format = std::env::var("BESQUARE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // stdout carries results, logs go to stderr
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn cut_all(cutter: &mut SquareCutter, materials: &[Material]) -> Summary {
    let cuts = materials
        .iter()
        .map(|material| match cutter.submit_material(material.width, material.height) {
            Ok(report) => CutOutcome {
                material: material.to_string(),
                report: Some(report),
                error: None,
            },
            Err(err) => {
                warn!(material = %material, error = %err, "Skipping material");
                CutOutcome {
                    material: material.to_string(),
                    report: None,
                    error: Some(Rejection::from(&err)),
                }
            }
        })
        .collect();

    Summary {
        square_size: cutter.square_size(),
        cuts,
        squares: cutter.drain_squares(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    info!("BeSquare v{} starting...", VERSION);

    let mut cutter_config =
        settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(square_size) = cli.square_size {
        cutter_config.square_size = square_size;
    }

    info!(
        square_size = %cutter_config.square_size,
        materials = %cli.materials.len(),
        "Cutting materials"
    );

    let mut cutter = SquareCutter::from_config(&cutter_config);
    let summary = cut_all(&mut cutter, &cli.materials);

    info!(
        delivered = %summary.squares.len(),
        rejected = %summary.rejected(),
        "Cutting finished"
    );

    match cli.format {
        Format::Table => output::print_table(&summary),
        Format::Json => {
            let json = output::render_json(&summary).context("Failed to render JSON")?;
            println!("{}", json);
        }
    }

    Ok(())
}
