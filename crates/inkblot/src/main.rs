//! # Inkblot CLI
//!
//! Generates distorted-text CAPTCHA images into a directory and prints one
//! JSON record per image.
//!
//! ## Pipeline
//! ```text
//! fonts dir → FontRegistry ─┐
//!                           ├→ CaptchaImage (one RNG per image, rayon) → PNG + JSON
//! config + CLI → settings ──┘
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use inkblot::{Alphabet, CaptchaImage, Color, Complexity, FontRegistry};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod output;

use config::AppConfig;

/// Inkblot - distorted text CAPTCHA generator
#[derive(Parser, Debug)]
#[command(name = "inkblot")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/inkblot.toml")]
    config: String,

    /// Font directory (overrides config)
    #[arg(long, env = "INKBLOT_FONT_DIR")]
    font_dir: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long, env = "INKBLOT_OUTPUT_DIR")]
    output: Option<String>,

    /// Number of images to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Noise density (normal, medium, high)
    #[arg(long)]
    complexity: Option<Complexity>,

    /// Number of straight obfuscation lines
    #[arg(long)]
    lines: Option<u32>,

    /// Answer length
    #[arg(long)]
    length: Option<usize>,

    /// Answer alphabet (all, numeric, lower, upper)
    #[arg(long)]
    alphabet: Option<Alphabet>,

    /// Fixed background color, e.g. 0xFFFFFF
    #[arg(long, value_parser = parse_hex_color)]
    background: Option<Color>,

    /// Border color, e.g. 0x7A7A7A
    #[arg(long, value_parser = parse_hex_color)]
    border: Option<Color>,

    /// Seed for reproducible output (image i uses seed + i)
    #[arg(long)]
    seed: Option<u64>,

    /// Include a base64 data URI in each JSON record
    #[arg(long, default_value = "false")]
    inline: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "LOG_LEVEL")]
    log_level: String,

    /// Enable JSON logging output
    #[arg(long, default_value = "false")]
    json_logs: bool,
}

fn main() -> Result<()> {
    // Pick up INKBLOT_* and LOG_LEVEL from .env before parsing
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(&args.log_level, args.json_logs)?;

    info!("Starting Inkblot v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(&args.config, &args)?;

    let fonts = FontRegistry::from_dir(&config.fonts.dir, &config.fonts.suffix)
        .with_context(|| format!("Failed to read fonts from {}", config.fonts.dir))?;
    if fonts.is_empty() {
        anyhow::bail!(
            "No '{}' fonts found in {}",
            config.fonts.suffix,
            config.fonts.dir
        );
    }

    let out_dir = Path::new(&config.output.dir);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let generator = CaptchaImage::from_config(&fonts, config.generation.clone());

    let records = (0..config.output.count)
        .into_par_iter()
        .map(|index| {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
                None => inkblot::random::clock_seeded(),
            };
            let captcha = generator
                .generate(&mut rng)
                .with_context(|| format!("Failed to generate image {index}"))?;
            output::save(out_dir, index, &captcha, args.inline)
        })
        .collect::<Result<Vec<_>>>()?;

    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }

    info!(count = records.len(), dir = %out_dir.display(), "Generation complete");
    Ok(())
}

/// Parse `0xRRGGBB`, `#RRGGBB` or `RRGGBB`
fn parse_hex_color(value: &str) -> Result<Color, String> {
    let digits = value
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .trim_start_matches('#');
    u32::from_str_radix(digits, 16)
        .ok()
        .filter(|packed| *packed <= 0xFF_FFFF)
        .map(Color::from_hex)
        .ok_or_else(|| format!("'{value}' is not a 0xRRGGBB color"))
}

/// Initialize structured logging with tracing
fn init_logging(level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so stdout stays pure JSON records
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}
