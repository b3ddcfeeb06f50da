//! Configuration management for the Inkblot CLI.

use anyhow::{Context, Result};
use inkblot_common::GenerationConfig;
use inkblot_common::constants::DEFAULT_FONT_SUFFIX;
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Font discovery
    #[serde(default)]
    pub fonts: FontConfig,

    /// Image and answer parameters
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Where generated images go
    #[serde(default)]
    pub output: OutputConfig,
}

/// Font discovery configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FontConfig {
    /// Directory scanned (non-recursively) for font files
    #[serde(default = "default_font_dir")]
    pub dir: String,

    /// File name suffix, matched case-insensitively
    #[serde(default = "default_font_suffix")]
    pub suffix: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            dir: default_font_dir(),
            suffix: default_font_suffix(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory PNG files are written to
    #[serde(default = "default_output_dir")]
    pub dir: String,

    /// Number of images per run
    #[serde(default = "default_count")]
    pub count: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            count: default_count(),
        }
    }
}

// Default value functions
fn default_font_dir() -> String { "assets/fonts".to_string() }
fn default_font_suffix() -> String { DEFAULT_FONT_SUFFIX.to_string() }
fn default_output_dir() -> String { "out".to_string() }
fn default_count() -> usize { 1 }

impl AppConfig {
    /// Load configuration from file, with CLI overrides
    pub fn load(config_path: &str, args: &super::Args) -> Result<Self> {
        let mut config = if Path::new(config_path).exists() {
            let settings = config::Config::builder()
                .add_source(config::File::with_name(config_path))
                .build()
                .context("Failed to load config file")?;

            settings
                .try_deserialize()
                .context("Failed to parse config")?
        } else {
            // Use defaults if config file doesn't exist
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            Self::default()
        };

        // Apply CLI overrides
        if let Some(ref dir) = args.font_dir {
            config.fonts.dir = dir.clone();
        }
        if let Some(ref dir) = args.output {
            config.output.dir = dir.clone();
        }
        if let Some(count) = args.count {
            config.output.count = count;
        }

        let generation = &mut config.generation;
        if let Some(width) = args.width {
            generation.width = width;
        }
        if let Some(height) = args.height {
            generation.height = height;
        }
        if let Some(complexity) = args.complexity {
            generation.complexity = complexity;
        }
        if let Some(lines) = args.lines {
            generation.lines = lines;
        }
        if let Some(length) = args.length {
            generation.length = length;
        }
        if let Some(alphabet) = args.alphabet {
            generation.alphabet = alphabet;
        }
        if args.background.is_some() {
            generation.background = args.background;
        }
        if args.border.is_some() {
            generation.border = args.border;
        }

        config
            .generation
            .validate()
            .context("Invalid generation settings")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use inkblot_common::{Alphabet, Color, Complexity};
    use std::io::Write;

    #[test]
    fn test_defaults_when_file_missing() {
        let args = crate::Args::parse_from(["inkblot"]);
        let config = AppConfig::load("/nonexistent/inkblot.toml", &args).unwrap();
        assert_eq!(config.fonts.dir, "assets/fonts");
        assert_eq!(config.fonts.suffix, ".ttf");
        assert_eq!(config.output.count, 1);
        assert_eq!(config.generation, GenerationConfig::default());
    }

    #[test]
    fn test_file_then_cli_overrides() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[fonts]\ndir = \"/usr/share/fonts\"\n\n[generation]\nwidth = 240\n\
             complexity = \"high\"\nbackground = 0xFFFFFF\nalphabet = \"lower\"\n"
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = crate::Args::parse_from(["inkblot", "--height", "80", "--lines", "5"]);
        let config = AppConfig::load(&path, &args).unwrap();

        assert_eq!(config.fonts.dir, "/usr/share/fonts");
        assert_eq!(config.generation.width, 240);
        assert_eq!(config.generation.height, 80);
        assert_eq!(config.generation.lines, 5);
        assert_eq!(config.generation.complexity, Complexity::High);
        assert_eq!(config.generation.alphabet, Alphabet::Lower);
        assert_eq!(config.generation.background, Some(Color::WHITE));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = crate::Args::parse_from(["inkblot", "--length", "0"]);
        assert!(AppConfig::load("/nonexistent/inkblot.toml", &args).is_err());
    }
}
