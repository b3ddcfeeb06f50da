//! Core types shared across Inkblot components.

use serde::{Deserialize, Serialize};

use crate::constants::{
    self, ALNUM, DEFAULT_ANSWER_LENGTH, DEFAULT_HEIGHT, DEFAULT_LINES, DEFAULT_WIDTH,
};
use crate::CaptchaError;

/// An RGBA color. Everything this crate generates is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque color from its three channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert a packed `0xRRGGBB` value into an opaque color.
    /// Bits above the low 24 are ignored.
    pub const fn from_hex(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Packed `0xRRGGBB` form (alpha dropped)
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_hex(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// A position in canvas coordinates. May lie outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Noise density level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Sparse noise
    Normal,
    /// Moderate noise
    #[default]
    Medium,
    /// Dense noise
    High,
}

impl Complexity {
    /// Canvas area divided by this gives the number of pixel speckles
    pub fn pixel_noise_divisor(&self) -> u32 {
        match self {
            Self::Normal => constants::pixel_noise::NORMAL,
            Self::Medium => constants::pixel_noise::MEDIUM,
            Self::High => constants::pixel_noise::HIGH,
        }
    }

    /// Canvas area divided by this gives the number of decorative glyphs
    pub fn glyph_noise_divisor(&self) -> u32 {
        match self {
            Self::Normal => constants::glyph_noise::NORMAL,
            Self::Medium => constants::glyph_noise::MEDIUM,
            Self::High => constants::glyph_noise::HIGH,
        }
    }
}

impl std::str::FromStr for Complexity {
    type Err = CaptchaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" | "low" => Ok(Self::Normal),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(CaptchaError::InvalidConfig(format!(
                "unknown complexity '{other}'"
            ))),
        }
    }
}

/// Character set the answer text is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// Upper, lower and digits (62 characters)
    #[default]
    All,
    Numeric,
    Lower,
    Upper,
}

impl Alphabet {
    pub fn chars(&self) -> &'static str {
        match self {
            Self::All => ALNUM,
            Self::Numeric => constants::NUMERIC,
            Self::Lower => constants::LOWER,
            Self::Upper => constants::UPPER,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars().contains(c)
    }
}

impl std::str::FromStr for Alphabet {
    type Err = CaptchaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "alnum" => Ok(Self::All),
            "numeric" | "num" | "digits" => Ok(Self::Numeric),
            "lower" => Ok(Self::Lower),
            "upper" => Ok(Self::Upper),
            other => Err(CaptchaError::InvalidConfig(format!(
                "unknown alphabet '{other}'"
            ))),
        }
    }
}

/// Per-call generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Canvas width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Noise density
    #[serde(default)]
    pub complexity: Complexity,

    /// Number of straight obfuscation lines
    #[serde(default = "default_lines")]
    pub lines: u32,

    /// Fixed background; a random light color is picked per call when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,

    /// Optional one-pixel border drawn last
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Color>,

    /// Answer length in characters
    #[serde(default = "default_length")]
    pub length: usize,

    /// Answer alphabet
    #[serde(default)]
    pub alphabet: Alphabet,
}

fn default_width() -> u32 { DEFAULT_WIDTH }
fn default_height() -> u32 { DEFAULT_HEIGHT }
fn default_lines() -> u32 { DEFAULT_LINES }
fn default_length() -> usize { DEFAULT_ANSWER_LENGTH }

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            complexity: Complexity::default(),
            lines: default_lines(),
            background: None,
            border: None,
            length: default_length(),
            alphabet: Alphabet::default(),
        }
    }
}

impl GenerationConfig {
    /// Reject parameters that cannot produce an image
    pub fn validate(&self) -> Result<(), CaptchaError> {
        if self.width == 0 || self.height == 0 {
            return Err(CaptchaError::InvalidConfig(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(CaptchaError::InvalidConfig(format!(
                "canvas {}x{} exceeds the coordinate range",
                self.width, self.height
            )));
        }
        if self.length == 0 {
            return Err(CaptchaError::InvalidConfig(
                "answer length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
