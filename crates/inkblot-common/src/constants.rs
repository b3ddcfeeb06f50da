//! Shared constants for Inkblot components.

/// Full answer alphabet: uppercase, lowercase, then digits
pub const ALNUM: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Uppercase slice of [`ALNUM`]
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase slice of [`ALNUM`]
pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// Digit slice of [`ALNUM`]
pub const NUMERIC: &str = "0123456789";

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 160;

/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 60;

/// Default number of straight obfuscation lines
pub const DEFAULT_LINES: u32 = 3;

/// Default answer length
pub const DEFAULT_ANSWER_LENGTH: usize = 4;

/// Default font file suffix used when scanning a font directory
pub const DEFAULT_FONT_SUFFIX: &str = ".ttf";

/// Color of the sinusoidal hollow stroke (0xF5FAFB)
pub const HOLLOW_STROKE_RGB: u32 = 0xF5FAFB;

/// Pixel-noise divisors: one speckle per this many pixels
pub mod pixel_noise {
    pub const NORMAL: u32 = 28;
    pub const MEDIUM: u32 = 18;
    pub const HIGH: u32 = 8;
}

/// Glyph-noise divisors: one decorative glyph per this many pixels
pub mod glyph_noise {
    pub const NORMAL: u32 = 2000;
    pub const MEDIUM: u32 = 1500;
    pub const HIGH: u32 = 1000;
}
