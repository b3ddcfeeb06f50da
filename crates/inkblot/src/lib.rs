//! # Inkblot
//!
//! Distorted-text CAPTCHA synthesis. A generation call owns one [`Canvas`]
//! and runs a fixed stack of randomized raster stages over it:
//!
//! ```text
//! background → pixel noise → glyph noise → answer text → straight lines → hollow stroke
//! ```
//!
//! Glyphs come from a [`FontRegistry`] populated once at startup and shared
//! read-only by every call.

pub mod canvas;
pub mod captcha;
pub mod font;
pub mod random;

pub use canvas::Canvas;
pub use captcha::{Captcha, CaptchaImage};
pub use font::{FontRegistry, FontSource, Typeface};
pub use inkblot_common::{Alphabet, CaptchaError, Color, Complexity, GenerationConfig, Point};
