//! # Inkblot Common
//!
//! Shared types, errors, and constants used across Inkblot components.
//!
//! ## Modules
//! - `types` - Value types (Color, Point, Complexity, Alphabet, GenerationConfig)
//! - `error` - The CAPTCHA error taxonomy
//! - `constants` - Alphabets, density divisors, and canvas defaults

pub mod constants;
pub mod error;
pub mod types;

pub use error::CaptchaError;
pub use types::*;
