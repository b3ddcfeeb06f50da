//! CAPTCHA image synthesis.
//!
//! Each stage mutates a [`Canvas`](crate::Canvas) owned by a single call and
//! draws from a caller-supplied RNG.

mod color;
mod generator;
mod glyph;
mod noise;
mod stroke;
mod text;

pub use color::{deepen, random_color, random_deep_color, random_light_color};
pub use generator::{Captcha, CaptchaImage};
pub use glyph::GlyphRenderer;
pub use noise::{paint_background, scatter_glyph_noise, scatter_pixel_noise};
pub use stroke::{draw_beeline, draw_border, draw_sinusoidal_stroke, draw_straight_lines};
pub use text::random_text;
