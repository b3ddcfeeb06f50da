//! CAPTCHA image generation.
//!
//! Stage order is fixed: the answer is drawn over the noise so it stays
//! legible, and the obfuscation strokes are drawn over the answer so they
//! cut through the glyphs.

use image::RgbaImage;
use inkblot_common::{Alphabet, CaptchaError, Color, Complexity, GenerationConfig};
use rand::Rng;

use super::color::random_light_color;
use super::glyph::GlyphRenderer;
use super::noise::{paint_background, scatter_glyph_noise, scatter_pixel_noise};
use super::stroke::{draw_border, draw_sinusoidal_stroke, draw_straight_lines};
use super::text::random_text;
use crate::canvas::Canvas;
use crate::font::FontRegistry;
use crate::random;

/// A generated challenge
#[derive(Debug, Clone)]
pub struct Captcha {
    /// Final pixels
    pub image: RgbaImage,
    /// The text drawn in the image, in drawing order
    pub answer: String,
    /// Background actually used for this image
    pub background: Color,
}

/// CAPTCHA generator service.
///
/// Configure it with the setters, then call [`create`](Self::create) as many
/// times as needed. Calls share nothing but the read-only font registry.
#[derive(Debug, Clone)]
pub struct CaptchaImage<'f> {
    renderer: GlyphRenderer<'f>,
    config: GenerationConfig,
}

impl<'f> CaptchaImage<'f> {
    /// Generator with default size, complexity and line count. Without a
    /// `background`, each image gets its own random light background.
    pub fn new(fonts: &'f FontRegistry, background: Option<Color>) -> Self {
        Self::from_config(
            fonts,
            GenerationConfig {
                background,
                ..Default::default()
            },
        )
    }

    pub fn from_config(fonts: &'f FontRegistry, config: GenerationConfig) -> Self {
        Self {
            renderer: GlyphRenderer::new(fonts),
            config,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Set the noise density
    pub fn set_disturbance(&mut self, complexity: Complexity) -> &mut Self {
        self.config.complexity = complexity;
        self
    }

    /// Set the number of straight obfuscation lines
    pub fn set_line(&mut self, count: u32) -> &mut Self {
        self.config.lines = count;
        self
    }

    pub fn set_background(&mut self, background: Option<Color>) -> &mut Self {
        self.config.background = background;
        self
    }

    pub fn set_border(&mut self, border: Option<Color>) -> &mut Self {
        self.config.border = border;
        self
    }

    /// Generate an image whose answer has `length` characters from `alphabet`,
    /// using a fresh clock-seeded generator
    pub fn create(&self, length: usize, alphabet: Alphabet) -> Result<Captcha, CaptchaError> {
        self.create_with_rng(&mut random::clock_seeded(), length, alphabet)
    }

    /// Generate using the configured answer length and alphabet
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Captcha, CaptchaError> {
        self.create_with_rng(rng, self.config.length, self.config.alphabet)
    }

    /// Generate with a caller-supplied random source
    pub fn create_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
        alphabet: Alphabet,
    ) -> Result<Captcha, CaptchaError> {
        let config = GenerationConfig {
            length,
            alphabet,
            ..self.config.clone()
        };
        config.validate()?;

        let mut canvas = Canvas::new(config.width, config.height);

        let background = config
            .background
            .unwrap_or_else(|| random_light_color(rng));
        paint_background(&mut canvas, background);
        scatter_pixel_noise(&mut canvas, rng, config.complexity);
        scatter_glyph_noise(&mut canvas, rng, &self.renderer, config.complexity)?;

        let answer = random_text(rng, config.length, config.alphabet);
        self.renderer.draw_text(&mut canvas, rng, &answer)?;

        draw_straight_lines(&mut canvas, rng, config.lines);
        draw_sinusoidal_stroke(&mut canvas, rng);
        if let Some(border) = config.border {
            draw_border(&mut canvas, border);
        }

        tracing::debug!(
            width = config.width,
            height = config.height,
            complexity = ?config.complexity,
            lines = config.lines,
            length = config.length,
            alphabet = ?config.alphabet,
            "Generated CAPTCHA image"
        );

        Ok(Captcha {
            image: canvas.into_image(),
            answer,
            background,
        })
    }
}
