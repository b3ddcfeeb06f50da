//! Glyph placement on top of the font registry.

use inkblot_common::{CaptchaError, Color, Point};
use rand::Rng;

use super::color::random_deep_color;
use crate::canvas::Canvas;
use crate::font::FontRegistry;
use crate::random::below;

/// Draws strings with a randomly chosen registered typeface per call
#[derive(Debug, Clone, Copy)]
pub struct GlyphRenderer<'f> {
    fonts: &'f FontRegistry,
}

impl<'f> GlyphRenderer<'f> {
    pub fn new(fonts: &'f FontRegistry) -> Self {
        Self { fonts }
    }

    /// Draw `text` in one random face with its baseline starting at `at`
    pub fn draw_str<R: Rng>(
        &self,
        canvas: &mut Canvas,
        rng: &mut R,
        text: &str,
        size: f32,
        color: Color,
        at: Point,
    ) -> Result<(), CaptchaError> {
        let face = self.fonts.choose(rng)?;
        face.draw_str(canvas, text, size, color, at)
    }

    /// Lay out the answer text left to right.
    ///
    /// Every character gets an equal horizontal slot, its own size in
    /// `height / [1, 1.67) - 2`, its own deep color and a baseline jittered
    /// across the lower half of the canvas.
    pub fn draw_text<R: Rng>(
        &self,
        canvas: &mut Canvas,
        rng: &mut R,
        text: &str,
    ) -> Result<(), CaptchaError> {
        let count = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        if count == 0 {
            return Ok(());
        }

        let slot = canvas.width() / count - 1;
        let height = canvas.height() as f32;
        let mut buf = [0u8; 4];

        for (i, ch) in text.chars().enumerate() {
            let size = (height / (1.0 + below(rng, 7) as f32 / 9.0) - 2.0).max(1.0);
            let color = random_deep_color(rng);

            let x = slot * i as i32 + slot / (size as i32).max(1);
            let y = 5 + below(rng, canvas.height() / 2) + (size / 2.0) as i32;

            self.draw_str(canvas, rng, ch.encode_utf8(&mut buf), size, color, Point::new(x, y))?;
        }
        Ok(())
    }
}
