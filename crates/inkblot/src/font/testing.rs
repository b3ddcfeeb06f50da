//! Typeface doubles for tests that must not depend on font files.

use std::sync::Mutex;

use inkblot_common::{CaptchaError, Color, Point};

use super::Typeface;
use crate::canvas::Canvas;

/// Fills a `size/2` square per character, sitting on the baseline
pub struct BlockFace;

impl Typeface for BlockFace {
    fn name(&self) -> &str {
        "block"
    }

    fn draw_str(
        &self,
        canvas: &mut Canvas,
        text: &str,
        size: f32,
        color: Color,
        origin: Point,
    ) -> Result<(), CaptchaError> {
        let side = ((size / 2.0) as i32).max(1);
        for (i, _) in text.chars().enumerate() {
            let left = origin.x + side * i as i32;
            for y in origin.y - side..origin.y {
                for x in left..left + side {
                    canvas.set(x, y, color);
                }
            }
        }
        Ok(())
    }
}

/// Records every draw call and its color instead of touching pixels
#[derive(Default)]
pub struct RecordingFace {
    pub calls: Mutex<Vec<(String, Color, Point)>>,
}

impl Typeface for RecordingFace {
    fn name(&self) -> &str {
        "recording"
    }

    fn draw_str(
        &self,
        _canvas: &mut Canvas,
        text: &str,
        _size: f32,
        color: Color,
        origin: Point,
    ) -> Result<(), CaptchaError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((text.to_string(), color, origin));
        }
        Ok(())
    }
}

/// Always fails to rasterize
pub struct BrokenFace;

impl Typeface for BrokenFace {
    fn name(&self) -> &str {
        "broken"
    }

    fn draw_str(
        &self,
        _canvas: &mut Canvas,
        text: &str,
        _size: f32,
        _color: Color,
        _origin: Point,
    ) -> Result<(), CaptchaError> {
        Err(CaptchaError::GlyphRender(format!("cannot draw '{text}'")))
    }
}
