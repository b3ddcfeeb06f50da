//! Renderable glyph sources.

use std::path::PathBuf;
use std::sync::OnceLock;

use inkblot_common::{CaptchaError, Color, Point};
use rusttype::{Font, Scale, point};

use crate::canvas::Canvas;

/// Something that can draw a string of glyphs onto a canvas
pub trait Typeface: Send + Sync {
    /// Display name used in logs and errors
    fn name(&self) -> &str;

    /// Draw `text` at pixel `size` in `color`, `origin` being the left end
    /// of the baseline
    fn draw_str(
        &self,
        canvas: &mut Canvas,
        text: &str,
        size: f32,
        color: Color,
        origin: Point,
    ) -> Result<(), CaptchaError>;
}

/// A TrueType/OpenType font, either backed by a file parsed on first use
/// or by bytes supplied at registration
pub struct FontSource {
    name: String,
    path: Option<PathBuf>,
    font: OnceLock<Font<'static>>,
}

impl FontSource {
    /// Register a font file; nothing is read until the first draw
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path: Some(path),
            font: OnceLock::new(),
        }
    }

    /// Parse font bytes immediately
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, CaptchaError> {
        let name = name.into();
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| CaptchaError::FontLoad(format!("{name}: not a valid font")))?;
        Ok(Self {
            name,
            path: None,
            font: OnceLock::from(font),
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.font.get().is_some()
    }

    /// Read and parse the backing file, or return the cached font
    pub fn load(&self) -> Result<&Font<'static>, CaptchaError> {
        if let Some(font) = self.font.get() {
            return Ok(font);
        }
        let Some(path) = self.path.as_deref() else {
            return Err(CaptchaError::FontLoad(format!("{}: no backing file", self.name)));
        };

        let bytes = std::fs::read(path)
            .map_err(|e| CaptchaError::FontLoad(format!("{}: {e}", path.display())))?;
        let font = Font::try_from_vec(bytes).ok_or_else(|| {
            CaptchaError::FontLoad(format!("{}: not a valid font", path.display()))
        })?;

        tracing::debug!(font = %self.name, glyphs = font.glyph_count(), "Font parsed");
        Ok(self.font.get_or_init(|| font))
    }
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSource")
            .field("name", &self.name)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl Typeface for FontSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn draw_str(
        &self,
        canvas: &mut Canvas,
        text: &str,
        size: f32,
        color: Color,
        origin: Point,
    ) -> Result<(), CaptchaError> {
        let font = self.load()?;
        rasterize(font, &self.name, canvas, text, size, color, origin)
    }
}

/// Lay out `text` along the baseline and composite each glyph's coverage
fn rasterize(
    font: &Font<'_>,
    name: &str,
    canvas: &mut Canvas,
    text: &str,
    size: f32,
    color: Color,
    origin: Point,
) -> Result<(), CaptchaError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(CaptchaError::GlyphRender(format!("invalid font size {size}")));
    }

    let start = point(origin.x as f32, origin.y as f32);
    let glyphs: Vec<_> = font.layout(text, em_scale(font, size), start).collect();

    // Reject the whole string before any pixel changes
    if let Some((ch, _)) = text
        .chars()
        .zip(&glyphs)
        .find(|(ch, glyph)| glyph.id().0 == 0 && !ch.is_whitespace())
    {
        return Err(CaptchaError::GlyphRender(format!("{name} has no glyph for '{ch}'")));
    }

    for glyph in &glyphs {
        if let Some(bounds) = glyph.pixel_bounding_box() {
            glyph.draw(|x, y, coverage| {
                canvas.blend(bounds.min.x + x as i32, bounds.min.y + y as i32, color, coverage);
            });
        }
    }
    Ok(())
}

/// Treat `size` as the em size in pixels (points at 72 DPI).
///
/// rusttype's `Scale` is the ascent-to-descent height, which is larger than
/// the em square for most fonts.
fn em_scale(font: &Font<'_>, size: f32) -> Scale {
    let units_per_em = f32::from(font.units_per_em());
    let metrics = font.v_metrics_unscaled();
    let extent = metrics.ascent - metrics.descent;
    if units_per_em <= 0.0 || extent <= 0.0 {
        return Scale::uniform(size);
    }
    Scale::uniform(size * extent / units_per_em)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DEJAVU_SANS: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

    fn dejavu() -> FontSource {
        FontSource::from_bytes("DejaVuSans", DEJAVU_SANS.to_vec()).unwrap()
    }

    fn white_canvas() -> Canvas {
        let mut canvas = Canvas::new(60, 50);
        canvas.fill(Color::WHITE);
        canvas
    }

    #[test]
    fn test_draw_str_uses_requested_color() {
        let source = dejavu();
        assert!(source.is_loaded());

        let ink = Color::rgb(10, 20, 200);
        let mut canvas = white_canvas();
        source.draw_str(&mut canvas, "H", 40.0, ink, Point::new(8, 40)).unwrap();

        let marked: Vec<_> = canvas
            .image()
            .pixels()
            .filter(|p| p.0 != [255, 255, 255, 255])
            .collect();
        assert!(!marked.is_empty());
        // Fully covered stem pixels carry the exact ink
        assert!(marked.iter().any(|p| p.0 == ink.channels()));
        // Partial coverage only mixes ink with the background
        assert!(marked.iter().all(|p| p.0[0] >= 10 && p.0[2] >= 200 && p.0[3] == 255));
    }

    #[test]
    fn test_missing_glyph_is_a_render_error() {
        let source = dejavu();
        let mut canvas = white_canvas();
        let err = source
            .draw_str(&mut canvas, "A中", 30.0, Color::BLACK, Point::new(4, 40))
            .unwrap_err();

        assert!(matches!(err, CaptchaError::GlyphRender(_)));
        assert!(canvas.image().pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_size_is_em_size() {
        let source = dejavu();
        let font = source.load().unwrap();
        let scale = em_scale(font, 40.0);

        // DejaVu's ascent-to-descent extent exceeds its em square
        assert!(scale.y > 40.0);
        let metrics = font.v_metrics_unscaled();
        let expected = 40.0 * (metrics.ascent - metrics.descent) / f32::from(font.units_per_em());
        assert!((scale.y - expected).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_size_rejected() {
        let source = dejavu();
        let mut canvas = white_canvas();
        let result = source.draw_str(&mut canvas, "A", 0.0, Color::BLACK, Point::new(4, 40));
        assert!(matches!(result, Err(CaptchaError::GlyphRender(_))));
    }

    #[test]
    fn test_missing_file_fails_on_first_draw() {
        let source = FontSource::from_path("/nonexistent/inkblot/font.ttf");
        assert!(!source.is_loaded());

        let mut canvas = Canvas::new(10, 10);
        let err = source
            .draw_str(&mut canvas, "A", 8.0, Color::BLACK, Point::new(1, 8))
            .unwrap_err();
        assert!(matches!(err, CaptchaError::FontLoad(_)));
    }

    #[test]
    fn test_malformed_file_is_a_load_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font").unwrap();

        let source = FontSource::from_path(file.path());
        assert!(matches!(source.load(), Err(CaptchaError::FontLoad(_))));
        assert!(!source.is_loaded());
    }

    #[test]
    fn test_malformed_bytes_rejected() {
        let result = FontSource::from_bytes("junk", vec![0; 32]);
        assert!(matches!(result, Err(CaptchaError::FontLoad(_))));
    }
}
