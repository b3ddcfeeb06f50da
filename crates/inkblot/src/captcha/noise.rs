//! Background fill, pixel speckles and decorative glyph clutter.

use inkblot_common::{Alphabet, CaptchaError, Color, Complexity, Point};
use rand::Rng;

use super::color::{random_color, random_light_color};
use super::glyph::GlyphRenderer;
use super::text::random_text;
use crate::canvas::Canvas;
use crate::random::below;

/// Fill every pixel with `color`
pub fn paint_background(canvas: &mut Canvas, color: Color) {
    canvas.fill(color);
}

fn noise_count(canvas: &Canvas, divisor: u32) -> u32 {
    u32::try_from(canvas.area() / u64::from(divisor.max(1))).unwrap_or(u32::MAX)
}

/// Scatter `area / divisor` random-colored pixels. Roughly one in three
/// also colors its lower-right diagonal neighbour, giving speckle pairs.
///
/// Returns `(speckles, pairs)`.
pub fn scatter_pixel_noise<R: Rng>(
    canvas: &mut Canvas,
    rng: &mut R,
    complexity: Complexity,
) -> (u32, u32) {
    let count = noise_count(canvas, complexity.pixel_noise_divisor());
    let mut pairs = 0;

    for _ in 0..count {
        let x = below(rng, canvas.width());
        let y = below(rng, canvas.height());
        canvas.set(x, y, random_color(rng));

        if rng.random_range(0..count) % 3 == 0 {
            canvas.set(x + 1, y + 1, random_color(rng));
            pairs += 1;
        }
    }
    tracing::trace!(count, pairs, ?complexity, "Pixel noise scattered");
    (count, pairs)
}

/// Draw `area / divisor` single random characters in light colors.
///
/// The base size is picked once per pass from the canvas height; each glyph
/// uses half of it plus up to 4px. The first rendering failure aborts the pass.
pub fn scatter_glyph_noise<R: Rng>(
    canvas: &mut Canvas,
    rng: &mut R,
    renderer: &GlyphRenderer<'_>,
    complexity: Complexity,
) -> Result<(), CaptchaError> {
    let count = noise_count(canvas, complexity.glyph_noise_divisor());
    let base_size = canvas.height() as f32 / (1.0 + below(rng, 7) as f32 / 10.0);

    for _ in 0..count {
        let at = Point::new(below(rng, canvas.width()), below(rng, canvas.height()));
        let glyph = random_text(rng, 1, Alphabet::All);
        let size = (base_size / 2.0 + below(rng, 5) as f32).max(1.0);
        let color = random_light_color(rng);

        renderer.draw_str(canvas, rng, &glyph, size, color, at)?;
    }
    tracing::trace!(count, ?complexity, "Glyph noise scattered");
    Ok(())
}
