//! Obfuscation strokes: thick straight lines, the hollow sine stroke and
//! the optional border.

use std::f64::consts::PI;

use image::Rgba;
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use inkblot_common::constants::HOLLOW_STROKE_RGB;
use inkblot_common::{Color, Point};
use rand::Rng;

use super::color::random_deep_color;
use crate::canvas::Canvas;
use crate::random::below;

/// Draw `count` deep-colored lines from the left tenth of the canvas to the
/// right tenth. Even lines climb from the bottom third to the top third, odd
/// lines descend from the middle third to the bottom third.
pub fn draw_straight_lines<R: Rng>(canvas: &mut Canvas, rng: &mut R, count: u32) {
    let (width, height) = (canvas.width(), canvas.height());
    for index in 0..count {
        let (from, to) = line_endpoints(rng, width, height, index);
        draw_beeline(canvas, from, to, random_deep_color(rng));
    }
}

/// Endpoints of the `index`-th straight line
fn line_endpoints<R: Rng>(rng: &mut R, width: i32, height: i32, index: u32) -> (Point, Point) {
    let first = width / 10;
    let end = first * 9;
    let band = height / 3;

    let (y1, y2) = if index % 2 == 0 {
        (below(rng, band) + band * 2, below(rng, band))
    } else {
        (below(rng, band) + band, below(rng, band) + band * 2)
    };
    (
        Point::new(below(rng, first), y1),
        Point::new(below(rng, first) + end, y2),
    )
}

/// Bresenham line, thickened by also plotting ±1 and ±2 pixels along x
pub fn draw_beeline(canvas: &mut Canvas, from: Point, to: Point, color: Color) {
    let dx = (from.x - to.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x >= to.x { -1 } else { 1 };
    let sy = if from.y >= to.y { -1 } else { 1 };

    let mut err = dx - dy;
    let mut p = from;
    loop {
        for offset in -2..=2 {
            canvas.set(p.x + offset, p.y, color);
        }
        if p == to {
            return;
        }
        let e2 = err * 2;
        if e2 > -dy {
            err -= dy;
            p.x += sx;
        }
        if e2 < dx {
            err += dx;
            p.y += sy;
        }
    }
}

/// One pale sine stroke across the canvas with a `height / 20` shadow below
/// every point.
///
/// The period multiple is drawn from {0.6, 0.8, 1.0, 1.2, 1.4}; 0.6 and 1.2
/// flip the curve and move it down by half the height.
pub fn draw_sinusoidal_stroke<R: Rng>(canvas: &mut Canvas, rng: &mut R) {
    let width = canvas.width();
    let height = canvas.height();
    let first = width / 20;
    let end = first * 19;
    let color = Color::from_hex(HOLLOW_STROKE_RGB);

    let start = below(rng, first);
    let stop = below(rng, first) + end;

    let multiple = sine_multiple(below(rng, 5) + 3);
    let shadow = height / 20;

    for x in start..stop {
        let y = sine_y(x, width, height, multiple);
        for dy in 0..=shadow {
            canvas.set(x, y + dy, color);
        }
    }
}

/// `step / 5`, negated when `step * 2` is a multiple of 3 (steps 3 and 6)
fn sine_multiple(step: i32) -> f64 {
    let multiple = f64::from(step) / 5.0;
    if (step * 2) % 3 == 0 { -multiple } else { multiple }
}

/// Curve height at column `x`; negated curves sit `height / 2` lower
fn sine_y(x: i32, width: i32, height: i32, multiple: f64) -> i32 {
    let amplitude = f64::from(height / 3);
    let offset = if multiple < 0.0 { f64::from(height / 2) } else { 0.0 };
    ((f64::from(x) * PI * multiple / f64::from(width)).sin() * amplitude + offset) as i32
}

/// One-pixel frame around the whole canvas
pub fn draw_border(canvas: &mut Canvas, color: Color) {
    let (width, height) = canvas.image().dimensions();
    if width == 0 || height == 0 {
        return;
    }
    draw_hollow_rect_mut(
        canvas.image_mut(),
        Rect::at(0, 0).of_size(width, height),
        Rgba(color.channels()),
    );
}
