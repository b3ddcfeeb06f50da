//! Owned RGBA pixel buffer shared by every pipeline stage of one call.

use image::{Rgba, RgbaImage};
use imageproc::pixelops::interpolate;
use inkblot_common::Color;

/// A width × height RGBA buffer. Writes outside the bounds are ignored.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> i32 {
        i32::try_from(self.image.width()).unwrap_or(i32::MAX)
    }

    pub fn height(&self) -> i32 {
        i32::try_from(self.image.height()).unwrap_or(i32::MAX)
    }

    /// Number of pixels
    pub fn area(&self) -> u64 {
        u64::from(self.image.width()) * u64::from(self.image.height())
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width()).contains(&x) && (0..self.height()).contains(&y)
    }

    /// Overwrite one pixel
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if self.contains(x, y) {
            self.image.put_pixel(x as u32, y as u32, Rgba(color.channels()));
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if !self.contains(x, y) {
            return None;
        }
        let Rgba([r, g, b, a]) = *self.image.get_pixel(x as u32, y as u32);
        Some(Color { r, g, b, a })
    }

    /// Mix `color` into the pixel weighted by `coverage` in [0, 1]
    pub fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if !self.contains(x, y) || coverage <= 0.0 {
            return;
        }
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        *pixel = interpolate(Rgba(color.channels()), *pixel, coverage.min(1.0));
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        let rgba = Rgba(color.channels());
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
