//! Software palette raster
//!
//! One byte per pixel holding a `PaletteIndex`. Primitives snap their
//! coordinates to the nearest pixel and clip against the surface bounds.

use std::io::Write;
use std::path::Path;

use glam::DVec2;

use super::palette::{Palette, Rgb};
use super::{EngineError, PaletteIndex, Surface};

/// Palette-indexed pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidSurfaceSize { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        })
    }

    /// Pixel at (x, y), or `None` outside the surface
    pub fn pixel(&self, x: i64, y: i64) -> Option<PaletteIndex> {
        self.index_of(x, y).map(|i| PaletteIndex(self.pixels[i]))
    }

    /// Number of pixels currently holding `color`
    pub fn count(&self, color: PaletteIndex) -> usize {
        self.pixels.iter().filter(|&&p| p == color.0).count()
    }

    /// Resolve every pixel through `palette`
    pub fn to_rgb(&self, palette: &Palette) -> Vec<Rgb> {
        self.pixels
            .iter()
            .map(|&p| palette.rgb(PaletteIndex(p)))
            .collect()
    }

    /// Write the frame as a binary PPM (P6) image
    pub fn write_ppm(&self, path: &Path, palette: &Palette) -> Result<(), EngineError> {
        let rgb = self.to_rgb(palette);
        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        write!(file, "P6\n{} {}\n255\n", self.width, self.height)?;
        file.write_all(bytemuck::cast_slice(&rgb))?;
        file.flush()?;
        Ok(())
    }

    /// One character per pixel: `.` for index 0, hex digit otherwise
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.pixels.len() + self.height as usize);
        for row in self.pixels.chunks(self.width as usize) {
            for &p in row {
                out.push(match p {
                    0 => '.',
                    p => char::from_digit(u32::from(p) % 16, 16).unwrap_or('?'),
                });
            }
            out.push('\n');
        }
        out
    }

    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn fill_span(&mut self, y: i64, x0: i64, x1: i64, color: PaletteIndex) {
        if y < 0 || y >= i64::from(self.height) {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(i64::from(self.width) - 1);
        if x0 > x1 {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + x0 as usize..=row + x1 as usize].fill(color.0);
    }
}

/// Snap a coordinate to the nearest pixel
#[inline]
fn snap(v: f64) -> i64 {
    v.round() as i64
}

impl Surface for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: PaletteIndex) {
        self.pixels.fill(color.0);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: PaletteIndex) {
        if radius.is_nan() || radius < 0.0 || !center.is_finite() {
            return;
        }
        // Snapped values saturate at the i64 bounds, so all offsets do too
        let (cx, cy) = (snap(center.x), snap(center.y));
        let r2 = radius * radius;
        let reach = radius.floor() as i64;
        let top = cy.saturating_sub(reach).max(0);
        let bottom = cy.saturating_add(reach).min(i64::from(self.height) - 1);
        for y in top..=bottom {
            // Widest dx with dx² + dy² <= r²
            let dy = y as f64 - cy as f64;
            let half = (r2 - dy * dy).max(0.0).sqrt().floor() as i64;
            self.fill_span(y, cx.saturating_sub(half), cx.saturating_add(half), color);
        }
    }

    fn fill_rect(&mut self, min: DVec2, max: DVec2, color: PaletteIndex) {
        if !min.is_finite() || !max.is_finite() {
            return;
        }
        let (x0, x1) = (snap(min.x.min(max.x)), snap(min.x.max(max.x)));
        let (y0, y1) = (snap(min.y.min(max.y)), snap(min.y.max(max.y)));
        for y in y0.max(0)..=y1.min(i64::from(self.height) - 1) {
            self.fill_span(y, x0, x1, color);
        }
    }
}
