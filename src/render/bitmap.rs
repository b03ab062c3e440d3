// KujiraPixel
// copyright kujira project 2026

//! Owned pixel buffers and the geometric transform library.
//!
//! A `Bitmap` is a row-major vector of packed colors. Ownership is
//! move-by-value at API boundaries: the transforms allocate and return a new
//! bitmap and never mutate their input, and dropping a bitmap releases its
//! pixels. Transform intermediates made during a draw call are plain locals,
//! so they are released on every exit path.

use crate::render::color::{blend, Rgba};

#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Bitmap {
    /// A fully transparent buffer. A zero dimension yields an empty bitmap;
    /// drawing into or sampling an empty bitmap is a no-op.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width * height],
        }
    }

    /// Wrap a row-major pixel vector. `pixels.len()` must be width * height.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba>) -> Self {
        assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.pixels[y as usize * self.width + x as usize])
    }

    /// Overwrite one pixel; writes outside the buffer are ignored.
    pub fn put(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = color;
    }

    /// Blend one pixel through the color primitive; out of bounds is ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, src: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        blend(src, &mut self.pixels[y as usize * self.width + x as usize]);
    }

    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Copy all pixels from a same-sized bitmap.
    pub fn copy_from(&mut self, other: &Bitmap) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        self.pixels.copy_from_slice(&other.pixels);
    }

    /// Blend an axis-aligned rectangle, clipped to the buffer.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        let (mut x, mut y, mut w, mut h) = (x, y, w, h);
        if x < 0 {
            w += x;
            x = 0;
        }
        if y < 0 {
            h += y;
            y = 0;
        }
        w = w.min(self.width as i32 - x);
        h = h.min(self.height as i32 - y);
        for ry in 0..h.max(0) {
            let row = (y + ry) as usize * self.width;
            for rx in 0..w.max(0) {
                blend(color, &mut self.pixels[row + (x + rx) as usize]);
            }
        }
    }

    /// Nearest-neighbor resampling. New dimensions are
    /// floor(width * factor) x floor(height * factor); a factor small enough
    /// to floor to zero yields an empty bitmap. Non-integer factors alias,
    /// which is accepted behavior for this engine.
    pub fn scaled(&self, factor: f32) -> Bitmap {
        let sw = (self.width as f32 * factor).floor() as usize;
        let sh = (self.height as f32 * factor).floor() as usize;
        let mut out = Bitmap::new(sw, sh);
        if out.is_empty() || self.is_empty() {
            return out;
        }
        for y in 0..sh {
            let sy = y * self.height / sh;
            let src_row = sy * self.width;
            let dst_row = y * sw;
            for x in 0..sw {
                let sx = x * self.width / sw;
                out.pixels[dst_row + x] = self.pixels[src_row + sx];
            }
        }
        out
    }

    /// Inverse rotation about the bitmap's center onto a transparent canvas
    /// of the same size.
    ///
    /// Every destination pixel is mapped back into source space; a source
    /// point within one pixel of any edge is left untouched, so a rotation
    /// always loses a 1px border and never samples the boundary. Interior
    /// points are bilinearly interpolated on all four channels and written
    /// through the blend primitive, which anti-aliases edges against the
    /// transparent canvas.
    pub fn rotated(&self, angle: f32) -> Bitmap {
        let w = self.width;
        let h = self.height;
        let mut out = Bitmap::new(w, h);
        if self.is_empty() {
            return out;
        }
        let (angle_sin, angle_cos) = angle.sin_cos();
        let cx = w as f32 / 2.0;
        let cy = h as f32 / 2.0;
        for y in 0..h {
            let fy = y as f32 - cy;
            for x in 0..w {
                let fx = x as f32 - cx;
                let rx = fx * angle_cos - fy * angle_sin + cx;
                let ry = fx * angle_sin + fy * angle_cos + cy;
                if rx < 0.0 || ry < 0.0 || rx >= (w - 1) as f32 || ry >= (h - 1) as f32 {
                    continue;
                }
                let x0 = rx.floor() as usize;
                let x1 = rx.ceil() as usize;
                let y0 = ry.floor() as usize;
                let y1 = ry.ceil() as usize;
                let tl = self.pixels[y0 * w + x0];
                let tr = self.pixels[y0 * w + x1];
                let bl = self.pixels[y1 * w + x0];
                let br = self.pixels[y1 * w + x1];
                let dx = rx - rx.floor();
                let dy = ry - ry.floor();
                let lerp2 = |a: u8, b: u8, c: u8, d: u8| {
                    let top = (1.0 - dx) * a as f32 + dx * b as f32;
                    let bot = (1.0 - dx) * c as f32 + dx * d as f32;
                    ((1.0 - dy) * top + dy * bot).round() as u8
                };
                let color = Rgba::from_channels(
                    lerp2(tl.r(), tr.r(), bl.r(), br.r()),
                    lerp2(tl.g(), tr.g(), bl.g(), br.g()),
                    lerp2(tl.b(), tr.b(), bl.b(), br.b()),
                    lerp2(tl.a(), tr.a(), bl.a(), br.a()),
                );
                blend(color, &mut out.pixels[y * w + x]);
            }
        }
        out
    }

    /// Row-reversal copy.
    pub fn flipped_vertical(&self) -> Bitmap {
        let mut out = Bitmap::new(self.width, self.height);
        for y in 0..self.height {
            let src = y * self.width;
            let dst = (self.height - 1 - y) * self.width;
            out.pixels[dst..dst + self.width].copy_from_slice(&self.pixels[src..src + self.width]);
        }
        out
    }
}
