// KujiraPixel
// copyright kujira project 2026

//! The transient ripple effect: a feathered expanding ring drawn into a small
//! per-effect bitmap and composited over non-tile background only.
//!
//! Ripples live in a fixed pool of five slots managed as a ring buffer. A
//! spawn unconditionally claims the slot under the write cursor; if that slot
//! still holds a live ripple it is dropped first, so rapid spawns can cut an
//! effect short but never leak its bitmap.

use crate::{
    render::{bitmap::Bitmap, color::Rgba, scroll::BackgroundColorKeys, scroll::Camera},
    util::PointI32,
    DISPLAY_TH, DISPLAY_TW, TILE_SIZE,
};
use std::f32::consts::PI;

pub const RIPPLE_POOL: usize = 5;

/// side of a ripple's local bitmap in pixels
const RIPPLE_EXTENT: i32 = 100;
/// base ring color (alpha filled in per ring line)
const RING_RGB: u32 = 0x6f6fbf;
/// angular step when plotting ring points
const RING_STEP: f32 = 0.01;
/// per-frame growth and fade
const RADIUS_DELTA: f32 = 1.0;
const ALPHA_DELTA: f32 = 0.03;

#[derive(Debug)]
pub struct Ripple {
    bitmap: Bitmap,
    pub radius: f32,
    pub alpha: f32,
    pub world_tile: PointI32,
}

impl Ripple {
    fn new(world_tile: PointI32) -> Self {
        Self {
            bitmap: Bitmap::new(RIPPLE_EXTENT as usize, RIPPLE_EXTENT as usize),
            radius: 20.0,
            alpha: 1.0,
            world_tile,
        }
    }

    /// One frame of life: grow, fade, repaint the local bitmap and composite
    /// it onto `frame`. Returns true once the ring has outgrown the bitmap's
    /// usable half-extent and the ripple should be retired.
    fn advance_and_draw(
        &mut self,
        camera: &Camera,
        keys: BackgroundColorKeys,
        frame: &mut Bitmap,
    ) -> bool {
        self.bitmap.fill(Rgba::TRANSPARENT);
        let cx = RIPPLE_EXTENT as f32 / 2.0;
        let cy = RIPPLE_EXTENT as f32 / 2.0;

        let screen_x = (self.world_tile.x - camera.tile.x + DISPLAY_TW / 2) * TILE_SIZE
            - RIPPLE_EXTENT / 2
            + TILE_SIZE / 2
            - camera.pixel.x as i32;
        let screen_y = (self.world_tile.y - camera.tile.y + DISPLAY_TH / 2) * TILE_SIZE
            - RIPPLE_EXTENT / 2
            + TILE_SIZE / 2
            - camera.pixel.y as i32;

        self.radius += RADIUS_DELTA;
        self.alpha -= ALPHA_DELTA;

        // four ring pairs feather the gradient from the outside in
        let mut sub_alpha = 1.0f32;
        for line in 0..4 {
            let a = (self.alpha * 255.0 * sub_alpha).max(0.0) as u32;
            let color = Rgba(RING_RGB << 8 | (a & 0xff));
            sub_alpha -= 0.2;
            let mut angle = 0.0f32;
            while angle < 2.0 * PI {
                for r in [self.radius + line as f32, self.radius - line as f32] {
                    let x = cx + r * angle.cos();
                    let y = cy + r * angle.sin();
                    // direct overwrite, no blending at this stage
                    self.bitmap.put(x as i32, y as i32, color);
                }
                angle += RING_STEP;
            }
        }

        // composite over the frame, keeping out of tile artwork: destination
        // pixels matching either background colorkey are skipped
        for y in 0..RIPPLE_EXTENT {
            for x in 0..RIPPLE_EXTENT {
                let fx = screen_x + x;
                let fy = screen_y + y;
                let Some(dest) = frame.get(fx, fy) else {
                    continue;
                };
                if dest == keys.fill || dest == keys.shadow {
                    continue;
                }
                if let Some(src) = self.bitmap.get(x, y) {
                    frame.blend_pixel(fx, fy, src);
                }
            }
        }

        self.radius >= (RIPPLE_EXTENT as f32 - 5.0) / 2.0
    }
}

/// Fixed-capacity ripple pool with a wrapping write cursor.
#[derive(Default)]
pub struct RipplePool {
    slots: [Option<Ripple>; RIPPLE_POOL],
    cursor: usize,
}

impl RipplePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot under the cursor for a new ripple centered on
    /// `world_tile`. Returns the ripple it displaced, if the slot was still
    /// live, so a cut-short effect is released exactly once.
    pub fn spawn(&mut self, world_tile: PointI32) -> Option<Ripple> {
        let evicted = self.slots[self.cursor].replace(Ripple::new(world_tile));
        self.cursor = (self.cursor + 1) % RIPPLE_POOL;
        evicted
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn slots(&self) -> &[Option<Ripple>] {
        &self.slots
    }

    /// Advance and draw every live ripple, retiring the ones that finished.
    pub fn advance_and_draw(
        &mut self,
        camera: &Camera,
        keys: BackgroundColorKeys,
        frame: &mut Bitmap,
    ) {
        for slot in &mut self.slots {
            let finished = match slot {
                Some(ripple) => ripple.advance_and_draw(camera, keys, frame),
                None => false,
            };
            if finished {
                *slot = None;
            }
        }
    }
}
