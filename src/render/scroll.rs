// KujiraPixel
// copyright kujira project 2026

//! The scrolling world renderer: camera kinematics plus the double-buffered
//! view of the tile world.
//!
//! Repainting the visible tile region is expensive, so it happens only at the
//! instant a scroll transition is triggered (`ScrollView::rebuild`). The
//! per-frame work (`ScrollView::composite`) is a cheap copy: while the camera
//! is mid-scroll every frame pixel is read from the outgoing view offset by
//! the camera's sub-tile position, and reads that fall outside the outgoing
//! view wrap into the incoming view by the scroll span, so the new view
//! slides in from the edge the camera moves toward.

use crate::{
    render::{bitmap::Bitmap, color::Rgba},
    util::{PointF32, PointI32},
    world::WorldIndex,
    DISPLAY_PH, DISPLAY_PW, DISPLAY_TH, DISPLAY_TW, SCROLL_PH, SCROLL_PW, SCROLL_TH, SCROLL_TW,
    TILE_SIZE,
};

/// Ground fill behind the tiles.
pub const BACKGROUND_FILL: Rgba = Rgba(0xeb9b_34ff);
/// Drop-shadow rectangle drawn under each walkable tile.
pub const TILE_SHADOW: Rgba = Rgba(0x0000_00ff);
/// Face color of a walkable tile.
pub const TILE_FACE: Rgba = Rgba(0x4f4f_9fff);

/// seconds a scroll transition takes to cover one span
const SCROLL_DURATION: f32 = 0.75;

/// how close to the display edge (in tiles) the actor may get before the
/// camera starts scrolling
const EDGE_TW: i32 = DISPLAY_TW / 2 - 2;
const EDGE_TH: i32 = DISPLAY_TH / 2 - 2;

/// The palette values other components must treat as "background, keep out".
/// Passed into the ripple system instead of being hardcoded there, so the two
/// stay in sync if the palette changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColorKeys {
    pub fill: Rgba,
    pub shadow: Rgba,
}

impl Default for BackgroundColorKeys {
    fn default() -> Self {
        Self {
            fill: BACKGROUND_FILL,
            shadow: TILE_SHADOW,
        }
    }
}

/// Tile-grid camera. Stationary exactly while `tile == dest_tile`; a scroll
/// transition moves one axis at a time by a full scroll span with a symmetric
/// accelerate-then-decelerate profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    pub tile: PointI32,
    pub dest_tile: PointI32,
    pub pixel: PointF32,
    pub velocity: PointF32,
    pub accel: PointF32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolling(&self) -> bool {
        self.tile != self.dest_tile
    }

    /// Edge-trigger policy. When stationary and the actor's tile departs from
    /// the camera tile by more than the edge margin on some axis, pick a
    /// destination one scroll span away on that axis and assign the constant
    /// acceleration that covers the span in `SCROLL_DURATION` seconds
    /// (accel = 2·distance/duration²).
    ///
    /// Returns true when a transition starts; the caller must rebuild the
    /// scroll view at that instant.
    pub fn track(&mut self, actor_tile: PointI32) -> bool {
        if self.is_scrolling() {
            return false;
        }
        let accel_x = (2.0 * SCROLL_PW as f32) / (SCROLL_DURATION * SCROLL_DURATION);
        let accel_y = (2.0 * SCROLL_PH as f32) / (SCROLL_DURATION * SCROLL_DURATION);
        let dx = actor_tile.x - self.tile.x;
        let dy = actor_tile.y - self.tile.y;
        if dx < -EDGE_TW {
            self.accel.x = -accel_x;
            self.dest_tile.x = self.tile.x - SCROLL_TW;
        } else if dx >= EDGE_TW {
            self.accel.x = accel_x;
            self.dest_tile.x = self.tile.x + SCROLL_TW;
        } else if dy < -EDGE_TH {
            self.accel.y = -accel_y;
            self.dest_tile.y = self.tile.y - SCROLL_TH;
        } else if dy >= EDGE_TH {
            self.accel.y = accel_y;
            self.dest_tile.y = self.tile.y + SCROLL_TH;
        } else {
            return false;
        }
        true
    }

    /// Integrate one timestep of a scroll in progress: accelerate up to the
    /// half-span point, decelerate after it, and snap to the destination
    /// (discarding residual overshoot) once the full span is covered.
    pub fn update(&mut self, dt: f32) {
        if self.dest_tile.x != self.tile.x {
            let half = SCROLL_PW as f32 / 2.0;
            if self.pixel.x > half || self.pixel.x < -half {
                self.velocity.x -= self.accel.x * dt;
            } else {
                self.velocity.x += self.accel.x * dt;
            }
            self.pixel.x += self.velocity.x * dt;
            if self.pixel.x >= SCROLL_PW as f32 {
                self.velocity.x = 0.0;
                self.pixel.x = 0.0;
                self.tile.x += SCROLL_TW;
            } else if self.pixel.x < -(SCROLL_PW as f32) {
                self.velocity.x = 0.0;
                self.pixel.x = 0.0;
                self.tile.x -= SCROLL_TW;
            }
        } else if self.dest_tile.y != self.tile.y {
            let half = SCROLL_PH as f32 / 2.0;
            if self.pixel.y > half || self.pixel.y < -half {
                self.velocity.y -= self.accel.y * dt;
            } else {
                self.velocity.y += self.accel.y * dt;
            }
            self.pixel.y += self.velocity.y * dt;
            if self.pixel.y >= SCROLL_PH as f32 {
                self.velocity.y = 0.0;
                self.pixel.y = 0.0;
                self.tile.y += SCROLL_TH;
            } else if self.pixel.y < -(SCROLL_PH as f32) {
                self.velocity.y = 0.0;
                self.pixel.y = 0.0;
                self.tile.y -= SCROLL_TH;
            }
        }
    }
}

/// Two display-sized pre-rendered views of the world. "new" always holds the
/// view around the camera's destination tile; "old" holds the view being
/// scrolled away from. They swap contents only when a scroll begins.
pub struct ScrollView {
    old: Bitmap,
    new: Bitmap,
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollView {
    pub fn new() -> Self {
        Self {
            old: Bitmap::new(DISPLAY_PW as usize, DISPLAY_PH as usize),
            new: Bitmap::new(DISPLAY_PW as usize, DISPLAY_PH as usize),
        }
    }

    pub fn color_keys(&self) -> BackgroundColorKeys {
        BackgroundColorKeys::default()
    }

    /// Repaint the "new" view around `dest_tile`, retiring the previous view
    /// into "old". Expensive; call only when a scroll is triggered (or once
    /// at startup), never per frame.
    pub fn rebuild(&mut self, world: &WorldIndex, dest_tile: PointI32) {
        self.old.copy_from(&self.new);
        self.new.fill(BACKGROUND_FILL);
        let center_x = DISPLAY_TW / 2;
        let center_y = DISPLAY_TH / 2;
        let mut py = 0;
        for ty in (dest_tile.y - center_y)..(dest_tile.y + center_y + 2) {
            let mut px = 0;
            for tx in (dest_tile.x - center_x)..(dest_tile.x + center_x + 1) {
                if world.is_walkable(tx, ty) {
                    self.new.draw_rect(px, py, TILE_SIZE, TILE_SIZE, TILE_SHADOW);
                    self.new
                        .draw_rect(px - 2, py - 2, TILE_SIZE - 2, TILE_SIZE - 2, TILE_FACE);
                }
                px += TILE_SIZE;
            }
            py += TILE_SIZE;
        }
    }

    /// Write the background for this frame into `frame`. Cheap; runs every
    /// frame. Stationary camera: straight copy of the "new" view. Mid-scroll:
    /// read "old" offset by the camera's pixel position, wrapping reads that
    /// leave the old view's extent into "new", shifted by the scroll span on
    /// the scrolled axis.
    pub fn composite(&self, camera: &Camera, frame: &mut Bitmap) {
        if !camera.is_scrolling() {
            frame.copy_from(&self.new);
            return;
        }
        let min_x = camera.pixel.x as i32;
        let min_y = camera.pixel.y as i32;
        for y in min_y..min_y + DISPLAY_PH {
            for x in min_x..min_x + DISPLAY_PW {
                let (src, sx, sy) = if x < 0 {
                    (&self.new, x + SCROLL_PW, y)
                } else if x >= DISPLAY_PW {
                    (&self.new, x - SCROLL_PW, y)
                } else if y < 0 {
                    (&self.new, x, y + SCROLL_PH)
                } else if y >= DISPLAY_PH {
                    (&self.new, x, y - SCROLL_PH)
                } else {
                    (&self.old, x, y)
                };
                let color = src.get(sx, sy).unwrap_or(Rgba::TRANSPARENT);
                frame.put(x - min_x, y - min_y, color);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn buffers_mut(&mut self) -> (&mut Bitmap, &mut Bitmap) {
        (&mut self.old, &mut self.new)
    }
}
