// KujiraPixel
// copyright kujira project 2026

//! Small shared vocabulary types (integer and float points)
//! and the RNG wrapper in rand.rs.

mod rand;
pub use rand::*;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct PointI32 {
    pub x: i32,
    pub y: i32,
}

impl PointI32 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF32 {
    pub x: f32,
    pub y: f32,
}

impl PointF32 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
