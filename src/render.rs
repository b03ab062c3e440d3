// KujiraPixel
// copyright kujira project 2026

//! Render module. All drawing is software pixel manipulation over packed-RGBA
//! buffers; the adapter submodule is the only place the platform shows up.
//!
//! color: packed color and the blending primitive.
//! bitmap: owned pixel buffers, rect fills and the rotate/scale/flip library.
//! sprite: the one-actor compositor with the silhouette colorkey rule.
//! scroll: camera kinematics and the double-buffered world view.
//! ripple: pool of transient ring effects.
//! adapter: present/input boundary, with a headless implementation.

pub mod adapter;
pub mod bitmap;
pub mod color;
pub mod ripple;
pub mod scroll;
pub mod sprite;
