// KujiraPixel
// copyright kujira project 2026

//! KujiraPixel is a small software-rendering 2D engine for scrolling tile
//! worlds. Every pixel of a frame is computed on the CPU into a packed-RGBA
//! [`render::bitmap::Bitmap`]; the only platform dependency is a final blit of
//! that buffer through the [`render::adapter::Adapter`] boundary.
//!
//! The engine is deliberately specialized: one moving actor (the sprite
//! compositor in `render::sprite`), a sparse walkable tile world with
//! logarithmic point queries (`world`), a double-buffered scroll compositor
//! (`render::scroll`) and a fixed-capacity pool of transient ripple effects
//! (`render::ripple`). It is not a scene graph and not a GPU pipeline.
//!
//! Games are wired up as a Model (logic) plus a Render (drawing) driven by
//! the fixed-timestep loop in `game`, see `apps/whale` for the reference
//! application.

/// framerate per second, the fixed timestep of the main loop
pub const GAME_FRAME: u32 = 60;

/// edge length of one world tile in pixels
pub const TILE_SIZE: i32 = 48;

/// display surface size in pixels
pub const DISPLAY_PW: i32 = 960;
pub const DISPLAY_PH: i32 = 540;

/// display size in whole tiles
pub const DISPLAY_TW: i32 = DISPLAY_PW / TILE_SIZE;
pub const DISPLAY_TH: i32 = DISPLAY_PH / TILE_SIZE;

/// number of walkable tiles generated per world
pub const MAP_LENGTH: usize = 2000;

/// world bounding box, tiles live in ±MAP_WIDTH/2 x ±MAP_HEIGHT/2
pub const MAP_WIDTH: i32 = 2000;
pub const MAP_HEIGHT: i32 = 2000;

/// distance of one camera scroll transition, in tiles and in pixels
pub const SCROLL_TW: i32 = DISPLAY_TW - 5;
pub const SCROLL_TH: i32 = DISPLAY_TH - 5;
pub const SCROLL_PW: i32 = SCROLL_TW * TILE_SIZE;
pub const SCROLL_PH: i32 = SCROLL_TH * TILE_SIZE;

/// sprite image decoding
pub mod asset;

/// run configuration loaded from an optional TOML file
pub mod config;

/// public per-run state: frame counter, RNG, key snapshots, adapter
pub mod context;

/// key-state snapshots and the model-to-render event center
pub mod event;

/// Model and Render traits plus the fixed-timestep main loop
pub mod game;

/// log
pub mod log;

/// Render module:
/// color: the packed-color blending primitive.
/// bitmap: owned pixel buffers and the geometric transforms.
/// sprite: the one-actor sprite compositor.
/// scroll: camera kinematics and the double-buffered world view.
/// ripple: the transient ring-effect pool.
/// adapter: present/input boundary to the platform.
pub mod render;

/// common tools: points and the RNG wrapper
pub mod util;

/// the sparse tile-world index and its generator
pub mod world;
