// KujiraPixel
// copyright kujira project 2026

//! Whale: a scrolling swim around a randomly generated tile sea.
//!
//! Runs a scripted headless demo by default; an embedding with a windowed
//! adapter drives the same model and render. Configuration comes from an
//! optional whale.toml next to the binary.

mod model;
mod render;

use kujira_pixel::{
    asset::load_image,
    config::GameConfig,
    event::KeySet,
    game::Game,
    log::init_log,
    render::{adapter::HeadlessAdapter, bitmap::Bitmap, color::Rgba},
};
use log::{info, warn};
use model::WhaleModel;
use rand::Rng;
use render::WhaleRender;
use std::io;

/// Fallback actor used when the sprite file is unavailable: a plain disc,
/// which the silhouette colorkey renders all black.
fn placeholder_sprite() -> Bitmap {
    let size = 64usize;
    let mut bm = Bitmap::new(size, size);
    let c = size as f32 / 2.0;
    let r = c - 2.0;
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            let dx = x as f32 - c;
            let dy = y as f32 - c;
            if dx * dx + dy * dy <= r * r {
                bm.put(x, y, Rgba::from_channels(60, 60, 120, 255));
            }
        }
    }
    bm
}

/// A short canned swim: right across the first scroll margin, a couple of
/// ripples, then back. The adapter quits once the script runs out.
fn demo_script() -> Vec<KeySet> {
    let mut script = Vec::new();
    for _ in 0..240 {
        script.push(KeySet::RIGHT);
    }
    script.push(KeySet::RIPPLE);
    for _ in 0..30 {
        script.push(KeySet::empty());
    }
    script.push(KeySet::RIPPLE);
    for _ in 0..120 {
        script.push(KeySet::DOWN);
    }
    for _ in 0..60 {
        script.push(KeySet::empty());
    }
    script
}

fn main() -> io::Result<()> {
    let config = GameConfig::load("whale.toml")?;
    init_log(log::LevelFilter::Info, &config.log_path);

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!("whale starting, seed {}", seed);

    let sprite = load_image(&config.sprite_path).unwrap_or_else(|e| {
        warn!("sprite {} unavailable ({}), using placeholder", config.sprite_path, e);
        placeholder_sprite()
    });

    let adapter = HeadlessAdapter::with_script(demo_script());
    let mut game = Game::new(
        WhaleModel::new(),
        WhaleRender::new(sprite),
        Box::new(adapter),
    );
    game.context.rand.srand(seed);
    game.init();
    game.run()
}
