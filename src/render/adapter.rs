// KujiraPixel
// copyright kujira project 2026

//! Boundary to the platform. The engine computes whole frames in software;
//! everything the platform must provide is one call to read current key
//! states and one call to present a finished pixel buffer. Window management,
//! real keyboards and vsync live behind this trait and are supplied by the
//! embedding application.

use crate::{event::KeySet, render::bitmap::Bitmap};
use std::io;

pub trait Adapter {
    /// Level-triggered key-state snapshot, polled once per frame before the
    /// model updates.
    fn poll_keys(&mut self) -> KeySet;

    /// Blit a fully-computed frame to the screen. Called once per frame after
    /// all drawing; the engine does not inspect any result beyond failure.
    fn present(&mut self, frame: &Bitmap) -> io::Result<()>;
}

/// Adapter for tests, CI and scripted demo runs: plays back a canned key
/// feed and discards presented frames. When the script runs out it reports
/// the quit key, so a headless game always terminates.
#[derive(Default)]
pub struct HeadlessAdapter {
    script: Vec<KeySet>,
    pos: usize,
    pub presented: usize,
}

impl HeadlessAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(script: Vec<KeySet>) -> Self {
        Self {
            script,
            pos: 0,
            presented: 0,
        }
    }
}

impl Adapter for HeadlessAdapter {
    fn poll_keys(&mut self) -> KeySet {
        let keys = self.script.get(self.pos).copied().unwrap_or(KeySet::QUIT);
        self.pos += 1;
        keys
    }

    fn present(&mut self, _frame: &Bitmap) -> io::Result<()> {
        self.presented += 1;
        Ok(())
    }
}
