// KujiraPixel
// copyright kujira project 2026

//! Context is the per-run state shared by model and render: the frame
//! counter, the quit latch, the RNG, the key snapshots and the platform
//! adapter. It is created by [`crate::game::Game`] and threaded through
//! every update call.

use crate::{event::KeySnapshot, render::adapter::Adapter, util::Rand};

pub struct Context {
    /// frames elapsed since the run started
    pub stage: u32,
    /// set by the model to end the main loop after the current frame
    pub quit: bool,
    pub rand: Rand,
    pub keys: KeySnapshot,
    pub adapter: Box<dyn Adapter>,
}

impl Context {
    pub fn new(adapter: Box<dyn Adapter>) -> Self {
        Self {
            stage: 0,
            quit: false,
            rand: Rand::new(),
            keys: KeySnapshot::default(),
            adapter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::adapter::HeadlessAdapter;

    #[test]
    fn fresh_context_is_idle() {
        let ctx = Context::new(Box::new(HeadlessAdapter::new()));
        assert_eq!(ctx.stage, 0);
        assert!(!ctx.quit);
        assert!(ctx.keys.current.is_empty());
    }
}
