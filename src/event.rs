// KujiraPixel
// copyright kujira project 2026

//! Input arrives as one level-triggered key-state snapshot per frame rather
//! than as an event stream; edge detection (press vs. hold) is done by
//! comparing against the previous frame's snapshot.
//!
//! The module also hosts a small global event center used to decouple the
//! model from the render: the model emits a named event (for example when a
//! camera scroll begins and the world view must be repainted) and the render
//! consumes it on its next update.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::HashMap};

bitflags! {
    /// Key states sampled once per frame through the adapter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct KeySet: u8 {
        const UP       = 0b0000_0001;
        const DOWN     = 0b0000_0010;
        const LEFT     = 0b0000_0100;
        const RIGHT    = 0b0000_1000;
        const ACTION_A = 0b0001_0000;
        const ACTION_B = 0b0010_0000;
        const QUIT     = 0b0100_0000;
        const RIPPLE   = 0b1000_0000;
    }
}

/// Current and previous frame key snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeySnapshot {
    pub current: KeySet,
    pub previous: KeySet,
}

impl KeySnapshot {
    /// Rotate in the snapshot polled for the new frame.
    pub fn advance(&mut self, next: KeySet) {
        self.previous = self.current;
        self.current = next;
    }

    /// Level-triggered: true while the key is down.
    pub fn held(&self, keys: KeySet) -> bool {
        self.current.contains(keys)
    }

    /// Edge-triggered: true only on the frame the key went down.
    pub fn pressed(&self, keys: KeySet) -> bool {
        self.current.contains(keys) && !self.previous.contains(keys)
    }
}

thread_local! {
    static EVENT_CENTER: RefCell<HashMap<String, HashMap<String, bool>>> =
        RefCell::new(HashMap::new());
}

/// Register interest of `func` in `event`. A consumer must register before
/// emits become visible to it.
pub fn event_register(event: &str, func: &str) {
    EVENT_CENTER.with(|ec| {
        ec.borrow_mut()
            .entry(event.to_string())
            .or_default()
            .insert(func.to_string(), false);
    });
}

/// Mark `event` pending for every registered consumer.
pub fn event_emit(event: &str) {
    EVENT_CENTER.with(|ec| {
        if let Some(ht) = ec.borrow_mut().get_mut(event) {
            for flag in ht.values_mut() {
                *flag = true;
            }
        }
    });
}

/// Consume a pending `event` for `func`. Returns true at most once per emit.
pub fn event_check(event: &str, func: &str) -> bool {
    EVENT_CENTER.with(|ec| {
        if let Some(flag) = ec
            .borrow_mut()
            .get_mut(event)
            .and_then(|ht| ht.get_mut(func))
        {
            if *flag {
                *flag = false;
                return true;
            }
        }
        false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_edge_triggered() {
        let mut snap = KeySnapshot::default();
        snap.advance(KeySet::RIPPLE);
        assert!(snap.pressed(KeySet::RIPPLE));
        assert!(snap.held(KeySet::RIPPLE));

        // still held on the next frame, no longer a press
        snap.advance(KeySet::RIPPLE);
        assert!(!snap.pressed(KeySet::RIPPLE));
        assert!(snap.held(KeySet::RIPPLE));

        snap.advance(KeySet::empty());
        assert!(!snap.held(KeySet::RIPPLE));
    }

    #[test]
    fn event_emit_consumed_once() {
        event_register("test.rebuild", "draw");
        assert!(!event_check("test.rebuild", "draw"));

        event_emit("test.rebuild");
        assert!(event_check("test.rebuild", "draw"));
        assert!(!event_check("test.rebuild", "draw"));
    }

    #[test]
    fn emit_without_registration_is_ignored() {
        event_emit("test.nobody");
        assert!(!event_check("test.nobody", "draw"));
    }
}
