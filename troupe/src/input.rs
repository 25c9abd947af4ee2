//! # Input
//!
//! A per-frame snapshot of the keyboard. Actors read the snapshot instead of querying macroquad directly, which keeps every update deterministic for a given snapshot and lets tests drive input without a window.

use macroquad::input::{is_key_down, is_key_pressed, KeyCode};

/// Keys the chapters use. [InputState::capture] only looks at these.
pub const WATCHED_KEYS: &[KeyCode] = &[
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::I,
    KeyCode::K,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Space,
    KeyCode::Escape,
];

#[derive(Clone, Default, Debug)]
pub struct InputState {
    held: Vec<KeyCode>,
    pressed: Vec<KeyCode>,
}

impl InputState {
    /// Reads the current keyboard state from macroquad.
    pub fn capture() -> Self {
        let mut state = Self::default();
        for key in WATCHED_KEYS.iter().copied() {
            if is_key_down(key) {
                state.held.push(key);
            }
            if is_key_pressed(key) {
                state.pressed.push(key);
            }
        }
        state
    }

    /// A snapshot with the given keys held and just pressed.
    pub fn from_held(keys: &[KeyCode]) -> Self {
        Self {
            held: keys.to_vec(),
            pressed: keys.to_vec(),
        }
    }

    /// Held since an earlier frame: down, but not pressed this frame.
    pub fn from_repeat(keys: &[KeyCode]) -> Self {
        Self {
            held: keys.to_vec(),
            pressed: Vec::new(),
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    pub fn was_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// -1.0, 0.0, or 1.0 depending on which of the two keys are held.
    pub fn axis(&self, negative: KeyCode, positive: KeyCode) -> f32 {
        let mut value = 0.0;
        if self.is_held(negative) {
            value -= 1.0;
        }
        if self.is_held(positive) {
            value += 1.0;
        }
        value
    }
}
