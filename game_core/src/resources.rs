use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Drawing surface size, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Directional keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

impl Key {
    /// Map a `KeyboardEvent.key` value. Anything else is ignored.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            _ => None,
        }
    }
}

/// Held state of the directional keys (level-triggered)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Up => self.up = pressed,
            Key::Down => self.down = pressed,
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
        }
    }

    /// Record a key press by name. Returns whether the key is one we track.
    pub fn press(&mut self, name: &str) -> bool {
        self.apply(name, true)
    }

    /// Record a key release by name. Returns whether the key is one we track.
    pub fn release(&mut self, name: &str) -> bool {
        self.apply(name, false)
    }

    fn apply(&mut self, name: &str, pressed: bool) -> bool {
        match Key::from_key_name(name) {
            Some(key) => {
                self.set(key, pressed);
                true
            }
            None => false,
        }
    }
}

/// Events that occurred during the last update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_bounces: u32,
    pub paddle_hits: u32,
    pub resets: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
