//! Input handling
//!
//! Host event dispatch hands each key press or click to an `InputHandler`
//! along with the world. Handlers run between ticks, never during one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::sim::World;

/// Keys the handler understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Anything else; always ignored
    Other,
}

impl Key {
    /// Map a host key name ("ArrowUp", "UP", "left"...) to a key
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "up" | "arrowup" => Key::Up,
            "down" | "arrowdown" => Key::Down,
            "left" | "arrowleft" => Key::Left,
            "right" | "arrowright" => Key::Right,
            _ => Key::Other,
        }
    }
}

/// A discrete input event in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Key(Key),
    Click { x: f32, y: f32 },
}

/// Translates input events into mover/grower mutations
#[derive(Debug, Clone, Copy)]
pub struct InputHandler {
    /// Pixels per key press
    step: f32,
    /// Scale multiplier per click
    growth: f32,
    horizontal: bool,
    uniform: bool,
}

impl InputHandler {
    pub fn new(config: &Config) -> Self {
        Self {
            step: config.mover_speed,
            growth: config.grower_rate,
            horizontal: config.mover_horizontal,
            uniform: config.grower_uniform,
        }
    }

    /// Dispatch one event; returns whether it changed the world
    pub fn handle(&self, world: &mut World, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.on_key(world, key),
            InputEvent::Click { x, y } => self.on_click(world, x, y),
        }
    }

    /// Up/down move the mover by a fixed step. Left/right only when the
    /// horizontal extension is enabled.
    pub fn on_key(&self, world: &mut World, key: Key) -> bool {
        let delta = match key {
            Key::Up => Vec2::new(0.0, -self.step),
            Key::Down => Vec2::new(0.0, self.step),
            Key::Left if self.horizontal => Vec2::new(-self.step, 0.0),
            Key::Right if self.horizontal => Vec2::new(self.step, 0.0),
            _ => return false,
        };
        world.mover.translate(delta);
        true
    }

    /// A click inside the grower multiplies its x scale (both axes when the
    /// uniform extension is enabled). Growth is unbounded.
    pub fn on_click(&self, world: &mut World, x: f32, y: f32) -> bool {
        if !world.grower.contains(Vec2::new(x, y)) {
            return false;
        }
        let factor = if self.uniform {
            Vec2::splat(self.growth)
        } else {
            Vec2::new(self.growth, 1.0)
        };
        world.grower.grow(factor);
        log::debug!("Grower scale now {:?}", world.grower.scale);
        true
    }
}
