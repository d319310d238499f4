//! Example Bounce - a small fixed-timestep animation core
//!
//! Core modules:
//! - `sim`: Simulation state and per-tick update (bouncers, mover, grower)
//! - `input`: Key/click handling that mutates the shared world between ticks
//! - `driver`: Fixed-timestep accumulator fed by a host frame clock
//! - `snapshot`: Read-only view the render layer consumes each frame
//! - `assets`: Bouncer sprite loading with explicit degraded result
//! - `config`: Overridable defaults and validation

pub mod assets;
pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod sim;
pub mod snapshot;

pub use color::Color;
pub use config::Config;
pub use driver::Driver;
pub use error::{Result, SimError};

use glam::Vec2;

/// Default configuration constants
pub mod consts {
    /// Arena dimensions (square playfield)
    pub const ARENA_SIZE: f32 = 400.0;
    /// Target tick rate
    pub const FRAMES_PER_SECOND: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest real frame the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Bouncer defaults
    pub const NUM_BOUNCERS: usize = 5;
    pub const BOUNCER_MIN_SIZE: u32 = 20;
    pub const BOUNCER_MAX_SIZE: u32 = 40;
    /// Velocity component magnitude range (pixels/s), sign chosen at random
    pub const BOUNCER_MIN_SPEED: u32 = 1;
    pub const BOUNCER_MAX_SPEED: u32 = 60;
    pub const BOUNCER_IMAGE: &str = "resources/ball.gif";

    /// Mover defaults - sits above center, rotates counter-clockwise
    pub const MOVER_SIZE: f32 = 50.0;
    pub const MOVER_SPEED: f32 = 5.0;
    /// Degrees per tick (tied to tick count, not wall time)
    pub const MOVER_ROTATION_STEP: f32 = -1.0;

    /// Grower defaults - sits below center, grows when clicked
    pub const GROWER_SIZE: f32 = 50.0;
    pub const GROWER_RATE: f32 = 1.1;
}

/// Rotate `p` by `degrees` around `origin` (screen coordinates, y down)
#[inline]
pub fn rotate_about(p: Vec2, origin: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = p - origin;
    origin + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_about_quarter_turn() {
        let p = rotate_about(Vec2::new(1.0, 0.0), Vec2::ZERO, 90.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotate_about_origin_offset() {
        let origin = Vec2::new(10.0, 10.0);
        let p = rotate_about(Vec2::new(12.0, 10.0), origin, 180.0);
        assert!((p - Vec2::new(8.0, 10.0)).length() < 1e-4);
    }
}
