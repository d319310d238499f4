//! Deterministic simulation module
//!
//! All per-tick logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (used once, at setup)
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod bouncer;
pub mod collision;
pub mod shape;
pub mod state;
pub mod tick;

pub use bouncer::Bouncer;
pub use collision::{
    Aabb, Bounded, OverlapResult, WallHit, bounds_overlap, precise_overlap, wall_crossing,
};
pub use shape::Shape;
pub use state::{Arena, World};
pub use tick::{TickReport, tick};
