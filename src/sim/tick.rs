//! Fixed timestep simulation tick
//!
//! Order within a tick matters: collision checks see post-move, pre-bounce
//! positions.

use super::collision::{bounds_overlap, precise_overlap};
use super::state::{Arena, World};

/// What a tick changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Mover and grower share area
    pub mover_highlighted: bool,
    /// At least one bouncer overlaps the grower's bounds
    pub grower_highlighted: bool,
    /// Bouncers whose velocity was reflected this tick
    pub wall_hits: usize,
}

/// Advance the world by one step of `dt` seconds
pub fn tick(world: &mut World, dt: f32) -> TickReport {
    world.time_ticks += 1;

    for bouncer in &mut world.bouncers {
        bouncer.advance(dt);
    }

    // Fixed step per tick, independent of dt
    world.mover.rotate_by(world.mover_spin);

    // Shapes can be checked exactly
    let overlap = precise_overlap(&world.mover.corners(), &world.grower.corners());
    world.mover.highlighted = overlap.overlaps;

    // Sprites only by bounding box
    let hit = world
        .bouncers
        .iter()
        .any(|b| bounds_overlap(&world.grower, b));
    world.grower.highlighted = hit;

    let Arena { width, height } = world.arena;
    let mut wall_hits = 0;
    for bouncer in &mut world.bouncers {
        if bouncer.bounce(width, height).any() {
            wall_hits += 1;
        }
    }

    // Ensure deterministic ordering
    world.normalize_order();

    TickReport {
        mover_highlighted: world.mover.highlighted,
        grower_highlighted: world.grower.highlighted,
        wall_hits,
    }
}
