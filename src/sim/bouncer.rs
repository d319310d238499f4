//! Bouncer entity: a fixed-size square sprite moving at constant velocity
//! and reflecting off the arena walls.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Bounded, WallHit, wall_crossing};
use crate::config::Config;
use crate::error::{Result, SimError};

/// A bouncing sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bouncer {
    pub id: u32,
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    /// Side length, fixed at creation
    size: f32,
    /// Pixels per second; changed only by `bounce`
    vel: Vec2,
}

impl Bouncer {
    /// Build a bouncer with explicit state (scripted setups and tests)
    pub fn new(id: u32, pos: Vec2, size: f32, vel: Vec2) -> Self {
        Self { id, pos, size, vel }
    }

    /// Spawn with random size, position and velocity drawn from the config
    /// ranges. The whole square starts inside the arena, inset by its size.
    pub fn spawn<R: Rng>(
        id: u32,
        rng: &mut R,
        arena_width: f32,
        arena_height: f32,
        config: &Config,
    ) -> Result<Self> {
        let size = rng.random_range(config.bouncer_min_size..=config.bouncer_max_size) as f32;

        if arena_width < 2.0 * size || arena_height < 2.0 * size {
            return Err(SimError::invalid(
                "arena",
                format!("{arena_width}x{arena_height} cannot fit a bouncer of size {size}"),
            ));
        }

        let pos = Vec2::new(
            random_inset(rng, size, arena_width),
            random_inset(rng, size, arena_height),
        );
        let vel = Vec2::new(
            random_speed(rng, config.bouncer_min_speed, config.bouncer_max_speed),
            random_speed(rng, config.bouncer_min_speed, config.bouncer_max_speed),
        );

        Ok(Self { id, pos, size, vel })
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    /// Advance by `vel * dt`. No clamping, so motion is frame-rate independent.
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Reflect velocity on each axis whose walls the square has crossed.
    ///
    /// Re-evaluated on every call (not edge-triggered), and position is not
    /// pulled back inside: a fast bouncer may overshoot before turning.
    /// Returns the axes that were reflected.
    pub fn bounce(&mut self, arena_width: f32, arena_height: f32) -> WallHit {
        let hit = wall_crossing(&self.bounds(), arena_width, arena_height);
        if hit.x {
            self.vel.x = -self.vel.x;
        }
        if hit.y {
            self.vel.y = -self.vel.y;
        }
        hit
    }
}

impl Bounded for Bouncer {
    fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(self.size))
    }
}

/// Uniform coordinate in [inset, extent - inset]
fn random_inset<R: Rng>(rng: &mut R, inset: f32, extent: f32) -> f32 {
    let (lo, hi) = (inset, extent - inset);
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}

/// Non-zero speed: magnitude in [min, max], random sign
fn random_speed<R: Rng>(rng: &mut R, min: u32, max: u32) -> f32 {
    let magnitude = rng.random_range(min..=max) as f32;
    if rng.random_bool(0.5) { magnitude } else { -magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spawn_seeded(seed: u64) -> Bouncer {
        let mut rng = Pcg32::seed_from_u64(seed);
        Bouncer::spawn(1, &mut rng, 400.0, 400.0, &Config::default()).unwrap()
    }

    #[test]
    fn test_move_then_bounce_corner() {
        let mut b = Bouncer::new(1, Vec2::new(10.0, 10.0), 20.0, Vec2::new(-30.0, -30.0));
        b.advance(1.0);
        assert_eq!(b.pos, Vec2::new(-20.0, -20.0));
        b.bounce(400.0, 400.0);
        assert_eq!(b.vel(), Vec2::new(30.0, 30.0));
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut b = Bouncer::new(1, Vec2::new(50.0, 60.0), 25.0, Vec2::new(12.0, -7.0));
        b.advance(0.0);
        assert_eq!(b.pos, Vec2::new(50.0, 60.0));
    }

    #[test]
    fn test_bounce_left_only_flips_x() {
        let mut b = Bouncer::new(1, Vec2::new(-1.0, 100.0), 20.0, Vec2::new(-5.0, 8.0));
        let hit = b.bounce(400.0, 400.0);
        assert_eq!(hit, WallHit { x: true, y: false });
        assert_eq!(b.vel(), Vec2::new(5.0, 8.0));
    }

    #[test]
    fn test_bounce_right_edge() {
        let mut b = Bouncer::new(1, Vec2::new(381.0, 100.0), 20.0, Vec2::new(5.0, 8.0));
        b.bounce(400.0, 400.0);
        assert_eq!(b.vel(), Vec2::new(-5.0, 8.0));
    }

    #[test]
    fn test_bounce_top_and_bottom() {
        let mut top = Bouncer::new(1, Vec2::new(100.0, -0.5), 20.0, Vec2::new(5.0, -8.0));
        top.bounce(400.0, 400.0);
        assert_eq!(top.vel(), Vec2::new(5.0, 8.0));

        let mut bottom = Bouncer::new(2, Vec2::new(100.0, 390.0), 20.0, Vec2::new(5.0, 8.0));
        bottom.bounce(400.0, 400.0);
        assert_eq!(bottom.vel(), Vec2::new(5.0, -8.0));
    }

    #[test]
    fn test_bounce_in_bounds_is_noop() {
        let mut b = Bouncer::new(1, Vec2::new(0.0, 380.0), 20.0, Vec2::new(5.0, 8.0));
        assert!(!b.bounce(400.0, 400.0).any());
        assert_eq!(b.vel(), Vec2::new(5.0, 8.0));
    }

    #[test]
    fn test_bounce_twice_restores_sign() {
        let mut b = Bouncer::new(1, Vec2::new(-3.0, -3.0), 20.0, Vec2::new(-9.0, -4.0));
        b.bounce(400.0, 400.0);
        b.bounce(400.0, 400.0);
        assert_eq!(b.vel(), Vec2::new(-9.0, -4.0));
    }

    #[test]
    fn test_spawn_rejects_tiny_arena() {
        let mut rng = Pcg32::seed_from_u64(3);
        let result = Bouncer::spawn(1, &mut rng, 30.0, 400.0, &Config::default());
        assert!(matches!(result, Err(SimError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        assert_eq!(spawn_seeded(42), spawn_seeded(42));
    }

    proptest! {
        #[test]
        fn prop_spawn_ranges(seed in any::<u64>()) {
            let b = spawn_seeded(seed);
            prop_assert!((20.0..=40.0).contains(&b.size()));
            for v in [b.vel().x, b.vel().y] {
                prop_assert!(v != 0.0);
                prop_assert!((1.0..=60.0).contains(&v.abs()));
            }
            let bounds = b.bounds();
            prop_assert!(bounds.min.x >= 0.0 && bounds.min.y >= 0.0);
            prop_assert!(bounds.max.x <= 400.0 && bounds.max.y <= 400.0);
        }

        #[test]
        fn prop_move_is_linear(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            vx in -60.0f32..60.0,
            vy in -60.0f32..60.0,
            t1 in 0.0f32..2.0,
            t2 in 0.0f32..2.0,
        ) {
            let mut split = Bouncer::new(1, Vec2::new(x, y), 20.0, Vec2::new(vx, vy));
            let mut whole = split.clone();
            split.advance(t1);
            split.advance(t2);
            whole.advance(t1 + t2);
            prop_assert!((split.pos - whole.pos).length() < 1e-2);
        }

        #[test]
        fn prop_bounce_flips_only_crossed_axes(
            x in -100.0f32..500.0,
            y in -100.0f32..500.0,
            vx in 1.0f32..60.0,
            vy in 1.0f32..60.0,
        ) {
            let mut b = Bouncer::new(1, Vec2::new(x, y), 20.0, Vec2::new(vx, vy));
            let out_x = x < 0.0 || x + 20.0 > 400.0;
            let out_y = y < 0.0 || y + 20.0 > 400.0;
            b.bounce(400.0, 400.0);
            prop_assert_eq!(b.vel().x, if out_x { -vx } else { vx });
            prop_assert_eq!(b.vel().y, if out_y { -vy } else { vy });
        }
    }
}
