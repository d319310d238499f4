//! World state owned by the simulation
//!
//! The tick and the input handler are the only writers; the render layer
//! reads a `FrameSnapshot` built from this.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bouncer::Bouncer;
use super::shape::Shape;
use crate::assets::{Sprite, SpriteLoad};
use crate::config::Config;
use crate::error::Result;

/// Mover starts this far above the arena center
pub const MOVER_OFFSET_Y: f32 = -100.0;
/// Grower starts this far below the arena center
pub const GROWER_OFFSET_Y: f32 = 50.0;

/// Playfield bounds, [0, width] x [0, height]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Seed used for bouncer placement
    pub seed: u64,
    pub arena: Arena,
    /// Sorted by id for deterministic iteration
    pub bouncers: Vec<Bouncer>,
    /// Rotating shape, moved by keys
    pub mover: Shape,
    /// Shape that grows when clicked
    pub grower: Shape,
    /// Degrees the mover rotates per tick
    pub mover_spin: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Image drawn for every bouncer; `None` after a degraded start
    pub bouncer_sprite: Option<Sprite>,
    next_id: u32,
}

impl World {
    /// World with mover and grower placed but no bouncers
    pub fn empty(config: &Config) -> Result<Self> {
        config.validate()?;

        let (w, h) = (config.arena_width, config.arena_height);
        Ok(Self {
            seed: config.seed,
            arena: Arena::new(w, h),
            bouncers: Vec::new(),
            mover: Shape::centered_square(
                w,
                h,
                config.mover_size,
                MOVER_OFFSET_Y,
                config.mover_color,
            ),
            grower: Shape::centered_square(
                w,
                h,
                config.grower_size,
                GROWER_OFFSET_Y,
                config.grower_color,
            ),
            mover_spin: config.mover_rotation_step,
            time_ticks: 0,
            bouncer_sprite: None,
            next_id: 1,
        })
    }

    /// Build the session world.
    ///
    /// An invalid config fails fast. A missing sprite does not: the session
    /// starts with zero bouncers.
    pub fn new(config: &Config, sprite: &SpriteLoad) -> Result<Self> {
        let mut world = Self::empty(config)?;

        match sprite {
            SpriteLoad::Loaded(loaded) => {
                let (w, h) = (world.arena.width, world.arena.height);
                let mut rng = Pcg32::seed_from_u64(config.seed);
                for _ in 0..config.bouncer_count {
                    let id = world.next_entity_id();
                    world.bouncers.push(Bouncer::spawn(id, &mut rng, w, h, config)?);
                }
                world.bouncer_sprite = Some(loaded.clone());
            }
            SpriteLoad::Unavailable(e) => {
                log::warn!("{e}; starting without bouncers");
            }
        }

        log::info!(
            "World ready: {}x{} arena, {} bouncers, seed {}",
            world.arena.width,
            world.arena.height,
            world.bouncers.len(),
            world.seed
        );
        Ok(world)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a bouncer with explicit state, returning its id
    pub fn add_bouncer(&mut self, pos: Vec2, size: f32, vel: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.bouncers.push(Bouncer::new(id, pos, size, vel));
        id
    }

    /// Track a resized surface; the next bounce uses the new bounds
    pub fn resize_arena(&mut self, width: f32, height: f32) {
        self.arena = Arena::new(width, height);
    }

    /// Ensure bouncers are sorted by ID for deterministic iteration.
    ///
    /// `bouncers` is public, so hosts editing the world between ticks (see
    /// `Driver::world_mut`) may leave it out of order; the tick re-sorts.
    pub fn normalize_order(&mut self) {
        self.bouncers.sort_by_key(|b| b.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Sprite;
    use crate::error::SimError;
    use std::path::PathBuf;

    fn loaded() -> SpriteLoad {
        SpriteLoad::Loaded(Sprite {
            path: PathBuf::from("ball.gif"),
            width: 32,
            height: 32,
        })
    }

    fn unavailable() -> SpriteLoad {
        SpriteLoad::Unavailable(SimError::ResourceUnavailable {
            path: PathBuf::from("ball.gif"),
            reason: "missing".into(),
        })
    }

    #[test]
    fn test_new_world_layout() {
        let world = World::new(&Config::default(), &loaded()).unwrap();
        assert_eq!(world.bouncers.len(), 5);
        assert_eq!(world.bouncer_sprite.as_ref().map(|s| s.width), Some(32));
        assert_eq!(world.mover.pos, Vec2::new(175.0, 100.0));
        assert_eq!(world.grower.pos, Vec2::new(175.0, 250.0));
        assert_eq!(world.mover.size, Vec2::splat(50.0));
    }

    #[test]
    fn test_bouncer_ids_unique_and_ordered() {
        let world = World::new(&Config::default(), &loaded()).unwrap();
        let ids: Vec<u32> = world.bouncers.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unavailable_sprite_degrades_to_zero_bouncers() {
        let world = World::new(&Config::default(), &unavailable()).unwrap();
        assert!(world.bouncers.is_empty());
        assert!(world.bouncer_sprite.is_none());
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = Config {
            arena_height: 10.0,
            ..Default::default()
        };
        let err = World::new(&config, &unavailable()).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_same_seed_same_world() {
        let config = Config {
            seed: 77,
            bouncer_count: 20,
            ..Default::default()
        };
        let a = World::new(&config, &loaded()).unwrap();
        let b = World::new(&config, &loaded()).unwrap();
        assert_eq!(a.bouncers, b.bouncers);
    }
}
