//! Per-frame render snapshot
//!
//! The render layer draws from this copy and never touches `World`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::Sprite;
use crate::color::Color;
use crate::config::Config;
use crate::sim::{Aabb, Arena, Bounded, Shape, World};

/// A bouncer sprite placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
}

/// A shape as it should be drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeView {
    pub pos: Vec2,
    pub size: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    pub fill: Color,
    /// Rendered bounds after rotation and scale
    pub bounds: Aabb,
}

impl ShapeView {
    fn of(shape: &Shape, highlight: Color) -> Self {
        Self {
            pos: shape.pos,
            size: shape.size,
            rotation: shape.rotation,
            scale: shape.scale,
            fill: shape.fill(highlight),
            bounds: shape.bounds(),
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub arena: Arena,
    pub background: Color,
    /// Image for every entry in `bouncers`
    pub bouncer_sprite: Option<Sprite>,
    pub bouncers: Vec<SpriteView>,
    pub mover: ShapeView,
    pub grower: ShapeView,
}

impl FrameSnapshot {
    pub fn capture(world: &World, config: &Config) -> Self {
        Self {
            tick: world.time_ticks,
            arena: world.arena,
            background: config.background,
            bouncer_sprite: world.bouncer_sprite.clone(),
            bouncers: world
                .bouncers
                .iter()
                .map(|b| SpriteView {
                    id: b.id,
                    pos: b.pos,
                    size: b.size(),
                })
                .collect(),
            mover: ShapeView::of(&world.mover, config.highlight),
            grower: ShapeView::of(&world.grower, config.highlight),
        }
    }
}
