//! Rectangle shapes (mover and grower)
//!
//! Rotation and scale apply about the rectangle's center, so the rendered
//! outline is a transformed quad. Bounds and hit tests use that quad.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Bounded};
use crate::color::Color;
use crate::rotate_about;

/// A mutable rectangle driven by ticks and input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Top-left corner of the untransformed rectangle
    pub pos: Vec2,
    /// Untransformed width/height
    pub size: Vec2,
    /// Degrees, accumulating (never wrapped)
    pub rotation: f32,
    /// Per-axis scale factors, never negative
    pub scale: Vec2,
    pub highlighted: bool,
    /// Fill when not highlighted
    pub color: Color,
}

impl Shape {
    pub fn new(pos: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            pos,
            size,
            rotation: 0.0,
            scale: Vec2::ONE,
            highlighted: false,
            color,
        }
    }

    /// Square of side `side` centered horizontally, offset vertically from
    /// the arena center by `dy`
    pub fn centered_square(
        arena_width: f32,
        arena_height: f32,
        side: f32,
        dy: f32,
        color: Color,
    ) -> Self {
        let pos = Vec2::new(arena_width / 2.0 - side / 2.0, arena_height / 2.0 + dy);
        Self::new(pos, Vec2::splat(side), color)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Rendered corners (clockwise on screen), after scale then rotation
    pub fn corners(&self) -> [Vec2; 4] {
        let center = self.center();
        let half = self.size * self.scale * 0.5;
        [
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ]
        .map(|offset| rotate_about(center + offset, center, self.rotation))
    }

    /// Whether `point` lies inside the rendered (transformed) rectangle
    pub fn contains(&self, point: Vec2) -> bool {
        let center = self.center();
        let local = rotate_about(point, center, -self.rotation) - center;
        let half = self.size * self.scale * 0.5;
        local.x.abs() <= half.x && local.y.abs() <= half.y
    }

    pub fn rotate_by(&mut self, degrees: f32) {
        self.rotation += degrees;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Multiply scale factors; non-positive factors are ignored
    pub fn grow(&mut self, factor: Vec2) {
        if factor.x > 0.0 {
            self.scale.x *= factor.x;
        }
        if factor.y > 0.0 {
            self.scale.y *= factor.y;
        }
    }

    /// Visible fill for the current highlight state
    pub fn fill(&self, highlight: Color) -> Color {
        if self.highlighted { highlight } else { self.color }
    }
}

impl Bounded for Shape {
    /// Bounds in parent: box around the transformed quad
    fn bounds(&self) -> Aabb {
        let corners = self.corners();
        corners
            .iter()
            .fold(Aabb::new(corners[0], corners[0]), |b, &p| {
                Aabb::new(b.min.min(p), b.max.max(p))
            })
    }
}
