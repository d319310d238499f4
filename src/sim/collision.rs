//! Overlap and wall tests
//!
//! Two grades of overlap: a cheap axis-aligned bounding-box test for sprites,
//! and an exact convex-polygon intersection for rotated/scaled shapes.
//! Both use strict semantics: touching edges share no area and do not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Smallest intersection area that counts as an overlap
const AREA_EPSILON: f32 = 1e-4;

/// Axis-aligned bounding box in arena coordinates (y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box with top-left corner at `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Tightest box around a set of points
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// True iff the boxes share positive area
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Anything with a current rendered extent
pub trait Bounded {
    fn bounds(&self) -> Aabb;
}

/// Bounding-box overlap between two entities' current extents
pub fn bounds_overlap<A, B>(a: &A, b: &B) -> bool
where
    A: Bounded + ?Sized,
    B: Bounded + ?Sized,
{
    a.bounds().intersects(&b.bounds())
}

/// Which arena walls an extent has crossed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    /// Left edge < 0 or right edge > width
    pub x: bool,
    /// Top edge < 0 or bottom edge > height
    pub y: bool,
}

impl WallHit {
    /// Crossed at least one wall
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Check an extent against the arena rectangle [0, width] x [0, height]
pub fn wall_crossing(bounds: &Aabb, width: f32, height: f32) -> WallHit {
    WallHit {
        x: bounds.min.x < 0.0 || bounds.max.x > width,
        y: bounds.min.y < 0.0 || bounds.max.y > height,
    }
}

/// Result of an exact shape intersection
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapResult {
    /// Whether the shapes share positive area
    pub overlaps: bool,
    /// Area of the intersection region
    pub area: f32,
    /// Bounds of the intersection region (`None` when empty)
    pub bounds: Option<Aabb>,
}

impl OverlapResult {
    pub fn miss() -> Self {
        Self {
            overlaps: false,
            area: 0.0,
            bounds: None,
        }
    }
}

/// Exact intersection of two convex polygons (e.g. transformed shape quads)
///
/// Clips `a` against every edge of `b`. An empty or zero-area clip reports no
/// overlap, including shapes that only touch along an edge.
pub fn precise_overlap(a: &[Vec2], b: &[Vec2]) -> OverlapResult {
    // Cheap reject before clipping
    match (Aabb::from_points(a), Aabb::from_points(b)) {
        (Some(box_a), Some(box_b)) if box_a.intersects(&box_b) => {}
        _ => return OverlapResult::miss(),
    }

    let region = clip_convex(a, b);
    let area = polygon_area(&region).abs();
    if area <= AREA_EPSILON {
        return OverlapResult::miss();
    }

    OverlapResult {
        overlaps: true,
        area,
        bounds: Aabb::from_points(&region),
    }
}

/// Signed area (shoelace); sign gives winding
pub fn polygon_area(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let sum: f32 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p, q)| p.perp_dot(*q))
        .sum();
    sum * 0.5
}

/// Sutherland-Hodgman clip of `subject` by convex `clip`
fn clip_convex(subject: &[Vec2], clip: &[Vec2]) -> Vec<Vec2> {
    let winding = polygon_area(clip);
    if winding.abs() <= AREA_EPSILON {
        return Vec::new();
    }
    let winding = winding.signum();

    let mut output = subject.to_vec();
    for (i, &edge_start) in clip.iter().enumerate() {
        if output.is_empty() {
            break;
        }
        let edge_end = clip[(i + 1) % clip.len()];
        let edge = edge_end - edge_start;
        let inside = |p: Vec2| edge.perp_dot(p - edge_start) * winding >= 0.0;

        let input = std::mem::take(&mut output);
        for (j, &current) in input.iter().enumerate() {
            let previous = input[(j + input.len() - 1) % input.len()];
            match (inside(previous), inside(current)) {
                (true, true) => output.push(current),
                (true, false) => {
                    output.push(line_intersection(previous, current, edge_start, edge_end))
                }
                (false, true) => {
                    output.push(line_intersection(previous, current, edge_start, edge_end));
                    output.push(current);
                }
                (false, false) => {}
            }
        }
    }
    output
}

/// Intersection of segment p->q with the infinite line through a, b
fn line_intersection(p: Vec2, q: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let r = q - p;
    let s = b - a;
    let denom = r.perp_dot(s);
    if denom.abs() < f32::EPSILON {
        return q; // Parallel
    }
    let t = (a - p).perp_dot(s) / denom;
    p + r * t
}
