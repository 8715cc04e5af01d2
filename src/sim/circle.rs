//! Circle geometry for the snake, its body segments, and food
//!
//! Everything in the arena is a circle: the head, every chain segment, every
//! food pellet. The chain constraint solver only ever needs three queries on
//! them: overlap, wall clamping, and tangential re-placement along the line
//! connecting two centers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A solid circle. Radius is fixed after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center position
    pub pos: Vec2,
    /// Radius (positive)
    pub radius: f32,
}

impl Circle {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }

    /// Translate the center by a delta. Callers re-clamp to the arena afterwards.
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// True iff the two circles interpenetrate. Exact tangency is not a collision.
    #[inline]
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }

    /// Re-place this circle so it rests in surface contact with `anchor`,
    /// preserving the direction of the anchor-to-self line.
    ///
    /// Coincident centers leave the circle where it is: with no connecting
    /// line there is no direction to push along.
    pub fn place_tangentially(&mut self, anchor: &Circle) {
        let offset = self.pos - anchor.pos;
        let dist = offset.length();
        if dist <= f32::EPSILON {
            return;
        }
        self.pos = anchor.pos + offset * ((self.radius + anchor.radius) / dist);
    }
}

/// Arena extent. The origin sits at the bottom-left corner; every circle is
/// kept fully inside `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Arena center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a circle's center so the circle lies fully inside the arena.
    pub fn clamp(&self, circle: &mut Circle) {
        let r = circle.radius;
        circle.pos.x = circle.pos.x.clamp(r, self.width - r);
        circle.pos.y = circle.pos.y.clamp(r, self.height - r);
    }

    /// True iff the circle lies fully inside the arena
    pub fn contains(&self, circle: &Circle) -> bool {
        let r = circle.radius;
        circle.pos.x >= r
            && circle.pos.x <= self.width - r
            && circle.pos.y >= r
            && circle.pos.y <= self.height - r
    }
}
