//! Head actuator - the root of the chain
//!
//! The head is the only circle that moves from input. Two movement styles
//! feed it: discrete fixed-size steps (arrow-key play) and force integration
//! (tilt play). Both funnel through `step`, which drags the chain along.

use glam::Vec2;

use super::chain::{Chain, ChainNode};
use super::circle::{Bounds, Circle};
use crate::consts::{HEADING_DEADZONE, SEGMENT_RADIUS};
use crate::{heading_dir, heading_of};

/// The snake head
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Head {
    pub circle: Circle,
    /// Sprite orientation in radians, 0 pointing along +y
    pub heading: f32,
    /// Integrated velocity, used only in force mode
    pub velocity: Vec2,
}

impl Head {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            circle: Circle::new(pos, radius),
            heading: 0.0,
            velocity: Vec2::ZERO,
        }
    }

    /// Displace the head directly and drag the chain after it.
    ///
    /// The heading only re-orients for displacements above the deadzone, so
    /// near-zero input does not make the sprite jitter.
    pub fn step(&mut self, delta: Vec2, chain: &mut Chain, bounds: Bounds) {
        self.circle.translate(delta);
        bounds.clamp(&mut self.circle);
        if delta.length() > HEADING_DEADZONE {
            self.heading = heading_of(delta);
        }
        chain.follow(&self.circle, bounds);
    }

    /// Force-mode movement: one forward-Euler step per tick, then linear drag.
    pub fn apply_force(
        &mut self,
        force: Vec2,
        mass: f32,
        drag: f32,
        chain: &mut Chain,
        bounds: Bounds,
    ) {
        self.velocity += force / mass;
        self.step(self.velocity, chain, bounds);
        self.velocity -= 0.5 * drag * self.velocity / mass;
    }

    /// Grow the chain by one segment.
    ///
    /// The first segment spawns in surface contact directly behind the head;
    /// after that, placement is the chain's business.
    pub fn grow(&mut self, chain: &mut Chain) {
        if chain.is_empty() {
            let offset = heading_dir(self.heading) * -(self.circle.radius + SEGMENT_RADIUS);
            chain.nodes.push(ChainNode {
                circle: Circle::new(self.circle.pos + offset, SEGMENT_RADIUS),
                heading: self.heading,
            });
        } else {
            chain.append_segment(&self.circle, SEGMENT_RADIUS);
        }
    }

    /// True iff the head touches its own body (node 0 excluded)
    pub fn collides_with_body(&self, chain: &Chain) -> bool {
        chain.hits_head(&self.circle)
    }
}
