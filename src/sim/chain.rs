//! Segmented body chain and its constraint propagation
//!
//! The body is a forward-only sequence of circular segments: node 0 hangs off
//! the head, node i+1 hangs off node i. The whole chain lives in one array and
//! the successor of a node is simply the next index, which keeps ownership
//! linear and traversal a plain forward loop.
//!
//! Moving a node does four things, in order: translate and re-clamp to the
//! arena, re-orient, push out of the first non-adjacent segment it overlaps,
//! and drag its successor back into surface contact. The successor is dragged
//! via the same routine, so one call walks the constraint down the full chain.

use std::f32::consts::PI;

use glam::Vec2;

use super::circle::{Bounds, Circle};
use crate::heading_dir;

/// One body segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainNode {
    pub circle: Circle,
    /// Sprite orientation in radians, 0 pointing along +y
    pub heading: f32,
}

/// The body: segments in head-to-tail order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chain {
    pub(crate) nodes: Vec<ChainNode>,
}

/// Heading of a movement delta in the segment sprite convention.
/// Mirrors the head's `atan2` convention with a half-turn flip for upward
/// motion so body sprites keep facing along the chain.
fn segment_heading(delta: Vec2) -> f32 {
    let mut heading = delta.x.atan2(delta.y);
    if delta.y > 0.0 {
        heading += PI;
    }
    heading
}

impl Chain {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Segments in chain order
    pub fn nodes(&self) -> &[ChainNode] {
        &self.nodes
    }

    /// Move node `start` by `delta` and propagate the contact constraint down
    /// the rest of the chain.
    ///
    /// `skip_body_check` disables the non-adjacent overlap resolution for this
    /// pass; the tangential drag of successors still runs.
    pub fn move_node(&mut self, start: usize, delta: Vec2, bounds: Bounds, skip_body_check: bool) {
        let mut idx = start;
        let mut delta = delta;
        while idx < self.nodes.len() {
            let node = &mut self.nodes[idx];
            node.circle.translate(delta);
            bounds.clamp(&mut node.circle);
            if delta.length_squared() > f32::EPSILON {
                node.heading = segment_heading(delta);
            }
            if !skip_body_check {
                self.resolve_body_overlap(idx);
            }

            let Some(next) = self.nodes.get(idx + 1) else {
                break;
            };
            let current = self.nodes[idx].circle;
            let mut target = next.circle;
            target.place_tangentially(&current);
            delta = target.pos - next.circle.pos;
            idx += 1;
        }
    }

    /// Drag node 0 back into surface contact with the head, propagating down
    /// the chain. No-op on an empty chain.
    pub fn follow(&mut self, head: &Circle, bounds: Bounds) {
        let Some(first) = self.nodes.first() else {
            return;
        };
        let mut target = first.circle;
        target.place_tangentially(head);
        let delta = target.pos - first.circle.pos;
        self.move_node(0, delta, bounds, false);
    }

    /// Push node `idx` out of the first non-adjacent segment it overlaps.
    /// One resolution per move; remaining overlaps wait for later ticks.
    fn resolve_body_overlap(&mut self, idx: usize) {
        for j in 0..self.nodes.len() {
            let adjacent = j == idx || j + 1 == idx || j == idx + 1;
            if adjacent {
                continue;
            }
            let other = self.nodes[j].circle;
            if self.nodes[idx].circle.overlaps(&other) {
                self.nodes[idx].circle.place_tangentially(&other);
                break;
            }
        }
    }

    /// Grow the chain by one segment placed behind the tail.
    ///
    /// The spot one diameter behind the tail along its heading is tried first
    /// (side picked away from the body for headings in the upper half-turn).
    /// If it overlaps the body the placement flips to the opposite side, which
    /// is kept only if it clears the head. Best effort: a tightly coiled body
    /// can leave no clear side, in which case the segment starts overlapped
    /// and the next constraint pass pushes it out.
    pub fn append_segment(&mut self, head: &Circle, radius: f32) {
        let Some(tail) = self.nodes.last().copied() else {
            return;
        };
        let spacing = tail.circle.radius + radius;
        let mut offset = heading_dir(tail.heading) * -spacing;
        if tail.heading > 0.0 && tail.heading < PI {
            offset = -offset;
        }

        let mut candidate = Circle::new(tail.circle.pos + offset, radius);
        let tail_idx = self.nodes.len() - 1;
        let overlaps_body = self.nodes[..tail_idx]
            .iter()
            .any(|n| candidate.overlaps(&n.circle));
        if overlaps_body {
            let flipped = Circle::new(tail.circle.pos - offset, radius);
            if !flipped.overlaps(head) {
                candidate = flipped;
            }
        }

        self.nodes.push(ChainNode {
            circle: candidate,
            heading: tail.heading,
        });
    }

    /// True iff any segment other than node 0 touches the head. Node 0 is
    /// always in deliberate surface contact and never counts.
    pub fn hits_head(&self, head: &Circle) -> bool {
        self.nodes.iter().skip(1).any(|n| n.circle.overlaps(head))
    }
}
