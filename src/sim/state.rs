//! Game state and arena controller
//!
//! The arena owns the head, the chain, the food set, and the score, and is
//! the explicit context every cross-entity query runs against. There is no
//! global window or manager object; everything that needs the arena gets it
//! passed in.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::chain::Chain;
use super::circle::{Bounds, Circle};
use super::head::Head;
use crate::consts::{FOOD_RADIUS, HEAD_RADIUS};

/// Current phase of gameplay. There is no terminal state: a self-collision
/// resets the arena in place and play continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ticks advance
    Running,
    /// Ticks are no-ops until unpaused
    Paused,
}

/// How external input drives the head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControlMode {
    /// Accelerometer tilt integrated as a force
    #[default]
    Tilt,
    /// Fixed-size displacement pulses
    Discrete,
}

/// Complete arena state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducible food placement
    pub seed: u64,
    /// Arena extent
    pub bounds: Bounds,
    /// Input strategy for this run
    pub mode: ControlMode,
    /// The snake head
    pub head: Head,
    /// The body chain, possibly empty
    pub chain: Chain,
    /// Food pellets; never empty between ticks
    pub foods: Vec<Circle>,
    /// Foods eaten since the last reset
    pub score: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh arena with the head centered and one food spawned
    pub fn new(seed: u64, bounds: Bounds, mode: ControlMode) -> Self {
        let mut state = Self {
            seed,
            bounds,
            mode,
            head: Head::new(bounds.center(), HEAD_RADIUS),
            chain: Chain::new(),
            foods: Vec::new(),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.spawn_food();
        state
    }

    /// Spawn one food at a uniformly random spot fully inside the arena.
    ///
    /// No overlap rejection: a pellet may land inside the snake, where it
    /// simply gets eaten on contact like any other.
    pub fn spawn_food(&mut self) {
        let x = self
            .rng
            .random_range(FOOD_RADIUS..=self.bounds.width - FOOD_RADIUS);
        let y = self
            .rng
            .random_range(FOOD_RADIUS..=self.bounds.height - FOOD_RADIUS);
        self.foods.push(Circle::new(Vec2::new(x, y), FOOD_RADIUS));
    }

    /// Discard the snake and start over: fresh head at the arena center,
    /// empty chain, score zeroed, exactly one food. The pause phase is left
    /// as it was.
    pub fn reset(&mut self) {
        self.head = Head::new(self.bounds.center(), HEAD_RADIUS);
        self.chain = Chain::new();
        self.score = 0;
        self.foods.clear();
        self.spawn_food();
    }

    /// Snapshot of everything a front end needs to draw this frame
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            head: SpritePose {
                pos: self.head.circle.pos,
                radius: self.head.circle.radius,
                heading: self.head.heading,
            },
            segments: self
                .chain
                .nodes()
                .iter()
                .map(|n| SpritePose {
                    pos: n.circle.pos,
                    radius: n.circle.radius,
                    heading: n.heading,
                })
                .collect(),
            foods: self.foods.clone(),
            score: self.score,
        }
    }
}

/// Position, size, and orientation of one drawable sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpritePose {
    pub pos: Vec2,
    pub radius: f32,
    pub heading: f32,
}

/// Per-frame drawable snapshot: head, body segments in chain order, food,
/// and the score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub head: SpritePose,
    pub segments: Vec<SpritePose>,
    pub foods: Vec<Circle>,
    pub score: u32,
}
