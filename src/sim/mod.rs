//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, no substeps
//! - Seeded RNG only
//! - No rendering, input, or platform dependencies
//!
//! The chain constraint pass is the heart of it: see `chain`.

pub mod chain;
pub mod circle;
pub mod head;
pub mod state;
pub mod tick;

pub use chain::{Chain, ChainNode};
pub use circle::{Bounds, Circle};
pub use head::Head;
pub use state::{ControlMode, GamePhase, GameState, RenderFrame, SpritePose};
pub use tick::{GameEvent, TickInput, tick};
