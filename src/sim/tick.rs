//! Per-tick simulation advance
//!
//! One call per display frame. Input is whatever was most recently sampled
//! from the outside world; the tick applies it, settles the chain, and turns
//! collisions into game events.

use glam::Vec2;

use super::state::{ControlMode, GamePhase, GameState};
use crate::consts::{DRAG_COEFF, HEAD_MASS, STEP_PULSE, TILT_DEADZONE};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Tilt displacement after the sensor mapping (force mode). `None` means
    /// no reading arrived; the head gets no push this tick.
    pub tilt: Option<Vec2>,
    /// Direct displacement pulse (discrete mode)
    pub step: Option<Vec2>,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// Fixed-magnitude directional pulse, the entry point for key bindings
    /// in discrete mode
    pub fn pulse(direction: Vec2) -> Self {
        Self {
            step: Some(direction.normalize_or_zero() * STEP_PULSE),
            ..Default::default()
        }
    }
}

/// Something the outside world may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A food was eaten; carries the new score
    Munch { score: u32 },
    /// The head hit its own body and the arena was reset
    Collapse,
}

/// Zero out tilt axes that sit inside the deadzone
fn filter_deadzone(tilt: Vec2) -> Vec2 {
    Vec2::new(
        if tilt.x.abs() > TILT_DEADZONE { tilt.x } else { 0.0 },
        if tilt.y.abs() > TILT_DEADZONE { tilt.y } else { 0.0 },
    )
}

/// Advance the arena by one tick. Returns the events that fired, in order.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.pause {
        state.phase = match state.phase {
            GamePhase::Running => {
                log::info!("Paused");
                GamePhase::Paused
            }
            GamePhase::Paused => {
                log::info!("Resumed");
                GamePhase::Running
            }
        };
    }
    if state.phase == GamePhase::Paused {
        return events;
    }

    state.time_ticks += 1;

    // Movement
    match state.mode {
        ControlMode::Tilt => {
            if let Some(tilt) = input.tilt {
                let force = filter_deadzone(tilt);
                state
                    .head
                    .apply_force(force, HEAD_MASS, DRAG_COEFF, &mut state.chain, state.bounds);
            }
        }
        ControlMode::Discrete => {
            if let Some(step) = input.step {
                state.head.step(step, &mut state.chain, state.bounds);
            }
        }
    }

    // Self-collision wipes the run
    if state.head.collides_with_body(&state.chain) {
        log::info!(
            "Head hit the body at {} segments, {} points - resetting",
            state.chain.len(),
            state.score
        );
        state.reset();
        events.push(GameEvent::Collapse);
    }

    // Food: only the first overlapping pellet counts this tick
    if let Some(i) = state
        .foods
        .iter()
        .position(|f| state.head.circle.overlaps(f))
    {
        state.score += 1;
        state.foods.swap_remove(i);
        state.spawn_food();
        state.head.grow(&mut state.chain);
        log::info!("Munch! score={} length={}", state.score, state.chain.len());
        events.push(GameEvent::Munch { score: state.score });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::circle::{Bounds, Circle};

    fn bounds() -> Bounds {
        Bounds::new(700.0, 700.0)
    }

    fn discrete_state(seed: u64) -> GameState {
        GameState::new(seed, bounds(), ControlMode::Discrete)
    }

    #[test]
    fn test_pause_gates_ticking() {
        let mut state = discrete_state(1);

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);

        // Movement input is ignored while paused
        let step = TickInput {
            step: Some(Vec2::new(5.0, 0.0)),
            ..Default::default()
        };
        let before = state.head.circle.pos;
        tick(&mut state, &step);
        assert_eq!(state.head.circle.pos, before);
        assert_eq!(state.time_ticks, 0);

        // Toggle back and the same input moves the head
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Running);
        tick(&mut state, &step);
        assert_eq!(state.head.circle.pos, before + Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_directional_pulse() {
        let mut state = discrete_state(1);
        state.foods[0] = Circle::new(Vec2::new(50.0, 50.0), 15.0);
        let start = state.head.circle.pos;

        tick(&mut state, &TickInput::pulse(Vec2::Y));
        assert_eq!(state.head.circle.pos, start + Vec2::new(0.0, 0.5));

        tick(&mut state, &TickInput::pulse(-Vec2::X));
        assert_eq!(
            state.head.circle.pos,
            start + Vec2::new(-0.5, 0.5)
        );
    }

    #[test]
    fn test_munch_scores_grows_and_respawns() {
        let mut state = discrete_state(42);
        state.foods[0] = Circle::new(Vec2::new(50.0, 50.0), 15.0);
        state.head.circle.pos = Vec2::new(60.0, 60.0);

        let foods_before = state.foods.len();
        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 1);
        assert_eq!(state.chain.len(), 1);
        assert_eq!(state.foods.len(), foods_before);
        assert!(state.bounds.contains(&state.foods[0]));
        assert_eq!(events, vec![GameEvent::Munch { score: 1 }]);
    }

    #[test]
    fn test_only_first_overlapping_food_counts() {
        let mut state = discrete_state(42);
        state.foods[0] = Circle::new(Vec2::new(350.0, 350.0), 15.0);
        state
            .foods
            .push(Circle::new(Vec2::new(360.0, 350.0), 15.0));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 1);
        // One eaten, one spawned, the second overlapping pellet untouched
        assert_eq!(state.foods.len(), 2);
        assert!(
            state
                .foods
                .iter()
                .any(|f| f.pos == Vec2::new(360.0, 350.0))
        );
    }

    #[test]
    fn test_self_collision_resets_run() {
        let mut state = discrete_state(42);
        state.head.grow(&mut state.chain);
        state.head.grow(&mut state.chain);
        assert_eq!(state.chain.len(), 2);

        // Fold the second segment onto the head
        state.chain.nodes[1].circle.pos = state.head.circle.pos;
        assert!(state.head.collides_with_body(&state.chain));

        let events = tick(&mut state, &TickInput::default());

        assert!(events.contains(&GameEvent::Collapse));
        assert_eq!(state.foods.len(), 1);
        assert_eq!(state.head.circle.pos, state.bounds.center());
        assert_eq!(state.phase, GamePhase::Running);
        // The replacement pellet may, rarely, land right on the fresh head
        // and get eaten in the same tick; either way the run started over.
        match events.last() {
            Some(GameEvent::Munch { score }) => {
                assert_eq!(*score, 1);
                assert_eq!(state.chain.len(), 1);
            }
            _ => {
                assert_eq!(state.score, 0);
                assert_eq!(state.chain.len(), 0);
            }
        }
    }

    #[test]
    fn test_tilt_deadzone_zeroes_axis() {
        let mut state = GameState::new(42, bounds(), ControlMode::Tilt);
        state.foods[0] = Circle::new(Vec2::new(50.0, 50.0), 15.0);
        let start = state.head.circle.pos;

        let input = TickInput {
            tilt: Some(Vec2::new(0.05, 4.0)),
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.head.circle.pos.x, start.x);
        assert!(state.head.circle.pos.y > start.y);
        assert_eq!(state.head.velocity.x, 0.0);
    }

    #[test]
    fn test_missing_reading_means_no_movement() {
        let mut state = GameState::new(42, bounds(), ControlMode::Tilt);
        state.foods[0] = Circle::new(Vec2::new(50.0, 50.0), 15.0);
        let start = state.head.circle.pos;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.head.circle.pos, start);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_determinism() {
        let mut a = discrete_state(99999);
        let mut b = discrete_state(99999);

        let inputs = [
            TickInput {
                step: Some(Vec2::new(3.0, 1.0)),
                ..Default::default()
            },
            TickInput {
                step: Some(Vec2::new(-2.0, 4.0)),
                ..Default::default()
            },
            TickInput::default(),
        ];
        for input in &inputs {
            tick(&mut a, input);
            tick(&mut b, input);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.head.circle.pos, b.head.circle.pos);
        assert_eq!(a.foods[0].pos, b.foods[0].pos);
    }

    #[test]
    fn test_growth_monotonic_over_many_munches() {
        let mut state = discrete_state(7);
        for expected in 1..=6u32 {
            // Teleport a pellet onto the head
            let pos = state.head.circle.pos;
            state.foods[0] = Circle::new(pos, 15.0);
            tick(&mut state, &TickInput::default());
            assert_eq!(state.score, expected);
            assert_eq!(state.chain.len(), expected as usize);
            assert_eq!(state.foods.len(), 1);
        }
    }
}
