//! Round clock
//!
//! One call per rendered frame. The frame step runs in a fixed order:
//! accumulate time, run a spawn tick when the interval has passed (taking a
//! second off the clock), move the bubbles, then check the ending and
//! game-over thresholds. Taps are applied between frames.

use glam::Vec2;

use super::motion::advance;
use super::rng::RandomSource;
use super::spawn::spawn_tick;
use super::state::{RoundEvent, RoundPhase, RoundState};
use crate::consts::ENDING_THRESHOLD;

/// Advance the round by `dt` seconds, appending notifications to `events`
pub fn tick<R: RandomSource>(
    state: &mut RoundState,
    rng: &mut R,
    dt: f32,
    events: &mut Vec<RoundEvent>,
) {
    if state.phase.is_finished() {
        return;
    }

    state.elapsed += dt;
    state.spawn_accumulator += dt;

    if state.spawn_accumulator > state.config.spawn_interval {
        spawn_tick(&mut state.pool, rng, &state.area, &state.config);
        state.remaining_secs = state.remaining_secs.saturating_sub(1);
        state.spawn_accumulator = 0.0;
        events.push(RoundEvent::TimeUpdated {
            remaining_secs: state.remaining_secs,
        });
    }

    advance(&mut state.pool, dt, &state.area);

    if state.remaining_secs < ENDING_THRESHOLD && !state.ending_fired {
        state.ending_fired = true;
        state.phase = RoundPhase::Ending;
        events.push(RoundEvent::EndingSoon);
    }

    if state.remaining_secs == 0 {
        state.phase = RoundPhase::Over;
        log::info!("round over with score {}", state.score);
        events.push(RoundEvent::RoundEnded {
            final_score: state.score,
        });
    }
}

/// Pop a bubble by id, crediting its points. Returns the points scored.
pub fn pop_bubble(state: &mut RoundState, id: u32, events: &mut Vec<RoundEvent>) -> Option<u32> {
    if state.phase.is_finished() {
        return None;
    }
    let bubble = state.pool.remove(id)?;
    let points = bubble.points();
    state.score += u64::from(points);
    events.push(RoundEvent::ScoreUpdated { score: state.score });
    Some(points)
}

/// Pop the top-most bubble under `point`
pub fn pop_at(state: &mut RoundState, point: Vec2, events: &mut Vec<RoundEvent>) -> Option<u32> {
    let id = state.pool.bubble_at(point)?.id;
    pop_bubble(state, id, events)
}

/// Cancel the round. Scheduling and motion stop immediately.
pub fn abort(state: &mut RoundState) {
    if !state.phase.is_finished() {
        log::info!("round aborted with {}s left", state.remaining_secs);
        state.phase = RoundPhase::Aborted;
    }
}
