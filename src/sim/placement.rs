//! Non-overlapping spawn placement
//!
//! Rejection sampling inside the play area inset by the bubble radius. A
//! candidate is accepted only if its center is farther than
//! `radius + min_offset` from every existing center. The retry budget is
//! bounded so a crowded field reports failure instead of spinning.

use glam::Vec2;

use super::pool::Bubble;
use super::rng::RandomSource;
use super::state::PlayArea;
use crate::error::PlacementError;

/// Whether `candidate` keeps the required clearance from every bubble
pub fn is_clear(candidate: Vec2, existing: &[Bubble], radius: f32, min_offset: f32) -> bool {
    let min_dist = radius + min_offset;
    existing
        .iter()
        .all(|b| candidate.distance(b.pos) > min_dist)
}

/// Find a spawn position for a bubble of `radius`
pub fn find_position<R: RandomSource>(
    rng: &mut R,
    existing: &[Bubble],
    radius: f32,
    min_offset: f32,
    area: &PlayArea,
    max_attempts: u32,
) -> Result<Vec2, PlacementError> {
    let exhausted = PlacementError::Exhausted {
        attempts: max_attempts,
        existing: existing.len(),
    };
    let Some((lo, hi)) = area.inset(radius) else {
        return Err(exhausted);
    };

    for _ in 0..max_attempts {
        let x = rng.real(lo.x, hi.x);
        let y = rng.real(lo.y, hi.y);
        let candidate = Vec2::new(x, y);
        if is_clear(candidate, existing, radius, min_offset) {
            return Ok(candidate);
        }
    }

    log::warn!(
        "placement exhausted after {} attempts with {} bubbles live",
        max_attempts,
        existing.len()
    );
    Err(exhausted)
}
