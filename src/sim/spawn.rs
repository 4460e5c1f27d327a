//! Spawn scheduler
//!
//! Once per spawn tick the live population is refreshed: an empty field is
//! filled to a random size, otherwise a random batch is culled and a random
//! number of replacements is added, keeping the count within
//! `[min_bubbles, max_bubbles]` whenever placement succeeds.
//!
//! Culling draws its indices with replacement, so a repeated index removes
//! the same bubble once and fewer bubbles than drawn may go. That is the
//! game's established pacing and is kept on purpose.

use super::pool::BubblePool;
use super::rng::RandomSource;
use super::state::{PlayArea, SpawnConfig};

/// What one spawn tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    /// Indices drawn for removal (duplicates included)
    pub drawn: usize,
    /// Distinct bubbles actually removed
    pub removed: usize,
    /// Bubbles the scheduler asked for
    pub requested: usize,
    /// Bubbles actually placed
    pub added: usize,
}

/// Inclusive range for the number of bubbles to add after culling.
///
/// Near a full field `max - remaining` can drop below `min - remaining`
/// clamped at zero; the range collapses to zero there.
pub fn add_range(config: &SpawnConfig, remaining: usize) -> (u32, u32) {
    let remaining = remaining as u32;
    let lo = config.min_bubbles.saturating_sub(remaining);
    let hi = config.max_bubbles.saturating_sub(remaining);
    if hi < lo { (0, 0) } else { (lo, hi) }
}

/// Run one spawn tick against the pool
pub fn spawn_tick<R: RandomSource>(
    pool: &mut BubblePool,
    rng: &mut R,
    area: &PlayArea,
    config: &SpawnConfig,
) -> SpawnReport {
    let mut report = SpawnReport::default();

    let target = if pool.is_empty() {
        rng.int_inclusive(config.min_bubbles, config.max_bubbles)
    } else {
        let count = pool.count() as u32;
        let remove_count = rng.int_inclusive(1, count);
        let indices: Vec<usize> = (0..remove_count)
            .map(|_| rng.int_inclusive(0, count - 1) as usize)
            .collect();
        report.drawn = indices.len();
        report.removed = pool.remove_indices(&indices);

        let (lo, hi) = add_range(config, pool.count());
        rng.int_inclusive(lo, hi)
    };

    report.requested = target as usize;
    for _ in 0..target {
        if pool.add(rng, area, config).is_err() {
            // Field is saturated; further draws would fail the same way.
            break;
        }
        report.added += 1;
    }

    log::debug!(
        "spawn tick: removed {}/{} drawn, added {}/{} requested, {} live",
        report.removed,
        report.drawn,
        report.added,
        report.requested,
        pool.count()
    );
    report
}
