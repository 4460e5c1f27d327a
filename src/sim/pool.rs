//! Live bubble set
//!
//! The pool owns every bubble for its whole lifetime. Bubbles are kept in
//! spawn order, so the last matching bubble is the one drawn on top.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::placement::find_position;
use super::rng::RandomSource;
use super::state::{PlayArea, SpawnConfig};
use crate::consts::*;
use crate::error::PlacementError;

/// Bubble color, which also decides its point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BubbleColor {
    Red,
    Pink,
    Green,
    Blue,
    Black,
}

impl BubbleColor {
    pub const ALL: [BubbleColor; 5] = [
        BubbleColor::Red,
        BubbleColor::Pink,
        BubbleColor::Green,
        BubbleColor::Blue,
        BubbleColor::Black,
    ];

    pub fn points(&self) -> u32 {
        match self {
            BubbleColor::Red => 1,
            BubbleColor::Pink => 2,
            BubbleColor::Green => 5,
            BubbleColor::Blue => 8,
            BubbleColor::Black => 10,
        }
    }

    /// Spawn weight out of 100
    pub fn weight(&self) -> u32 {
        match self {
            BubbleColor::Red => 40,
            BubbleColor::Pink => 30,
            BubbleColor::Green => 15,
            BubbleColor::Blue => 10,
            BubbleColor::Black => 5,
        }
    }

    /// Weighted pick: rarer colors are worth more
    pub fn random<R: RandomSource>(rng: &mut R) -> Self {
        let mut roll = rng.int_inclusive(0, 99);
        for color in Self::ALL {
            if roll < color.weight() {
                return color;
            }
            roll -= color.weight();
        }
        BubbleColor::Red
    }
}

/// A bubble entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: BubbleColor,
}

impl Bubble {
    pub fn points(&self) -> u32 {
        self.color.points()
    }

    /// Whether `point` falls inside the bubble's circle
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }
}

/// Random launch velocity: independent sign and integer magnitude per axis
pub fn random_velocity<R: RandomSource>(rng: &mut R) -> Vec2 {
    let dir_x = if rng.coin_flip() { 1.0 } else { -1.0 };
    let dir_y = if rng.coin_flip() { 1.0 } else { -1.0 };
    let mag_x = rng.int_inclusive(MIN_AXIS_SPEED, MAX_AXIS_SPEED) as f32;
    let mag_y = rng.int_inclusive(MIN_AXIS_SPEED, MAX_AXIS_SPEED) as f32;
    Vec2::new(mag_x * dir_x, mag_y * dir_y)
}

/// The set of live bubbles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BubblePool {
    bubbles: Vec<Bubble>,
    next_id: u32,
}

impl Default for BubblePool {
    fn default() -> Self {
        Self::new()
    }
}

impl BubblePool {
    pub fn new() -> Self {
        Self {
            bubbles: Vec::new(),
            next_id: 1,
        }
    }

    pub fn count(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Bubble> {
        self.bubbles.iter_mut()
    }

    pub fn get(&self, id: u32) -> Option<&Bubble> {
        self.bubbles.iter().find(|b| b.id == id)
    }

    /// Spawn one bubble with a solved position and a fresh velocity
    pub fn add<R: RandomSource>(
        &mut self,
        rng: &mut R,
        area: &PlayArea,
        config: &SpawnConfig,
    ) -> Result<&Bubble, PlacementError> {
        let color = BubbleColor::random(rng);
        let pos = find_position(
            rng,
            &self.bubbles,
            config.bubble_radius,
            config.min_offset,
            area,
            MAX_PLACEMENT_ATTEMPTS,
        )?;
        let vel = random_velocity(rng);

        let id = self.next_id;
        self.next_id += 1;
        self.bubbles.push(Bubble {
            id,
            pos,
            vel,
            radius: config.bubble_radius,
            color,
        });
        Ok(&self.bubbles[self.bubbles.len() - 1])
    }

    /// Insert an already built bubble (restores, fixtures)
    pub fn insert(&mut self, mut bubble: Bubble) -> u32 {
        bubble.id = self.next_id;
        self.next_id += 1;
        let id = bubble.id;
        self.bubbles.push(bubble);
        id
    }

    /// Remove one bubble by id
    pub fn remove(&mut self, id: u32) -> Option<Bubble> {
        let idx = self.bubbles.iter().position(|b| b.id == id)?;
        Some(self.bubbles.remove(idx))
    }

    /// Remove every listed bubble that is still live, returning how many went
    pub fn remove_many(&mut self, ids: &[u32]) -> usize {
        let before = self.bubbles.len();
        self.bubbles.retain(|b| !ids.contains(&b.id));
        before - self.bubbles.len()
    }

    /// Remove the bubbles at the given indices.
    ///
    /// Repeated indices name the same bubble and collapse into one removal.
    /// Indices past the end are a caller bug: they assert in debug builds and
    /// are skipped otherwise.
    pub fn remove_indices(&mut self, indices: &[usize]) -> usize {
        let len = self.bubbles.len();
        let ids: Vec<u32> = indices
            .iter()
            .filter(|&&i| {
                debug_assert!(i < len, "removal index {i} out of range ({len} live)");
                i < len
            })
            .map(|&i| self.bubbles[i].id)
            .collect();
        self.remove_many(&ids)
    }

    /// Top-most bubble under `point`
    pub fn bubble_at(&self, point: Vec2) -> Option<&Bubble> {
        self.bubbles.iter().rev().find(|b| b.contains(point))
    }

    pub fn clear(&mut self) {
        self.bubbles.clear();
    }
}
