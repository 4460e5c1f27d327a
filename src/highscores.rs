//! Player records and the score store
//!
//! The round only talks to [`ScoreStore`]; where the records actually live is
//! up to the host.

use serde::{Deserialize, Serialize};

/// Number of entries shown on the leaderboard
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: u64,
}

impl Player {
    pub fn new(name: impl Into<String>, score: u64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Persisted high score and player history
pub trait ScoreStore {
    fn highscore(&self) -> u64;
    fn save_highscore(&mut self, value: u64);
    fn players(&self) -> Vec<Player>;
    fn save_players(&mut self, players: Vec<Player>);

    /// Record a finished round: bump the high score if beaten and append the
    /// player. Returns true on a new high score. Stores that persist should
    /// override this to commit both changes together.
    fn record(&mut self, name: &str, score: u64) -> bool {
        let new_best = score > self.highscore();
        if new_best {
            self.save_highscore(score);
        }
        let mut players = self.players();
        players.push(Player::new(name, score));
        self.save_players(players);
        new_best
    }
}

/// In-memory store, used by tests and hosts without storage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryScoreStore {
    pub highscore: u64,
    pub players: Vec<Player>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn highscore(&self) -> u64 {
        self.highscore
    }

    fn save_highscore(&mut self, value: u64) {
        self.highscore = value;
    }

    fn players(&self) -> Vec<Player> {
        self.players.clone()
    }

    fn save_players(&mut self, players: Vec<Player>) {
        self.players = players;
    }
}

/// Record a finished round in `store`. Returns true on a new high score.
pub fn record_round(store: &mut dyn ScoreStore, name: &str, score: u64) -> bool {
    store.record(name, score)
}

/// Top entries, best first. Ties keep the earlier round ahead.
pub fn ranked(players: &[Player]) -> Vec<&Player> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted.truncate(MAX_HIGH_SCORES);
    sorted
}

/// Get the rank a score would achieve (1-indexed, None if off the board)
pub fn potential_rank(players: &[Player], score: u64) -> Option<usize> {
    let board = ranked(players);
    let rank = board
        .iter()
        .position(|p| score > p.score)
        .unwrap_or(board.len())
        + 1;
    (rank <= MAX_HIGH_SCORES).then_some(rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_updates_best() {
        let mut store = MemoryScoreStore::new();
        assert!(record_round(&mut store, "Ana", 40));
        assert!(!record_round(&mut store, "Ben", 12));
        assert!(!record_round(&mut store, "Cy", 40));
        assert_eq!(store.highscore, 40);
        assert_eq!(store.players.len(), 3);
        assert_eq!(store.players[1], Player::new("Ben", 12));
    }

    #[test]
    fn test_ranked_sorts_and_truncates() {
        let players: Vec<Player> = (0..15).map(|i| Player::new(format!("p{i}"), i * 3)).collect();
        let board = ranked(&players);
        assert_eq!(board.len(), MAX_HIGH_SCORES);
        assert_eq!(board[0].score, 42);
        assert_eq!(board[9].score, 15);
    }

    #[test]
    fn test_ranked_stable_on_ties() {
        let players = vec![Player::new("first", 5), Player::new("second", 5)];
        let board = ranked(&players);
        assert_eq!(board[0].name, "first");
    }

    #[test]
    fn test_potential_rank() {
        let players: Vec<Player> = (1..=10).map(|i| Player::new("x", i * 10)).collect();
        assert_eq!(potential_rank(&players, 1000), Some(1));
        assert_eq!(potential_rank(&players, 55), Some(6));
        assert_eq!(potential_rank(&players, 5), None);
        assert_eq!(potential_rank(&[], 0), Some(1));
    }
}
