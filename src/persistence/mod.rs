//! File backed score store
//!
//! Keeps the high score and player history in one JSON document. Writes go
//! to a temp file first and are renamed over the save.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::highscores::{Player, ScoreStore};
use crate::settings::Settings;

/// On-disk document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default)]
    pub highscore: u64,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub settings: Settings,
}

fn io_err(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Read a save file. A missing file yields an empty save.
pub fn load(path: &Path) -> Result<SaveData, PersistenceError> {
    match fs::read_to_string(path) {
        Ok(json) => Ok(serde_json::from_str(&json)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SaveData::default()),
        Err(e) => Err(io_err(path, e)),
    }
}

/// Write a save file atomically
pub fn store(path: &Path, data: &SaveData) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(data)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| io_err(path, e))
}

/// [`ScoreStore`] that writes through to a JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: SaveData,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();
        let data = load(&path)?;
        log::info!(
            "loaded save from {} ({} players, best {})",
            path.display(),
            data.players.len(),
            data.highscore
        );
        Ok(Self { path, data })
    }

    pub fn settings(&self) -> &Settings {
        &self.data.settings
    }

    pub fn save_settings(&mut self, settings: Settings) -> Result<(), PersistenceError> {
        self.data.settings = settings;
        self.flush()
    }

    pub fn flush(&self) -> Result<(), PersistenceError> {
        store(&self.path, &self.data)
    }

    fn flush_logged(&self) {
        if let Err(e) = self.flush() {
            log::warn!("failed to write save: {e}");
        }
    }
}

impl ScoreStore for JsonFileStore {
    fn highscore(&self) -> u64 {
        self.data.highscore
    }

    fn save_highscore(&mut self, value: u64) {
        self.data.highscore = value;
        self.flush_logged();
    }

    fn players(&self) -> Vec<Player> {
        self.data.players.clone()
    }

    fn save_players(&mut self, players: Vec<Player>) {
        self.data.players = players;
        self.flush_logged();
    }

    fn record(&mut self, name: &str, score: u64) -> bool {
        let new_best = score > self.data.highscore;
        if new_best {
            self.data.highscore = score;
        }
        self.data.players.push(Player::new(name, score));
        self.flush_logged();
        new_best
    }
}
