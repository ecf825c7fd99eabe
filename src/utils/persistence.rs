//! Best-score persistence under ~/.flappy/.
//!
//! Storage failures never reach the game: a missing or corrupt file reads
//! as a best score of 0, and write errors are reported to the caller to log.

use crate::core::constants::{BEST_SCORE_FILE, DATA_DIR_NAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.flappy/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.flappy/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Durable home for the best score.
pub trait ScoreStore {
    /// Stored best score, or 0 if there is none or it cannot be read.
    fn load(&self) -> u32;

    fn save(&mut self, best: u32) -> io::Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct BestScoreFile {
    best: u32,
}

/// Best score kept as `{"best": N}` in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    /// Store at ~/.flappy/best.json.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            path: data_path(BEST_SCORE_FILE)?,
        })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&self) -> u32 {
        let file: BestScoreFile = load_json_or_default(&self.path);
        file.best
    }

    fn save(&mut self, best: u32) -> io::Result<()> {
        save_json(&self.path, &BestScoreFile { best })
    }
}

/// In-memory store for tests and `--no-save` runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub best: u32,
    /// Number of successful saves.
    pub saves: u32,
}

impl MemoryScoreStore {
    pub fn with_best(best: u32) -> Self {
        Self { best, saves: 0 }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.best
    }

    fn save(&mut self, best: u32) -> io::Result<()> {
        self.best = best;
        self.saves += 1;
        Ok(())
    }
}
