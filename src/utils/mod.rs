//! Utility modules: persistence.

pub mod persistence;

pub use persistence::{JsonScoreStore, MemoryScoreStore, ScoreStore};
