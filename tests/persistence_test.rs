//! Integration test: Best score persistence and config files
//!
//! Uses real files under the system temp directory.

use flappy::core::tick::FixedStep;
use flappy::{
    ConfigError, GameConfig, GameInput, GameSession, GameState, JsonScoreStore, ScoreStore,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;

fn temp_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("flappy_it_{}", name));
    let _ = fs::remove_file(&path);
    path
}

/// Flap once, then let the bird fall until the run ends.
fn play_one_run<S: ScoreStore>(session: &mut GameSession<S, ChaCha8Rng>) {
    let mut ticks = FixedStep::new(1.0 / 60.0);
    session.push_input(GameInput::Flap);
    session.run_frame(&mut ticks);
    while session.game().state == GameState::Playing {
        session.run_frame(&mut ticks);
    }
}

// =============================================================================
// Score store
// =============================================================================

#[test]
fn test_missing_file_means_no_best() {
    let path = temp_file("missing.json");
    assert_eq!(JsonScoreStore::at(&path).load(), 0);
}

#[test]
fn test_corrupt_file_means_no_best() {
    let path = temp_file("corrupt.json");
    fs::write(&path, "{ not json").unwrap();
    assert_eq!(JsonScoreStore::at(&path).load(), 0);
    let _ = fs::remove_file(&path);
}

#[test]
fn test_best_survives_new_session() {
    let path = temp_file("session_best.json");
    fs::write(&path, r#"{"best": 7}"#).unwrap();

    let mut session = GameSession::new(
        GameConfig::default(),
        JsonScoreStore::at(&path),
        ChaCha8Rng::seed_from_u64(1),
    )
    .unwrap();
    assert_eq!(session.game().best, 7);

    play_one_run(&mut session);
    assert_eq!(session.game().state, GameState::GameOver);

    // Written on game over even though the record was not beaten
    let reopened = JsonScoreStore::at(&path);
    assert_eq!(reopened.load(), 7);
    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"best\""));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_unwritable_store_is_fail_soft() {
    // A directory where the file should be makes every write fail
    let path = temp_file("store_is_dir");
    let _ = fs::remove_dir_all(&path);
    fs::create_dir_all(&path).unwrap();

    let mut session = GameSession::new(
        GameConfig::default(),
        JsonScoreStore::at(&path),
        ChaCha8Rng::seed_from_u64(2),
    )
    .unwrap();
    assert_eq!(session.game().best, 0);

    play_one_run(&mut session);
    assert_eq!(session.game().state, GameState::GameOver);

    session.push_input(GameInput::Reset);
    session.frame(0.0);
    assert_eq!(session.game().state, GameState::Ready);

    let _ = fs::remove_dir_all(&path);
}

// =============================================================================
// Config files
// =============================================================================

#[test]
fn test_partial_config_file_keeps_defaults() {
    let path = temp_file("partial_config.json");
    fs::write(&path, r#"{"pipe_gap": 180.0, "gravity": 1200.0}"#).unwrap();

    let config = GameConfig::from_json_file(&path).unwrap();
    assert_eq!(config.pipe_gap, 180.0);
    assert_eq!(config.gravity, 1200.0);
    assert_eq!(config.world_width, GameConfig::default().world_width);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_impossible_gap_rejected_from_file() {
    let path = temp_file("bad_gap.json");
    fs::write(&path, r#"{"pipe_gap": 480.0}"#).unwrap();

    let err = GameConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::GapTooLarge { .. }));
    assert!(!err.to_string().is_empty());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let path = temp_file("no_such_config.json");
    let err = GameConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
