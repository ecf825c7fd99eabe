// Host frame timing
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS input poll / redraw cadence

// Persistence
pub const DATA_DIR_NAME: &str = ".flappy";
pub const BEST_SCORE_FILE: &str = "best.json";
pub const LOG_FILE: &str = "flappy.log";

// Decoration wrap-around
pub const CLOUD_WRAP_MARGIN: f64 = 40.0;

/// Reference cloud layout as (x, y, radius).
pub const DEFAULT_CLOUDS: [(f64, f64, f64); 3] =
    [(50.0, 80.0, 18.0), (220.0, 60.0, 24.0), (360.0, 100.0, 20.0)];

// Pipe identifiers
pub const PIPE_ID_BYTES: usize = 6;
