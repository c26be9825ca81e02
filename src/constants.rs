// --- Game Constants ---
pub const FIELD_WIDTH: f64 = 400.0;
pub const FIELD_HEIGHT: f64 = 400.0;

pub const COIN_MARGIN: f64 = 20.0; // Inset from the field edge for coin placement
pub const MOVE_STEP: f64 = 5.0; // Units the fox moves per tick
pub const SCORE_PER_COIN: u32 = 10;
pub const TIME_LIMIT: f64 = 10.0; // Seconds on the countdown clock

pub const FOX_WIDTH: f64 = 32.0;
pub const FOX_HEIGHT: f64 = 32.0;
pub const COIN_WIDTH: f64 = 24.0;
pub const COIN_HEIGHT: f64 = 24.0;

pub const FOX_START_X: f64 = 100.0;
pub const FOX_START_Y: f64 = 100.0;
pub const COIN_START_X: f64 = 200.0;
pub const COIN_START_Y: f64 = 200.0;

pub const FRAME_INTERVAL_MS: u64 = 33; // ~30 FPS, doubles as the event poll timeout
pub const DEBUG_TICK_DT: f64 = FRAME_INTERVAL_MS as f64 / 1000.0; // Synthetic dt when headless
