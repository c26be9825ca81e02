use log::info;
use rand::Rng;

use crate::config::{GameConfig, TimerMode};
use crate::constants::*;
use crate::entities::{Coin, Player};
use crate::input::KeyState;

/// Everything the game decides about, in one record. The shell owns one of
/// these and drives it through `update` once per tick; the draw path only
/// reads it.
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    pub coin: Coin,
    pub score: u32,
    pub time_left: f64,
    pub started: bool,
    pub game_over: bool,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        GameState {
            config,
            player: Player::new(FOX_START_X, FOX_START_Y),
            coin: Coin::new(COIN_START_X, COIN_START_Y),
            score: 0,
            time_left: TIME_LIMIT,
            started: false,
            game_over: false,
        }
    }

    /// One tick of the core: input movement, collision, coin placement,
    /// countdown. A no-op once the game is over, so score, coin, and clock
    /// are frozen from that point on.
    pub fn update(&mut self, dt: f64, keys: &KeyState, rng: &mut impl Rng) {
        if self.game_over {
            return;
        }

        if keys.any_direction() {
            self.started = true;
        }
        if let Some(delta) = keys.movement_delta() {
            self.player.step(delta);
        }

        if self.player.overlaps(&self.coin) {
            self.score += SCORE_PER_COIN;
            self.coin.relocate(rng);
            info!("Coin collected, score now {}", self.score);
        }

        if let TimerMode::Countdown { gate_on_first_move } = self.config.timer {
            if !gate_on_first_move || self.started {
                self.time_left -= dt;
                if self.time_left <= 0.0 {
                    self.time_left = 0.0;
                    self.game_over = true;
                    info!("Time expired, final score {}", self.score);
                }
            }
        }
    }

    /// End the session from the shell's one-shot deadline (scheduled mode).
    pub fn time_up(&mut self) {
        if !self.game_over {
            self.game_over = true;
            info!("Scheduled timer fired, final score {}", self.score);
        }
    }

    pub fn shows_clock(&self) -> bool {
        matches!(self.config.timer, TimerMode::Countdown { .. })
    }
}
