use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use log::info;
use rand::Rng;

use crate::config::{GameConfig, TimerMode};
use crate::constants::*;
use crate::input::KeyState;
use crate::rendering::{GameGrid, OutputTarget};
use crate::state::GameState;
use crate::terminal_io::ScriptedInput;

/// The shell around the core: frame pacing, key polling, drawing, and the
/// title/final screens. Everything that touches the terminal lives here.
pub struct Game {
    pub terminal_width: u16,
    pub terminal_height: u16,
    output: OutputTarget,
    scripted_input: Option<ScriptedInput>,
    config: GameConfig,
    max_frames: Option<u64>,
}

impl Game {
    pub fn new(
        terminal_width: u16,
        terminal_height: u16,
        output: OutputTarget,
        scripted_input: Option<ScriptedInput>,
        config: GameConfig,
        max_frames: Option<u64>,
    ) -> Self {
        Game {
            terminal_width,
            terminal_height,
            output,
            scripted_input,
            config,
            max_frames,
        }
    }

    fn interactive(&self) -> bool {
        self.scripted_input.is_none()
    }

    pub fn run(&mut self, rng: &mut impl Rng) -> io::Result<()> {
        if self.interactive() {
            self.show_title_screen()?;
        }

        let mut state = GameState::new(self.config);
        state.coin.relocate(rng);

        let mut grid = GameGrid::new(self.terminal_width, self.terminal_height);
        let mut running = true;
        let mut frame_count: u64 = 0;

        // Scheduled mode arms a one-shot deadline instead of counting ticks.
        let deadline = match self.config.timer {
            TimerMode::Scheduled if self.interactive() => {
                Some(Instant::now() + Duration::from_secs_f64(TIME_LIMIT))
            }
            _ => None,
        };
        let mut last_tick = Instant::now();

        while running && self.max_frames.map_or(true, |max| frame_count < max) {
            let mut keys = KeyState::default();
            let dt;
            if let Some(script) = &mut self.scripted_input {
                for code in script.keys_for_frame(frame_count) {
                    if code == KeyCode::Char('q') {
                        running = false;
                    }
                    keys.press(code, self.config.wasd_aliases);
                }
                dt = DEBUG_TICK_DT;
            } else {
                self.poll_keys(&mut keys, &mut running)?;
                let now = Instant::now();
                dt = now.duration_since(last_tick).as_secs_f64();
                last_tick = now;
            }

            if state.game_over {
                break;
            }

            state.update(dt, &keys, rng);

            match deadline {
                Some(d) if Instant::now() >= d => state.time_up(),
                // Headless runs have no useful wall clock; go by frame count.
                None if self.config.timer == TimerMode::Scheduled
                    && frame_count as f64 * DEBUG_TICK_DT >= TIME_LIMIT =>
                {
                    state.time_up()
                }
                _ => {}
            }

            if grid.width != self.terminal_width || grid.height != self.terminal_height {
                grid = GameGrid::new(self.terminal_width, self.terminal_height);
            }
            self.render(&mut grid, &state)?;
            frame_count += 1;
        }

        info!("Game loop ended after {} frames.", frame_count);
        self.show_final_screen(&mut grid, &state)?;
        Ok(())
    }

    /// Drain every pending terminal event into this tick's key set. Held
    /// keys show up through auto-repeat, which is the closest a plain
    /// terminal gets to a held-key query.
    fn poll_keys(&mut self, keys: &mut KeyState, running: &mut bool) -> io::Result<()> {
        if !event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
            return Ok(());
        }
        loop {
            match event::read()? {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => *running = false,
                    code => keys.press(code, self.config.wasd_aliases),
                },
                Event::Resize(new_width, new_height) => {
                    self.terminal_width = new_width;
                    self.terminal_height = new_height;
                }
                _ => {}
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(());
            }
        }
    }

    fn render(&mut self, grid: &mut GameGrid, state: &GameState) -> io::Result<()> {
        grid.clear();
        state.coin.draw(grid);
        state.player.draw(grid);

        grid.write_text(0, 0, &format!("Score: {}", state.score));
        if state.shows_clock() {
            let clock = format!("Time: {}", state.time_left as u32);
            let x = self.terminal_width.saturating_sub(clock.len() as u16);
            grid.write_text(x, 0, &clock);
        }

        let help = if self.config.wasd_aliases {
            "Arrows/WASD: move   q: quit"
        } else {
            "Arrows: move   q: quit"
        };
        grid.write_text(0, self.terminal_height.saturating_sub(1), help);

        grid.present(&mut self.output)
    }

    fn show_title_screen(&mut self) -> io::Result<()> {
        let title_art = [
            r"  ____ ___ ___ _   _    ____ _   _    _    ____  _____ ",
            r" / ___/ _ \_ _| \ | |  / ___| | | |  / \  / ___|| ____|",
            r"| |  | | | | ||  \| | | |   | |_| | / _ \ \___ \|  _|  ",
            r"| |__| |_| | || |\  | | |___|  _  |/ ___ \ ___) | |___ ",
            r" \____\___/___|_| \_|  \____|_| |_/_/   \_\____/|_____|",
        ];

        let mut grid = GameGrid::new(self.terminal_width, self.terminal_height);
        let start_y = (self.terminal_height / 2).saturating_sub(title_art.len() as u16 / 2);
        for (i, line) in title_art.iter().enumerate() {
            grid.write_centered(start_y + i as u16, line);
        }
        grid.write_centered(
            self.terminal_height.saturating_sub(5),
            "Press any key to start...",
        );
        grid.present(&mut self.output)?;

        let _ = event::read()?;
        Ok(())
    }

    fn show_final_screen(&mut self, grid: &mut GameGrid, state: &GameState) -> io::Result<()> {
        grid.clear();
        let mid_y = self.terminal_height / 2;
        grid.write_centered(mid_y.saturating_sub(2), "GAME OVER!");
        grid.write_centered(mid_y, &format!("Final Score: {}", state.score));
        if self.interactive() {
            grid.write_centered(mid_y + 2, "Press any key to exit...");
        }
        grid.present(&mut self.output)?;

        info!("Final score: {}", state.score);
        if self.interactive() {
            let _ = event::read()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn scripted_run_stops_at_frame_cap() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut game = Game::new(
            40,
            20,
            OutputTarget::LogOnly,
            Some(ScriptedInput::demo()),
            GameConfig { timer: TimerMode::Off, wasd_aliases: true },
            Some(10),
        );
        assert!(game.run(&mut rng).is_ok());
    }

    #[test]
    fn scripted_scheduled_run_reaches_game_over() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let frames_past_limit = (TIME_LIMIT / DEBUG_TICK_DT) as u64 + 10;
        let mut game = Game::new(
            40,
            20,
            OutputTarget::LogOnly,
            Some(ScriptedInput::new(Default::default())),
            GameConfig { timer: TimerMode::Scheduled, wasd_aliases: true },
            Some(frames_past_limit),
        );
        assert!(game.run(&mut rng).is_ok());
    }
}
