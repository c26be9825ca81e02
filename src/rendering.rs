use std::io::{self, Write};

use crossterm::{cursor::MoveTo, execute};
use log::info;

use crate::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::types::Vector2D;

/// Where a composed frame goes: a real terminal, or the log file when
/// running headless.
pub enum OutputTarget {
    Stdout(io::Stdout),
    LogOnly,
}

impl OutputTarget {
    pub fn execute_command(&mut self, command: impl crossterm::Command) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            OutputTarget::LogOnly => Ok(()),
        }
    }
}

/// Character grid the size of the terminal. The whole frame (playfield,
/// HUD, overlays) is composed into it, then presented in one pass.
pub struct GameGrid {
    pub grid: Vec<Vec<char>>,
    pub width: u16,
    pub height: u16,
}

impl GameGrid {
    pub fn new(width: u16, height: u16) -> Self {
        GameGrid {
            grid: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.grid {
            row.fill(' ');
        }
    }

    pub fn set_char(&mut self, x: u16, y: u16, c: char) {
        if y < self.height && x < self.width {
            self.grid[y as usize][x as usize] = c;
        }
    }

    pub fn write_text(&mut self, x: u16, y: u16, text: &str) {
        for (i, c) in text.chars().enumerate() {
            self.set_char(x.saturating_add(i as u16), y, c);
        }
    }

    pub fn write_centered(&mut self, y: u16, text: &str) {
        let x = (self.width / 2).saturating_sub(text.len() as u16 / 2);
        self.write_text(x, y, text);
    }

    /// Scale a playfield coordinate onto the terminal grid. Entities can
    /// wander off the field, so the result may be out of range; `set_char`
    /// drops those cells.
    fn field_to_cell(&self, fx: f64, fy: f64) -> (i64, i64) {
        let cx = (fx / FIELD_WIDTH * self.width as f64).floor() as i64;
        let cy = (fy / FIELD_HEIGHT * self.height as f64).floor() as i64;
        (cx, cy)
    }

    /// Fill the cells covered by a field-space rectangle (center + size)
    /// with the given glyph.
    pub fn fill_field_rect(&mut self, center: Vector2D, width: f64, height: f64, c: char) {
        let (x0, y0) = self.field_to_cell(center.x - width / 2.0, center.y - height / 2.0);
        let (x1, y1) = self.field_to_cell(center.x + width / 2.0, center.y + height / 2.0);
        for cy in y0..=y1 {
            for cx in x0..=x1 {
                if cx >= 0 && cy >= 0 {
                    self.set_char(cx as u16, cy as u16, c);
                }
            }
        }
    }

    pub fn present(&self, target: &mut OutputTarget) -> io::Result<()> {
        match target {
            OutputTarget::Stdout(stdout) => {
                for y in 0..self.height {
                    execute!(stdout, MoveTo(0, y))?;
                    write!(stdout, "{}", self.grid[y as usize].iter().collect::<String>())?;
                }
                stdout.flush()
            }
            OutputTarget::LogOnly => {
                info!("--- Frame ---");
                for row in &self.grid {
                    info!("{}", row.iter().collect::<String>());
                }
                Ok(())
            }
        }
    }
}
