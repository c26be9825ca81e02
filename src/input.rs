use crossterm::event::KeyCode;

use crate::constants::MOVE_STEP;
use crate::types::Vector2D;

/// Directional keys observed as held during the current tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl KeyState {
    pub fn any_direction(&self) -> bool {
        self.left || self.right || self.up || self.down
    }

    /// One axis of movement per tick, first match wins: left, right, up,
    /// down.
    pub fn movement_delta(&self) -> Option<Vector2D> {
        if self.left {
            Some(Vector2D::new(-MOVE_STEP, 0.0))
        } else if self.right {
            Some(Vector2D::new(MOVE_STEP, 0.0))
        } else if self.up {
            Some(Vector2D::new(0.0, -MOVE_STEP))
        } else if self.down {
            Some(Vector2D::new(0.0, MOVE_STEP))
        } else {
            None
        }
    }

    /// Fold a key event into the tick's held-direction set. Arrow keys are
    /// always accepted; WASD only when aliases are enabled.
    pub fn press(&mut self, code: KeyCode, wasd_aliases: bool) {
        match code {
            KeyCode::Left => self.left = true,
            KeyCode::Right => self.right = true,
            KeyCode::Up => self.up = true,
            KeyCode::Down => self.down = true,
            KeyCode::Char('a') if wasd_aliases => self.left = true,
            KeyCode::Char('d') if wasd_aliases => self.right = true,
            KeyCode::Char('w') if wasd_aliases => self.up = true,
            KeyCode::Char('s') if wasd_aliases => self.down = true,
            _ => {}
        }
    }
}
