use std::collections::HashMap;

use crossterm::event::KeyCode;

/// Frame-indexed key script for headless runs: each entry is the set of
/// keys "held" during that frame.
pub struct ScriptedInput {
    events: HashMap<u64, Vec<KeyCode>>,
}

impl ScriptedInput {
    pub fn new(events: HashMap<u64, Vec<KeyCode>>) -> Self {
        ScriptedInput { events }
    }

    pub fn keys_for_frame(&mut self, frame: u64) -> Vec<KeyCode> {
        self.events.remove(&frame).unwrap_or_default()
    }

    /// The canned demo run used by `--debug`: wander a bit, then quit.
    pub fn demo() -> Self {
        let mut events = HashMap::new();
        events.insert(1, vec![KeyCode::Right]);
        events.insert(2, vec![KeyCode::Right]);
        events.insert(3, vec![KeyCode::Down]);
        events.insert(4, vec![KeyCode::Left]);
        events.insert(30, vec![KeyCode::Char('q')]);
        ScriptedInput::new(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_consumed_once() {
        let mut events = HashMap::new();
        events.insert(3, vec![KeyCode::Up]);
        let mut input = ScriptedInput::new(events);

        assert!(input.keys_for_frame(0).is_empty());
        assert_eq!(input.keys_for_frame(3), vec![KeyCode::Up]);
        assert!(input.keys_for_frame(3).is_empty());
    }
}
