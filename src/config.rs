use log::info;

/// Which timer, if any, ends the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimerMode {
    /// Play forever; only `q` ends the session.
    Off,
    /// 10-second clock decremented by per-tick delta time. When gated, the
    /// clock does not start until the first directional key is held.
    Countdown { gate_on_first_move: bool },
    /// The shell arms a one-shot 10-second deadline instead of counting
    /// per-tick deltas.
    Scheduled,
}

/// Startup options: which timer variant runs and which keys are accepted.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub timer: TimerMode,
    pub wasd_aliases: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            timer: TimerMode::Countdown { gate_on_first_move: true },
            wasd_aliases: true,
        }
    }
}

impl GameConfig {
    /// Map a `--mode` argument to a timer variant. Unknown values keep the
    /// default and leave a trail in the log.
    pub fn parse_mode(mode: &str) -> TimerMode {
        match mode {
            "free" => TimerMode::Off,
            "countdown" => TimerMode::Countdown { gate_on_first_move: true },
            "scheduled" => TimerMode::Scheduled,
            other => {
                info!("Unknown mode '{}', defaulting to countdown", other);
                TimerMode::Countdown { gate_on_first_move: true }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_strings_map_to_variants() {
        assert_eq!(GameConfig::parse_mode("free"), TimerMode::Off);
        assert_eq!(
            GameConfig::parse_mode("countdown"),
            TimerMode::Countdown { gate_on_first_move: true }
        );
        assert_eq!(GameConfig::parse_mode("scheduled"), TimerMode::Scheduled);
    }

    #[test]
    fn unknown_mode_falls_back_to_countdown() {
        assert_eq!(
            GameConfig::parse_mode("speedrun"),
            TimerMode::Countdown { gate_on_first_move: true }
        );
    }
}
