use std::env;
use std::io;

use crossterm::{
    cursor::{Hide, Show},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode, size},
};
use log::{error, info};

use coin_chase::config::GameConfig;
use coin_chase::game::Game;
use coin_chase::rendering::OutputTarget;
use coin_chase::terminal_io::ScriptedInput;

fn main() -> io::Result<()> {
    simple_logging::log_to_file("coin-chase.log", log::LevelFilter::Info)?;
    info!("Starting coin-chase.");

    let args: Vec<String> = env::args().collect();
    let mut config = GameConfig::default();
    let mut debug_mode = false;
    let mut debug_width: u16 = 80;
    let mut debug_height: u16 = 24;
    let mut max_frames: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--debug" => {
                debug_mode = true;
                if i + 2 < args.len() {
                    if let (Ok(w), Ok(h)) = (args[i + 1].parse(), args[i + 2].parse()) {
                        debug_width = w;
                        debug_height = h;
                        i += 2;
                        if i + 1 < args.len() {
                            if let Ok(frames) = args[i + 1].parse() {
                                max_frames = Some(frames);
                                i += 1;
                            }
                        }
                    }
                }
            }
            "--mode" if i + 1 < args.len() => {
                config.timer = GameConfig::parse_mode(&args[i + 1]);
                i += 1;
            }
            "--arrows-only" => config.wasd_aliases = false,
            other => info!("Ignoring unknown argument '{}'", other),
        }
        i += 1;
    }
    info!("Config: {:?}, debug={}", config, debug_mode);

    let mut rng = rand::thread_rng();

    if debug_mode {
        // Headless: scripted keys, frames dumped to the log, capped run.
        let mut game = Game::new(
            debug_width,
            debug_height,
            OutputTarget::LogOnly,
            Some(ScriptedInput::demo()),
            config,
            Some(max_frames.unwrap_or(120)),
        );
        return game.run(&mut rng);
    }

    enable_raw_mode().map_err(|e| {
        error!("Failed to enable raw mode: {}", e);
        e
    })?;
    let (terminal_width, terminal_height) = size().map_err(|e| {
        error!("Failed to get terminal size: {}", e);
        e
    })?;
    info!("Terminal size: {}x{}", terminal_width, terminal_height);

    let mut output = OutputTarget::Stdout(io::stdout());
    output.execute_command(Clear(ClearType::All))?;
    output.execute_command(Hide)?;

    let mut game = Game::new(terminal_width, terminal_height, output, None, config, None);
    let result = game.run(&mut rng);
    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }

    let mut stdout = OutputTarget::Stdout(io::stdout());
    stdout.execute_command(Show).map_err(|e| {
        error!("Failed to show cursor on exit: {}", e);
        e
    })?;
    disable_raw_mode().map_err(|e| {
        error!("Failed to disable raw mode on exit: {}", e);
        e
    })?;
    info!("Exiting.");

    result
}
