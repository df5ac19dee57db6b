//! Bulls and Hits on the terminal.

use std::process::ExitCode;

use bulls_hits::{ConsoleInteraction, GameConfig, GameEngine};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut ui = ConsoleInteraction::stdio();
    let result = GameEngine::new(GameConfig::new()).and_then(|mut engine| engine.run_session(&mut ui));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
