use std::fs::File;

use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use term_snake::game::SnakeGame;

const LOG_FILE: &str = "snake.log";

fn main() {
    // The terminal belongs to the game, so logs go to a file. Without one
    // the game still runs, just unlogged.
    if let Ok(file) = File::create(LOG_FILE) {
        let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
    }
    info!("starting up");

    let mut game = match SnakeGame::new() {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    };

    let result = game.initialize().and_then(|_| game.run());

    if let Err(err) = game.restore() {
        error!("failed to restore terminal: {:#}", err);
    }

    match result {
        Ok(()) => info!("exiting"),
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}
