// src/main.rs
mod config;
mod console;
mod handlers;
mod models;
mod session;
mod simulation;
mod stats;
mod storage;
mod utils;

use std::io;

use env_logger::Env;
use log::info;

use crate::config::Config;
use crate::console::Console;
use crate::storage::file;

fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    // Logs go to stderr so they do not tear the dashboard on stdout
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let config = Config::from_env();
    info!("Using data file {}", config.data_file.display());

    let store = file::load(&config.data_file);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(
        stdin.lock(),
        stdout.lock(),
        config.message_pause(),
        config.short_pause(),
    );

    let mut rng = rand::thread_rng();
    let store = session::run(&mut console, store, &config, &mut rng)?;
    info!("Session ended with {} server(s)", store.len());
    Ok(())
}
