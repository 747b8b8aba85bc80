//! Main entry point for the console front-end.
//!
//! Loads the configuration, starts the game session actor with a stdout renderer,
//! and feeds it JSON commands read line by line from stdin.

use std::io;

use actix::Actor;
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use torus_snake::config::GameConfig;
use torus_snake::session::GameSession;
use torus_snake::session::console::{decode_command, ConsoleRenderer};
use torus_snake::session::messages::{ClientAction, Shutdown, Subscribe};

#[actix::main]
async fn main() -> io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let config = GameConfig::load()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    info!(
        "[Main] Grid {}x{}, tick every {} ms",
        config.grid_size, config.grid_size, config.tick_interval_ms
    );

    let session = GameSession::new(config)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?
        .start();
    let renderer = ConsoleRenderer.start();
    session.do_send(Subscribe(renderer.recipient()));

    let mut reader = BufReader::new(tokio::io::stdin());
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                warn!("[Main] Failed to read stdin: {}", err);
                break;
            }
        }
        if buf.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        match decode_command(&buf) {
            Ok(ClientAction::Quit) => break,
            Ok(action) => session.do_send(action),
            Err(envelope) => println!("{}", envelope),
        }
    }

    // Stdin closed or Quit received: tear the session down before leaving.
    if let Err(err) = session.send(Shutdown).await {
        warn!("[Main] Session already gone: {}", err);
    }
    info!("[Main] Bye");
    Ok(())
}
