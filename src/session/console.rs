//! Console front-end pieces.
//!
//! Commands arrive as one JSON `ClientAction` per line; every state update leaves as
//! one JSON line on stdout.

use std::io::{self, Write};

use actix::prelude::*;
use log::warn;

use crate::session::error::invalid_command_message;
use crate::session::messages::{ClientAction, GameStateUpdate};

/// Parse a console line. On failure the error is the envelope to print back.
pub fn parse_command(line: &str) -> Result<ClientAction, String> {
    serde_json::from_str(line.trim()).map_err(|err| {
        warn!("[Console] Invalid command {:?}: {}", line, err);
        invalid_command_message(line, &err.to_string())
    })
}

/// Decode a raw console line. Bytes that are not UTF-8 are rejected with the same
/// envelope as a malformed command.
pub fn decode_command(raw: &[u8]) -> Result<ClientAction, String> {
    match std::str::from_utf8(raw) {
        Ok(line) => parse_command(line),
        Err(err) => {
            let lossy = String::from_utf8_lossy(raw);
            warn!("[Console] Non UTF-8 command {:?}: {}", lossy, err);
            Err(invalid_command_message(lossy.trim(), &err.to_string()))
        }
    }
}

pub fn render_update(update: &GameStateUpdate) -> Result<String, serde_json::Error> {
    serde_json::to_string(update)
}

/// Subscriber printing each update to stdout.
pub struct ConsoleRenderer;

impl Actor for ConsoleRenderer {
    type Context = Context<Self>;
}

impl Handler<GameStateUpdate> for ConsoleRenderer {
    type Result = ();

    fn handle(&mut self, msg: GameStateUpdate, _: &mut Context<Self>) -> Self::Result {
        let line = match render_update(&msg) {
            Ok(line) => line,
            Err(err) => {
                warn!("[Console] Failed to serialize game state: {}", err);
                return;
            }
        };
        let mut stdout = io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{}", line) {
            warn!("[Console] Failed to write game state: {}", err);
        }
    }
}
