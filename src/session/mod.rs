//! Session layer root module.
//!
//! This module wires the engine to its collaborators:
//! - The `GameSession` actor (tick cadence, command handling, broadcasting)
//! - Actor messages and the client command format
//! - The console front-end (command parsing, JSON rendering)
//! - Error envelopes for rejected commands

pub mod messages;
pub mod server;
pub mod console;
pub mod error;

pub use server::GameSession;
