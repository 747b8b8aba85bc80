//! Toroidal snake simulation.
//!
//! `game` holds the deterministic engine: state types, the direction gate, food
//! placement and the tick resolver. `session` drives it with an actor timer and
//! broadcasts snapshots; `config` holds the defaults and their overrides.

pub mod config;
pub mod game;
pub mod session;
