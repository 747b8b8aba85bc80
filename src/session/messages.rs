use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::state::GameState;
use crate::game::types::Direction;

/// Commands a front-end can send to a session.
#[derive(Message, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[rtype(result = "()")]
pub enum ClientAction {
    Start,
    Restart,
    Turn(Direction),
    Quit,
}

#[derive(Message)]
#[rtype(result = "GameState")]
pub struct Start;

#[derive(Message)]
#[rtype(result = "GameState")]
pub struct Restart;

#[derive(Message)]
#[rtype(result = "()")]
pub struct Turn(pub Direction);

/// Advance the simulation by one step. Sent by the session's own timer, or by an
/// external driver.
#[derive(Message)]
#[rtype(result = "GameState")]
pub struct Tick;

#[derive(Message)]
#[rtype(result = "GameState")]
pub struct GetState;

#[derive(Message)]
#[rtype(result = "()")]
pub struct Subscribe(pub Recipient<GameStateUpdate>);

/// Cancel the tick timer and stop the session.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Shutdown;

#[derive(Message, Clone, Serialize, Deserialize, Debug)]
#[rtype(result = "()")]
pub struct GameStateUpdate {
    pub session_id: Uuid,
    pub state: GameState,
}
