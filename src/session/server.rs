//! Game session actor.
//!
//! Owns the engine, runs the tick cadence and broadcasts a snapshot to every
//! subscriber after each state change.

use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info};
use uuid::Uuid;

use crate::config::{ConfigError, GameConfig};
use crate::game::engine::Engine;
use crate::game::state::GameState;
use crate::session::messages::{
    ClientAction, GameStateUpdate, GetState, Restart, Shutdown, Start, Subscribe, Tick, Turn,
};

pub struct GameSession {
    pub session_id: Uuid,
    engine: Engine,
    subscribers: Vec<Recipient<GameStateUpdate>>,
    tick_timer: Option<SpawnHandle>,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, _: &mut Self::Context) {
        info!(
            "[GameSession] Session {} ready (tick every {} ms)",
            self.session_id,
            self.engine.config().tick_interval_ms
        );
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        info!("[GameSession] Session {} stopped", self.session_id);
    }
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_engine(Engine::new(config)?))
    }

    pub fn with_engine(engine: Engine) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            engine,
            subscribers: Vec::new(),
            tick_timer: None,
        }
    }

    pub fn send_state(&mut self) {
        self.subscribers.retain(|subscriber| subscriber.connected());
        let update = GameStateUpdate {
            session_id: self.session_id,
            state: self.engine.state().clone(),
        };
        for subscriber in &self.subscribers {
            subscriber.do_send(update.clone());
        }
    }

    fn start_ticking(&mut self, ctx: &mut Context<Self>) {
        self.stop_ticking(ctx);
        let interval = self.engine.config().tick_interval();
        let handle = ctx.run_interval(interval, |act, ctx| {
            act.resolve_tick(ctx);
        });
        self.tick_timer = Some(handle);
    }

    fn stop_ticking(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.tick_timer.take() {
            ctx.cancel_future(handle);
        }
    }

    fn start_game(&mut self, ctx: &mut Context<Self>) -> GameState {
        let state = self.engine.start();
        self.start_ticking(ctx);
        self.send_state();
        state
    }

    fn restart_game(&mut self, ctx: &mut Context<Self>) -> GameState {
        let state = self.engine.restart();
        self.start_ticking(ctx);
        self.send_state();
        state
    }

    fn shutdown(&mut self, ctx: &mut Context<Self>) {
        self.stop_ticking(ctx);
        ctx.stop();
    }

    fn resolve_tick(&mut self, ctx: &mut Context<Self>) -> GameState {
        let was_running = self.engine.state().is_running();
        let state = self.engine.tick();
        if !was_running {
            return state;
        }

        self.send_state();

        if state.is_over() {
            debug!("[GameSession] Session {} halted, waiting for restart", self.session_id);
            self.stop_ticking(ctx);
        }
        state
    }
}

impl Handler<Start> for GameSession {
    type Result = MessageResult<Start>;

    fn handle(&mut self, _: Start, ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.start_game(ctx))
    }
}

impl Handler<Restart> for GameSession {
    type Result = MessageResult<Restart>;

    fn handle(&mut self, _: Restart, ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.restart_game(ctx))
    }
}

impl Handler<Turn> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Turn, _: &mut Context<Self>) -> Self::Result {
        self.engine.request_direction(msg.0);
    }
}

impl Handler<Tick> for GameSession {
    type Result = MessageResult<Tick>;

    fn handle(&mut self, _: Tick, ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.resolve_tick(ctx))
    }
}

impl Handler<GetState> for GameSession {
    type Result = MessageResult<GetState>;

    fn handle(&mut self, _: GetState, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.engine.state().clone())
    }
}

impl Handler<Subscribe> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Subscribe, _: &mut Context<Self>) -> Self::Result {
        self.subscribers.retain(|subscriber| subscriber.connected());
        msg.0.do_send(GameStateUpdate {
            session_id: self.session_id,
            state: self.engine.state().clone(),
        });
        self.subscribers.push(msg.0);
    }
}

impl Handler<Shutdown> for GameSession {
    type Result = ();

    fn handle(&mut self, _: Shutdown, ctx: &mut Context<Self>) -> Self::Result {
        self.shutdown(ctx);
    }
}

impl Handler<ClientAction> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: ClientAction, ctx: &mut Context<Self>) -> Self::Result {
        debug!("[GameSession] Client action {:?}", msg);
        match msg {
            ClientAction::Start => {
                self.start_game(ctx);
            }
            ClientAction::Restart => {
                self.restart_game(ctx);
            }
            ClientAction::Turn(direction) => {
                self.engine.request_direction(direction);
            }
            ClientAction::Quit => {
                self.shutdown(ctx);
            }
        }
    }
}
