/// Main configuration module.
///
/// Re-exports the game defaults, the runtime config and its error type.
pub mod game;
pub mod error;

pub use game::GameConfig;
pub use error::ConfigError;
