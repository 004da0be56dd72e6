//! Core engine types: players, RNG, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, DIE_FACES};
pub use config::{CharacterSpec, GameConfig, Rgb};
pub use error::{SetupError, TurnError};
