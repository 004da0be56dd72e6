//! Error types for session setup and turn commands.
//!
//! Every variant is recoverable: a failed command leaves the session as it
//! was, and the caller may try a different action.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::{Pos, RoomId};
use crate::cards::DeckError;

/// Why a turn command was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("the game is over")]
    GameOver,

    #[error("{player} has been eliminated and can only end the turn")]
    PlayerEliminated { player: PlayerId },

    #[error("you can only roll dice once per turn")]
    AlreadyRolled,

    #[error("roll the dice before moving")]
    MustRollFirst,

    #[error("no moves left; roll the dice or end your turn")]
    NoMovesLeft,

    #[error("invalid move to {target}")]
    InvalidMove { target: Pos },

    #[error("you must be in a room or at a door to do that")]
    NotInRoom,

    #[error("unknown character {0:?}")]
    UnknownCharacter(String),

    #[error("unknown weapon {0:?}")]
    UnknownWeapon(String),

    #[error("unknown room {0}")]
    UnknownRoom(RoomId),

    #[error("acknowledge the shown card or notification first")]
    AwaitingAcknowledgement,

    #[error("there is nothing to acknowledge")]
    NothingToAcknowledge,
}

/// Why a session could not be created.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("a game needs {min} to {max} players, got {got}")]
    PlayerCount { got: usize, min: usize, max: usize },

    #[error("no character with index {0}")]
    UnknownCharacter(usize),

    #[error("character {0} was selected twice")]
    DuplicateCharacter(usize),

    #[error(transparent)]
    Deck(#[from] DeckError),
}
