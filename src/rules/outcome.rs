//! Values returned by successful turn commands, and turn phases.

use serde::{Deserialize, Serialize};

use super::disproof::{Disproof, Suggestion};
use crate::board::{Pos, RoomId};
use crate::core::PlayerId;

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The current player has not rolled yet.
    AwaitingRoll,
    /// Rolled, with budget left to spend.
    Moving,
    /// Rolled and the budget is spent; only side actions and `end_turn`.
    OutOfMoves,
    /// Terminal.
    GameOver,
}

/// Two dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll(pub u8, pub u8);

impl DiceRoll {
    #[must_use]
    pub fn total(self) -> u32 {
        u32::from(self.0) + u32::from(self.1)
    }
}

/// What a single move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Plain step onto a hallway tile, or from a door out into the hallway.
    Stepped { to: Pos, moves_left: u32 },
    /// Stepped onto a door from outside and was carried to the room center.
    EnteredRoom {
        room: RoomId,
        name: String,
        door: Pos,
        moves_left: u32,
    },
    /// Moved from a door onto the room center.
    AtCenter {
        room: RoomId,
        name: String,
        moves_left: u32,
    },
    /// Left the room center onto one of its doors.
    ExitedRoom {
        room: RoomId,
        name: String,
        door: Pos,
        moves_left: u32,
    },
}

impl MoveOutcome {
    #[must_use]
    pub fn moves_left(&self) -> u32 {
        match self {
            MoveOutcome::Stepped { moves_left, .. }
            | MoveOutcome::EnteredRoom { moves_left, .. }
            | MoveOutcome::AtCenter { moves_left, .. }
            | MoveOutcome::ExitedRoom { moves_left, .. } => *moves_left,
        }
    }

    /// The room the player is now inside, if any.
    #[must_use]
    pub fn entered_room(&self) -> Option<RoomId> {
        match self {
            MoveOutcome::EnteredRoom { room, .. } | MoveOutcome::AtCenter { room, .. } => {
                Some(*room)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Stepped { to, moves_left } => {
                write!(f, "Moved to {to}. Moves left: {moves_left}")
            }
            MoveOutcome::EnteredRoom { name, .. } | MoveOutcome::AtCenter { name, .. } => {
                write!(f, "In {name}. Make a suggestion or move to a door to exit.")
            }
            MoveOutcome::ExitedRoom { name, moves_left, .. } => {
                write!(f, "Exited {name} through a door. Moves left: {moves_left}")
            }
        }
    }
}

/// Result of a suggestion, as seen by the suggester.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuggestionOutcome {
    pub suggestion: Suggestion,
    pub disproof: Disproof,
}

/// Result of an accusation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccusationOutcome {
    /// The accuser wins and the game is over.
    Correct,
    /// The accuser is eliminated. `game_over` is set when nobody active
    /// remains.
    Incorrect { game_over: bool },
}

impl AccusationOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AccusationOutcome::Correct)
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// `None` when every player was eliminated.
    pub winner: Option<PlayerId>,
}
