//! Turn rules: the session state machine, suggestion disproof, and the log.
//!
//! `GameSession` is the only mutable object in a game. Presentation layers
//! read its state and call its commands; nothing else changes it.

pub mod session;
pub mod disproof;
pub mod log;
pub mod outcome;

pub use session::{GameSession, PlayerView, SessionBuilder, SessionSnapshot, UNDISPUTED_NOTICE};
pub use disproof::{resolve_disproof, CardReveal, Disproof, Suggestion};
pub use log::{GameLog, LogEntry};
pub use outcome::{
    AccusationOutcome, DiceRoll, GameOutcome, MoveOutcome, SuggestionOutcome, TurnPhase,
};
