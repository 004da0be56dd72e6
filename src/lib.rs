//! # clue-engine
//!
//! Rules engine for a Clue-style deduction board game.
//!
//! ## Design Principles
//!
//! 1. **Explicit Session**: One `GameSession` per game, built by
//!    `SessionBuilder`. No global state; any number of games can run side
//!    by side.
//!
//! 2. **Seeded Randomness**: Dice, the solution, the deal, and disproof
//!    tie-breaks all draw from one `GameRng`. The same seed replays the
//!    same game.
//!
//! 3. **Hidden Information Stays Hidden**: The solution is only readable
//!    once the game is over, and a shown card is only readable by the two
//!    players involved. The public log never names it.
//!
//! ## Modules
//!
//! - `core`: Player ids, players, RNG, configuration, errors
//! - `board`: Tiles, room and door layout, door repair, legal moves
//! - `cards`: Cards, hands, the solution envelope, dealing
//! - `rules`: The session state machine, disproof, the game log
//!
//! ## Example
//!
//! ```
//! use clue_engine::{GameConfig, SessionBuilder, TurnPhase};
//!
//! let mut session = SessionBuilder::new(GameConfig::classic())
//!     .characters(&[0, 1, 2])
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(session.phase(), TurnPhase::AwaitingRoll);
//! session.roll_dice().unwrap();
//!
//! let step = session.valid_moves()[0];
//! let outcome = session.move_player(step).unwrap();
//! println!("{outcome}");
//!
//! session.end_turn().unwrap();
//! assert_eq!(session.current_player().name, "Miss Scarlet");
//! ```

pub mod core;
pub mod board;
pub mod cards;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CharacterSpec, GameConfig, GameRng, Player, PlayerId, PlayerMap, Rgb, SetupError, TurnError,
};

pub use crate::board::{Board, BoardLayout, BoardWarning, DoorSpec, Pos, Room, RoomId, RoomSpec, TileKind};

pub use crate::cards::{Card, CardKind, DeckError, Hand, Solution};

pub use crate::rules::{
    AccusationOutcome, CardReveal, DiceRoll, Disproof, GameLog, GameOutcome, GameSession,
    LogEntry, MoveOutcome, SessionBuilder, SessionSnapshot, Suggestion, SuggestionOutcome,
    TurnPhase,
};
