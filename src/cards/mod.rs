//! Cards, hands, the solution envelope, and the deal.

pub mod card;
pub mod solution;
pub mod deck;

pub use card::{Card, CardKind, Hand};
pub use solution::Solution;
pub use deck::{build_deck, choose_solution, deal, validate_deck, Deal, DeckError};
