//! The hidden solution envelope.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardKind};
use super::deck::DeckError;

/// One character, one weapon, and one room, fixed for the whole game.
///
/// Fields are private: the session only hands this out once the game is
/// over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    murderer: Card,
    weapon: Card,
    room: Card,
}

impl Solution {
    /// Build a solution, checking each card's category.
    pub fn new(murderer: Card, weapon: Card, room: Card) -> Result<Self, DeckError> {
        for (card, expected) in [
            (&murderer, CardKind::Character),
            (&weapon, CardKind::Weapon),
            (&room, CardKind::Room),
        ] {
            if card.kind != expected {
                return Err(DeckError::WrongKind {
                    expected,
                    card: card.clone(),
                });
            }
        }
        Ok(Self {
            murderer,
            weapon,
            room,
        })
    }

    #[must_use]
    pub fn murderer(&self) -> &Card {
        &self.murderer
    }

    #[must_use]
    pub fn weapon(&self) -> &Card {
        &self.weapon
    }

    #[must_use]
    pub fn room(&self) -> &Card {
        &self.room
    }

    /// The three cards, character first.
    #[must_use]
    pub fn cards(&self) -> [&Card; 3] {
        [&self.murderer, &self.weapon, &self.room]
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards().contains(&card)
    }

    /// Exact name match on all three parts.
    #[must_use]
    pub fn matches(&self, character: &str, weapon: &str, room: &str) -> bool {
        self.murderer.name == character && self.weapon.name == weapon && self.room.name == room
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in the {} with the {}", self.murderer, self.room, self.weapon)
    }
}
