//! Cards and hands.
//!
//! A card is identified by `(kind, name)`. The deck holds exactly one card
//! per character, weapon, and room.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The three card categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Character,
    Weapon,
    Room,
}

impl CardKind {
    pub const ALL: [CardKind; 3] = [CardKind::Character, CardKind::Weapon, CardKind::Room];
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CardKind::Character => "Character",
            CardKind::Weapon => "Weapon",
            CardKind::Room => "Room",
        };
        f.write_str(label)
    }
}

/// A single card.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub name: String,
}

impl Card {
    pub fn new(kind: CardKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn character(name: impl Into<String>) -> Self {
        Self::new(CardKind::Character, name)
    }

    pub fn weapon(name: impl Into<String>) -> Self {
        Self::new(CardKind::Weapon, name)
    }

    pub fn room(name: impl Into<String>) -> Self {
        Self::new(CardKind::Room, name)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// The cards dealt to one player. Order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 4]>,
}

impl Hand {
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The cards in this hand equal to any of `wanted`.
    #[must_use]
    pub fn matching(&self, wanted: &[Card]) -> SmallVec<[&Card; 3]> {
        self.cards.iter().filter(|c| wanted.contains(c)).collect()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
