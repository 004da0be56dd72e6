//! Deck construction, solution selection, and dealing.
//!
//! The sequence at game start is:
//! 1. `build_deck` creates one card per character, weapon, and room.
//! 2. `choose_solution` draws one card of each kind and removes them.
//! 3. `deal` shuffles the rest and hands out contiguous blocks in seat
//!    order. When the deck runs short, the last seats get fewer cards (or
//!    none); cards beyond `players * cards_per_player` stay undealt.

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::card::{Card, CardKind, Hand};
use super::solution::Solution;
use crate::core::{GameRng, PlayerMap};

/// Problems with a deck or solution.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("the deck has no {0} cards")]
    EmptyCategory(CardKind),

    #[error("expected a {expected} card, got {} card {}", .card.kind, .card.name)]
    WrongKind { expected: CardKind, card: Card },

    #[error("duplicate {} card {}", .0.kind, .0.name)]
    DuplicateCard(Card),
}

/// One card per name, characters first, then weapons, then rooms.
pub fn build_deck<'a>(
    characters: impl IntoIterator<Item = &'a str>,
    weapons: impl IntoIterator<Item = &'a str>,
    rooms: impl IntoIterator<Item = &'a str>,
) -> Vec<Card> {
    characters
        .into_iter()
        .map(Card::character)
        .chain(weapons.into_iter().map(Card::weapon))
        .chain(rooms.into_iter().map(Card::room))
        .collect()
}

/// Check that no `(kind, name)` appears twice.
pub fn validate_deck(deck: &[Card]) -> Result<(), DeckError> {
    let mut seen = FxHashSet::default();
    for card in deck {
        if !seen.insert(card) {
            return Err(DeckError::DuplicateCard(card.clone()));
        }
    }
    Ok(())
}

/// Draw one character, one weapon, and one room uniformly at random.
///
/// Returns the solution and the remaining cards in their original order.
pub fn choose_solution(
    deck: Vec<Card>,
    rng: &mut GameRng,
) -> Result<(Solution, Vec<Card>), DeckError> {
    let mut picked = [0usize; 3];
    for (slot, kind) in picked.iter_mut().zip(CardKind::ALL) {
        let candidates: Vec<usize> = deck
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind == kind)
            .map(|(i, _)| i)
            .collect();
        *slot = *rng
            .choose(&candidates)
            .ok_or(DeckError::EmptyCategory(kind))?;
    }

    let mut solution_cards: [Option<Card>; 3] = [None, None, None];
    let mut remaining = Vec::with_capacity(deck.len().saturating_sub(3));
    for (i, card) in deck.into_iter().enumerate() {
        match picked.iter().position(|&p| p == i) {
            Some(slot) => solution_cards[slot] = Some(card),
            None => remaining.push(card),
        }
    }

    let [Some(murderer), Some(weapon), Some(room)] = solution_cards else {
        return Err(DeckError::EmptyCategory(CardKind::Character));
    };
    let solution = Solution::new(murderer, weapon, room)?;

    Ok((solution, remaining))
}

/// Result of dealing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    /// One hand per seat.
    pub hands: PlayerMap<Hand>,
    /// Cards left over after every seat got its block.
    pub undealt: Vec<Card>,
}

/// Shuffle `remaining` and give each seat a block of `cards_per_player`.
///
/// Panics if `player_count` is zero.
pub fn deal(
    mut remaining: Vec<Card>,
    player_count: usize,
    cards_per_player: usize,
    rng: &mut GameRng,
) -> Deal {
    rng.shuffle(&mut remaining);

    let mut cards = remaining.into_iter();
    let hands = (0..player_count)
        .map(|_| Hand::new(cards.by_ref().take(cards_per_player)))
        .collect();

    Deal {
        hands: PlayerMap::from_vec(hands),
        undealt: cards.collect(),
    }
}
