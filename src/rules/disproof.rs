//! Suggestion disproof.
//!
//! Players are asked in turn order starting after the suggester. The first
//! active player holding any suggested card must show exactly one of them;
//! with several matches the shown card is picked at random so the suggester
//! learns nothing about the others.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameRng, Player, PlayerId, PlayerMap};

/// A non-binding guess raised from inside a room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub suggester: PlayerId,
    pub character: String,
    pub weapon: String,
    /// Always the room the suggester stands in.
    pub room: String,
}

impl Suggestion {
    /// The three suggested cards.
    #[must_use]
    pub fn cards(&self) -> [Card; 3] {
        [
            Card::character(self.character.as_str()),
            Card::weapon(self.weapon.as_str()),
            Card::room(self.room.as_str()),
        ]
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in the {} with the {}", self.character, self.room, self.weapon)
    }
}

/// Outcome of asking the table to disprove a suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Disproof {
    /// `disprover` privately showed `card` to the suggester.
    Shown { disprover: PlayerId, card: Card },
    /// Nobody else holds any of the three cards.
    Undisputed,
}

impl Disproof {
    #[must_use]
    pub fn disprover(&self) -> Option<PlayerId> {
        match self {
            Disproof::Shown { disprover, .. } => Some(*disprover),
            Disproof::Undisputed => None,
        }
    }

    #[must_use]
    pub fn is_undisputed(&self) -> bool {
        matches!(self, Disproof::Undisputed)
    }
}

/// Find the first player after the suggester who can disprove, and the card
/// they show.
///
/// Inactive players and the suggester are skipped. `rng` is only drawn from
/// when the disprover holds more than one matching card.
pub fn resolve_disproof(
    suggestion: &Suggestion,
    players: &PlayerMap<Player>,
    rng: &mut GameRng,
) -> Disproof {
    let wanted = suggestion.cards();

    for seat in suggestion.suggester.following(players.player_count()) {
        if seat == suggestion.suggester {
            continue;
        }
        let Some(player) = players.get(seat).filter(|p| p.active) else {
            continue;
        };

        let matches = player.hand().matching(&wanted);
        let shown = match matches.as_slice() {
            [] => continue,
            [only] => *only,
            several => match rng.choose(several) {
                Some(card) => *card,
                None => continue,
            },
        };

        return Disproof::Shown {
            disprover: seat,
            card: shown.clone(),
        };
    }

    Disproof::Undisputed
}

/// A card shown privately during disproof, awaiting acknowledgement.
///
/// Only the suggester and the disprover may see which card it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardReveal {
    pub suggester: PlayerId,
    pub disprover: PlayerId,
    card: Card,
}

impl CardReveal {
    pub(crate) fn new(suggester: PlayerId, disprover: PlayerId, card: Card) -> Self {
        Self {
            suggester,
            disprover,
            card,
        }
    }

    /// The shown card, if `viewer` is allowed to see it.
    #[must_use]
    pub fn card_for(&self, viewer: PlayerId) -> Option<&Card> {
        (viewer == self.suggester || viewer == self.disprover).then_some(&self.card)
    }
}
