//! Game configuration types.
//!
//! A `GameConfig` names the characters and weapons, carries the board
//! layout, and sets the dealing and log paging constants. The rooms of the
//! layout double as the room cards.

use serde::{Deserialize, Serialize};

use crate::board::{BoardLayout, Pos};

/// Token color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A selectable character: its card name, token color, and hallway start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSpec {
    pub name: String,
    pub color: Rgb,
    pub start: Pos,
}

impl CharacterSpec {
    pub fn new(name: impl Into<String>, color: Rgb, start: Pos) -> Self {
        Self {
            name: name.into(),
            color,
            start,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Characters in selection order.
    pub characters: Vec<CharacterSpec>,

    /// Weapon names.
    pub weapons: Vec<String>,

    /// Board layout; its rooms are the room cards.
    pub layout: BoardLayout,

    /// Size of each dealt block.
    pub cards_per_player: usize,

    /// Log entries per display page.
    pub log_page_size: usize,

    /// Smallest table that can start a game.
    pub min_players: usize,

    /// Largest table that can start a game.
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl GameConfig {
    /// Six characters, six weapons, the eight-room mansion, three cards each.
    #[must_use]
    pub fn classic() -> Self {
        let characters = vec![
            CharacterSpec::new("Colonel Mustard", Rgb(255, 215, 0), Pos::new(10, 9)),
            CharacterSpec::new("Miss Scarlet", Rgb(255, 0, 0), Pos::new(12, 10)),
            CharacterSpec::new("Professor Plum", Rgb(128, 0, 128), Pos::new(8, 11)),
            CharacterSpec::new("Mr. Green", Rgb(0, 128, 0), Pos::new(11, 11)),
            CharacterSpec::new("Mrs. White", Rgb(255, 255, 255), Pos::new(9, 10)),
            CharacterSpec::new("Mrs. Peacock", Rgb(0, 0, 255), Pos::new(10, 12)),
        ];

        let weapons = ["Dagger", "Candlestick", "Pistol", "Wrench", "Lead Pipe", "Rope"]
            .into_iter()
            .map(String::from)
            .collect();

        Self {
            characters,
            weapons,
            layout: BoardLayout::classic(),
            cards_per_player: 3,
            log_page_size: 8,
            min_players: 3,
            max_players: 6,
        }
    }

    /// Replace the board layout.
    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the dealt block size.
    #[must_use]
    pub fn with_cards_per_player(mut self, count: usize) -> Self {
        self.cards_per_player = count;
        self
    }

    /// Set the allowed table size.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the log page size.
    #[must_use]
    pub fn with_log_page_size(mut self, size: usize) -> Self {
        self.log_page_size = size;
        self
    }

    /// Look up a character by card name.
    #[must_use]
    pub fn character(&self, name: &str) -> Option<&CharacterSpec> {
        self.characters.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn has_weapon(&self, name: &str) -> bool {
        self.weapons.iter().any(|w| w == name)
    }

    /// Total number of cards in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.characters.len() + self.weapons.len() + self.layout.rooms.len()
    }
}
