//! Static board layouts.
//!
//! A `BoardLayout` is the raw description a `Board` is built from: grid
//! size, room rectangles, door coordinates, and optional partition walls.
//! Layouts are plain data and
//! can be supplied through `GameConfig`; `BoardLayout::classic()` is the
//! default mansion.

use serde::{Deserialize, Serialize};

use super::tile::{Pos, RoomId};

/// A rectangular room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    /// Top-left tile.
    pub origin: Pos,
    pub width: i32,
    pub height: i32,
}

impl RoomSpec {
    pub fn new(name: impl Into<String>, origin: Pos, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            origin,
            width,
            height,
        }
    }

    /// Point-in-rectangle test.
    #[must_use]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.origin.x
            && pos.x < self.origin.x + self.width
            && pos.y >= self.origin.y
            && pos.y < self.origin.y + self.height
    }

    /// The tile players occupy while inside the room.
    #[must_use]
    pub fn center(&self) -> Pos {
        Pos::new(
            self.origin.x + self.width / 2,
            self.origin.y + self.height / 2,
        )
    }
}

/// A door tile and the room it opens into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorSpec {
    pub pos: Pos,
    pub room: RoomId,
}

impl DoorSpec {
    #[must_use]
    pub const fn new(x: i32, y: i32, room: u8) -> Self {
        Self {
            pos: Pos::new(x, y),
            room: RoomId::new(room),
        }
    }
}

/// Raw board description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub width: i32,
    pub height: i32,
    /// Room order defines `RoomId`s.
    pub rooms: Vec<RoomSpec>,
    pub doors: Vec<DoorSpec>,
    /// Extra wall tiles inside the outer ring.
    #[serde(default)]
    pub walls: Vec<Pos>,
}

impl BoardLayout {
    /// An empty layout: a walled grid of hallway.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            rooms: Vec::new(),
            doors: Vec::new(),
            walls: Vec::new(),
        }
    }

    /// Add a room. Its `RoomId` is its position in insertion order.
    #[must_use]
    pub fn with_room(mut self, room: RoomSpec) -> Self {
        self.rooms.push(room);
        self
    }

    /// Add a door.
    #[must_use]
    pub fn with_door(mut self, door: DoorSpec) -> Self {
        self.doors.push(door);
        self
    }

    /// Add a partition wall tile.
    #[must_use]
    pub fn with_wall(mut self, pos: Pos) -> Self {
        self.walls.push(pos);
        self
    }

    /// Room names in `RoomId` order.
    pub fn room_names(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(|r| r.name.as_str())
    }

    /// The 21x21 mansion: eight rooms around a central hallway block, each
    /// room with two or three doors.
    #[must_use]
    pub fn classic() -> Self {
        let rooms = vec![
            RoomSpec::new("Study", Pos::new(1, 1), 6, 6),
            RoomSpec::new("Kitchen", Pos::new(14, 1), 6, 6),
            RoomSpec::new("Garage", Pos::new(1, 8), 6, 5),
            RoomSpec::new("Bathroom", Pos::new(14, 8), 6, 5),
            RoomSpec::new("Games Room", Pos::new(1, 14), 6, 6),
            RoomSpec::new("Living Room", Pos::new(14, 14), 6, 6),
            RoomSpec::new("Bedroom", Pos::new(8, 1), 5, 6),
            RoomSpec::new("Dining Room", Pos::new(8, 14), 5, 6),
        ];

        let doors = vec![
            // Study
            DoorSpec::new(3, 6, 0),
            DoorSpec::new(6, 3, 0),
            // Kitchen
            DoorSpec::new(14, 3, 1),
            DoorSpec::new(17, 6, 1),
            // Garage
            DoorSpec::new(6, 10, 2),
            DoorSpec::new(3, 8, 2),
            DoorSpec::new(3, 12, 2),
            // Bathroom
            DoorSpec::new(14, 10, 3),
            DoorSpec::new(17, 8, 3),
            DoorSpec::new(17, 12, 3),
            // Games Room
            DoorSpec::new(6, 17, 4),
            DoorSpec::new(3, 14, 4),
            // Living Room
            DoorSpec::new(14, 17, 5),
            DoorSpec::new(17, 14, 5),
            // Bedroom
            DoorSpec::new(10, 6, 6),
            DoorSpec::new(8, 3, 6),
            DoorSpec::new(12, 3, 6),
            // Dining Room
            DoorSpec::new(10, 14, 7),
            DoorSpec::new(8, 17, 7),
            DoorSpec::new(12, 17, 7),
        ];

        Self {
            width: 21,
            height: 21,
            rooms,
            doors,
            walls: Vec::new(),
        }
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::classic()
    }
}
