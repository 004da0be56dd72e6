//! Grid coordinates and tile classification.

use serde::{Deserialize, Serialize};

/// Room identifier: index into the board's room list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub u8);

impl RoomId {
    /// Create a new room ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room({})", self.0)
    }
}

/// A grid coordinate. `x` grows to the right, `y` grows downwards.
///
/// Signed so that neighbors of edge tiles can be computed and then rejected
/// by the bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    /// Orthogonal steps in the order moves are reported: up, right, down, left.
    pub const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbors, unchecked against any bounds.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        Self::DIRECTIONS
            .into_iter()
            .map(move |(dx, dy)| Pos::new(self.x + dx, self.y + dy))
    }

    /// Manhattan distance.
    #[must_use]
    pub fn distance(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What occupies a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Outer ring of the board. Never walkable.
    Wall,
    /// Corridor tile. Walkable.
    Hallway,
    /// Entrance into a room. Walkable.
    Door { room: RoomId },
    /// Inside a room. Only the room's center is ever occupied, and only via
    /// a door transition.
    RoomInterior { room: RoomId },
}

impl TileKind {
    /// True for `Hallway` and `Door`.
    #[must_use]
    pub fn is_walkable(self) -> bool {
        matches!(self, TileKind::Hallway | TileKind::Door { .. })
    }
}

/// A classified grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub pos: Pos,
    pub kind: TileKind,
}
