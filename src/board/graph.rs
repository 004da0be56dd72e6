//! The immutable movement graph.
//!
//! A `Board` is built once from a `BoardLayout` and never mutated. Building
//! classifies every tile, attaches doors to rooms, and repairs doors that
//! have no hallway exit. Layout problems never fail the build: they are
//! collected as `BoardWarning`s and emitted through `tracing`.
//!
//! ## Movement
//!
//! Every legal move costs one unit of move budget:
//! - from a room center: to any of that room's doors
//! - from a door: to the room center, or to an orthogonal hallway tile
//! - from a hallway tile: to an orthogonal hallway or door tile

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{info, warn};

use super::layout::{BoardLayout, RoomSpec};
use super::tile::{Pos, RoomId, Tile, TileKind};

/// Legal destinations from one position.
pub type Moves = SmallVec<[Pos; 4]>;

/// A room as seen by the movement graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub origin: Pos,
    pub width: i32,
    pub height: i32,
    /// Pseudo-position occupied by players inside the room.
    pub center: Pos,
    /// Door tiles in declaration order.
    pub doors: SmallVec<[Pos; 4]>,
}

impl Room {
    fn from_spec(id: RoomId, spec: &RoomSpec) -> Self {
        Self {
            id,
            name: spec.name.clone(),
            origin: spec.origin,
            width: spec.width,
            height: spec.height,
            center: spec.center(),
            doors: SmallVec::new(),
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
}

/// A layout problem found while building a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardWarning {
    /// The room can never be entered.
    RoomWithoutDoors { room: RoomId, name: String },
    /// The door lies outside the grid and was ignored.
    DoorOutOfBounds { pos: Pos },
    /// The door names a room that does not exist and was ignored.
    DoorForUnknownRoom { pos: Pos, room: RoomId },
    /// A hallway tile was synthesized next to a door that had no exit.
    HallwayCarved { door: Pos, room: RoomId, hallway: Pos },
    /// No tile next to the door could be turned into hallway.
    UnreachableDoor { door: Pos, room: RoomId },
}

impl std::fmt::Display for BoardWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoomWithoutDoors { name, .. } => write!(f, "room {name} has no doors"),
            Self::DoorOutOfBounds { pos } => write!(f, "door at {pos} is outside the board"),
            Self::DoorForUnknownRoom { pos, room } => {
                write!(f, "door at {pos} refers to unknown {room}")
            }
            Self::HallwayCarved { door, room, hallway } => {
                write!(f, "created hallway at {hallway} for door {door} of {room}")
            }
            Self::UnreachableDoor { door, room } => {
                write!(f, "door {door} of {room} has no hallway exit")
            }
        }
    }
}

/// Immutable grid of tiles plus the derived room list.
#[derive(Clone, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    /// Row-major.
    tiles: Vec<TileKind>,
    rooms: Vec<Room>,
    doors: FxHashMap<Pos, RoomId>,
    centers: FxHashMap<Pos, RoomId>,
    warnings: Vec<BoardWarning>,
}

impl Board {
    /// Build the board for `layout`.
    ///
    /// Tiles start as hallway; room rectangles become interior, the outer
    /// ring and partition walls become wall, and declared doors are stamped
    /// on top. Doors left
    /// without an orthogonal hallway neighbor get one carved next to them,
    /// never inside any room and never on the outer ring.
    #[must_use]
    pub fn build(layout: &BoardLayout) -> Self {
        let width = layout.width.max(0);
        let height = layout.height.max(0);

        let mut board = Self {
            width,
            height,
            tiles: vec![TileKind::Hallway; (width * height) as usize],
            rooms: layout
                .rooms
                .iter()
                .zip(0..=u8::MAX)
                .map(|(spec, id)| Room::from_spec(RoomId(id), spec))
                .collect(),
            doors: FxHashMap::default(),
            centers: FxHashMap::default(),
            warnings: Vec::new(),
        };

        board.stamp_rooms();
        board.stamp_outer_wall();
        board.stamp_walls(layout);
        board.stamp_doors(layout);
        board.verify_room_doors();
        board.ensure_door_connectivity();

        board
    }

    /// The classic mansion.
    #[must_use]
    pub fn classic() -> Self {
        Self::build(&BoardLayout::classic())
    }

    // === Construction ===

    fn stamp_rooms(&mut self) {
        for i in 0..self.rooms.len() {
            let (id, origin, w, h) = {
                let room = &self.rooms[i];
                (room.id, room.origin, room.width, room.height)
            };
            for y in origin.y..origin.y + h {
                for x in origin.x..origin.x + w {
                    self.set(Pos::new(x, y), TileKind::RoomInterior { room: id });
                }
            }
            self.centers.insert(self.rooms[i].center, id);
        }
    }

    fn stamp_outer_wall(&mut self) {
        for y in 0..self.height {
            self.set(Pos::new(0, y), TileKind::Wall);
            self.set(Pos::new(self.width - 1, y), TileKind::Wall);
        }
        for x in 0..self.width {
            self.set(Pos::new(x, 0), TileKind::Wall);
            self.set(Pos::new(x, self.height - 1), TileKind::Wall);
        }
    }

    fn stamp_walls(&mut self, layout: &BoardLayout) {
        for &pos in &layout.walls {
            if self.kind(pos) == Some(TileKind::Hallway) {
                self.set(pos, TileKind::Wall);
            }
        }
    }

    fn stamp_doors(&mut self, layout: &BoardLayout) {
        for door in &layout.doors {
            if !self.in_bounds(door.pos) {
                self.warn(BoardWarning::DoorOutOfBounds { pos: door.pos });
                continue;
            }
            let Some(room) = self.rooms.get_mut(door.room.index()) else {
                self.warn(BoardWarning::DoorForUnknownRoom {
                    pos: door.pos,
                    room: door.room,
                });
                continue;
            };
            room.doors.push(door.pos);
            self.doors.insert(door.pos, door.room);
            self.set(door.pos, TileKind::Door { room: door.room });
        }
    }

    fn verify_room_doors(&mut self) {
        let mut doorless = Vec::new();
        for room in &self.rooms {
            info!(room = %room.name, doors = room.doors.len(), "room doors");
            if room.doors.is_empty() {
                doorless.push(BoardWarning::RoomWithoutDoors {
                    room: room.id,
                    name: room.name.clone(),
                });
            }
        }
        for warning in doorless {
            self.warn(warning);
        }
    }

    fn ensure_door_connectivity(&mut self) {
        let doors: Vec<(Pos, RoomId)> = self
            .rooms
            .iter()
            .flat_map(|room| room.doors.iter().map(move |&d| (d, room.id)))
            .collect();

        for (door, room) in doors {
            let has_exit = door
                .neighbors()
                .any(|n| self.kind(n) == Some(TileKind::Hallway));
            if has_exit {
                continue;
            }

            match door.neighbors().find(|&n| self.can_carve(n)) {
                Some(hallway) => {
                    self.set(hallway, TileKind::Hallway);
                    self.warn(BoardWarning::HallwayCarved { door, room, hallway });
                }
                None => self.warn(BoardWarning::UnreachableDoor { door, room }),
            }
        }
    }

    fn can_carve(&self, pos: Pos) -> bool {
        let interior = pos.x > 0 && pos.x < self.width - 1 && pos.y > 0 && pos.y < self.height - 1;
        interior
            && !self.doors.contains_key(&pos)
            && !self.rooms.iter().any(|room| room.contains(pos))
    }

    fn warn(&mut self, warning: BoardWarning) {
        warn!(%warning, "board layout");
        self.warnings.push(warning);
    }

    fn set(&mut self, pos: Pos, kind: TileKind) {
        if let Some(i) = self.offset(pos) {
            self.tiles[i] = kind;
        }
    }

    fn offset(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y * self.width + pos.x) as usize)
    }

    // === Queries ===

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Tile kind at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn kind(&self, pos: Pos) -> Option<TileKind> {
        self.offset(pos).map(|i| self.tiles[i])
    }

    #[must_use]
    pub fn tile(&self, pos: Pos) -> Option<Tile> {
        self.kind(pos).map(|kind| Tile { pos, kind })
    }

    /// Every tile, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().enumerate().map(|(i, &kind)| Tile {
            pos: Pos::new(i as i32 % self.width, i as i32 / self.width),
            kind,
        })
    }

    /// True iff `pos` is inside the grid and is a hallway or door tile.
    #[must_use]
    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.kind(pos).is_some_and(TileKind::is_walkable)
    }

    /// The room a door opens into, or `None` if `pos` is not a door.
    #[must_use]
    pub fn door_at(&self, pos: Pos) -> Option<RoomId> {
        self.doors.get(&pos).copied()
    }

    /// The room whose rectangle contains `pos`.
    #[must_use]
    pub fn room_at(&self, pos: Pos) -> Option<RoomId> {
        self.rooms.iter().find(|room| room.contains(pos)).map(|r| r.id)
    }

    /// The room whose center is exactly `pos`.
    #[must_use]
    pub fn center_of(&self, pos: Pos) -> Option<RoomId> {
        self.centers.get(&pos).copied()
    }

    /// The room a player standing at `pos` is considered to be in: the
    /// door's room for a door tile, otherwise the containing room.
    #[must_use]
    pub fn resolve_room(&self, pos: Pos) -> Option<RoomId> {
        self.door_at(pos).or_else(|| self.room_at(pos))
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    #[must_use]
    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name == name)
    }

    /// All door tiles with their rooms.
    pub fn doors(&self) -> impl Iterator<Item = (Pos, RoomId)> + '_ {
        self.rooms
            .iter()
            .flat_map(|room| room.doors.iter().map(move |&d| (d, room.id)))
    }

    /// Problems found while building.
    pub fn warnings(&self) -> &[BoardWarning] {
        &self.warnings
    }

    /// Legal single-step destinations from `pos`.
    ///
    /// Positions that are neither a room center nor walkable have no moves.
    #[must_use]
    pub fn valid_moves(&self, pos: Pos) -> Moves {
        if let Some(room) = self.center_of(pos).and_then(|id| self.room(id)) {
            return room.doors.clone();
        }

        if let Some(room) = self.door_at(pos).and_then(|id| self.room(id)) {
            let mut moves = Moves::new();
            moves.push(room.center);
            moves.extend(
                pos.neighbors()
                    .filter(|&n| self.kind(n) == Some(TileKind::Hallway)),
            );
            return moves;
        }

        if self.kind(pos) != Some(TileKind::Hallway) {
            return Moves::new();
        }

        pos.neighbors().filter(|&n| self.is_walkable(n)).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::DoorSpec;

    fn closet_layout() -> BoardLayout {
        // 7x7 with a 3x3 room in the middle and a door on its top edge.
        BoardLayout::new(7, 7)
            .with_room(RoomSpec::new("Closet", Pos::new(2, 2), 3, 3))
            .with_door(DoorSpec::new(3, 2, 0))
    }

    #[test]
    fn test_classification() {
        let board = Board::build(&closet_layout());

        assert_eq!(board.kind(Pos::new(0, 0)), Some(TileKind::Wall));
        assert_eq!(board.kind(Pos::new(1, 1)), Some(TileKind::Hallway));
        assert_eq!(
            board.kind(Pos::new(3, 2)),
            Some(TileKind::Door { room: RoomId::new(0) })
        );
        assert_eq!(
            board.kind(Pos::new(3, 3)),
            Some(TileKind::RoomInterior { room: RoomId::new(0) })
        );
        assert_eq!(board.kind(Pos::new(-1, 3)), None);
        assert!(board.warnings().is_empty());
    }

    #[test]
    fn test_walkable() {
        let board = Board::build(&closet_layout());

        assert!(board.is_walkable(Pos::new(1, 1)));
        assert!(board.is_walkable(Pos::new(3, 2)));
        assert!(!board.is_walkable(Pos::new(3, 3)));
        assert!(!board.is_walkable(Pos::new(0, 3)));
        assert!(!board.is_walkable(Pos::new(7, 3)));
    }

    #[test]
    fn test_moves_from_center_are_doors() {
        let board = Board::build(&closet_layout());
        let moves = board.valid_moves(Pos::new(3, 3));
        assert_eq!(moves.as_slice(), &[Pos::new(3, 2)]);
    }

    #[test]
    fn test_moves_from_door() {
        let board = Board::build(&closet_layout());
        let moves = board.valid_moves(Pos::new(3, 2));

        // Center first, then the single hallway neighbor above the door.
        assert_eq!(moves.as_slice(), &[Pos::new(3, 3), Pos::new(3, 1)]);
    }

    #[test]
    fn test_moves_from_hallway_skip_walls_and_interiors() {
        let board = Board::build(&closet_layout());

        // (1, 2) borders the wall on the left and the closet on the right.
        let moves = board.valid_moves(Pos::new(1, 2));
        assert_eq!(moves.as_slice(), &[Pos::new(1, 1), Pos::new(1, 3)]);

        // (3, 1) can step down onto the door.
        let moves = board.valid_moves(Pos::new(3, 1));
        assert!(moves.contains(&Pos::new(3, 2)));
        assert!(!moves.contains(&Pos::new(3, 0)));
    }

    #[test]
    fn test_no_moves_from_interior_or_outside() {
        let board = Board::build(&closet_layout());
        assert!(board.valid_moves(Pos::new(2, 2)).is_empty());
        assert!(board.valid_moves(Pos::new(0, 0)).is_empty());
        assert!(board.valid_moves(Pos::new(50, 50)).is_empty());
    }

    #[test]
    fn test_room_resolution() {
        let board = Board::build(&closet_layout());

        assert_eq!(board.door_at(Pos::new(3, 2)), Some(RoomId::new(0)));
        assert_eq!(board.door_at(Pos::new(3, 1)), None);
        assert_eq!(board.center_of(Pos::new(3, 3)), Some(RoomId::new(0)));
        assert_eq!(board.resolve_room(Pos::new(3, 3)), Some(RoomId::new(0)));
        assert_eq!(board.resolve_room(Pos::new(1, 1)), None);
        assert_eq!(board.room_by_name("Closet").map(|r| r.id), Some(RoomId::new(0)));
    }

    #[test]
    fn test_doorless_room_warns() {
        let layout = BoardLayout::new(7, 7).with_room(RoomSpec::new("Vault", Pos::new(2, 2), 3, 3));
        let board = Board::build(&layout);

        assert_eq!(
            board.warnings(),
            &[BoardWarning::RoomWithoutDoors {
                room: RoomId::new(0),
                name: "Vault".to_string(),
            }]
        );
        assert!(board.valid_moves(Pos::new(3, 3)).is_empty());
    }

    #[test]
    fn test_bad_doors_are_skipped() {
        let layout = closet_layout()
            .with_door(DoorSpec::new(9, 9, 0))
            .with_door(DoorSpec::new(3, 4, 5));
        let board = Board::build(&layout);

        assert!(board
            .warnings()
            .contains(&BoardWarning::DoorOutOfBounds { pos: Pos::new(9, 9) }));
        assert!(board.warnings().contains(&BoardWarning::DoorForUnknownRoom {
            pos: Pos::new(3, 4),
            room: RoomId::new(5),
        }));
        assert_eq!(board.doors().count(), 1);
    }

    #[test]
    fn test_tiles_iterates_row_major() {
        let board = Board::build(&closet_layout());
        let tiles: Vec<_> = board.tiles().collect();

        assert_eq!(tiles.len(), 49);
        assert_eq!(tiles[8].pos, Pos::new(1, 1));
        assert_eq!(tiles[8].kind, TileKind::Hallway);
    }
}
