//! Board connectivity: tiles, rooms, doors, and legal single-step moves.
//!
//! `BoardLayout` is the raw data; `Board` is the immutable graph built from
//! it once per game.

pub mod tile;
pub mod layout;
pub mod graph;

pub use tile::{Pos, RoomId, Tile, TileKind};
pub use layout::{BoardLayout, DoorSpec, RoomSpec};
pub use graph::{Board, BoardWarning, Moves, Room};
