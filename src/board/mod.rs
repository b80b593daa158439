//! Board representation and game-state types.
//!
//! Contains the map graph (regions, super-regions, adjacency), the moves
//! exchanged with the game engine, and the per-turn game state.

pub mod map;
pub mod moves;
pub mod region;
pub mod state;

pub use map::{GameMap, MapError, MapSnapshot, RegionEntry, SuperRegionEntry};
pub use moves::{AttackTransfer, Move, PlaceArmies};
pub use region::{Owner, Region, RegionId, SuperRegion, SuperRegionId, NEUTRAL_NAME, UNKNOWN_NAME};
pub use state::{GameState, Settings};
