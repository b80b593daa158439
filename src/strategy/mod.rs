//! Decision making.
//!
//! Turns the region classification into starting picks, army placements,
//! and attack/transfer orders. Each heuristic is a plain function of the
//! current state; the engine sequences them and applies placements to the
//! map so the attack phase sees the reinforced totals.

pub mod attack;
pub mod pick;
pub mod placement;

use thiserror::Error;

pub use attack::attack_transfer;
pub use pick::{pick_starting_region, pick_starting_regions};
pub use placement::{apply_placements, place_armies};

/// Preconditions the game engine is expected to guarantee.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("no pickable starting regions offered")]
    EmptyPickPool,

    #[error("{armies} armies left to place but no border region to place them on")]
    NoPlacementTarget { armies: u32 },
}
