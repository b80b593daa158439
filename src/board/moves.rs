//! Move types produced by the strategy and read back from the opponent.

use super::region::RegionId;

/// Armies added to one of our regions during the placement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceArmies {
    pub region: RegionId,
    pub armies: u32,
}

/// Armies sent from one region to an adjacent one. The game engine treats
/// it as a transfer when both ends share an owner and an attack otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttackTransfer {
    pub from: RegionId,
    pub to: RegionId,
    pub armies: u32,
}

/// Either kind of move, as they appear mixed in `opponent_moves`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Place(PlaceArmies),
    AttackTransfer(AttackTransfer),
}

impl From<PlaceArmies> for Move {
    fn from(m: PlaceArmies) -> Self {
        Move::Place(m)
    }
}

impl From<AttackTransfer> for Move {
    fn from(m: AttackTransfer) -> Self {
        Move::AttackTransfer(m)
    }
}
