//! Region and super-region definitions.
//!
//! Regions are the atomic ownable nodes of the map graph. Each belongs to
//! exactly one super-region, whose bonus is awarded to whoever holds every
//! member region.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire name the game engine uses for unowned regions.
pub const NEUTRAL_NAME: &str = "neutral";

/// Wire name the game engine uses for regions outside our vision.
pub const UNKNOWN_NAME: &str = "unknown";

/// Stable identifier of a region, as used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier of a super-region, as used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuperRegionId(pub u32);

impl fmt::Display for SuperRegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who holds a region, from our point of view.
///
/// Resolved once from the wire name when the map is updated so the
/// strategy code never compares display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Owner {
    /// Not visible this turn.
    #[default]
    Unknown,
    Neutral,
    Me,
    Opponent,
}

impl Owner {
    /// Resolves a wire owner name against our own bot name.
    ///
    /// Any name that is not ours, `neutral`, or `unknown` is the opponent:
    /// the game is strictly two-player.
    pub fn from_wire(name: &str, my_name: &str) -> Owner {
        if name == my_name {
            Owner::Me
        } else if name == NEUTRAL_NAME {
            Owner::Neutral
        } else if name == UNKNOWN_NAME {
            Owner::Unknown
        } else {
            Owner::Opponent
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Owner::Me)
    }

    pub const fn is_opponent(self) -> bool {
        matches!(self, Owner::Opponent)
    }

    pub const fn is_visible(self) -> bool {
        !matches!(self, Owner::Unknown)
    }
}

/// A single region of the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: RegionId,
    pub super_region: SuperRegionId,
    /// Adjacent regions, kept sorted and free of duplicates.
    pub neighbors: Vec<RegionId>,
    pub owner: Owner,
    pub armies: u32,
}

impl Region {
    /// Creates an unseen region with no neighbors yet.
    pub fn new(id: RegionId, super_region: SuperRegionId) -> Self {
        Region {
            id,
            super_region,
            neighbors: Vec::new(),
            owner: Owner::Unknown,
            armies: 0,
        }
    }

    /// Returns true if `other` is directly adjacent.
    pub fn borders(&self, other: RegionId) -> bool {
        self.neighbors.binary_search(&other).is_ok()
    }

    /// Armies that can leave the region while one stays behind.
    pub fn free_armies(&self) -> u32 {
        self.armies.saturating_sub(1)
    }

    /// Inserts a neighbor, preserving sort order. Returns false if it was
    /// already present.
    pub(crate) fn add_neighbor(&mut self, other: RegionId) -> bool {
        match self.neighbors.binary_search(&other) {
            Ok(_) => false,
            Err(pos) => {
                self.neighbors.insert(pos, other);
                true
            }
        }
    }
}

/// A named cluster of regions granting a bonus when fully held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperRegion {
    pub id: SuperRegionId,
    pub bonus: u32,
    /// Member regions in the order the map announced them.
    pub regions: Vec<RegionId>,
}

impl SuperRegion {
    pub fn new(id: SuperRegionId, bonus: u32) -> Self {
        SuperRegion {
            id,
            bonus,
            regions: Vec::new(),
        }
    }

    /// Number of member regions.
    pub fn size(&self) -> usize {
        self.regions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_from_wire_names() {
        assert_eq!(Owner::from_wire("player1", "player1"), Owner::Me);
        assert_eq!(Owner::from_wire("player2", "player1"), Owner::Opponent);
        assert_eq!(Owner::from_wire("neutral", "player1"), Owner::Neutral);
        assert_eq!(Owner::from_wire("unknown", "player1"), Owner::Unknown);
    }

    #[test]
    fn default_owner_is_unknown() {
        assert_eq!(Owner::default(), Owner::Unknown);
        assert!(!Owner::Unknown.is_visible());
        assert!(Owner::Neutral.is_visible());
    }

    #[test]
    fn neighbors_stay_sorted_and_unique() {
        let mut r = Region::new(RegionId(1), SuperRegionId(1));
        assert!(r.add_neighbor(RegionId(5)));
        assert!(r.add_neighbor(RegionId(2)));
        assert!(!r.add_neighbor(RegionId(5)));
        assert!(r.add_neighbor(RegionId(3)));
        assert_eq!(r.neighbors, vec![RegionId(2), RegionId(3), RegionId(5)]);
        assert!(r.borders(RegionId(3)));
        assert!(!r.borders(RegionId(4)));
    }

    #[test]
    fn free_armies_never_underflows() {
        let mut r = Region::new(RegionId(1), SuperRegionId(1));
        assert_eq!(r.free_armies(), 0);
        r.armies = 1;
        assert_eq!(r.free_armies(), 0);
        r.armies = 7;
        assert_eq!(r.free_armies(), 6);
    }
}
