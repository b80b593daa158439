//! The map graph.
//!
//! Regions and super-regions are stored in `BTreeMap`s keyed by id so every
//! iteration over the map runs in ascending id order. Adjacency is always
//! inserted in both directions: if A borders B then B borders A.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::region::{Owner, Region, RegionId, SuperRegion, SuperRegionId};

/// Errors raised while building or updating the map.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("unknown region {0}")]
    UnknownRegion(RegionId),

    #[error("unknown super region {0}")]
    UnknownSuperRegion(SuperRegionId),

    #[error("region {0} defined twice")]
    DuplicateRegion(RegionId),

    #[error("super region {0} defined twice")]
    DuplicateSuperRegion(SuperRegionId),
}

/// The complete known map: every region and super-region announced during
/// setup, with the ownership and army counts of the latest update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameMap {
    regions: BTreeMap<RegionId, Region>,
    super_regions: BTreeMap<SuperRegionId, SuperRegion>,
}

impl GameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a super-region with its bonus.
    pub fn add_super_region(&mut self, id: SuperRegionId, bonus: u32) -> Result<(), MapError> {
        if self.super_regions.contains_key(&id) {
            return Err(MapError::DuplicateSuperRegion(id));
        }
        self.super_regions.insert(id, SuperRegion::new(id, bonus));
        Ok(())
    }

    /// Registers a region as a member of an existing super-region.
    pub fn add_region(&mut self, id: RegionId, super_region: SuperRegionId) -> Result<(), MapError> {
        if self.regions.contains_key(&id) {
            return Err(MapError::DuplicateRegion(id));
        }
        let sr = self
            .super_regions
            .get_mut(&super_region)
            .ok_or(MapError::UnknownSuperRegion(super_region))?;
        sr.regions.push(id);
        self.regions.insert(id, Region::new(id, super_region));
        Ok(())
    }

    /// Connects `id` to every region in `neighbors`, in both directions.
    ///
    /// Self-references are skipped. All ids are validated before any edge
    /// is added, so a failed call leaves the graph untouched.
    pub fn add_neighbors(&mut self, id: RegionId, neighbors: &[RegionId]) -> Result<(), MapError> {
        if !self.regions.contains_key(&id) {
            return Err(MapError::UnknownRegion(id));
        }
        if let Some(missing) = neighbors.iter().find(|n| !self.regions.contains_key(n)) {
            return Err(MapError::UnknownRegion(*missing));
        }

        for &other in neighbors {
            if other == id {
                continue;
            }
            if let Some(region) = self.regions.get_mut(&id) {
                region.add_neighbor(other);
            }
            if let Some(region) = self.regions.get_mut(&other) {
                region.add_neighbor(id);
            }
        }
        Ok(())
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    /// All regions in ascending id order, visible or not.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn super_region(&self, id: SuperRegionId) -> Option<&SuperRegion> {
        self.super_regions.get(&id)
    }

    /// All super-regions in ascending id order.
    pub fn super_regions(&self) -> impl Iterator<Item = &SuperRegion> {
        self.super_regions.values()
    }

    /// The super-region a region belongs to.
    pub fn super_region_of(&self, id: RegionId) -> Option<&SuperRegion> {
        self.regions
            .get(&id)
            .and_then(|r| self.super_regions.get(&r.super_region))
    }

    /// Neighbors of a region in ascending id order. Empty for unknown ids.
    pub fn neighbors(&self, id: RegionId) -> impl Iterator<Item = &Region> {
        self.regions
            .get(&id)
            .map(|r| r.neighbors.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(|n| self.regions.get(n))
    }

    /// Owner of a region, `Unknown` for ids not on the map.
    pub fn owner(&self, id: RegionId) -> Owner {
        self.regions.get(&id).map(|r| r.owner).unwrap_or_default()
    }

    /// Returns true if every member of the super-region is visible.
    pub fn is_fully_visible(&self, id: SuperRegionId) -> bool {
        self.super_regions.get(&id).is_some_and(|sr| {
            sr.regions
                .iter()
                .all(|r| self.owner(*r).is_visible())
        })
    }

    /// Forgets all ownership and army information ahead of a fresh update.
    pub fn clear_visibility(&mut self) {
        for region in self.regions.values_mut() {
            region.owner = Owner::Unknown;
            region.armies = 0;
        }
    }

    /// Sets the owner and army count of a region.
    pub fn set_region_state(&mut self, id: RegionId, owner: Owner, armies: u32) -> Result<(), MapError> {
        let region = self.regions.get_mut(&id).ok_or(MapError::UnknownRegion(id))?;
        region.owner = owner;
        region.armies = armies;
        Ok(())
    }

    /// Adds placed armies to a region, returning the new total.
    pub fn add_armies(&mut self, id: RegionId, amount: u32) -> Result<u32, MapError> {
        let region = self.regions.get_mut(&id).ok_or(MapError::UnknownRegion(id))?;
        region.armies = region.armies.saturating_add(amount);
        Ok(region.armies)
    }

    /// Captures the map as a serialisable flat structure.
    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            super_regions: self
                .super_regions
                .values()
                .map(|sr| SuperRegionEntry {
                    id: sr.id,
                    bonus: sr.bonus,
                })
                .collect(),
            regions: self
                .regions
                .values()
                .map(|r| RegionEntry {
                    id: r.id,
                    super_region: r.super_region,
                    owner: r.owner,
                    armies: r.armies,
                    neighbors: r.neighbors.clone(),
                })
                .collect(),
        }
    }

    /// Rebuilds a map from a snapshot.
    pub fn from_snapshot(snapshot: &MapSnapshot) -> Result<Self, MapError> {
        let mut map = GameMap::new();
        for sr in &snapshot.super_regions {
            map.add_super_region(sr.id, sr.bonus)?;
        }
        for r in &snapshot.regions {
            map.add_region(r.id, r.super_region)?;
        }
        for r in &snapshot.regions {
            map.add_neighbors(r.id, &r.neighbors)?;
            map.set_region_state(r.id, r.owner, r.armies)?;
        }
        Ok(map)
    }
}

/// Flat serialisable view of a [`GameMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub super_regions: Vec<SuperRegionEntry>,
    pub regions: Vec<RegionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperRegionEntry {
    pub id: SuperRegionId,
    pub bonus: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub id: RegionId,
    pub super_region: SuperRegionId,
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub armies: u32,
    #[serde(default)]
    pub neighbors: Vec<RegionId>,
}
