//! Ownership partitions: owned, border, inner, and enemy-facing regions.

use std::collections::{BTreeMap, BTreeSet};

use crate::board::{GameMap, RegionId};

/// All regions we currently own.
pub fn owned_regions(map: &GameMap) -> BTreeSet<RegionId> {
    map.regions()
        .filter(|r| r.owner.is_mine())
        .map(|r| r.id)
        .collect()
}

/// Maps each owned region touching the opponent to its enemy strength: the
/// summed armies of all opponent-held neighbors.
pub fn enemy_border(map: &GameMap, owned: &BTreeSet<RegionId>) -> BTreeMap<RegionId, u32> {
    let mut scores = BTreeMap::new();
    for &id in owned {
        let mut touches_enemy = false;
        let mut strength: u32 = 0;
        for n in map.neighbors(id).filter(|n| n.owner.is_opponent()) {
            touches_enemy = true;
            strength = strength.saturating_add(n.armies);
        }
        if touches_enemy {
            scores.insert(id, strength);
        }
    }
    scores
}

/// Owned regions with at least one neighbor we do not own.
pub fn own_border(map: &GameMap, owned: &BTreeSet<RegionId>) -> BTreeSet<RegionId> {
    owned
        .iter()
        .copied()
        .filter(|&id| map.neighbors(id).any(|n| !n.owner.is_mine()))
        .collect()
}

/// Owned regions that are not on the border.
pub fn inner_regions(owned: &BTreeSet<RegionId>, border: &BTreeSet<RegionId>) -> BTreeSet<RegionId> {
    owned.difference(border).copied().collect()
}

/// Picks the region with the highest enemy strength. On ties the first one
/// seen wins, which with ordered maps is the lowest id.
pub fn strongest_enemy_border(scores: &BTreeMap<RegionId, u32>) -> Option<RegionId> {
    let mut best: Option<(RegionId, u32)> = None;
    for (&id, &score) in scores {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((id, score)),
        }
    }
    best.map(|(id, _)| id)
}
