//! Hijack detection: nearly-held super-regions that can be completed now.

use std::collections::BTreeSet;

use crate::board::{GameMap, RegionId};

/// Returns the unowned regions of every super-region we can fully see,
/// where between one and `max_unowned` regions are missing and none of the
/// missing regions holds more armies than `budget`.
pub fn hijackable(
    map: &GameMap,
    owned: &BTreeSet<RegionId>,
    budget: u32,
    max_unowned: usize,
) -> BTreeSet<RegionId> {
    let mut result = BTreeSet::new();

    for sr in map.super_regions() {
        if !map.is_fully_visible(sr.id) {
            continue;
        }

        let missing: Vec<RegionId> = sr
            .regions
            .iter()
            .copied()
            .filter(|id| !owned.contains(id))
            .collect();
        if missing.is_empty() || missing.len() > max_unowned {
            continue;
        }

        let too_strong = missing
            .iter()
            .filter_map(|id| map.region(*id))
            .any(|r| r.armies > budget);
        if too_strong {
            continue;
        }

        result.extend(missing);
    }

    result
}

/// The first owned region adjacent to any hijackable region, scanning
/// hijackable regions and their neighbors in ascending id order.
pub fn hijack_staging_region(
    map: &GameMap,
    hijackable: &BTreeSet<RegionId>,
    owned: &BTreeSet<RegionId>,
) -> Option<RegionId> {
    hijackable.iter().find_map(|&target| {
        map.neighbors(target)
            .find(|n| owned.contains(&n.id))
            .map(|n| n.id)
    })
}
