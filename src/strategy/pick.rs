//! Starting region selection.
//!
//! Small super-regions are the cheapest bonuses to complete, so picks go to
//! the region whose super-region has the fewest members.

use std::collections::BTreeSet;

use tracing::debug;

use super::StrategyError;
use crate::board::{GameMap, RegionId};

/// Size of the super-region a region belongs to. Regions missing from the
/// map sort last.
fn super_region_size(map: &GameMap, id: RegionId) -> usize {
    map.super_region_of(id)
        .map(|sr| sr.size())
        .unwrap_or(usize::MAX)
}

fn best_pick<'a, I>(map: &GameMap, pool: I) -> Option<RegionId>
where
    I: IntoIterator<Item = &'a RegionId>,
{
    pool.into_iter()
        .copied()
        .min_by_key(|&id| (super_region_size(map, id), id))
}

/// Picks the single most desirable region from those offered.
pub fn pick_starting_region(map: &GameMap, pickable: &[RegionId]) -> Result<RegionId, StrategyError> {
    let pick = best_pick(map, pickable).ok_or(StrategyError::EmptyPickPool)?;
    debug!(region = %pick, size = super_region_size(map, pick), "picked starting region");
    Ok(pick)
}

/// Picks up to `count` distinct regions in order of preference.
pub fn pick_starting_regions(
    map: &GameMap,
    pickable: &[RegionId],
    count: usize,
) -> Result<Vec<RegionId>, StrategyError> {
    let mut pool: BTreeSet<RegionId> = pickable.iter().copied().collect();
    if pool.is_empty() {
        return Err(StrategyError::EmptyPickPool);
    }

    let mut picks = Vec::with_capacity(count.min(pool.len()));
    while picks.len() < count {
        let Some(pick) = best_pick(map, &pool) else {
            break;
        };
        pool.remove(&pick);
        picks.push(pick);
    }
    debug!(?picks, "picked starting regions");
    Ok(picks)
}
