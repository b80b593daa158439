//! Region classification.
//!
//! Derives the named region sets the strategy works from: owned, border,
//! inner, enemy-facing with strength scores, and hijackable. Everything
//! here is a pure function of the map; nothing is mutated.

pub mod borders;
pub mod hijack;

use std::collections::{BTreeMap, BTreeSet};

pub use borders::{enemy_border, inner_regions, own_border, owned_regions, strongest_enemy_border};
pub use hijack::{hijack_staging_region, hijackable};

use crate::board::{GameState, RegionId};

/// All derived region sets for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub owned: BTreeSet<RegionId>,
    /// Owned regions next to the opponent, with enemy strength.
    pub enemy_border: BTreeMap<RegionId, u32>,
    /// Owned regions next to anything we do not own.
    pub border: BTreeSet<RegionId>,
    pub inner: BTreeSet<RegionId>,
    pub hijackable: BTreeSet<RegionId>,
}

impl Classification {
    /// Classifies the current map. `max_unowned` bounds how many missing
    /// regions a super-region may have and still count as hijackable.
    pub fn compute(state: &GameState, max_unowned: usize) -> Self {
        let map = &state.map;
        let owned = owned_regions(map);
        let enemy_border = enemy_border(map, &owned);
        let border = own_border(map, &owned);
        let inner = inner_regions(&owned, &border);
        let hijackable = hijackable(map, &owned, state.armies_to_place(), max_unowned);
        Classification {
            owned,
            enemy_border,
            border,
            inner,
            hijackable,
        }
    }
}
