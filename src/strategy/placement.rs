//! Army placement.
//!
//! Priority: a fixed reinforcement next to a hijackable super-region, then
//! everything left on the border facing the strongest enemy, else a split
//! across two border regions.

use tracing::{debug, info};

use super::StrategyError;
use crate::board::{GameMap, GameState, MapError, PlaceArmies, RegionId};
use crate::classify::{hijack_staging_region, strongest_enemy_border, Classification};
use crate::config::EngineConfig;

fn place(moves: &mut Vec<PlaceArmies>, reason: &str, region: RegionId, armies: u32) {
    info!(region = %region, armies, "{}", reason);
    moves.push(PlaceArmies { region, armies });
}

/// Plans this turn's placements. The map is not touched; apply the result
/// with [`apply_placements`] before computing attacks.
///
/// The total placed never exceeds the state's placement budget.
pub fn place_armies(
    state: &GameState,
    classes: &Classification,
    config: &EngineConfig,
) -> Result<Vec<PlaceArmies>, StrategyError> {
    let mut moves = Vec::new();
    let mut left = state.armies_to_place();

    if !classes.hijackable.is_empty() && left > 0 {
        match hijack_staging_region(&state.map, &classes.hijackable, &classes.owned) {
            Some(region) => {
                let armies = config.hijack_armies.min(left);
                place(&mut moves, "place near hijackable super region", region, armies);
                left -= armies;
            }
            None => debug!(targets = ?classes.hijackable, "no owned region next to hijack targets"),
        }
    }

    if left == 0 {
        return Ok(moves);
    }

    if let Some(region) = strongest_enemy_border(&classes.enemy_border) {
        place(&mut moves, "place near strongest enemy", region, left);
        return Ok(moves);
    }

    let mut border = classes.border.iter().copied();
    match (border.next(), border.next()) {
        (Some(first), Some(second)) => {
            let half = left / 2;
            if half > 0 {
                place(&mut moves, "place on border region (1)", first, half);
            }
            place(&mut moves, "place on border region (2)", second, left - half);
        }
        (Some(only), None) => {
            place(&mut moves, "place on border region (1)", only, left);
        }
        (None, _) => return Err(StrategyError::NoPlacementTarget { armies: left }),
    }

    Ok(moves)
}

/// Adds planned placements to the map so later phases see the new totals.
pub fn apply_placements(map: &mut GameMap, moves: &[PlaceArmies]) -> Result<(), MapError> {
    for m in moves {
        map.add_armies(m.region, m.armies)?;
    }
    Ok(())
}
