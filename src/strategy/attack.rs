//! Attack and transfer orders.
//!
//! Three passes run in a fixed order, each appending independently:
//! inner regions push their armies toward the border, regions facing the
//! opponent attack their weakest beatable neighbor, and every well-stocked
//! border region attacks anything it outnumbers.
//!
//! Orders always send `armies - 1` from the source as it stands when the
//! order is formed. The last pass does not deduct between orders, so a
//! region with several beatable neighbors is ordered to send its full
//! stack to each of them.

use tracing::info;

use crate::board::{AttackTransfer, GameMap, Region, RegionId};
use crate::classify::{strongest_enemy_border, Classification};

fn order(orders: &mut Vec<AttackTransfer>, reason: &str, from: &Region, to: RegionId) {
    let armies = from.free_armies();
    info!(from = %from.id, to = %to, armies, "{}", reason);
    orders.push(AttackTransfer {
        from: from.id,
        to,
        armies,
    });
}

/// Computes this turn's attack/transfer orders. `classes` must reflect the
/// map after placement.
pub fn attack_transfer(map: &GameMap, classes: &Classification) -> Vec<AttackTransfer> {
    let mut orders = Vec::new();
    consolidate_inner(map, classes, &mut orders);
    pressure_enemy(map, classes, &mut orders);
    expand_outward(map, classes, &mut orders);
    orders
}

/// Moves free armies out of inner regions, preferring a border neighbor.
fn consolidate_inner(map: &GameMap, classes: &Classification, orders: &mut Vec<AttackTransfer>) {
    for region in classes.inner.iter().filter_map(|id| map.region(*id)) {
        if region.armies <= 1 {
            continue;
        }
        let target = region
            .neighbors
            .iter()
            .find(|n| classes.border.contains(*n))
            .or_else(|| region.neighbors.first());
        if let Some(&to) = target {
            order(orders, "inner move", region, to);
        }
    }
}

/// Visits enemy-facing regions from the most threatened down, attacking the
/// weakest opponent neighbor each one outnumbers.
fn pressure_enemy(map: &GameMap, classes: &Classification, orders: &mut Vec<AttackTransfer>) {
    let mut remaining = classes.enemy_border.clone();
    while let Some(id) = strongest_enemy_border(&remaining) {
        remaining.remove(&id);
        let Some(region) = map.region(id) else {
            continue;
        };

        let mut enemies: Vec<&Region> = map.neighbors(id).filter(|n| n.owner.is_opponent()).collect();
        enemies.sort_by_key(|n| n.armies);

        if let Some(target) = enemies.iter().find(|n| region.free_armies() > n.armies) {
            order(orders, "attack enemy", region, target.id);
        }
    }
}

/// Attacks every non-owned neighbor a border region outnumbers.
fn expand_outward(map: &GameMap, classes: &Classification, orders: &mut Vec<AttackTransfer>) {
    for region in classes.border.iter().filter_map(|id| map.region(*id)) {
        if region.armies <= 2 {
            continue;
        }
        for neighbor in map.neighbors(region.id) {
            if !neighbor.owner.is_mine() && region.free_armies() > neighbor.armies {
                order(orders, "attack neighbor", region, neighbor.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GameState, Owner, SuperRegionId};

    fn state(edges: &[(u32, u32)], owners: &[(u32, Owner, u32)]) -> GameState {
        let mut state = GameState::new();
        state.settings.my_name = "me".to_string();
        state.settings.starting_armies = 5;
        state.map.add_super_region(SuperRegionId(1), 1).unwrap();
        let max = edges.iter().map(|&(a, b)| a.max(b)).max().unwrap_or(0);
        for id in 1..=max {
            state.map.add_region(RegionId(id), SuperRegionId(1)).unwrap();
        }
        for &(a, b) in edges {
            state.map.add_neighbors(RegionId(a), &[RegionId(b)]).unwrap();
        }
        for &(id, owner, armies) in owners {
            state.map.set_region_state(RegionId(id), owner, armies).unwrap();
        }
        state
    }

    fn orders(state: &GameState) -> Vec<AttackTransfer> {
        let classes = Classification::compute(state, 3);
        attack_transfer(&state.map, &classes)
    }

    fn at(from: u32, to: u32, armies: u32) -> AttackTransfer {
        AttackTransfer {
            from: RegionId(from),
            to: RegionId(to),
            armies,
        }
    }

    #[test]
    fn linear_map_moves_inner_troops_only() {
        let s = state(
            &[(1, 2), (2, 3)],
            &[(1, Owner::Me, 3), (2, Owner::Me, 1), (3, Owner::Opponent, 2)],
        );
        assert_eq!(orders(&s), vec![at(1, 2, 2)]);
    }

    #[test]
    fn inner_move_prefers_border_neighbor() {
        // 2 is inner with neighbors 1 (inner) and 3 (border).
        let s = state(
            &[(1, 2), (2, 3), (3, 4)],
            &[
                (1, Owner::Me, 1),
                (2, Owner::Me, 4),
                (3, Owner::Me, 1),
                (4, Owner::Neutral, 2),
            ],
        );
        assert_eq!(orders(&s), vec![at(2, 3, 3)]);
    }

    #[test]
    fn inner_move_without_border_neighbor_uses_lowest_id() {
        // 3's neighbors 1 and 2 are inner as well; only 4 is on the border.
        let s = state(
            &[(1, 3), (2, 3), (1, 2), (2, 4), (4, 5)],
            &[
                (1, Owner::Me, 1),
                (2, Owner::Me, 1),
                (3, Owner::Me, 5),
                (4, Owner::Me, 1),
                (5, Owner::Neutral, 2),
            ],
        );
        assert_eq!(orders(&s), vec![at(3, 1, 4)]);
    }

    #[test]
    fn enemy_pressure_hits_weakest_beatable_neighbor() {
        // 1 faces enemies 2 (armies 6), 3 (armies 2), 4 (armies 4).
        let s = state(
            &[(1, 2), (1, 3), (1, 4)],
            &[
                (1, Owner::Me, 6),
                (2, Owner::Opponent, 6),
                (3, Owner::Opponent, 2),
                (4, Owner::Opponent, 4),
            ],
        );
        let result = orders(&s);
        // Pressure pass attacks 3, the outward pass then hits 3 and 4 again.
        assert_eq!(result, vec![at(1, 3, 5), at(1, 3, 5), at(1, 4, 5)]);
    }

    #[test]
    fn enemy_pressure_visits_most_threatened_first() {
        let s = state(
            &[(1, 2), (3, 4)],
            &[
                (1, Owner::Me, 2),
                (2, Owner::Opponent, 5),
                (3, Owner::Me, 2),
                (4, Owner::Opponent, 9),
            ],
        );
        // Neither region can beat its neighbor, so nothing is ordered.
        assert!(orders(&s).is_empty());

        let s = state(
            &[(1, 2), (3, 4)],
            &[
                (1, Owner::Me, 9),
                (2, Owner::Opponent, 1),
                (3, Owner::Me, 9),
                (4, Owner::Opponent, 2),
            ],
        );
        let result = orders(&s);
        assert_eq!(&result[..2], &[at(3, 4, 8), at(1, 2, 8)]);
    }

    #[test]
    fn pressure_needs_strictly_more_free_armies() {
        let s = state(
            &[(1, 2)],
            &[(1, Owner::Me, 3), (2, Owner::Opponent, 2)],
        );
        assert!(orders(&s).is_empty());
    }

    #[test]
    fn outward_pass_overcommits_across_neighbors() {
        let s = state(
            &[(1, 2), (1, 3)],
            &[
                (1, Owner::Me, 4),
                (2, Owner::Neutral, 2),
                (3, Owner::Neutral, 1),
            ],
        );
        assert_eq!(orders(&s), vec![at(1, 2, 3), at(1, 3, 3)]);
    }

    #[test]
    fn outward_pass_needs_more_than_two_armies() {
        let s = state(&[(1, 2)], &[(1, Owner::Me, 2), (2, Owner::Neutral, 0)]);
        assert!(orders(&s).is_empty());
    }

    #[test]
    fn every_amount_is_source_minus_one() {
        let s = state(
            &[(1, 2), (2, 3), (3, 4), (2, 5)],
            &[
                (1, Owner::Me, 7),
                (2, Owner::Me, 6),
                (3, Owner::Opponent, 2),
                (4, Owner::Opponent, 1),
                (5, Owner::Neutral, 2),
            ],
        );
        let result = orders(&s);
        assert!(!result.is_empty());
        for o in result {
            let source = s.map.region(o.from).unwrap();
            assert_eq!(o.armies, source.armies - 1);
            assert!(o.armies >= 1);
        }
    }
}
