//! Game state representation.
//!
//! Holds everything the bot knows at a given turn: the settings announced by
//! the game engine, the map with the latest visible ownership, the regions
//! offered during the pick phase, and the opponent's last visible moves.

use tracing::warn;

use super::map::{GameMap, MapError};
use super::moves::Move;
use super::region::{Owner, RegionId};

/// Settings announced through `settings ...` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub my_name: String,
    pub opponent_name: String,
    /// Armies we may place this turn.
    pub starting_armies: u32,
    pub timebank_ms: u64,
    pub time_per_move_ms: u64,
    pub max_rounds: u32,
    pub starting_pick_amount: u32,
    /// Regions the game engine may offer during the pick phase.
    pub starting_regions: Vec<RegionId>,
}

/// The bot's complete view of the game at the current turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub settings: Settings,
    pub map: GameMap,
    /// Regions offered by the latest pick request.
    pub pickable: Vec<RegionId>,
    /// Number of map updates received, i.e. the current round.
    pub round: u32,
    pub wastelands: Vec<RegionId>,
    pub opponent_starting_regions: Vec<RegionId>,
    /// Opponent moves revealed at the start of this turn, with the player
    /// name that issued each one.
    pub opponent_moves: Vec<(String, Move)>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Our placement budget for this turn.
    pub fn armies_to_place(&self) -> u32 {
        self.settings.starting_armies
    }

    /// Replaces the visible map with a fresh `update_map` listing.
    ///
    /// Every region not listed becomes `Unknown`. The round counter
    /// advances once per update. Owner names are resolved against our own
    /// bot name; a name matching neither bot is logged and treated as the
    /// opponent.
    pub fn apply_map_update(&mut self, updates: &[(RegionId, String, u32)]) -> Result<(), MapError> {
        if let Some((missing, _, _)) = updates
            .iter()
            .find(|(id, _, _)| self.map.region(*id).is_none())
        {
            return Err(MapError::UnknownRegion(*missing));
        }

        self.map.clear_visibility();
        for (id, name, armies) in updates {
            let owner = Owner::from_wire(name, &self.settings.my_name);
            if owner.is_opponent()
                && !self.settings.opponent_name.is_empty()
                && *name != self.settings.opponent_name
            {
                warn!(region = %id, name = %name, "owner matches neither bot, treating as opponent");
            }
            self.map.set_region_state(*id, owner, *armies)?;
        }
        self.round += 1;
        Ok(())
    }
}
