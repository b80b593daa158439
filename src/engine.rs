//! Engine state management.
//!
//! Holds the game state and strategy configuration between commands,
//! applies settings and map updates, and answers pick and `go` requests.
//! Placements are written back into the map before the attack/transfer
//! request of the same turn is answered.

use std::io::{self, Write};
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, error, info, trace, warn};

use crate::board::{AttackTransfer, GameState, MapError, Move, PlaceArmies, RegionId};
use crate::classify::Classification;
use crate::config::EngineConfig;
use crate::protocol::{format_moves, Command, GoRequest, MapSetup, Setting};
use crate::strategy::{
    apply_placements, attack_transfer, pick_starting_region, pick_starting_regions, place_armies,
    StrategyError,
};

/// Failures while applying a command to the engine state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

/// Holds the mutable state of the engine between commands.
#[derive(Debug, Default)]
pub struct Engine {
    pub state: GameState,
    pub config: EngineConfig,
}

impl Engine {
    /// Creates an engine with an empty map.
    pub fn new(config: EngineConfig) -> Self {
        Engine {
            state: GameState::new(),
            config,
        }
    }

    /// Applies one parsed command, writing any response to `out`.
    ///
    /// State errors are logged and the command is skipped; only I/O errors
    /// on `out` are returned.
    pub fn handle_command<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<()> {
        match cmd {
            Command::Settings(setting) => self.apply_setting(setting),
            Command::SetupMap(setup) => {
                if let Err(e) = self.setup_map(setup) {
                    error!("setup_map: {}", e);
                }
            }
            Command::UpdateMap(updates) => {
                if let Err(e) = self.update_map(&updates) {
                    error!("update_map: {}", e);
                }
            }
            Command::OpponentMoves(moves) => self.record_opponent_moves(moves),
            Command::PickStartingRegion { timeout_ms, regions } => {
                self.handle_pick_single(regions, timeout_ms, out)?;
            }
            Command::PickStartingRegions { timeout_ms, regions } => {
                self.handle_pick_multiple(regions, timeout_ms, out)?;
            }
            Command::Go { request, timeout_ms } => {
                self.handle_go(request, timeout_ms, out)?;
            }
        }
        Ok(())
    }

    /// Stores a value from a `settings` line.
    pub fn apply_setting(&mut self, setting: Setting) {
        let settings = &mut self.state.settings;
        match setting {
            Setting::Timebank(ms) => settings.timebank_ms = ms,
            Setting::TimePerMove(ms) => settings.time_per_move_ms = ms,
            Setting::MaxRounds(n) => settings.max_rounds = n,
            Setting::YourBot(name) => settings.my_name = name,
            Setting::OpponentBot(name) => settings.opponent_name = name,
            Setting::StartingArmies(n) => settings.starting_armies = n,
            Setting::StartingPickAmount(n) => settings.starting_pick_amount = n,
            Setting::StartingRegions(regions) => settings.starting_regions = regions,
        }
    }

    /// Adds one `setup_map` section to the map.
    pub fn setup_map(&mut self, setup: MapSetup) -> Result<(), EngineError> {
        let map = &mut self.state.map;
        match setup {
            MapSetup::SuperRegions(entries) => {
                for (id, bonus) in entries {
                    map.add_super_region(id, bonus)?;
                }
            }
            MapSetup::Regions(entries) => {
                for (id, super_region) in entries {
                    map.add_region(id, super_region)?;
                }
            }
            MapSetup::Neighbors(entries) => {
                for (id, neighbors) in entries {
                    map.add_neighbors(id, &neighbors)?;
                }
            }
            MapSetup::Wastelands(regions) => {
                debug!(?regions, "wastelands");
                self.state.wastelands = regions;
            }
            MapSetup::OpponentStartingRegions(regions) => {
                debug!(?regions, "opponent starting regions");
                self.state.opponent_starting_regions = regions;
            }
        }
        Ok(())
    }

    /// Replaces the visible map with the regions listed in `update_map`.
    pub fn update_map(&mut self, updates: &[(RegionId, String, u32)]) -> Result<(), EngineError> {
        self.state.apply_map_update(updates)?;
        debug!(round = self.state.round, visible = updates.len(), "map updated");

        match serde_json::to_string(&self.state.map.snapshot()) {
            Ok(json) => trace!(snapshot = %json, "visible map"),
            Err(e) => warn!("could not serialise map snapshot: {}", e),
        }
        Ok(())
    }

    /// Stores the opponent moves revealed this turn.
    pub fn record_opponent_moves(&mut self, moves: Vec<(String, Move)>) {
        for (player, m) in &moves {
            debug!(player = %player, mv = ?m, "opponent move");
        }
        self.state.opponent_moves = moves;
    }

    /// Plans this turn's placements and applies them to the map.
    pub fn place_armies(&mut self) -> Result<Vec<PlaceArmies>, EngineError> {
        let classes = Classification::compute(&self.state, self.config.hijack_max_unowned);
        let moves = place_armies(&self.state, &classes, &self.config)?;
        apply_placements(&mut self.state.map, &moves)?;
        Ok(moves)
    }

    /// Computes attack/transfer orders from the current, post-placement map.
    pub fn attack_transfer(&self) -> Vec<AttackTransfer> {
        let classes = Classification::compute(&self.state, self.config.hijack_max_unowned);
        attack_transfer(&self.state.map, &classes)
    }

    /// Answers `pick_starting_region` with a single region id.
    pub fn handle_pick_single<W: Write>(
        &mut self,
        regions: Vec<RegionId>,
        timeout_ms: u64,
        out: &mut W,
    ) -> io::Result<()> {
        let start = Instant::now();
        self.state.pickable = regions;
        match pick_starting_region(&self.state.map, &self.state.pickable) {
            Ok(region) => {
                writeln!(out, "{}", region)?;
                out.flush()?;
            }
            Err(e) => error!("pick_starting_region: {}", e),
        }
        debug!(elapsed_ms = start.elapsed().as_millis() as u64, timeout_ms, "pick_starting_region");
        Ok(())
    }

    /// Answers `pick_starting_regions` with space-separated region ids.
    pub fn handle_pick_multiple<W: Write>(
        &mut self,
        regions: Vec<RegionId>,
        timeout_ms: u64,
        out: &mut W,
    ) -> io::Result<()> {
        let start = Instant::now();
        self.state.pickable = regions;
        match pick_starting_regions(&self.state.map, &self.state.pickable, self.config.pick_count) {
            Ok(picks) => {
                let ids: Vec<String> = picks.iter().map(|r| r.to_string()).collect();
                writeln!(out, "{}", ids.join(" "))?;
                out.flush()?;
            }
            Err(e) => error!("pick_starting_regions: {}", e),
        }
        debug!(elapsed_ms = start.elapsed().as_millis() as u64, timeout_ms, "pick_starting_regions");
        Ok(())
    }

    /// Handles `go place_armies` and `go attack/transfer`.
    pub fn handle_go<W: Write>(
        &mut self,
        request: GoRequest,
        timeout_ms: u64,
        out: &mut W,
    ) -> io::Result<()> {
        let start = Instant::now();
        let name = self.state.settings.my_name.clone();

        let line = match request {
            GoRequest::PlaceArmies => match self.place_armies() {
                Ok(moves) => format_moves(&name, moves),
                Err(e) => {
                    error!("place_armies: {}", e);
                    format_moves(&name, Vec::<PlaceArmies>::new())
                }
            },
            GoRequest::AttackTransfer => format_moves(&name, self.attack_transfer()),
        };

        writeln!(out, "{}", line)?;
        out.flush()?;
        info!(
            round = self.state.round,
            request = ?request,
            elapsed_ms = start.elapsed().as_millis() as u64,
            timeout_ms,
            "go"
        );
        Ok(())
    }
}
