//! Game engine command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that
//! the engine main loop can dispatch on.

use std::str::FromStr;

use thiserror::Error;

use super::moves::{parse_moves, MoveError};
use crate::board::{Move, RegionId, SuperRegionId};

/// Errors that can occur when parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown setting '{0}'")]
    UnknownSetting(String),

    #[error("unknown map section '{0}'")]
    UnknownMapSection(String),

    #[error("unknown go request '{0}'")]
    UnknownRequest(String),

    #[error("missing {0}")]
    Missing(&'static str),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("{section} expects groups of {group}, got {count} values")]
    UnevenGroups {
        section: &'static str,
        group: usize,
        count: usize,
    },

    #[error(transparent)]
    Moves(#[from] MoveError),
}

/// A single `settings` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    Timebank(u64),
    TimePerMove(u64),
    MaxRounds(u32),
    YourBot(String),
    OpponentBot(String),
    StartingArmies(u32),
    StartingPickAmount(u32),
    StartingRegions(Vec<RegionId>),
}

/// A single `setup_map` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSetup {
    /// `(super region, bonus)` pairs.
    SuperRegions(Vec<(SuperRegionId, u32)>),
    /// `(region, super region)` pairs.
    Regions(Vec<(RegionId, SuperRegionId)>),
    /// A region followed by its comma-separated neighbors.
    Neighbors(Vec<(RegionId, Vec<RegionId>)>),
    Wastelands(Vec<RegionId>),
    OpponentStartingRegions(Vec<RegionId>),
}

/// What a `go` line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoRequest {
    PlaceArmies,
    AttackTransfer,
}

/// A parsed engine-to-bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Settings(Setting),

    SetupMap(MapSetup),

    /// Visible regions as `(region, owner name, armies)`.
    UpdateMap(Vec<(RegionId, String, u32)>),

    OpponentMoves(Vec<(String, Move)>),

    /// Choose one region from those offered.
    PickStartingRegion { timeout_ms: u64, regions: Vec<RegionId> },

    /// Choose an ordered list of regions from those offered.
    PickStartingRegions { timeout_ms: u64, regions: Vec<RegionId> },

    Go { request: GoRequest, timeout_ms: u64 },
}

/// Parses a single line of input into a `Command`.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let cmd = match head {
        "settings" => Command::Settings(parse_setting(args)?),
        "setup_map" => Command::SetupMap(parse_setup_map(args)?),
        "update_map" => Command::UpdateMap(parse_update_map(args)?),
        "opponent_moves" => Command::OpponentMoves(parse_moves(args)?),
        "pick_starting_region" => {
            let (timeout_ms, regions) = parse_pick(args)?;
            Command::PickStartingRegion { timeout_ms, regions }
        }
        "pick_starting_regions" => {
            let (timeout_ms, regions) = parse_pick(args)?;
            Command::PickStartingRegions { timeout_ms, regions }
        }
        "go" => parse_go(args)?,
        other => return Err(ProtocolError::UnknownCommand(other.to_string())),
    };
    Ok(Some(cmd))
}

fn number<T: FromStr>(tok: &str) -> Result<T, ProtocolError> {
    tok.parse()
        .map_err(|_| ProtocolError::InvalidNumber(tok.to_string()))
}

fn arg<'a>(args: &[&'a str], idx: usize, what: &'static str) -> Result<&'a str, ProtocolError> {
    args.get(idx).copied().ok_or(ProtocolError::Missing(what))
}

fn region_list(tokens: &[&str]) -> Result<Vec<RegionId>, ProtocolError> {
    tokens.iter().map(|t| number(t).map(RegionId)).collect()
}

fn check_groups(section: &'static str, values: &[&str], group: usize) -> Result<(), ProtocolError> {
    if values.len() % group != 0 {
        return Err(ProtocolError::UnevenGroups {
            section,
            group,
            count: values.len(),
        });
    }
    Ok(())
}

/// Parses `settings <name> <value...>`.
fn parse_setting(args: &[&str]) -> Result<Setting, ProtocolError> {
    let name = arg(args, 0, "setting name")?;
    let value = || arg(args, 1, "setting value");

    let setting = match name {
        "timebank" => Setting::Timebank(number(value()?)?),
        "time_per_move" => Setting::TimePerMove(number(value()?)?),
        "max_rounds" => Setting::MaxRounds(number(value()?)?),
        "your_bot" => Setting::YourBot(value()?.to_string()),
        "opponent_bot" => Setting::OpponentBot(value()?.to_string()),
        "starting_armies" => Setting::StartingArmies(number(value()?)?),
        "starting_pick_amount" => Setting::StartingPickAmount(number(value()?)?),
        "starting_regions" => Setting::StartingRegions(region_list(&args[1..])?),
        other => return Err(ProtocolError::UnknownSetting(other.to_string())),
    };
    Ok(setting)
}

/// Parses `setup_map <section> <values...>`.
fn parse_setup_map(args: &[&str]) -> Result<MapSetup, ProtocolError> {
    let section = arg(args, 0, "map section")?;
    let values = &args[1..];

    let setup = match section {
        "super_regions" => {
            check_groups("super_regions", values, 2)?;
            let pairs = values
                .chunks(2)
                .map(|c| -> Result<_, ProtocolError> {
                    Ok((SuperRegionId(number(c[0])?), number(c[1])?))
                })
                .collect::<Result<Vec<_>, _>>()?;
            MapSetup::SuperRegions(pairs)
        }
        "regions" => {
            check_groups("regions", values, 2)?;
            let pairs = values
                .chunks(2)
                .map(|c| -> Result<_, ProtocolError> {
                    Ok((RegionId(number(c[0])?), SuperRegionId(number(c[1])?)))
                })
                .collect::<Result<Vec<_>, _>>()?;
            MapSetup::Regions(pairs)
        }
        "neighbors" => {
            check_groups("neighbors", values, 2)?;
            let entries = values
                .chunks(2)
                .map(|c| -> Result<_, ProtocolError> {
                    let list: Vec<&str> = c[1].split(',').filter(|s| !s.is_empty()).collect();
                    Ok((RegionId(number(c[0])?), region_list(&list)?))
                })
                .collect::<Result<Vec<_>, _>>()?;
            MapSetup::Neighbors(entries)
        }
        "wastelands" => MapSetup::Wastelands(region_list(values)?),
        "opponent_starting_regions" => MapSetup::OpponentStartingRegions(region_list(values)?),
        other => return Err(ProtocolError::UnknownMapSection(other.to_string())),
    };
    Ok(setup)
}

/// Parses `update_map [<region> <owner> <armies>]...`.
fn parse_update_map(args: &[&str]) -> Result<Vec<(RegionId, String, u32)>, ProtocolError> {
    check_groups("update_map", args, 3)?;
    args.chunks(3)
        .map(|c| Ok((RegionId(number(c[0])?), c[1].to_string(), number(c[2])?)))
        .collect()
}

/// Parses `<timeout> <region>...` for both pick commands.
fn parse_pick(args: &[&str]) -> Result<(u64, Vec<RegionId>), ProtocolError> {
    let timeout = number(arg(args, 0, "timeout")?)?;
    Ok((timeout, region_list(&args[1..])?))
}

/// Parses `go <place_armies|attack/transfer> <timeout>`.
fn parse_go(args: &[&str]) -> Result<Command, ProtocolError> {
    let request = match arg(args, 0, "go request")? {
        "place_armies" => GoRequest::PlaceArmies,
        "attack/transfer" => GoRequest::AttackTransfer,
        other => return Err(ProtocolError::UnknownRequest(other.to_string())),
    };
    let timeout_ms = number(arg(args, 1, "timeout")?)?;
    Ok(Command::Go { request, timeout_ms })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PlaceArmies;

    fn ids(raw: &[u32]) -> Vec<RegionId> {
        raw.iter().map(|&i| RegionId(i)).collect()
    }

    fn parse(line: &str) -> Command {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("  "), Ok(None));
        assert_eq!(parse_command("\t"), Ok(None));
    }

    #[test]
    fn parse_unknown_command_is_an_error() {
        assert_eq!(
            parse_command("foobar 1 2"),
            Err(ProtocolError::UnknownCommand("foobar".to_string()))
        );
    }

    #[test]
    fn parse_scalar_settings() {
        assert_eq!(parse("settings timebank 10000"), Command::Settings(Setting::Timebank(10000)));
        assert_eq!(parse("settings time_per_move 500"), Command::Settings(Setting::TimePerMove(500)));
        assert_eq!(parse("settings max_rounds 60"), Command::Settings(Setting::MaxRounds(60)));
        assert_eq!(
            parse("settings your_bot player1"),
            Command::Settings(Setting::YourBot("player1".to_string()))
        );
        assert_eq!(
            parse("settings opponent_bot player2"),
            Command::Settings(Setting::OpponentBot("player2".to_string()))
        );
        assert_eq!(
            parse("settings starting_armies 7"),
            Command::Settings(Setting::StartingArmies(7))
        );
        assert_eq!(
            parse("settings starting_pick_amount 3"),
            Command::Settings(Setting::StartingPickAmount(3))
        );
    }

    #[test]
    fn parse_starting_regions_setting() {
        assert_eq!(
            parse("settings starting_regions 2 5 9"),
            Command::Settings(Setting::StartingRegions(ids(&[2, 5, 9])))
        );
    }

    #[test]
    fn parse_bad_settings() {
        assert_eq!(parse_command("settings"), Err(ProtocolError::Missing("setting name")));
        assert_eq!(
            parse_command("settings timebank"),
            Err(ProtocolError::Missing("setting value"))
        );
        assert_eq!(
            parse_command("settings timebank soon"),
            Err(ProtocolError::InvalidNumber("soon".to_string()))
        );
        assert_eq!(
            parse_command("settings colour red"),
            Err(ProtocolError::UnknownSetting("colour".to_string()))
        );
    }

    #[test]
    fn parse_setup_super_regions() {
        assert_eq!(
            parse("setup_map super_regions 1 2 2 5"),
            Command::SetupMap(MapSetup::SuperRegions(vec![
                (SuperRegionId(1), 2),
                (SuperRegionId(2), 5)
            ]))
        );
    }

    #[test]
    fn parse_setup_regions() {
        assert_eq!(
            parse("setup_map regions 1 1 2 1 3 2"),
            Command::SetupMap(MapSetup::Regions(vec![
                (RegionId(1), SuperRegionId(1)),
                (RegionId(2), SuperRegionId(1)),
                (RegionId(3), SuperRegionId(2)),
            ]))
        );
    }

    #[test]
    fn parse_setup_neighbors() {
        assert_eq!(
            parse("setup_map neighbors 1 2,3 2 3"),
            Command::SetupMap(MapSetup::Neighbors(vec![
                (RegionId(1), ids(&[2, 3])),
                (RegionId(2), ids(&[3])),
            ]))
        );
    }

    #[test]
    fn parse_setup_wastelands_and_opponent_starts() {
        assert_eq!(
            parse("setup_map wastelands 3 7"),
            Command::SetupMap(MapSetup::Wastelands(ids(&[3, 7])))
        );
        assert_eq!(
            parse("setup_map opponent_starting_regions 4"),
            Command::SetupMap(MapSetup::OpponentStartingRegions(ids(&[4])))
        );
    }

    #[test]
    fn parse_uneven_setup_is_an_error() {
        assert_eq!(
            parse_command("setup_map regions 1 1 2"),
            Err(ProtocolError::UnevenGroups {
                section: "regions",
                group: 2,
                count: 3
            })
        );
        assert_eq!(
            parse_command("setup_map lakes 1"),
            Err(ProtocolError::UnknownMapSection("lakes".to_string()))
        );
    }

    #[test]
    fn parse_update_map_triples() {
        assert_eq!(
            parse("update_map 1 player1 2 2 neutral 2"),
            Command::UpdateMap(vec![
                (RegionId(1), "player1".to_string(), 2),
                (RegionId(2), "neutral".to_string(), 2),
            ])
        );
        assert_eq!(parse("update_map"), Command::UpdateMap(Vec::new()));
    }

    #[test]
    fn parse_opponent_moves() {
        assert_eq!(
            parse("opponent_moves player2 place_armies 5 3"),
            Command::OpponentMoves(vec![(
                "player2".to_string(),
                PlaceArmies {
                    region: RegionId(5),
                    armies: 3
                }
                .into()
            )])
        );
        assert_eq!(parse("opponent_moves"), Command::OpponentMoves(Vec::new()));
        assert!(matches!(
            parse_command("opponent_moves player2 dance 1"),
            Err(ProtocolError::Moves(MoveError::UnknownKind(_)))
        ));
    }

    #[test]
    fn parse_pick_commands() {
        assert_eq!(
            parse("pick_starting_region 10000 3 8 12"),
            Command::PickStartingRegion {
                timeout_ms: 10000,
                regions: ids(&[3, 8, 12]),
            }
        );
        assert_eq!(
            parse("pick_starting_regions 2000 1 2"),
            Command::PickStartingRegions {
                timeout_ms: 2000,
                regions: ids(&[1, 2]),
            }
        );
        assert_eq!(
            parse_command("pick_starting_region"),
            Err(ProtocolError::Missing("timeout"))
        );
    }

    #[test]
    fn parse_go_requests() {
        assert_eq!(
            parse("go place_armies 10000"),
            Command::Go {
                request: GoRequest::PlaceArmies,
                timeout_ms: 10000
            }
        );
        assert_eq!(
            parse("go attack/transfer 500"),
            Command::Go {
                request: GoRequest::AttackTransfer,
                timeout_ms: 500
            }
        );
        assert_eq!(
            parse_command("go dance 5"),
            Err(ProtocolError::UnknownRequest("dance".to_string()))
        );
        assert_eq!(parse_command("go place_armies"), Err(ProtocolError::Missing("timeout")));
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(
            parse("  settings max_rounds 45  "),
            Command::Settings(Setting::MaxRounds(45))
        );
    }
}
