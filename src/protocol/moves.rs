//! Move notation.
//!
//! Moves are written as `<player> place_armies <region> <armies>` and
//! `<player> attack/transfer <from> <to> <armies>`. A response joins its
//! moves with commas, and an empty response is the literal `No moves`.

use thiserror::Error;

use crate::board::{AttackTransfer, Move, PlaceArmies, RegionId};

/// Response sent when a phase produces no moves.
pub const NO_MOVES: &str = "No moves";

const PLACE_ARMIES: &str = "place_armies";
const ATTACK_TRANSFER: &str = "attack/transfer";

/// Errors that can occur when parsing a move list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("unknown move kind '{0}'")]
    UnknownKind(String),

    #[error("unexpected end of input, expected {0}")]
    UnexpectedEnd(&'static str),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

/// Formats a single move for the given player.
pub fn format_move(player: &str, m: &Move) -> String {
    match m {
        Move::Place(p) => format!("{} {} {} {}", player, PLACE_ARMIES, p.region, p.armies),
        Move::AttackTransfer(a) => format!(
            "{} {} {} {} {}",
            player, ATTACK_TRANSFER, a.from, a.to, a.armies
        ),
    }
}

/// Formats a full response line, or `No moves` when there is nothing to send.
pub fn format_moves<I, M>(player: &str, moves: I) -> String
where
    I: IntoIterator<Item = M>,
    M: Into<Move>,
{
    let parts: Vec<String> = moves
        .into_iter()
        .map(|m| format_move(player, &m.into()))
        .collect();
    if parts.is_empty() {
        NO_MOVES.to_string()
    } else {
        parts.join(",")
    }
}

fn number<T: std::str::FromStr>(tokens: &[&str], idx: usize, what: &'static str) -> Result<T, MoveError> {
    let tok = tokens.get(idx).ok_or(MoveError::UnexpectedEnd(what))?;
    tok.parse()
        .map_err(|_| MoveError::InvalidNumber(tok.to_string()))
}

/// Parses a whitespace-split move list, as sent in `opponent_moves`.
///
/// Moves may be separated by commas or simply follow one another. Returns
/// each move with the name of the player that made it.
pub fn parse_moves(tokens: &[&str]) -> Result<Vec<(String, Move)>, MoveError> {
    let tokens: Vec<&str> = tokens
        .iter()
        .map(|t| t.trim_matches(','))
        .filter(|t| !t.is_empty())
        .collect();

    let mut moves = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let player = tokens[i].to_string();
        let kind = *tokens.get(i + 1).ok_or(MoveError::UnexpectedEnd("move kind"))?;
        match kind {
            PLACE_ARMIES => {
                let m = PlaceArmies {
                    region: RegionId(number(&tokens, i + 2, "region")?),
                    armies: number(&tokens, i + 3, "armies")?,
                };
                moves.push((player, m.into()));
                i += 4;
            }
            ATTACK_TRANSFER => {
                let m = AttackTransfer {
                    from: RegionId(number(&tokens, i + 2, "source region")?),
                    to: RegionId(number(&tokens, i + 3, "target region")?),
                    armies: number(&tokens, i + 4, "armies")?,
                };
                moves.push((player, m.into()));
                i += 5;
            }
            other => return Err(MoveError::UnknownKind(other.to_string())),
        }
    }
    Ok(moves)
}
