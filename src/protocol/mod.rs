//! Game engine protocol handling.
//!
//! This module implements parsing of the line-based commands the game
//! engine sends (settings, map setup and updates, pick and `go` requests)
//! and the move notation used in both directions.

pub mod moves;
pub mod parser;

pub use moves::{format_move, format_moves, parse_moves, MoveError, NO_MOVES};
pub use parser::{parse_command, Command, GoRequest, MapSetup, ProtocolError, Setting};
