//! Overrun engine library.
//!
//! Exposes the board representation, region classification, strategy, and
//! protocol modules for use by integration tests and the binary entry point.

pub mod board;
pub mod classify;
pub mod config;
pub mod engine;
pub mod logging;
pub mod protocol;
pub mod strategy;
