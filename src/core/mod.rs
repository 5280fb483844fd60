//! Core game data and logic (map, player motion).
//!
//! - `maze`: grid map construction and lookups
//! - `player`: pose and the motion state machine

pub mod maze;
pub mod player;
