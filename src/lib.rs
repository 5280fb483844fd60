//! Tile dungeon ray caster.
//!
//! A 2D occupancy grid is rendered as a first-person view by marching one
//! ray per screen column. The player steps tile by tile with short
//! animations. Nothing here talks to a window; the binary wires the
//! [`driver::Game`] to raylib.

pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod render;

pub use config::Tuning;
pub use driver::{Game, InputState};
pub use error::ConfigError;
