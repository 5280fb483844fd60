//! Rendering: drawing surface, ray casting and the two views.
//!
//! - `surface`: `Surface` trait, `Rgb`, recording `Frame`
//! - `casters`: fixed-step ray marching
//! - `render3d`: first-person column renderer
//! - `minimap`: top-down debug view

pub mod casters;
pub mod minimap;
pub mod render3d;
pub mod surface;

use crate::config::Tuning;
use crate::core::maze::GridMap;
use crate::core::player::Pose;
use surface::{Rgb, Surface};

/// Color left visible wherever neither view paints.
pub const BACKGROUND: Rgb = Rgb::hex(0x221f1f);

/// Clears `fb` and draws either the first-person view or the debug map.
pub fn render<S: Surface>(fb: &mut S, pose: &Pose, maze: &GridMap, tuning: &Tuning, debug: bool) {
    fb.clear(BACKGROUND);
    if debug {
        minimap::render_debug(fb, pose, maze, tuning);
    } else {
        render3d::render_3d(fb, pose, maze, tuning);
    }
}
