//! Tuning constants.
//!
//! Defaults reproduce the reference dungeon scene. Any field can be
//! overridden from a TOML file; missing fields keep their default.
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default world units per grid cell.
pub const TILE_SIZE: f32 = 64.0;
/// Default horizontal field of view (60°).
pub const FOV: f32 = std::f32::consts::PI / 3.0;
pub const NUM_RAYS: usize = 120;
pub const MAX_DEPTH: f32 = 400.0;
/// Ray-march increment in world units.
pub const STEP_SIZE: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    pub tile_size: f32,
    pub fov: f32,
    pub num_rays: usize,
    pub max_depth: f32,
    pub step_size: f32,
    /// World units per second.
    pub move_speed: f32,
    /// Radians per second.
    pub rotate_speed: f32,
    /// Seconds between two accepted intents.
    pub move_cooldown: f32,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub start_col: usize,
    pub start_row: usize,
    /// Upper bound applied to a single frame's delta time.
    pub max_tick: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            fov: FOV,
            num_rays: NUM_RAYS,
            max_depth: MAX_DEPTH,
            step_size: STEP_SIZE,
            move_speed: 320.0,
            rotate_speed: 6.0,
            move_cooldown: 0.2,
            viewport_width: 800,
            viewport_height: 600,
            start_col: 1,
            start_row: 1,
            max_tick: 0.25,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

impl Tuning {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = toml::from_str(src)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_toml_str(&src)?;
        log::info!("loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Rejects configurations the renderer and state machine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("tile_size", self.tile_size)?;
        positive("fov", self.fov)?;
        positive("max_depth", self.max_depth)?;
        positive("step_size", self.step_size)?;
        positive("move_speed", self.move_speed)?;
        positive("rotate_speed", self.rotate_speed)?;
        positive("max_tick", self.max_tick)?;
        // edge rays past ±π/2 would get a negative corrected distance
        if self.fov >= std::f32::consts::PI {
            return Err(ConfigError::TooLarge {
                field: "fov",
                value: self.fov,
                limit: std::f32::consts::PI,
            });
        }
        let ray_steps = self.max_depth / self.step_size;
        if ray_steps >= u32::MAX as f32 {
            return Err(ConfigError::TooLarge {
                field: "max_depth / step_size",
                value: ray_steps,
                limit: u32::MAX as f32,
            });
        }
        if !(self.move_cooldown.is_finite() && self.move_cooldown >= 0.0) {
            return Err(ConfigError::NotPositive {
                field: "move_cooldown",
                value: self.move_cooldown,
            });
        }
        if self.num_rays == 0 {
            return Err(ConfigError::Zero { field: "num_rays" });
        }
        if self.viewport_width == 0 {
            return Err(ConfigError::Zero { field: "viewport_width" });
        }
        if self.viewport_height == 0 {
            return Err(ConfigError::Zero { field: "viewport_height" });
        }
        Ok(())
    }
}
