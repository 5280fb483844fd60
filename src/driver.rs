//! Per-frame orchestration: input, motion, then rendering.
use crate::config::Tuning;
use crate::core::maze::GridMap;
use crate::core::player::{Intents, MotionEvent, Player};
use crate::error::ConfigError;
use crate::render::casters::cast_ray;
use crate::render::render;
use crate::render::surface::Surface;

/// Everything the host reads from the keyboard for one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub intents: Intents,
    /// Edge-triggered: true only on the frame the key went down.
    pub toggle_debug: bool,
}

pub struct Game {
    pub maze: GridMap,
    pub tuning: Tuning,
    pub player: Player,
    pub debug: bool,
    probe_timer: f32,
}

impl Game {
    pub fn new(maze: GridMap, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let player = Player::spawn(&maze, &tuning)?;
        log::info!(
            "dungeon {}x{}, player at ({:.1}, {:.1})",
            maze.width(),
            maze.height(),
            player.pose.x,
            player.pose.y
        );
        Ok(Self { maze, tuning, player, debug: false, probe_timer: 0.0 })
    }

    /// Advances one tick. `dt` is clamped to `max_tick` so a stalled frame
    /// cannot fling the player past its target in one jump.
    pub fn update(&mut self, dt: f32, input: &InputState) -> Option<MotionEvent> {
        if input.toggle_debug {
            self.debug = !self.debug;
            log::info!("debug view {}", if self.debug { "on" } else { "off" });
        }
        let dt = dt.clamp(0.0, self.tuning.max_tick);
        let event = self.player.update(dt, &input.intents, &self.maze);

        self.probe_timer += dt;
        if self.probe_timer >= 1.0 {
            self.probe_timer = 0.0;
            let p = self.player.pose;
            let depth = cast_ray(&self.maze, p.x, p.y, p.a, &self.tuning);
            log::trace!("pose ({:.1}, {:.1}) facing ray depth {depth:.1}", p.x, p.y);
        }
        event
    }

    pub fn draw<S: Surface>(&self, fb: &mut S) {
        render(fb, &self.player.pose, &self.maze, &self.tuning, self.debug);
    }

    /// `update` followed by `draw`.
    pub fn frame<S: Surface>(&mut self, dt: f32, input: &InputState, fb: &mut S) -> Option<MotionEvent> {
        let event = self.update(dt, input);
        self.draw(fb);
        event
    }
}
