//! Player pose and the tile-stepping motion state machine.
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::config::Tuning;
use crate::core::maze::GridMap;
use crate::error::ConfigError;

/// Continuous camera position (world units) and facing (radians).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub a: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, a: f32) -> Self {
        Self { x, y, a }
    }

    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        (x - self.x).hypot(y - self.y)
    }
}

/// Current animation. Moving and rotating at once cannot be expressed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Motion {
    Idle,
    Moving { target_x: f32, target_y: f32 },
    Rotating { target: f32 },
}

/// Held directional keys for this tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MotionEvent {
    Turned { target: f32 },
    Moved { target_x: f32, target_y: f32 },
    /// Every requested step led into a wall or off the map.
    Blocked,
    /// An animation snapped onto its target.
    Arrived,
}

/// Angles this close to a quarter turn settle exactly onto it.
const ANGLE_EPS: f32 = 1e-4;
/// Step targets this close to a cell centre settle exactly onto it.
const GRID_EPS: f32 = 1e-2;

/// Wraps into `[0, 2π)` and removes rounding noise around quarter turns.
fn settle_angle(a: f32) -> f32 {
    let a = a.rem_euclid(TAU);
    let q = (a / FRAC_PI_2).round();
    if (a - q * FRAC_PI_2).abs() < ANGLE_EPS {
        (q as i32).rem_euclid(4) as f32 * FRAC_PI_2
    } else {
        a
    }
}

/// Snaps a coordinate onto the nearest cell centre when it is within noise of it.
fn settle_coord(v: f32, tile: f32) -> f32 {
    let centre = (((v / tile) - 0.5).round() + 0.5) * tile;
    if (v - centre).abs() < GRID_EPS { centre } else { v }
}

/// Signed shortest rotation from `from` to `to`, in `(-π, π]`.
pub fn shortest_angle(from: f32, to: f32) -> f32 {
    let diff = to.to_degrees() - from.to_degrees();
    let wrapped = diff - 360.0 * ((diff - 180.0) / 360.0).ceil();
    wrapped.to_radians()
}

pub struct Player {
    pub pose: Pose,
    motion: Motion,
    clock: f64,
    /// Seconds since the last commit, `None` before the first one.
    since_commit: Option<f32>,
    move_speed: f32,
    rotate_speed: f32,
    cooldown: f32,
    tile_size: f32,
}

impl Player {
    pub fn new(pose: Pose, tuning: &Tuning) -> Self {
        Self {
            pose,
            motion: Motion::Idle,
            clock: 0.0,
            since_commit: None,
            move_speed: tuning.move_speed,
            rotate_speed: tuning.rotate_speed,
            cooldown: tuning.move_cooldown,
            tile_size: tuning.tile_size,
        }
    }

    /// Places the player at the centre of the configured start cell, facing +x.
    pub fn spawn(map: &GridMap, tuning: &Tuning) -> Result<Self, ConfigError> {
        let (col, row) = (tuning.start_col, tuning.start_row);
        let (x, y) = map.cell_center(col, row);
        if !map.is_walkable(x, y) {
            return Err(ConfigError::BlockedStart { col, row });
        }
        Ok(Self::new(Pose::new(x, y, 0.0), tuning))
    }

    #[inline]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.motion == Motion::Idle
    }

    /// Seconds accumulated from every `update` call.
    #[inline]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// One tick: advance the running animation, then consider new intents.
    pub fn update(&mut self, dt: f32, intents: &Intents, map: &GridMap) -> Option<MotionEvent> {
        self.clock += f64::from(dt);
        if let Some(t) = self.since_commit.as_mut() {
            *t += dt;
        }
        let arrived = self.advance(dt);
        let accepted = self.accept(intents, map);
        accepted.or(arrived)
    }

    fn advance(&mut self, dt: f32) -> Option<MotionEvent> {
        match self.motion {
            Motion::Idle => None,
            Motion::Moving { target_x, target_y } => {
                let step = self.move_speed * dt;
                let remaining = self.pose.distance_to(target_x, target_y);
                if remaining <= step {
                    self.pose.x = target_x;
                    self.pose.y = target_y;
                    self.motion = Motion::Idle;
                    log::debug!("arrived at ({target_x:.1}, {target_y:.1})");
                    return Some(MotionEvent::Arrived);
                }
                let bearing = (target_y - self.pose.y).atan2(target_x - self.pose.x);
                self.pose.x += bearing.cos() * step;
                self.pose.y += bearing.sin() * step;
                None
            }
            Motion::Rotating { target } => {
                let step = self.rotate_speed * dt;
                let diff = shortest_angle(self.pose.a, target);
                if diff.abs() <= step {
                    self.pose.a = target;
                    self.motion = Motion::Idle;
                    log::debug!("facing {target:.3} rad");
                    return Some(MotionEvent::Arrived);
                }
                self.pose.a += step.copysign(diff);
                None
            }
        }
    }

    fn cooled_down(&self) -> bool {
        self.since_commit.is_none_or(|t| t > self.cooldown)
    }

    /// First intent that commits wins: left, right, forward, backward.
    fn accept(&mut self, intents: &Intents, map: &GridMap) -> Option<MotionEvent> {
        if !self.is_idle() || !self.cooled_down() {
            return None;
        }
        if intents.turn_left {
            return Some(self.commit_turn(-FRAC_PI_2));
        }
        if intents.turn_right {
            return Some(self.commit_turn(FRAC_PI_2));
        }

        let mut blocked = false;
        for (wanted, sign) in [(intents.forward, 1.0), (intents.backward, -1.0)] {
            if !wanted {
                continue;
            }
            let tx = settle_coord(self.pose.x + sign * self.pose.a.cos() * self.tile_size, self.tile_size);
            let ty = settle_coord(self.pose.y + sign * self.pose.a.sin() * self.tile_size, self.tile_size);
            if map.is_walkable(tx, ty) {
                self.motion = Motion::Moving { target_x: tx, target_y: ty };
                self.since_commit = Some(0.0);
                log::debug!("moving to ({tx:.1}, {ty:.1})");
                return Some(MotionEvent::Moved { target_x: tx, target_y: ty });
            }
            log::debug!("movement to ({tx:.1}, {ty:.1}) blocked");
            blocked = true;
        }
        blocked.then_some(MotionEvent::Blocked)
    }

    fn commit_turn(&mut self, delta: f32) -> MotionEvent {
        let target = settle_angle(self.pose.a + delta);
        self.motion = Motion::Rotating { target };
        self.since_commit = Some(0.0);
        log::debug!("rotating to {target:.3} rad");
        MotionEvent::Turned { target }
    }
}
