//! Fixed-step ray marching over the grid map.
use crate::config::Tuning;
use crate::core::maze::{Cell, GridMap};
use crate::core::player::Pose;

/// One ray of the field of view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RaySample {
    pub angle: f32,
    /// Raw distance along the ray, before fisheye correction.
    pub distance: f32,
}

/// Distance to the first wall along `a`, or `max_depth` when nothing is hit
/// or the ray leaves the map. Accurate to one `step_size`.
pub fn cast_ray(map: &GridMap, ox: f32, oy: f32, a: f32, tuning: &Tuning) -> f32 {
    let (sin, cos) = a.sin_cos();
    let mut k: u32 = 0;
    loop {
        let d = k as f32 * tuning.step_size;
        if d >= tuning.max_depth {
            return tuning.max_depth;
        }
        match map.cell_at(ox + cos * d, oy + sin * d) {
            Some(Cell::Wall) => return d,
            Some(Cell::Open) => {}
            None => return tuning.max_depth,
        }
        k += 1;
    }
}

/// Angle of ray `i` of `num_rays`, sweeping the FOV left to right.
#[inline]
pub fn ray_angle(facing: f32, i: usize, tuning: &Tuning) -> f32 {
    facing - tuning.fov / 2.0 + (tuning.fov / tuning.num_rays as f32) * i as f32
}

pub fn cast_fov(pose: &Pose, map: &GridMap, tuning: &Tuning) -> Vec<RaySample> {
    (0..tuning.num_rays)
        .map(|i| {
            let angle = ray_angle(pose.a, i, tuning);
            RaySample { angle, distance: cast_ray(map, pose.x, pose.y, angle, tuning) }
        })
        .collect()
}
