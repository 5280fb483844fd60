//! Top-down debug view: the grid, the player and a sparse FOV fan.
use crate::config::Tuning;
use crate::core::maze::{Cell, GridMap};
use crate::core::player::Pose;
use crate::render::casters::{cast_ray, ray_angle};
use crate::render::surface::{Rgb, Surface};

/// Screen pixels per map cell.
pub const CELL_PX: f32 = 50.0;
const WALL: Rgb = Rgb::WHITE;
const OPEN: Rgb = Rgb::hex(0x333333);
const PLAYER_RADIUS: f32 = 10.0;
const FACING_LEN: f32 = 30.0;
/// Only every n-th ray is drawn.
const RAY_STRIDE: usize = 10;

pub fn render_maze<S: Surface>(fb: &mut S, maze: &GridMap) {
    for (row_index, row) in maze.rows().enumerate() {
        for (col_index, &cell) in row.iter().enumerate() {
            let color = if cell == Cell::Wall { WALL } else { OPEN };
            fb.fill_rect(
                col_index as f32 * CELL_PX,
                row_index as f32 * CELL_PX,
                CELL_PX,
                CELL_PX,
                color,
            );
        }
    }
}

pub fn render_debug<S: Surface>(fb: &mut S, pose: &Pose, maze: &GridMap, tuning: &Tuning) {
    render_maze(fb, maze);

    let scale = CELL_PX / tuning.tile_size;
    let px = pose.x * scale;
    let py = pose.y * scale;
    fb.fill_circle(px, py, PLAYER_RADIUS, Rgb::RED);
    fb.line(
        px,
        py,
        px + pose.a.cos() * FACING_LEN,
        py + pose.a.sin() * FACING_LEN,
        Rgb::RED,
        2.0,
    );

    // raw distances here, no fisheye correction
    for i in (0..tuning.num_rays).step_by(RAY_STRIDE) {
        let a = ray_angle(pose.a, i, tuning);
        let d = cast_ray(maze, pose.x, pose.y, a, tuning);
        fb.line(px, py, px + a.cos() * d * scale, py + a.sin() * d * scale, Rgb::GREEN, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::{DrawCommand, Frame};

    #[test]
    fn debug_view_layout() {
        let t = Tuning::default();
        let map = GridMap::reference(t.tile_size).unwrap();
        let pose = Pose::new(96.0, 96.0, 0.0);
        let mut frame = Frame::new();
        render_debug(&mut frame, &pose, &map, &t);

        let cells = map.width() * map.height();
        assert_eq!(frame.rects().count(), cells);
        assert_eq!(frame.rects().next().unwrap(), (0.0, 0.0, 50.0, 50.0, WALL));
        assert_eq!(frame.rects().nth(10).unwrap(), (50.0, 50.0, 50.0, 50.0, OPEN));

        assert_eq!(
            frame.commands[cells],
            DrawCommand::Circle { x: 75.0, y: 75.0, radius: 10.0, color: Rgb::RED }
        );
        let rays = frame.commands[cells + 2..]
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { color: Rgb::GREEN, width, .. } if *width == 1.0))
            .count();
        assert_eq!(rays, t.num_rays / RAY_STRIDE);
    }

    #[test]
    fn fan_uses_uncorrected_distance() {
        let t = Tuning::default();
        let map = GridMap::reference(t.tile_size).unwrap();
        let pose = Pose::new(96.0, 96.0, std::f32::consts::PI);
        let mut frame = Frame::new();
        render_debug(&mut frame, &pose, &map, &t);

        let first_ray = frame
            .commands
            .iter()
            .find_map(|c| match *c {
                DrawCommand::Line { x1, y1, x2, y2, color: Rgb::GREEN, .. } => Some((x1, y1, x2, y2)),
                _ => None,
            })
            .unwrap();
        let a = ray_angle(pose.a, 0, &t);
        let raw = cast_ray(&map, pose.x, pose.y, a, &t) * CELL_PX / t.tile_size;
        let len = (first_ray.2 - first_ray.0).hypot(first_ray.3 - first_ray.1);
        assert!((len - raw).abs() < 1e-3);
    }
}
