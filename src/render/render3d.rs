//! First-person view: flat floor/ceiling plus distance-shaded wall columns.
use crate::config::Tuning;
use crate::core::maze::GridMap;
use crate::core::player::Pose;
use crate::render::casters::cast_fov;
use crate::render::surface::{Rgb, Surface};

/// Ceiling, floor and the band between them share this color.
pub const FLOOR_COLOR: Rgb = Rgb::hex(0x3d4a2a);

const HEIGHT_SCALE: f32 = 200.0;
const MIN_BRIGHTNESS: f32 = 0.1;
const WALL_RED: f32 = 100.0;
const WALL_GREEN: f32 = 200.0;
const MIN_RED: u8 = 10;
const MIN_GREEN: u8 = 20;
/// Target on-screen height of one gradient band.
const BAND_PX: f32 = 4.0;
const MIN_BANDS: usize = 5;
const TOP_MULT: f64 = 1.3;
/// Drop from the top multiplier to the bottom one (1.3 down to 0.7).
const GRADIENT_SPAN: f64 = 0.6;

/// Projected height and base color of one wall column.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColumnShade {
    pub height: f32,
    pub red: u8,
    pub green: u8,
}

pub fn shade_column(corrected: f32, tuning: &Tuning) -> ColumnShade {
    let max_wall = tuning.viewport_height as f32 * 2.0 / 3.0;
    let height = max_wall.min(tuning.tile_size * HEIGHT_SCALE / corrected.max(1.0));

    let b = MIN_BRIGHTNESS.max(1.0 - corrected / tuning.max_depth);
    let red = ((WALL_RED * b).floor() as u8).max(MIN_RED);
    let green = ((WALL_GREEN * b).floor() as u8).max(MIN_GREEN);
    ColumnShade { height, red, green }
}

/// Number of gradient bands a column of `height` pixels is split into.
#[inline]
pub fn band_count(height: f32) -> usize {
    MIN_BANDS.max((height / BAND_PX).floor() as usize)
}

/// Color of band `s` out of `steps`, brightest at the top.
pub fn band_color(shade: &ColumnShade, s: usize, steps: usize) -> Rgb {
    let g = s as f64 / (steps - 1) as f64;
    let mult = TOP_MULT - g * GRADIENT_SPAN;
    let ch = |c: u8| (c as f64 * mult).floor().clamp(0.0, 255.0) as u8;
    Rgb::new(ch(shade.red), ch(shade.green), 0)
}

fn paint_ceiling_and_floor<S: Surface>(fb: &mut S, w: f32, h: f32) {
    let ceil_h = h * 5.0 / 12.0;
    let floor_y = h * 7.0 / 12.0;
    fb.fill_rect(0.0, floor_y, w, h - floor_y, FLOOR_COLOR);
    fb.fill_rect(0.0, 0.0, w, ceil_h, FLOOR_COLOR);
    fb.fill_rect(0.0, ceil_h, w, floor_y - ceil_h, FLOOR_COLOR);
}

pub fn render_3d<S: Surface>(fb: &mut S, pose: &Pose, maze: &GridMap, tuning: &Tuning) {
    let w = tuning.viewport_width as f32;
    let hh = tuning.viewport_height as f32 / 2.0;
    paint_ceiling_and_floor(fb, w, tuning.viewport_height as f32);

    let col_w = w / tuning.num_rays as f32;
    for (i, ray) in cast_fov(pose, maze, tuning).into_iter().enumerate() {
        let corrected = ray.distance * (ray.angle - pose.a).cos();
        let shade = shade_column(corrected, tuning);
        let top = hh - shade.height / 2.0;

        let steps = band_count(shade.height);
        let band_h = shade.height / steps as f32;
        for s in 0..steps {
            fb.fill_rect(
                i as f32 * col_w,
                top + s as f32 * band_h,
                col_w.ceil(),
                band_h.ceil() + 1.0,
                band_color(&shade, s, steps),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::Frame;

    #[test]
    fn shading_never_brightens_with_distance() {
        let t = Tuning::default();
        let mut prev = shade_column(0.0, &t);
        let mut d = 0.0;
        while d <= t.max_depth {
            let cur = shade_column(d, &t);
            assert!(cur.height <= prev.height, "height grew at {d}");
            assert!(cur.red <= prev.red && cur.green <= prev.green, "brighter at {d}");
            prev = cur;
            d += 0.5;
        }
    }

    #[test]
    fn near_walls_clamp_to_max_height() {
        let t = Tuning::default();
        assert_eq!(shade_column(0.0, &t).height, 400.0);
        assert_eq!(shade_column(10.0, &t).height, 400.0);
        assert_eq!(shade_column(64.0, &t).height, 200.0);
    }

    #[test]
    fn far_walls_stay_faintly_visible() {
        let t = Tuning::default();
        let s = shade_column(t.max_depth, &t);
        assert_eq!((s.red, s.green), (10, 20));
    }

    #[test]
    fn gradient_runs_bright_to_dark() {
        let shade = ColumnShade { height: 100.0, red: 100, green: 200 };
        let steps = band_count(shade.height);
        assert_eq!(steps, 25);
        assert_eq!(band_color(&shade, 0, steps), Rgb::new(130, 255, 0));
        assert_eq!(band_color(&shade, steps - 1, steps), Rgb::new(70, 140, 0));
        assert_eq!(band_count(8.0), MIN_BANDS);
    }

    #[test]
    fn frame_has_background_then_columns() {
        let t = Tuning::default();
        let map = GridMap::reference(t.tile_size).unwrap();
        let pose = Pose::new(96.0, 96.0, 0.0);
        let mut frame = Frame::new();
        render_3d(&mut frame, &pose, &map, &t);

        let rects: Vec<_> = frame.rects().collect();
        assert_eq!(rects[0], (0.0, 350.0, 800.0, 250.0, FLOOR_COLOR));
        assert_eq!(rects[1], (0.0, 0.0, 800.0, 250.0, FLOOR_COLOR));
        assert_eq!(rects[2], (0.0, 250.0, 800.0, 100.0, FLOOR_COLOR));
        assert!(rects.len() >= 3 + t.num_rays * MIN_BANDS);
        for (_, _, w, _, color) in &rects[3..] {
            assert_eq!(*w, 7.0);
            assert_eq!(color.b, 0);
        }
    }

    #[test]
    fn columns_stay_around_the_midline() {
        let t = Tuning::default();
        let map = GridMap::reference(t.tile_size).unwrap();
        // facing the left wall from half a cell away: tallest possible columns
        let pose = Pose::new(96.0, 96.0, std::f32::consts::PI);
        let mut frame = Frame::new();
        render_3d(&mut frame, &pose, &map, &t);
        for (_, y, _, _, _) in frame.rects().skip(3) {
            assert!((100.0..500.0).contains(&y), "band at y = {y}");
        }
    }
}
