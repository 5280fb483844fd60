use raylib::prelude::*;

use dungeon_caster::render::surface::{Rgb, Surface};

#[inline]
fn color(c: Rgb) -> Color {
    Color::new(c.r, c.g, c.b, 255)
}

/// Forwards draw calls to an active raylib draw handle.
pub struct RaylibSurface<'a, D: RaylibDraw> {
    d: &'a mut D,
}

impl<'a, D: RaylibDraw> RaylibSurface<'a, D> {
    pub fn new(d: &'a mut D) -> Self {
        Self { d }
    }
}

impl<D: RaylibDraw> Surface for RaylibSurface<'_, D> {
    fn clear(&mut self, c: Rgb) {
        self.d.clear_background(color(c));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, c: Rgb) {
        self.d.draw_rectangle_v(Vector2::new(x, y), Vector2::new(w, h), color(c));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, c: Rgb) {
        self.d.draw_circle_v(Vector2::new(x, y), radius, color(c));
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, c: Rgb, width: f32) {
        self.d.draw_line_ex(Vector2::new(x1, y1), Vector2::new(x2, y2), width, color(c));
    }
}
