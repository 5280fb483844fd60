//! Drawing surface abstraction and a recording surface.
//!
//! The renderer only ever issues filled rectangles, filled circles and
//! lines. Hosts implement [`Surface`] over their own draw API; [`Frame`]
//! records the calls instead.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB`.
    pub const fn hex(v: u32) -> Self {
        Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }
}

pub trait Surface {
    /// Starts a new frame. Everything drawn before is discarded.
    fn clear(&mut self, color: Rgb);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb, width: f32);
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect { x: f32, y: f32, w: f32, h: f32, color: Rgb },
    Circle { x: f32, y: f32, radius: f32, color: Rgb },
    Line { x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb, width: f32 },
}

/// In-memory surface: keeps the draw calls of the current frame.
#[derive(Debug, Default)]
pub struct Frame {
    pub background: Option<Rgb>,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> impl Iterator<Item = (f32, f32, f32, f32, Rgb)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Rect { x, y, w, h, color } => Some((x, y, w, h, color)),
            _ => None,
        })
    }
}

impl Surface for Frame {
    fn clear(&mut self, color: Rgb) {
        self.background = Some(color);
        self.commands.clear();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::Circle { x, y, radius, color });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb, width: f32) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2, color, width });
    }
}
