//! Drawing of the cell grid and placed lamps onto a 2-D surface.
#![forbid(unsafe_code)]

mod svg;

pub use svg::SvgSurface;

use lampgrid_geom::{Point, Rect};
use lampgrid_grid::Grid;
use lampgrid_lamps::{Extents, Lamp};

/// Inset of the selected-cell fill inside its stroked outline, in pixels.
pub const CELL_PADDING: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgba(0, 0, 0, 1.0);
    pub const LIGHTGREY: Color = Color::rgba(211, 211, 211, 1.0);
    pub const ORANGE: Color = Color::rgba(255, 165, 0, 1.0);
    pub const LIGHT: Color = Color::rgba(255, 255, 0, 0.5);
    pub const LIGHT_MOVED: Color = Color::rgba(0, 191, 255, 0.5);

    pub fn to_css(self) -> String {
        if self.a >= 1.0 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Anything rectangles can be painted on. Rectangles arrive in pixels.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64);
}

/// Length-units to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub pixels_per_unit: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { pixels_per_unit: 1.0 }
    }
}

impl Viewport {
    #[inline]
    pub fn to_px(&self, r: Rect) -> Rect {
        Rect::new(r.min * self.pixels_per_unit, r.max * self.pixels_per_unit)
    }

    /// Pixel size of the whole grid.
    pub fn grid_size(&self, grid: &Grid) -> (f64, f64) {
        let e = self.to_px(grid.extent());
        (e.width(), e.height())
    }
}

/// Outlines every cell and fills selected ones, inset by [`CELL_PADDING`].
pub fn draw_grid<S: DrawSurface + ?Sized>(surface: &mut S, grid: &Grid, view: &Viewport) {
    for cell in grid.cells() {
        let px = view.to_px(cell.rect());
        surface.stroke_rect(px, Color::BLACK, 1.0);
        if cell.selected {
            let pad = Point::new(CELL_PADDING, CELL_PADDING);
            let inner = Rect::new(px.min + pad, px.max - pad);
            if inner.width() > 0.0 && inner.height() > 0.0 {
                surface.fill_rect(inner, Color::LIGHTGREY);
            }
        }
    }
}

/// Light rectangle with an orange outline, then the black frame on top.
/// Lamps slid by frame correction get a distinct light fill.
pub fn draw_lamps<S: DrawSurface + ?Sized>(
    surface: &mut S,
    lamps: &[Lamp],
    ext: &Extents,
    view: &Viewport,
) {
    for lamp in lamps {
        let light = view.to_px(lamp.light_rect(ext));
        let fill = if lamp.moved { Color::LIGHT_MOVED } else { Color::LIGHT };
        surface.fill_rect(light, fill);
        surface.stroke_rect(light, Color::ORANGE, 1.0);
        surface.fill_rect(view.to_px(lamp.frame_rect(ext)), Color::BLACK);
    }
    log::debug!("drew {} lamps", lamps.len());
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill(Rect, Color),
    Stroke(Rect, Color, f64),
}

/// Surface that keeps the draw calls, for inspection.
#[derive(Default, Debug)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

impl DrawSurface for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64) {
        self.ops.push(DrawOp::Stroke(rect, color, line_width));
    }
}
