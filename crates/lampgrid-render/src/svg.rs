use std::fmt::Write;

use lampgrid_geom::Rect;

use crate::{Color, DrawSurface};

/// Accumulates draw calls as SVG elements.
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n<rect width=\"{w}\" height=\"{h}\" fill=\"white\"/>\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

impl DrawSurface for SvgSurface {
    fn fill_rect(&mut self, r: Rect, color: Color) {
        // Writing into a String cannot fail.
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            r.min.x,
            r.min.y,
            r.width(),
            r.height(),
            color.to_css()
        );
    }

    fn stroke_rect(&mut self, r: Rect, color: Color, line_width: f64) {
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            r.min.x,
            r.min.y,
            r.width(),
            r.height(),
            color.to_css(),
            line_width
        );
    }
}
