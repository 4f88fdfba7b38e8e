use lampgrid_geom::{Point, Rect};

use crate::spec::Extents;

/// One placed fixture. Both origins are top-left corners in length-units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lamp {
    pub light_origin: Point,
    pub frame_origin: Point,
    /// Share of the light footprint over building area, two decimals.
    /// Only present between coverage evaluation and frame correction.
    pub coverage: Option<f64>,
    /// Set by frame correction when the lamp was slid back toward the area.
    pub moved: bool,
}

impl Lamp {
    /// Fresh lamp with the frame centered in its light rectangle.
    pub fn centered(light_origin: Point, ext: &Extents) -> Self {
        let inset = Point::new(
            (ext.light.w - ext.frame.w) / 2.0,
            (ext.light.h - ext.frame.h) / 2.0,
        );
        Self {
            light_origin,
            frame_origin: light_origin + inset,
            coverage: None,
            moved: false,
        }
    }

    #[inline]
    pub fn light_rect(&self, ext: &Extents) -> Rect {
        Rect::from_origin_size(self.light_origin, ext.light)
    }

    #[inline]
    pub fn frame_rect(&self, ext: &Extents) -> Rect {
        Rect::from_origin_size(self.frame_origin, ext.frame)
    }

    /// Light and frame moved together; every other field kept.
    #[inline]
    pub fn translated(&self, by: Point) -> Lamp {
        Lamp {
            light_origin: self.light_origin + by,
            frame_origin: self.frame_origin + by,
            ..*self
        }
    }

    #[inline]
    pub fn with_coverage(&self, coverage: Option<f64>) -> Lamp {
        Lamp { coverage, ..*self }
    }
}
