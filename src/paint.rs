//! Paint attribute packaging.
//!
//! The engine does not draw; it hands the host one [`Paint`] per primitive
//! describing how the host's backend should stroke or fill it. The values
//! here mirror what the original widget pushed into its `Paint` object
//! right before each draw call.

use crate::config::ArrowStyle;
use crate::types::Color;

/// Whether a path is stroked along its outline or filled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintMode {
    Stroke,
    Fill,
}

/// Dash intervals for a stroked primitive.
///
/// Layout matches the original's `DashPathEffect`: on/off pairs repeated
/// twice, with a fixed phase of 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashPattern {
    pub intervals: [f64; 4],
    pub phase: f64,
}

impl DashPattern {
    pub(crate) fn new(width: f64, gap: f64) -> Self {
        DashPattern {
            intervals: [width, gap, width, gap],
            phase: 1.0,
        }
    }
}

/// Resolved paint attributes for one primitive
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub mode: PaintMode,
    pub stroke_width: f64,
    /// Dash intervals; `None` draws a solid stroke. Never set in fill mode.
    pub dash: Option<DashPattern>,
}

/// Paint for the arrow path: fill or stroke per `fill_arrow`, never dashed
pub(crate) fn arrow_paint(style: &ArrowStyle) -> Paint {
    Paint {
        color: style.arrow_color,
        mode: if style.fill_arrow {
            PaintMode::Fill
        } else {
            PaintMode::Stroke
        },
        stroke_width: style.line_stroke_width.raw(),
        dash: None,
    }
}

/// Paint for the pole segment: always stroked, dashed when `dash_pole`
pub(crate) fn pole_paint(style: &ArrowStyle) -> Paint {
    Paint {
        color: style.pole_color(),
        mode: PaintMode::Stroke,
        stroke_width: style.line_stroke_width.raw(),
        dash: style
            .dash_pole
            .then(|| DashPattern::new(style.dash_width.raw(), style.dash_gap.raw())),
    }
}
