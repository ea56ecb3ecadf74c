//! The arrow layout engine.
//!
//! This module is organized into submodules:
//! - `axes`: orientation-indexed frame (axis selection, tip edge, signs)
//! - `arrow`: arrow head span, outer V, inner tip, path assembly
//! - `pole`: pole length resolution and segment endpoints
//!
//! [`layout`] is the sole public entry point. It is a pure function: no
//! I/O, no caching, no hidden state, and it never fails. Degenerate inputs
//! (zero-size rects, zero spans) produce degenerate zero-area geometry.

mod arrow;
mod axes;
mod pole;

use glam::DVec2;

use crate::config::ArrowStyle;
use crate::paint::{Paint, arrow_paint, pole_paint};
use crate::types::Rect;

use axes::Frame;

/// Ordered vertices of the arrow path plus the paint to draw it with.
///
/// An open chevron has exactly 3 vertices. Closed forms (solid triangle,
/// wedge) repeat the first vertex as the last, so a backend can replay the
/// list with move-to/line-to and a final close.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowPath {
    pub points: Vec<DVec2>,
    pub paint: Paint,
}

impl ArrowPath {
    /// True when the path closes back on its first vertex
    pub fn is_closed(&self) -> bool {
        self.points.len() > 3 && self.points.first() == self.points.last()
    }
}

/// The connecting pole line, drawn opposite the arrow head
#[derive(Clone, Debug, PartialEq)]
pub struct PoleSegment {
    pub start: DVec2,
    pub end: DVec2,
    pub paint: Paint,
}

/// Paint-ready geometry for one arrow glyph.
///
/// Recomputed fresh on every paint request; it has no persistent identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub arrow: ArrowPath,
    /// Absent unless the style enables the pole and its resolved length is
    /// non-zero
    pub pole: Option<PoleSegment>,
}

/// Compute the glyph geometry for a content rectangle and a resolved style.
///
/// `rect` is the content box (host padding already subtracted, see
/// [`Rect::inset`]). The call is deterministic: identical inputs yield
/// identical output.
pub fn layout(rect: Rect, style: &ArrowStyle) -> Geometry {
    let frame = Frame::new(rect, style.orientation);

    let points = arrow::build_path(&frame, style);
    let pole = pole::segment(&frame, style).map(|(start, end)| PoleSegment {
        start,
        end,
        paint: pole_paint(style),
    });

    crate::log::debug!(
        "layout: orientation={:?} span={} pole={}",
        style.orientation,
        arrow::arrow_span(&frame, style),
        pole.is_some(),
    );

    Geometry {
        arrow: ArrowPath {
            points,
            paint: arrow_paint(style),
        },
        pole,
    }
}
