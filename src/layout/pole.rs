//! Pole geometry: resolved length and segment endpoints.

use glam::DVec2;

use crate::config::ArrowStyle;

use super::arrow::resolved_thickness;
use super::axes::Frame;

/// Resolved pole length along the ratio axis.
///
/// A negative configured width derives the length from whatever the arrow
/// head leaves over, reserving the stroke width so pole and head never
/// visually overlap. The derived value is clamped at 0 so degenerate rects
/// produce degenerate poles rather than inverted ones. An explicit width
/// is taken verbatim, including 0.
pub(crate) fn resolved_pole_width(frame: &Frame, style: &ArrowStyle) -> f64 {
    if style.pole_width.raw() < 0.0 {
        let axis = frame.ratio_axis_length();
        let width = (axis - style.line_stroke_width.raw())
            .min(axis - resolved_thickness(frame, style));
        width.max(0.0)
    } else {
        style.pole_width.raw()
    }
}

/// Midpoint of the edge opposite the arrow tip
pub(crate) fn pole_start(frame: &Frame) -> DVec2 {
    frame.point(frame.pole_edge(), frame.cross_mid())
}

/// Start offset toward the tip by the resolved pole length
pub(crate) fn pole_end(frame: &Frame, width: f64) -> DVec2 {
    frame.point(frame.toward_tip(frame.pole_edge(), width), frame.cross_mid())
}

/// Pole segment endpoints; `None` when no pole is drawn (disabled, or
/// resolved length 0)
pub(crate) fn segment(frame: &Frame, style: &ArrowStyle) -> Option<(DVec2, DVec2)> {
    if !style.with_pole {
        return None;
    }
    let width = resolved_pole_width(frame, style);
    if width == 0.0 {
        return None;
    }
    Some((pole_start(frame), pole_end(frame, width)))
}
