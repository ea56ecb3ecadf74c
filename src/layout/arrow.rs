//! Arrow head geometry: span, outer V, inner tip, path assembly.

use glam::DVec2;

use crate::config::ArrowStyle;

use super::axes::Frame;

/// Axis length given to the arrow head, rounded to whole pixels.
///
/// When a pole is present with a positive ratio, the head gets the
/// `1 - pole_ratio` share of the ratio axis; otherwise the whole axis.
/// Always >= 0; a zero span produces a degenerate zero-area path.
pub(crate) fn arrow_span(frame: &Frame, style: &ArrowStyle) -> f64 {
    let axis = frame.ratio_axis_length();
    let span = if style.with_pole && style.pole_ratio > 0.0 {
        (axis * (1.0 - style.pole_ratio)).round()
    } else {
        axis.round()
    };
    span.max(0.0)
}

/// Head depth used for the closed forms.
///
/// Negative `arrow_thick` ties the depth to the same ratio split the pole
/// uses (whether or not a pole is drawn); otherwise the value is taken
/// verbatim, including 0.
pub(crate) fn resolved_thickness(frame: &Frame, style: &ArrowStyle) -> f64 {
    if style.arrow_thick.raw() < 0.0 {
        frame.ratio_axis_length() * (1.0 - style.pole_ratio)
    } else {
        style.arrow_thick.raw()
    }
}

/// The outer V of the chevron: start and end flank the tip, inset from the
/// tip edge by the span.
pub(crate) struct OuterV {
    pub start: DVec2,
    pub tip: DVec2,
    pub end: DVec2,
}

pub(crate) fn outer_v(frame: &Frame, span: f64) -> OuterV {
    let flank = frame.inward(frame.tip_edge(), span);
    OuterV {
        start: frame.point(flank, frame.cross_min()),
        tip: frame.point(frame.tip_edge(), frame.cross_mid()),
        end: frame.point(flank, frame.cross_max()),
    }
}

/// Tip offset inward along the primary axis by the head depth
pub(crate) fn inner_tip(frame: &Frame, thickness: f64) -> DVec2 {
    frame.point(frame.inward(frame.tip_edge(), thickness), frame.cross_mid())
}

/// Assemble the arrow path vertices.
///
/// Open chevron: `[start, tip, end]`. Closed forms repeat the first vertex
/// as the last: a solid triangle for negative `arrow_thick`, a
/// quadrilateral wedge (with the inner tip) for positive.
pub(crate) fn build_path(frame: &Frame, style: &ArrowStyle) -> Vec<DVec2> {
    let span = arrow_span(frame, style);
    let v = outer_v(frame, span);
    let mut points = vec![v.start, v.tip, v.end];

    let thick = style.arrow_thick.raw();
    if thick < 0.0 {
        points.push(v.start);
    } else if thick != 0.0 {
        points.push(inner_tip(frame, resolved_thickness(frame, style)));
        points.push(v.start);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Orientation;
    use crate::types::{Px, Rect};

    fn frame(orientation: Orientation) -> Frame {
        Frame::new(Rect::from_size(Px(100.0), Px(40.0)), orientation)
    }

    fn style(orientation: Orientation) -> ArrowStyle {
        ArrowStyle {
            orientation,
            ..ArrowStyle::default()
        }
    }

    #[test]
    fn span_without_pole_is_full_axis() {
        let f = frame(Orientation::Right);
        assert_eq!(arrow_span(&f, &style(Orientation::Right)), 100.0);

        let f = frame(Orientation::Down);
        assert_eq!(arrow_span(&f, &style(Orientation::Down)), 40.0);
    }

    #[test]
    fn span_with_pole_takes_remaining_share() {
        let f = frame(Orientation::Right);
        let s = ArrowStyle {
            with_pole: true,
            pole_ratio: 0.75,
            ..style(Orientation::Right)
        };
        assert_eq!(arrow_span(&f, &s), 25.0);
    }

    #[test]
    fn span_rounds_to_whole_pixels() {
        let f = Frame::new(
            Rect::from_size(Px(33.0), Px(10.0)),
            Orientation::Left,
        );
        let s = ArrowStyle {
            with_pole: true,
            pole_ratio: 0.5,
            ..style(Orientation::Left)
        };
        // 33 * 0.5 = 16.5 rounds to 17
        assert_eq!(arrow_span(&f, &s), 17.0);
    }

    #[test]
    fn zero_pole_ratio_leaves_full_axis_to_the_head() {
        let f = frame(Orientation::Right);
        let s = ArrowStyle {
            with_pole: true,
            pole_ratio: 0.0,
            ..style(Orientation::Right)
        };
        assert_eq!(arrow_span(&f, &s), 100.0);
    }

    #[test]
    fn negative_thickness_resolves_from_ratio() {
        let f = frame(Orientation::Up);
        let s = ArrowStyle {
            arrow_thick: Px(-1.0),
            pole_ratio: 0.5,
            ..style(Orientation::Up)
        };
        // Applies regardless of with_pole, as in the original
        assert_eq!(resolved_thickness(&f, &s), 20.0);
    }

    #[test]
    fn explicit_thickness_is_verbatim() {
        let f = frame(Orientation::Up);
        let s = ArrowStyle {
            arrow_thick: Px(7.0),
            ..style(Orientation::Up)
        };
        assert_eq!(resolved_thickness(&f, &s), 7.0);
        let s = ArrowStyle {
            arrow_thick: Px::ZERO,
            ..s
        };
        assert_eq!(resolved_thickness(&f, &s), 0.0);
    }

    #[test]
    fn chevron_has_three_vertices() {
        let f = frame(Orientation::Left);
        let path = build_path(&f, &style(Orientation::Left));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn solid_triangle_closes_on_first_vertex() {
        let f = frame(Orientation::Left);
        let s = ArrowStyle {
            arrow_thick: Px(-1.0),
            ..style(Orientation::Left)
        };
        let path = build_path(&f, &s);
        assert_eq!(path.len(), 4);
        assert_eq!(path.first(), path.last());
    }

    #[test]
    fn wedge_inserts_inner_tip_before_closing() {
        let f = frame(Orientation::Right);
        let s = ArrowStyle {
            arrow_thick: Px(30.0),
            ..style(Orientation::Right)
        };
        let path = build_path(&f, &s);
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), path.last());
        // Inner tip sits 30px inside the tip edge at mid-height
        assert_eq!(path[3], glam::dvec2(70.0, 20.0));
    }

    #[test]
    fn inner_tip_moves_inward_for_every_orientation() {
        let cases = [
            (Orientation::Left, glam::dvec2(5.0, 20.0)),
            (Orientation::Up, glam::dvec2(50.0, 5.0)),
            (Orientation::Right, glam::dvec2(95.0, 20.0)),
            (Orientation::Down, glam::dvec2(50.0, 35.0)),
        ];
        for (orientation, expected) in cases {
            let f = frame(orientation);
            assert_eq!(inner_tip(&f, 5.0), expected, "{orientation:?}");
        }
    }
}
