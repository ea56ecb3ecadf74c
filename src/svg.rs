//! Debug SVG writer.
//!
//! Renders a [`Geometry`] to a standalone SVG document so layouts can be
//! eyeballed and snapshot-tested without a host rendering backend. Output
//! order mirrors the original widget's draw order: pole first, arrow on
//! top.

use glam::DVec2;

use crate::layout::Geometry;
use crate::paint::{Paint, PaintMode};
use crate::types::Rect;

/// Render the geometry as a standalone `<svg>` document.
///
/// The viewBox is the content rectangle, so geometry coordinates map
/// 1:1 onto the document.
pub fn render_svg(rect: Rect, geometry: &Geometry) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">\n",
        fmt_num(rect.width().raw()),
        fmt_num(rect.height().raw()),
        fmt_num(rect.left.raw()),
        fmt_num(rect.top.raw()),
        fmt_num(rect.width().raw()),
        fmt_num(rect.height().raw()),
    ));

    if let Some(pole) = &geometry.pole {
        out.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" fill=\"none\"{}/>\n",
            fmt_num(pole.start.x),
            fmt_num(pole.start.y),
            fmt_num(pole.end.x),
            fmt_num(pole.end.y),
            stroke_attrs(&pole.paint),
        ));
    }

    let arrow = &geometry.arrow;
    // Polygon closes itself; drop the repeated closing vertex
    let points = if arrow.is_closed() {
        points_attr(&arrow.points[..arrow.points.len() - 1])
    } else {
        points_attr(&arrow.points)
    };
    match arrow.paint.mode {
        // Filling implicitly closes an open chevron, as canvas fills do
        PaintMode::Fill => out.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"{}\"/>\n",
            points, arrow.paint.color,
        )),
        PaintMode::Stroke if arrow.is_closed() => out.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"none\"{}/>\n",
            points,
            stroke_attrs(&arrow.paint),
        )),
        PaintMode::Stroke => out.push_str(&format!(
            "  <polyline points=\"{}\" fill=\"none\"{}/>\n",
            points,
            stroke_attrs(&arrow.paint),
        )),
    }

    out.push_str("</svg>");
    out
}

fn points_attr(points: &[DVec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn stroke_attrs(paint: &Paint) -> String {
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        paint.color,
        fmt_num(paint.stroke_width),
    );
    if let Some(dash) = &paint.dash {
        let intervals = dash
            .intervals
            .iter()
            .map(|v| fmt_num(*v))
            .collect::<Vec<_>>()
            .join(",");
        attrs.push_str(&format!(
            " stroke-dasharray=\"{}\" stroke-dashoffset=\"{}\"",
            intervals,
            fmt_num(dash.phase),
        ));
    }
    attrs
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let sig_figs = 6;
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ArrowStyle, Orientation};
    use crate::layout::layout;
    use crate::types::Px;

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(20.5), "20.5");
        assert_eq!(fmt_num(-3.25), "-3.25");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn open_chevron_renders_as_polyline() {
        let rect = Rect::from_size(Px(100.0), Px(40.0));
        let style = ArrowStyle::builder(Orientation::Right).build().unwrap();
        let svg = render_svg(rect, &layout(rect, &style));
        insta::assert_snapshot!(svg, @r#"
        <svg xmlns="http://www.w3.org/2000/svg" width="100" height="40" viewBox="0 0 100 40">
          <polyline points="0,0 100,20 0,40" fill="none" stroke="rgb(0,0,0)" stroke-width="1"/>
        </svg>
        "#);
    }

    #[test]
    fn filled_triangle_with_dashed_pole() {
        let rect = Rect::from_size(Px(40.0), Px(50.0));
        let style = ArrowStyle::builder(Orientation::Up)
            .with_pole(0.5)
            .arrow_thick(Px(-1.0))
            .fill_arrow(true)
            .dash_pole(Px(4.0), Px(2.0))
            .build()
            .unwrap();
        let svg = render_svg(rect, &layout(rect, &style));
        insta::assert_snapshot!(svg, @r#"
        <svg xmlns="http://www.w3.org/2000/svg" width="40" height="50" viewBox="0 0 40 50">
          <line x1="20" y1="50" x2="20" y2="25" fill="none" stroke="rgb(0,0,0)" stroke-width="1" stroke-dasharray="4,2,4,2" stroke-dashoffset="1"/>
          <polygon points="0,25 20,0 40,25" fill="rgb(0,0,0)"/>
        </svg>
        "#);
    }

    #[test]
    fn stroked_wedge_renders_as_outlined_polygon() {
        let rect = Rect::from_size(Px(100.0), Px(40.0));
        let style = ArrowStyle::builder(Orientation::Left)
            .arrow_thick(Px(30.0))
            .build()
            .unwrap();
        let svg = render_svg(rect, &layout(rect, &style));
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("fill=\"none\""));
        assert!(svg.contains("stroke=\"rgb(0,0,0)\""));
    }
}
