//! Orientation-indexed frame for the layout math.
//!
//! The original widget repeated a four-way orientation switch across six
//! geometry functions. The [`Frame`] collapses that into one description
//! per orientation: which rect axis the pole and arrow head share, and
//! which end of it the tip touches. Every geometry step works in
//! (along, cross) coordinates and lets the frame map them back to x/y.

use glam::{DVec2, dvec2};

use crate::config::Orientation;
use crate::types::Rect;

/// Primary axis of an orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// A content rectangle viewed along one orientation's ratio axis.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame {
    axis: Axis,
    /// +1 when the tip sits at the axis maximum (Right/Down), -1 at the
    /// minimum (Left/Up)
    advance: f64,
    along_min: f64,
    along_max: f64,
    cross_min: f64,
    cross_max: f64,
}

impl Frame {
    pub(crate) fn new(rect: Rect, orientation: Orientation) -> Frame {
        let (axis, advance) = match orientation {
            Orientation::Left => (Axis::X, -1.0),
            Orientation::Up => (Axis::Y, -1.0),
            Orientation::Right => (Axis::X, 1.0),
            Orientation::Down => (Axis::Y, 1.0),
        };
        let (along_min, along_max, cross_min, cross_max) = match axis {
            Axis::X => (
                rect.left.raw(),
                rect.right.raw(),
                rect.top.raw(),
                rect.bottom.raw(),
            ),
            Axis::Y => (
                rect.top.raw(),
                rect.bottom.raw(),
                rect.left.raw(),
                rect.right.raw(),
            ),
        };
        Frame {
            axis,
            advance,
            along_min,
            along_max,
            cross_min,
            cross_max,
        }
    }

    /// Length of the axis shared by pole and arrow head (content width for
    /// Left/Right, content height for Up/Down)
    pub(crate) fn ratio_axis_length(&self) -> f64 {
        self.along_max - self.along_min
    }

    /// Axis coordinate of the edge the tip touches
    pub(crate) fn tip_edge(&self) -> f64 {
        if self.advance > 0.0 {
            self.along_max
        } else {
            self.along_min
        }
    }

    /// Axis coordinate of the edge opposite the tip (pole anchor edge)
    pub(crate) fn pole_edge(&self) -> f64 {
        if self.advance > 0.0 {
            self.along_min
        } else {
            self.along_max
        }
    }

    /// Move an axis coordinate toward the rect interior
    pub(crate) fn inward(&self, along: f64, distance: f64) -> f64 {
        along - self.advance * distance
    }

    /// Move an axis coordinate toward the tip edge
    pub(crate) fn toward_tip(&self, along: f64, distance: f64) -> f64 {
        along + self.advance * distance
    }

    pub(crate) fn cross_min(&self) -> f64 {
        self.cross_min
    }

    pub(crate) fn cross_max(&self) -> f64 {
        self.cross_max
    }

    /// Midpoint of the cross axis
    pub(crate) fn cross_mid(&self) -> f64 {
        (self.cross_min + self.cross_max) / 2.0
    }

    /// Assemble an (x, y) point from (along, cross) coordinates
    pub(crate) fn point(&self, along: f64, cross: f64) -> DVec2 {
        match self.axis {
            Axis::X => dvec2(along, cross),
            Axis::Y => dvec2(cross, along),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Px;

    fn rect() -> Rect {
        Rect::from_size(Px(100.0), Px(40.0))
    }

    #[test]
    fn horizontal_orientations_use_width() {
        for o in [Orientation::Left, Orientation::Right] {
            assert_eq!(Frame::new(rect(), o).ratio_axis_length(), 100.0);
        }
    }

    #[test]
    fn vertical_orientations_use_height() {
        for o in [Orientation::Up, Orientation::Down] {
            assert_eq!(Frame::new(rect(), o).ratio_axis_length(), 40.0);
        }
    }

    #[test]
    fn tip_and_pole_edges_are_opposite() {
        let f = Frame::new(rect(), Orientation::Right);
        assert_eq!(f.tip_edge(), 100.0);
        assert_eq!(f.pole_edge(), 0.0);

        let f = Frame::new(rect(), Orientation::Up);
        assert_eq!(f.tip_edge(), 0.0);
        assert_eq!(f.pole_edge(), 40.0);
    }

    #[test]
    fn inward_moves_away_from_tip() {
        let f = Frame::new(rect(), Orientation::Right);
        assert_eq!(f.inward(100.0, 30.0), 70.0);

        let f = Frame::new(rect(), Orientation::Left);
        assert_eq!(f.inward(0.0, 30.0), 30.0);
    }

    #[test]
    fn toward_tip_moves_toward_tip() {
        let f = Frame::new(rect(), Orientation::Down);
        assert_eq!(f.toward_tip(0.0, 12.0), 12.0);

        let f = Frame::new(rect(), Orientation::Up);
        assert_eq!(f.toward_tip(40.0, 12.0), 28.0);
    }

    #[test]
    fn point_maps_along_cross_back_to_xy() {
        let f = Frame::new(rect(), Orientation::Right);
        assert_eq!(f.point(100.0, 20.0), glam::dvec2(100.0, 20.0));

        let f = Frame::new(rect(), Orientation::Down);
        assert_eq!(f.point(40.0, 50.0), glam::dvec2(50.0, 40.0));
    }

    #[test]
    fn offset_rect_keeps_absolute_coordinates() {
        let r = Rect::new(Px(10.0), Px(20.0), Px(110.0), Px(60.0));
        let f = Frame::new(r, Orientation::Left);
        assert_eq!(f.tip_edge(), 10.0);
        assert_eq!(f.pole_edge(), 110.0);
        assert_eq!(f.cross_mid(), 40.0);
    }
}
