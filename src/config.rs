//! Resolved style configuration for the arrow glyph.
//!
//! The host resolves its own styling surface (attribute sets, themes, unit
//! conversion) into one [`ArrowStyle`] per configuration change; the layout
//! engine only ever sees the resolved values.

use crate::errors::ConfigError;
use crate::types::{Color, Px};

/// The compass direction the arrow points away from its pole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Left,
    Up,
    Right,
    Down,
}

impl Orientation {
    /// Map the original widget's integer attribute encoding
    /// (0=left, 1=up, 2=right, 3=down).
    ///
    /// Unrecognized values fall back to `Left`, matching the `default:`
    /// branch of the original orientation switches.
    pub fn from_raw(raw: u32) -> Orientation {
        match raw {
            1 => Orientation::Up,
            2 => Orientation::Right,
            3 => Orientation::Down,
            _ => Orientation::Left,
        }
    }

    /// True for Left/Right (the ratio axis is the content width)
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Left | Orientation::Right)
    }
}

/// Resolved style for one arrow glyph.
///
/// Sign conventions carried over from the original widget:
/// - `pole_width < 0` means "derive the pole length from the space left
///   over by the arrow head"; `0` suppresses the pole outright.
/// - `arrow_thick == 0` draws an open chevron, `< 0` a closed solid
///   triangle sized by `pole_ratio`, `> 0` a closed wedge with that
///   explicit inner offset.
///
/// Construct via [`ArrowStyle::builder`], which validates, or fill the
/// fields directly and call [`ArrowStyle::validate`] before handing the
/// value to [`layout`](crate::layout).
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowStyle {
    pub orientation: Orientation,
    /// Draw the connecting pole line opposite the arrow head
    pub with_pole: bool,
    /// Fraction of the ratio axis allocated to the pole, in [0, 1]
    pub pole_ratio: f64,
    /// Explicit pole length; negative derives it from the remaining space
    pub pole_width: Px,
    /// Stroke width for both arrow outline and pole; must be positive
    pub line_stroke_width: Px,
    pub arrow_color: Color,
    /// Pole color; `None` falls back to `arrow_color`
    pub pole_color: Option<Color>,
    /// Fill the arrow path instead of stroking it
    pub fill_arrow: bool,
    /// Signed arrow head depth, see the type-level docs
    pub arrow_thick: Px,
    /// Dash the pole instead of drawing it solid
    pub dash_pole: bool,
    pub dash_width: Px,
    pub dash_gap: Px,
}

impl Default for ArrowStyle {
    /// Defaults matching the original widget's attribute defaults
    fn default() -> Self {
        ArrowStyle {
            orientation: Orientation::Left,
            with_pole: false,
            pole_ratio: 0.5,
            pole_width: Px(-1.0),
            line_stroke_width: Px(1.0),
            arrow_color: Color::BLACK,
            pole_color: None,
            fill_arrow: false,
            arrow_thick: Px::ZERO,
            dash_pole: false,
            dash_width: Px::ZERO,
            dash_gap: Px::ZERO,
        }
    }
}

impl ArrowStyle {
    /// Start building a style pointing in the given direction
    pub fn builder(orientation: Orientation) -> ArrowStyleBuilder {
        ArrowStyleBuilder {
            style: ArrowStyle {
                orientation,
                ..ArrowStyle::default()
            },
        }
    }

    /// Color used for the pole (falls back to the arrow color)
    pub fn pole_color(&self) -> Color {
        self.pole_color.unwrap_or(self.arrow_color)
    }

    /// Fail-fast validation of every numeric field.
    ///
    /// Rejects `pole_ratio` outside [0, 1], non-positive
    /// `line_stroke_width`, and any NaN or infinite value. Out-of-range
    /// values are never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pole_ratio.is_finite() || !(0.0..=1.0).contains(&self.pole_ratio) {
            return Err(ConfigError::PoleRatioOutOfRange {
                value: self.pole_ratio,
            });
        }
        if !self.line_stroke_width.is_finite() || self.line_stroke_width.raw() <= 0.0 {
            return Err(ConfigError::InvalidStrokeWidth {
                value: self.line_stroke_width.raw(),
            });
        }
        for (field, px) in [
            ("pole_width", self.pole_width),
            ("arrow_thick", self.arrow_thick),
            ("dash_width", self.dash_width),
            ("dash_gap", self.dash_gap),
        ] {
            if let Err(source) = Px::try_new(px.raw()) {
                return Err(ConfigError::InvalidNumber { field, source });
            }
        }
        Ok(())
    }
}

/// Builder for [`ArrowStyle`]; `build` validates the final configuration.
#[derive(Clone, Debug)]
pub struct ArrowStyleBuilder {
    style: ArrowStyle,
}

impl ArrowStyleBuilder {
    /// Enable the pole with the given share of the ratio axis
    pub fn with_pole(mut self, ratio: f64) -> Self {
        self.style.with_pole = true;
        self.style.pole_ratio = ratio;
        self
    }

    /// Explicit pole length (negative = derive from remaining space)
    pub fn pole_width(mut self, width: Px) -> Self {
        self.style.pole_width = width;
        self
    }

    pub fn line_stroke_width(mut self, width: Px) -> Self {
        self.style.line_stroke_width = width;
        self
    }

    pub fn arrow_color(mut self, color: Color) -> Self {
        self.style.arrow_color = color;
        self
    }

    pub fn pole_color(mut self, color: Color) -> Self {
        self.style.pole_color = Some(color);
        self
    }

    pub fn fill_arrow(mut self, fill: bool) -> Self {
        self.style.fill_arrow = fill;
        self
    }

    /// Signed arrow head depth (0 = open chevron, negative = solid
    /// triangle, positive = wedge inner offset)
    pub fn arrow_thick(mut self, thick: Px) -> Self {
        self.style.arrow_thick = thick;
        self
    }

    /// Dash the pole with the given on/off interval
    pub fn dash_pole(mut self, width: Px, gap: Px) -> Self {
        self.style.dash_pole = true;
        self.style.dash_width = width;
        self.style.dash_gap = gap;
        self
    }

    pub fn build(self) -> Result<ArrowStyle, ConfigError> {
        self.style.validate()?;
        Ok(self.style)
    }
}
