//! Strongly-typed primitives for arrowglyph (zero-cost newtypes).
//!
//! Design goals:
//! - No raw `f64` in domain logic
//! - Illegal states unrepresentable
//! - Host unit conversion (dp, sp, ...) happens before a `Px` is built

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in device pixels (the canonical unit of the layout engine)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Px(pub f64);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Create a Px with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Px, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Px(val))
        }
    }

    /// Create a strictly positive Px with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Px, NumericError> {
        match Px::try_new(val)? {
            Px(v) if v == 0.0 => Err(NumericError::Zero),
            Px(v) if v < 0.0 => Err(NumericError::Negative),
            px => Ok(px),
        }
    }

    /// Round to the nearest whole pixel
    #[inline]
    pub fn round(self) -> Px {
        Px(self.0.round())
    }

    /// Get the absolute value
    #[inline]
    pub fn abs(self) -> Px {
        Px(self.0.abs())
    }

    /// Get the minimum of two lengths
    #[inline]
    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    /// Get the maximum of two lengths
    #[inline]
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Check if this length is finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Px {
    type Output = Px;
    fn add(self, rhs: Px) -> Px {
        Px(self.0 + rhs.0)
    }
}
impl Sub for Px {
    type Output = Px;
    fn sub(self, rhs: Px) -> Px {
        Px(self.0 - rhs.0)
    }
}
impl Mul<f64> for Px {
    type Output = Px;
    fn mul(self, rhs: f64) -> Px {
        Px(self.0 * rhs)
    }
}
impl Div<f64> for Px {
    type Output = Px;
    fn div(self, rhs: f64) -> Px {
        Px(self.0 / rhs)
    }
}
impl Neg for Px {
    type Output = Px;
    fn neg(self) -> Px {
        Px(-self.0)
    }
}
impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Px) {
        self.0 += rhs.0;
    }
}
impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Px) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Padding on each side of an outer rectangle, in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Insets {
    pub left: Px,
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        left: Px::ZERO,
        top: Px::ZERO,
        right: Px::ZERO,
        bottom: Px::ZERO,
    };

    /// The same padding on all four sides
    pub fn uniform(pad: Px) -> Self {
        Insets {
            left: pad,
            top: pad,
            right: pad,
            bottom: pad,
        }
    }
}

/// Axis-aligned rectangle in device pixels, edges inclusive of origin.
///
/// The layout engine expects the *content* rectangle: the host subtracts its
/// padding first (see [`Rect::inset`]). Produced anew on every resize pass.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: Px,
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
}

impl Rect {
    pub fn new(left: Px, top: Px, right: Px, bottom: Px) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle of the given size with its origin at (0, 0)
    pub fn from_size(width: Px, height: Px) -> Self {
        Rect {
            left: Px::ZERO,
            top: Px::ZERO,
            right: width,
            bottom: height,
        }
    }

    /// Shrink by the given padding on each side (outer rect -> content rect)
    pub fn inset(self, insets: Insets) -> Rect {
        Rect {
            left: self.left + insets.left,
            top: self.top + insets.top,
            right: self.right - insets.right,
            bottom: self.bottom - insets.bottom,
        }
    }

    /// Get the width as a typed Px
    pub fn width(self) -> Px {
        self.right - self.left
    }

    /// Get the height as a typed Px
    pub fn height(self) -> Px {
        self.bottom - self.top
    }
}

/// Error parsing a color from text
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    input: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color: {:?}", self.input)
    }
}

impl std::error::Error for ColorParseError {}

/// Simple color model, formatted as CSS `rgb()`/`rgba()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `#RRGGBB` or `#RRGGBBAA`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() {
            return Err(err());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Color::Rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::Rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(err()),
        }
    }
}
