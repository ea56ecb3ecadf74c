//! Error types with diagnostic codes using miette.
//!
//! Layout itself is infallible: every validated configuration and every
//! rectangle (including degenerate ones) yields a valid geometry. The only
//! failure surface is configuration validation, which fails fast at
//! construction rather than clamping silently.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while validating an [`ArrowStyle`](crate::ArrowStyle)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("pole ratio {value} is outside [0, 1]")]
    #[diagnostic(
        code(arrowglyph::config::pole_ratio_range),
        help("pole_ratio is the fraction of the ratio axis given to the pole")
    )]
    PoleRatioOutOfRange { value: f64 },

    #[error("line stroke width must be positive, got {value}")]
    #[diagnostic(code(arrowglyph::config::stroke_width))]
    InvalidStrokeWidth { value: f64 },

    #[error("{field} is invalid: {source}")]
    #[diagnostic(code(arrowglyph::config::invalid_number))]
    InvalidNumber {
        field: &'static str,
        source: NumericError,
    },
}
