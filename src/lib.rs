//! Layout engine for directional arrow glyphs.
//!
//! Given a content rectangle, an orientation and a resolved
//! [`ArrowStyle`], [`layout`] deterministically computes the arrow polygon
//! vertices and the optional connecting "pole" segment, each paired with
//! the [`Paint`] attributes (stroke width, fill-vs-stroke, dash intervals,
//! colors) a host rendering backend needs to draw them.
//!
//! The engine is a pure function: the host owns the widget lifecycle,
//! attribute resolution and actual drawing; this crate owns the geometry.
//!
//! ```
//! use arrowglyph::{ArrowStyle, Orientation, Px, Rect};
//!
//! let style = ArrowStyle::builder(Orientation::Right)
//!     .with_pole(0.5)
//!     .build()?;
//! let geometry = arrowglyph::layout(Rect::from_size(Px(100.0), Px(40.0)), &style);
//!
//! // Open chevron head plus a pole extending toward it
//! assert_eq!(geometry.arrow.points.len(), 3);
//! assert!(geometry.pole.is_some());
//! # Ok::<(), arrowglyph::ConfigError>(())
//! ```

pub mod config;
pub mod errors;
pub mod layout;
pub mod log;
pub mod paint;
pub mod svg;
pub mod types;

pub use config::{ArrowStyle, ArrowStyleBuilder, Orientation};
pub use errors::ConfigError;
pub use layout::{ArrowPath, Geometry, PoleSegment, layout};
pub use paint::{DashPattern, Paint, PaintMode};
pub use types::{Color, Insets, NumericError, Px, Rect};
