//! Error types for the carousel engine.
//!
//! Every failure the engine can report is local and recoverable by the caller.
//! Errors carry the offending value so callers can log or display it without
//! re-deriving context, and they compose into [`CarouselError`] via `From`.
//!
//! # Error Hierarchy
//!
//! - [`CarouselError`] - Top-level error wrapping every engine failure
//!   - [`InvalidGeometryError`] - Layout constants that cannot describe a ring of columns
//!   - [`InvalidConfigurationError`] - Scroll machine or controller settings out of range
//!   - [`InvalidInputError`] - Non-finite scroll deltas, targets or frame times,
//!     or a jump to a column the scroll range cannot reach
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!
//! # Recovery
//!
//! None of these are retried by the engine. A rejected call leaves all state
//! exactly as it was before the call.

use thiserror::Error;

/// Top-level error encompassing all engine failure modes.
///
/// # Examples
///
/// ```
/// use carousel::model::error::{CarouselError, InvalidConfigurationError};
/// use carousel::scroll::ScrollStateMachine;
///
/// fn build() -> Result<ScrollStateMachine, CarouselError> {
///     // InvalidConfigurationError converts into CarouselError via From
///     let machine = ScrollStateMachine::new(1000.0)?;
///     Ok(machine)
/// }
/// # assert!(build().is_ok());
/// ```
#[derive(Debug, Error)]
pub enum CarouselError {
    /// Geometry constants were rejected.
    #[error("Invalid geometry: {0}")]
    Geometry(#[from] InvalidGeometryError),

    /// Scroll or controller configuration was rejected.
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] InvalidConfigurationError),

    /// A scroll delta, target or frame time was rejected.
    #[error("Invalid input: {0}")]
    Input(#[from] InvalidInputError),

    /// The configuration file could not be loaded.
    #[error("Config file error: {0}")]
    ConfigFile(#[from] crate::config::ConfigError),

    /// An operation needed geometry before any config was accepted.
    #[error("Carousel has no geometry configured")]
    NotConfigured,
}

/// Layout constants that cannot describe a ring of columns.
///
/// Raised by [`GeometryConfig::new`](crate::model::GeometryConfig::new),
/// [`GeometryConfig::validate`](crate::model::GeometryConfig::validate) and the
/// geometry calculator. The caller must supply corrected values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidGeometryError {
    /// Column count must be at least one.
    #[error("column count must be > 0")]
    ZeroColumns,

    /// Column width must be strictly positive.
    #[error("column width must be > 0 (got {0})")]
    NonPositiveColumnWidth(f64),

    /// Gap between columns may be zero but never negative.
    #[error("gap must be >= 0 (got {0})")]
    NegativeGap(f64),

    /// One column plus its gap must span a positive distance.
    #[error("column width + gap must be > 0 (got {column_width} + {gap})")]
    NonPositiveSpan {
        /// Column width that was supplied.
        column_width: f64,
        /// Gap that was supplied.
        gap: f64,
    },

    /// Radius of the cylinder must be strictly positive.
    #[error("radius must be > 0 (got {0})")]
    NonPositiveRadius(f64),

    /// Visible arc must be strictly positive.
    #[error("visible arc must be > 0 degrees (got {0})")]
    NonPositiveVisibleArc(f64),

    /// Column span is so small against the radius that the angle step
    /// rounds to zero.
    #[error("column width + gap ({span}) is too small for radius {radius}: angle step rounds to 0")]
    DegenerateAngleStep {
        /// Column width plus gap.
        span: f64,
        /// Radius that was supplied.
        radius: f64,
    },

    /// A field was NaN or infinite.
    #[error("{field} must be finite (got {value})")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The non-finite value.
        value: f64,
    },
}

/// Settings for the scroll machine or controller that are out of range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidConfigurationError {
    /// Scroll period must be finite and strictly positive.
    #[error("scroll period must be finite and > 0 (got {0})")]
    NonPositivePeriod(f64),

    /// Degrees-per-unit scroll scale must be finite and strictly positive.
    #[error("scroll scale must be finite and > 0 degrees per unit (got {0})")]
    NonPositiveScale(f64),

    /// Smoothing lerp factor must lie in `(0, 1]`.
    #[error("lerp factor must be in (0, 1] (got {0})")]
    LerpFactorOutOfRange(f64),

    /// Snap distance must be finite and non-negative.
    #[error("snap distance must be finite and >= 0 (got {0})")]
    NegativeSnapDistance(f64),

    /// Linear depth curve needs a finite, non-negative maximum.
    #[error("max depth must be finite and >= 0 (got {0})")]
    NegativeMaxDepth(f64),
}

/// A rejected call. State is never modified when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInputError {
    /// NaN or infinite value passed to a scroll operation.
    #[error("{operation} received non-finite value {value}")]
    NonFinite {
        /// Operation that rejected the value (e.g. `"apply_delta"`).
        operation: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Frame time passed to `tick` was negative.
    #[error("tick received negative delta time {0}")]
    NegativeDeltaTime(f64),

    /// Centring a column needs a scroll offset the period cannot reach.
    #[error("column {column} needs scroll offset {offset}, outside the range a period of {period} covers")]
    UnreachableColumn {
        /// Requested column, already wrapped onto the ring.
        column: usize,
        /// Offset that would centre it.
        offset: f64,
        /// Scroll period.
        period: f64,
    },
}

impl InvalidInputError {
    /// Reject `value` for `operation` unless it is finite.
    pub(crate) fn check_finite(operation: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { operation, value })
        }
    }
}
