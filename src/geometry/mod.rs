//! Angular layout of columns on a cylinder.
//!
//! Pure functions: a [`GeometryConfig`] goes in, a [`GeometryResult`] comes
//! out. Nothing here holds state except [`GeometryCache`], which remembers
//! the last result so a controller only recomputes when the layout changes.

use crate::model::{GeometryConfig, GeometryResult, InvalidGeometryError};
use tracing::debug;

/// Angle subtended by one column-plus-gap unit seen from the rotation axis.
///
/// `2 * atan((column_width + gap) / (2 * radius))`, in degrees.
///
/// # Errors
/// - [`InvalidGeometryError::NonPositiveRadius`] if `radius <= 0`
/// - [`InvalidGeometryError::NonPositiveSpan`] if `column_width + gap <= 0`
/// - [`InvalidGeometryError::NonFinite`] if either operand is NaN or infinite
/// - [`InvalidGeometryError::DegenerateAngleStep`] if the step underflows to 0
///
/// # Examples
/// ```
/// use carousel::geometry::compute_angle_step;
/// use carousel::model::GeometryConfig;
///
/// let step = compute_angle_step(&GeometryConfig::default()).unwrap();
/// assert!((step - 11.421).abs() < 1e-3);
/// ```
pub fn compute_angle_step(config: &GeometryConfig) -> Result<f64, InvalidGeometryError> {
    let span = config.span();
    if !config.radius.is_finite() {
        return Err(InvalidGeometryError::NonFinite {
            field: "radius",
            value: config.radius,
        });
    }
    if !span.is_finite() {
        return Err(InvalidGeometryError::NonFinite {
            field: "column_width + gap",
            value: span,
        });
    }
    if config.radius <= 0.0 {
        return Err(InvalidGeometryError::NonPositiveRadius(config.radius));
    }
    if span <= 0.0 {
        return Err(InvalidGeometryError::NonPositiveSpan {
            column_width: config.column_width,
            gap: config.gap,
        });
    }

    let step = (2.0 * (span / (2.0 * config.radius)).atan()).to_degrees();
    if step > 0.0 {
        Ok(step)
    } else {
        Err(InvalidGeometryError::DegenerateAngleStep {
            span,
            radius: config.radius,
        })
    }
}

/// Largest rotation away from centre before the ring leaves the visible arc.
///
/// `max(0, (column_count * angle_step_deg - visible_arc) / 2)`. Total: never
/// fails, never negative. A NaN intermediate also clamps to zero.
pub fn compute_max_angle(config: &GeometryConfig, angle_step_deg: f64) -> f64 {
    let total_arc = config.column_count as f64 * angle_step_deg;
    ((total_arc - config.visible_arc) / 2.0).max(0.0)
}

/// Validate `config` and derive both angles.
///
/// # Errors
/// Any constraint violation from [`GeometryConfig::validate`].
pub fn compute(config: &GeometryConfig) -> Result<GeometryResult, InvalidGeometryError> {
    config.validate()?;
    let angle_step_deg = compute_angle_step(config)?;
    let max_angle_deg = compute_max_angle(config, angle_step_deg);
    Ok(GeometryResult {
        angle_step_deg,
        max_angle_deg,
    })
}

/// Single-entry cache keyed by config value.
///
/// # Invariant
/// When populated, the stored result equals `compute(&stored_config)`.
#[derive(Debug, Clone, Default)]
pub struct GeometryCache {
    entry: Option<(GeometryConfig, GeometryResult)>,
}

impl GeometryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached result for `config`, computing it on a miss.
    ///
    /// A failed computation leaves the previous entry in place.
    pub fn get_or_compute(
        &mut self,
        config: &GeometryConfig,
    ) -> Result<GeometryResult, InvalidGeometryError> {
        if let Some((cached_config, result)) = &self.entry {
            if cached_config == config {
                debug!(?config, "Geometry cache hit");
                return Ok(*result);
            }
        }

        let result = compute(config)?;
        debug!(
            angle_step_deg = result.angle_step_deg,
            max_angle_deg = result.max_angle_deg,
            column_count = config.column_count,
            "Geometry recomputed"
        );
        self.entry = Some((*config, result));
        Ok(result)
    }

    /// The config currently cached, if any.
    pub fn config(&self) -> Option<&GeometryConfig> {
        self.entry.as_ref().map(|(config, _)| config)
    }

    /// The result currently cached, if any.
    pub fn result(&self) -> Option<GeometryResult> {
        self.entry.as_ref().map(|(_, result)| *result)
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
