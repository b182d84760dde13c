//! Layout constants and the angular layout derived from them.

use super::error::InvalidGeometryError;
use serde::Serialize;

/// Physical layout of a ring of columns wrapped around a cylinder.
///
/// Owned by the caller and handed to the engine by value. Fields are public
/// plain data; [`GeometryConfig::new`] is the validating constructor and
/// every consumer re-validates with [`GeometryConfig::validate`], so a
/// hand-built value with bad fields is rejected at the point of use.
///
/// # Invariants (after validation)
/// - `column_count > 0`
/// - `column_width > 0`, `gap >= 0`, `column_width + gap > 0`
/// - `radius > 0`, `visible_arc > 0`
/// - all reals finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometryConfig {
    /// Number of columns on the ring.
    pub column_count: usize,
    /// Width of one column, in layout units.
    pub column_width: f64,
    /// Gap between adjacent columns, in layout units.
    pub gap: f64,
    /// Distance from the rotation axis to the column plane, in layout units.
    pub radius: f64,
    /// Angular window considered on screen, in degrees.
    pub visible_arc: f64,
}

impl GeometryConfig {
    /// Validating constructor.
    ///
    /// # Errors
    /// Returns the first violated constraint as an [`InvalidGeometryError`].
    pub fn new(
        column_count: usize,
        column_width: f64,
        gap: f64,
        radius: f64,
        visible_arc: f64,
    ) -> Result<Self, InvalidGeometryError> {
        let config = Self {
            column_count,
            column_width,
            gap,
            radius,
            visible_arc,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every field constraint.
    ///
    /// Non-finite values are reported before sign checks so that a NaN radius
    /// reads as "not finite" rather than "not positive".
    pub fn validate(&self) -> Result<(), InvalidGeometryError> {
        for (field, value) in [
            ("column_width", self.column_width),
            ("gap", self.gap),
            ("radius", self.radius),
            ("visible_arc", self.visible_arc),
        ] {
            if !value.is_finite() {
                return Err(InvalidGeometryError::NonFinite { field, value });
            }
        }

        if self.column_count == 0 {
            return Err(InvalidGeometryError::ZeroColumns);
        }
        if self.radius <= 0.0 {
            return Err(InvalidGeometryError::NonPositiveRadius(self.radius));
        }
        if self.column_width + self.gap <= 0.0 {
            return Err(InvalidGeometryError::NonPositiveSpan {
                column_width: self.column_width,
                gap: self.gap,
            });
        }
        if self.column_width <= 0.0 {
            return Err(InvalidGeometryError::NonPositiveColumnWidth(
                self.column_width,
            ));
        }
        if self.gap < 0.0 {
            return Err(InvalidGeometryError::NegativeGap(self.gap));
        }
        if self.visible_arc <= 0.0 {
            return Err(InvalidGeometryError::NonPositiveVisibleArc(self.visible_arc));
        }
        Ok(())
    }

    /// Width of one column plus its trailing gap.
    pub fn span(&self) -> f64 {
        self.column_width + self.gap
    }
}

impl Default for GeometryConfig {
    /// Sixteen 320-wide columns with 40 gaps on an 1800 radius, 60° on screen.
    fn default() -> Self {
        Self {
            column_count: 16,
            column_width: 320.0,
            gap: 40.0,
            radius: 1800.0,
            visible_arc: 60.0,
        }
    }
}

/// Angular layout derived from a [`GeometryConfig`].
///
/// # Invariants
/// - `angle_step_deg > 0`
/// - `max_angle_deg >= 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometryResult {
    /// Angle subtended by one column-plus-gap unit, in degrees.
    pub angle_step_deg: f64,
    /// Largest rotation away from centre before content leaves the visible arc.
    pub max_angle_deg: f64,
}

impl GeometryResult {
    /// Total arc covered by `column_count` columns.
    pub fn ring_arc_deg(&self, column_count: usize) -> f64 {
        column_count as f64 * self.angle_step_deg
    }
}
