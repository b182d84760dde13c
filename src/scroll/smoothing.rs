//! Frame-rate independent approach of current toward target.

use crate::model::InvalidConfigurationError;

/// Frame rate the lerp factor is calibrated against.
pub const REFERENCE_FPS: f64 = 60.0;

/// Fraction of the remaining distance covered per reference frame.
pub const DEFAULT_LERP_FACTOR: f64 = 0.15;

/// Remaining distance below which current jumps onto target.
pub const DEFAULT_SNAP_DISTANCE: f64 = 0.001;

/// Exponential approach settings used by `tick`.
///
/// Each reference frame covers `lerp_factor` of what is left. For a frame
/// of `dt` seconds the covered fraction is
/// `1 - (1 - lerp_factor)^(dt * REFERENCE_FPS)`, so two half frames move
/// exactly as far as one full frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    lerp_factor: f64,
    snap_distance: f64,
}

impl Smoothing {
    /// Validating constructor.
    ///
    /// # Errors
    /// - `lerp_factor` outside `(0, 1]`
    /// - `snap_distance` negative or non-finite
    pub fn new(lerp_factor: f64, snap_distance: f64) -> Result<Self, InvalidConfigurationError> {
        if !(lerp_factor > 0.0 && lerp_factor <= 1.0) {
            return Err(InvalidConfigurationError::LerpFactorOutOfRange(lerp_factor));
        }
        if !(snap_distance.is_finite() && snap_distance >= 0.0) {
            return Err(InvalidConfigurationError::NegativeSnapDistance(snap_distance));
        }
        Ok(Self {
            lerp_factor,
            snap_distance,
        })
    }

    /// Jump straight to target on the first tick with a positive `dt`.
    pub fn immediate() -> Self {
        Self {
            lerp_factor: 1.0,
            snap_distance: 0.0,
        }
    }

    /// Fraction of the remaining distance covered per reference frame.
    pub fn lerp_factor(&self) -> f64 {
        self.lerp_factor
    }

    /// Remaining distance below which current snaps onto target.
    pub fn snap_distance(&self) -> f64 {
        self.snap_distance
    }

    /// Fraction of the remaining distance to cover over `dt` seconds.
    pub fn alpha(&self, dt: f64) -> f64 {
        1.0 - (1.0 - self.lerp_factor).powf(dt * REFERENCE_FPS)
    }

    /// Displacement to apply this frame given the signed `remaining` distance.
    ///
    /// Returns exactly `remaining` when what would be left is within the
    /// snap distance.
    pub fn displacement(&self, remaining: f64, dt: f64) -> f64 {
        let moved = remaining * self.alpha(dt);
        if (remaining - moved).abs() <= self.snap_distance {
            remaining
        } else {
            moved
        }
    }
}

impl Default for Smoothing {
    fn default() -> Self {
        Self {
            lerp_factor: DEFAULT_LERP_FACTOR,
            snap_distance: DEFAULT_SNAP_DISTANCE,
        }
    }
}
