//! How scroll offsets turn into rotation and how rotation turns into depth.

use crate::model::InvalidConfigurationError;
use serde::Deserialize;

/// Whether the scroll-driven rotation is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RotationMode {
    /// Rotation follows the offset all the way round; the ring closes on
    /// itself, so column `n` sits where column `0` does.
    Free,
    /// Rotation is centred on the strip and held within `±max_angle_deg`.
    #[default]
    Clamped,
}

impl std::str::FromStr for RotationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "clamped" => Ok(Self::Clamped),
            other => Err(format!("unknown rotation mode '{}'", other)),
        }
    }
}

/// Conversion from scroll units to degrees of rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScrollScale {
    /// One full period sweeps the whole ring (`column_count * angle_step`),
    /// so free rotation loops without a seam.
    #[default]
    PeriodSpansRing,
    /// Fixed number of degrees per scroll unit.
    DegreesPerUnit(f64),
}

impl ScrollScale {
    /// Reject a non-positive or non-finite fixed scale.
    pub fn validate(&self) -> Result<(), InvalidConfigurationError> {
        match *self {
            Self::PeriodSpansRing => Ok(()),
            Self::DegreesPerUnit(k) if k.is_finite() && k > 0.0 => Ok(()),
            Self::DegreesPerUnit(k) => Err(InvalidConfigurationError::NonPositiveScale(k)),
        }
    }

    /// Degrees of rotation per scroll unit.
    pub fn degrees_per_unit(&self, period: f64, ring_arc_deg: f64) -> f64 {
        match *self {
            Self::PeriodSpansRing => ring_arc_deg / period,
            Self::DegreesPerUnit(k) => k,
        }
    }
}

/// Apparent depth as a function of angle from centre.
///
/// Every curve is non-decreasing in `|angle|` over `[0, 180]` and bounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DepthCurve {
    /// Distance behind the front plane of a point on the cylinder:
    /// `radius * (1 - cos|angle|)`, within `[0, 2 * radius]`.
    #[default]
    Cylinder,
    /// `|angle| / 180 * max_depth`, within `[0, max_depth]`.
    Linear {
        /// Depth at ±180°.
        max_depth: f64,
    },
}

impl DepthCurve {
    /// Reject a negative or non-finite linear maximum.
    pub fn validate(&self) -> Result<(), InvalidConfigurationError> {
        match *self {
            Self::Cylinder => Ok(()),
            Self::Linear { max_depth } if max_depth.is_finite() && max_depth >= 0.0 => Ok(()),
            Self::Linear { max_depth } => {
                Err(InvalidConfigurationError::NegativeMaxDepth(max_depth))
            }
        }
    }

    /// Depth for a column at `angle_deg` on a ring of `radius`.
    pub fn depth(&self, angle_deg: f64, radius: f64) -> f64 {
        let magnitude = angle_deg.abs().min(180.0);
        match *self {
            Self::Cylinder => radius * (1.0 - magnitude.to_radians().cos()),
            Self::Linear { max_depth } => magnitude / 180.0 * max_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_mode_defaults_to_clamped() {
        assert_eq!(RotationMode::default(), RotationMode::Clamped);
    }

    #[test]
    fn rotation_mode_parses_case_insensitively() {
        assert_eq!("Free".parse::<RotationMode>(), Ok(RotationMode::Free));
        assert_eq!("CLAMPED".parse::<RotationMode>(), Ok(RotationMode::Clamped));
        assert!("spin".parse::<RotationMode>().is_err());
    }

    #[test]
    fn period_spans_ring_divides_arc_by_period() {
        let scale = ScrollScale::PeriodSpansRing;
        assert_eq!(scale.degrees_per_unit(1000.0, 180.0), 0.18);
    }

    #[test]
    fn fixed_scale_ignores_geometry() {
        let scale = ScrollScale::DegreesPerUnit(0.5);
        assert_eq!(scale.degrees_per_unit(1000.0, 180.0), 0.5);
    }

    #[test]
    fn fixed_scale_rejects_zero() {
        assert_eq!(
            ScrollScale::DegreesPerUnit(0.0).validate(),
            Err(InvalidConfigurationError::NonPositiveScale(0.0))
        );
    }

    #[test]
    fn cylinder_depth_is_zero_at_centre_and_diameter_at_back() {
        let curve = DepthCurve::Cylinder;
        assert_eq!(curve.depth(0.0, 1800.0), 0.0);
        assert!((curve.depth(180.0, 1800.0) - 3600.0).abs() < 1e-9);
        assert!((curve.depth(-90.0, 1800.0) - 1800.0).abs() < 1e-9);
    }

    #[test]
    fn linear_depth_scales_with_angle() {
        let curve = DepthCurve::Linear { max_depth: 10.0 };
        assert_eq!(curve.depth(90.0, 1800.0), 5.0);
        assert_eq!(curve.depth(-180.0, 1800.0), 10.0);
    }

    #[test]
    fn linear_depth_rejects_negative_max() {
        assert!(DepthCurve::Linear { max_depth: -1.0 }.validate().is_err());
        assert!(DepthCurve::Linear { max_depth: 0.0 }.validate().is_ok());
    }
}
