//! Scroll + geometry → per-column placement.

use super::assets::AssetMap;
use super::options::{DepthCurve, RotationMode, ScrollScale};
use super::transforms::{ColumnTransforms, FrameLayout};
use crate::geometry::GeometryCache;
use crate::model::{
    CarouselError, ColumnIndex, ColumnTransform, GeometryConfig, GeometryResult,
    InvalidConfigurationError, InvalidGeometryError, InvalidInputError, ScrollState,
};
use crate::scroll::{signed_offset, Smoothing, ScrollStateMachine};
use tracing::{debug, warn};

/// Root of the engine: owns the geometry and scroll state and produces
/// column transforms on demand.
///
/// Driven by the caller's frame loop: feed it `on_scroll` deltas, call
/// `tick` once per frame, then read `column_transforms`. Nothing runs in
/// the background and nothing is cached across frames except geometry.
///
/// # Rotation
///
/// With scale `k` degrees per scroll unit and current offset `c`:
/// - [`RotationMode::Free`]: rotation = `c * k`, and angles fold into a window
///   as wide as the ring (`column_count * angle_step`), so the ring closes on
///   itself and the default scale loops without a seam.
/// - [`RotationMode::Clamped`]: rotation = `centre + clamp(s * k, ±max_angle)`,
///   where `s` is `c` folded into `(-period/2, period/2]` and
///   `centre = (column_count - 1) * angle_step / 2`. At either bound the outer
///   edge of the end column meets the edge of the visible arc.
///
/// Column `i` then sits at `i * angle_step - rotation`, folded into
/// `(-ring/2, ring/2]` in free mode and `(-180, 180]` in clamped mode.
///
/// # Examples
/// ```
/// use carousel::carousel::CarouselController;
/// use carousel::model::GeometryConfig;
///
/// let mut controller =
///     CarouselController::with_geometry(GeometryConfig::default(), 1000.0).unwrap();
/// controller.on_scroll(120.0).unwrap();
///
/// let transforms: Vec<_> = controller.column_transforms().collect();
/// assert_eq!(transforms.len(), 16);
/// assert!(transforms.iter().any(|t| t.visible));
/// ```
#[derive(Debug, Clone)]
pub struct CarouselController {
    geometry: GeometryCache,
    scroll: ScrollStateMachine,
    mode: RotationMode,
    scale: ScrollScale,
    depth_curve: DepthCurve,
    smoothing: Smoothing,
}

impl CarouselController {
    /// Unconfigured controller around an existing scroll machine.
    ///
    /// Produces no transforms until [`configure`](Self::configure) succeeds.
    pub fn new(scroll: ScrollStateMachine) -> Self {
        Self {
            geometry: GeometryCache::new(),
            scroll,
            mode: RotationMode::default(),
            scale: ScrollScale::default(),
            depth_curve: DepthCurve::default(),
            smoothing: Smoothing::default(),
        }
    }

    /// Controller with geometry and a fresh scroll machine of `period`.
    ///
    /// # Errors
    /// Bad geometry or a non-positive period.
    pub fn with_geometry(config: GeometryConfig, period: f64) -> Result<Self, CarouselError> {
        let mut controller = Self::new(ScrollStateMachine::new(period)?);
        controller.configure(config)?;
        Ok(controller)
    }

    /// Builder: choose free or clamped rotation.
    pub fn with_rotation_mode(mut self, mode: RotationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder: choose how scroll units map to degrees.
    ///
    /// # Errors
    /// A fixed scale that is not finite and positive.
    pub fn with_scroll_scale(mut self, scale: ScrollScale) -> Result<Self, InvalidConfigurationError> {
        scale.validate()?;
        self.scale = scale;
        Ok(self)
    }

    /// Builder: choose the depth curve.
    ///
    /// # Errors
    /// A linear curve with a negative or non-finite maximum.
    pub fn with_depth_curve(mut self, curve: DepthCurve) -> Result<Self, InvalidConfigurationError> {
        curve.validate()?;
        self.depth_curve = curve;
        Ok(self)
    }

    /// Builder: choose the smoothing used by [`tick`](Self::tick).
    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Validate and store `config`, recomputing geometry if it changed.
    ///
    /// # Errors
    /// [`InvalidGeometryError`] from validation; the previous config and its
    /// geometry stay in effect.
    pub fn configure(&mut self, config: GeometryConfig) -> Result<(), InvalidGeometryError> {
        match self.geometry.get_or_compute(&config) {
            Ok(result) => {
                debug!(
                    column_count = config.column_count,
                    angle_step_deg = result.angle_step_deg,
                    max_angle_deg = result.max_angle_deg,
                    "Carousel configured"
                );
                Ok(())
            }
            Err(err) => {
                warn!(%err, ?config, "Rejected geometry config");
                Err(err)
            }
        }
    }

    /// Forward raw scroll input to the scroll machine.
    pub fn on_scroll(&mut self, delta: f64) -> Result<(), InvalidInputError> {
        self.scroll.apply_delta(delta)
    }

    /// Set the scroll target directly, in scroll units.
    pub fn set_target(&mut self, offset: f64) -> Result<(), InvalidInputError> {
        self.scroll.set_target(offset)
    }

    /// Aim the target at the offset that centres column `index`.
    ///
    /// Indices past the end wrap round the ring. In clamped mode the target
    /// stops at the rotation bound.
    ///
    /// # Errors
    /// - [`CarouselError::NotConfigured`] before any geometry is accepted
    /// - [`InvalidInputError::UnreachableColumn`] when centring the column
    ///   needs more rotation than one period of scrolling provides; the
    ///   target is left where it was
    pub fn jump_to_column(&mut self, index: ColumnIndex) -> Result<(), CarouselError> {
        let (Some(config), Some(result)) = (self.geometry.config(), self.geometry.result()) else {
            warn!(column = index.get(), "Jump requested before geometry was configured");
            return Err(CarouselError::NotConfigured);
        };

        let column = index.get() % config.column_count;
        let base_deg = column as f64 * result.angle_step_deg;
        let scale = self.degrees_per_unit(config, &result);
        let period = self.scroll.period();

        // Free rotation covers [0, period * scale); clamped rotation reads the
        // offset folded into (-period/2, period/2].
        let (offset, reachable) = match self.mode {
            RotationMode::Free => {
                let offset = base_deg / scale;
                (offset, (0.0..period).contains(&offset))
            }
            RotationMode::Clamped => {
                let rotation_deg = (base_deg - strip_centre(config, &result))
                    .clamp(-result.max_angle_deg, result.max_angle_deg);
                let offset = rotation_deg / scale;
                (offset, offset > -period / 2.0 && offset <= period / 2.0)
            }
        };
        let offset = InvalidInputError::check_finite("jump_to_column", offset)?;

        if !reachable {
            let err = InvalidInputError::UnreachableColumn {
                column,
                offset,
                period,
            };
            warn!(%err, "Rejected jump");
            return Err(err.into());
        }

        debug!(column, offset, "Jumping to column");
        self.scroll.set_target(offset)?;
        Ok(())
    }

    /// Advance one frame of `dt` seconds, easing current toward target.
    pub fn tick(&mut self, dt: f64) -> Result<(), InvalidInputError> {
        self.scroll.tick(dt, &self.smoothing)
    }

    /// Placement of every column for the current scroll position.
    ///
    /// Lazy and recomputed on each call. Empty when unconfigured.
    pub fn column_transforms(&self) -> ColumnTransforms {
        let (Some(config), Some(result)) = (self.geometry.config(), self.geometry.result()) else {
            return ColumnTransforms::empty();
        };

        let wrap_span_deg = match self.mode {
            RotationMode::Free => result.ring_arc_deg(config.column_count),
            RotationMode::Clamped => 360.0,
        };
        let layout = FrameLayout {
            angle_step_deg: result.angle_step_deg,
            rotation_deg: self.rotation_for(config, &result),
            half_visible_arc: config.visible_arc / 2.0,
            radius: config.radius,
            depth_curve: self.depth_curve,
            wrap_span_deg,
        };
        ColumnTransforms::new(layout, config.column_count)
    }

    /// Column transforms paired with each column's asset handle.
    pub fn column_transforms_with<'a, H>(
        &self,
        assets: &'a AssetMap<H>,
    ) -> impl Iterator<Item = (ColumnTransform, Option<&'a H>)> + 'a
    where
        H: 'a,
    {
        self.column_transforms()
            .map(move |transform| (transform, assets.handle_for(transform.index)))
    }

    /// Current rotation in degrees, or `None` when unconfigured.
    pub fn rotation_deg(&self) -> Option<f64> {
        let config = self.geometry.config()?;
        let result = self.geometry.result()?;
        Some(self.rotation_for(config, &result))
    }

    /// Read-only scroll snapshot.
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    /// Derived angles for the stored config.
    pub fn geometry(&self) -> Option<GeometryResult> {
        self.geometry.result()
    }

    /// The stored config.
    pub fn geometry_config(&self) -> Option<&GeometryConfig> {
        self.geometry.config()
    }

    /// Active rotation mode.
    pub fn rotation_mode(&self) -> RotationMode {
        self.mode
    }

    /// Switch rotation mode between frames.
    pub fn set_rotation_mode(&mut self, mode: RotationMode) {
        self.mode = mode;
    }

    fn degrees_per_unit(&self, config: &GeometryConfig, result: &GeometryResult) -> f64 {
        self.scale
            .degrees_per_unit(self.scroll.period(), result.ring_arc_deg(config.column_count))
    }

    fn rotation_for(&self, config: &GeometryConfig, result: &GeometryResult) -> f64 {
        let scale = self.degrees_per_unit(config, result);
        let state = self.scroll.state();
        match self.mode {
            RotationMode::Free => state.current_offset * scale,
            RotationMode::Clamped => {
                let contribution = (signed_offset(state.current_offset, state.period) * scale)
                    .clamp(-result.max_angle_deg, result.max_angle_deg);
                strip_centre(config, result) + contribution
            }
        }
    }
}

/// Angle of the midpoint between the first and last column.
fn strip_centre(config: &GeometryConfig, result: &GeometryResult) -> f64 {
    (config.column_count - 1) as f64 * result.angle_step_deg / 2.0
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
