//! Canonical scroll position over a periodic axis.

use super::smoothing::Smoothing;
use super::wrap::{advance, normalize, shortest_delta};
use crate::model::{InvalidConfigurationError, InvalidInputError, ScrollState};
use tracing::{trace, warn};

/// Owns the scroll offsets and keeps them canonical.
///
/// `current` is where the carousel is drawn, `target` is where it is heading.
/// Raw input moves both; `set_target` moves only the target and `tick`
/// eases current toward it along the shorter way round the period.
///
/// # Invariant
/// After every call, successful or not, `0 <= current < period` and
/// `0 <= target < period`. Failed calls leave both untouched.
///
/// # Examples
/// ```
/// use carousel::scroll::ScrollStateMachine;
///
/// let mut machine = ScrollStateMachine::new(1000.0).unwrap();
/// machine.apply_delta(1010.0).unwrap();
/// assert_eq!(machine.state().current_offset, 10.0);
///
/// machine.apply_delta(-15.0).unwrap();
/// assert_eq!(machine.state().current_offset, 995.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollStateMachine {
    current: f64,
    target: f64,
    period: f64,
}

impl ScrollStateMachine {
    /// Create a machine at offset zero.
    ///
    /// # Errors
    /// [`InvalidConfigurationError::NonPositivePeriod`] if `period` is not
    /// finite and strictly positive.
    pub fn new(period: f64) -> Result<Self, InvalidConfigurationError> {
        if !(period.is_finite() && period > 0.0) {
            return Err(InvalidConfigurationError::NonPositivePeriod(period));
        }
        Ok(Self {
            current: 0.0,
            target: 0.0,
            period,
        })
    }

    /// Length of one content loop.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Read-only snapshot.
    pub fn state(&self) -> ScrollState {
        ScrollState {
            current_offset: self.current,
            target_offset: self.target,
            period: self.period,
        }
    }

    /// Shift both offsets by raw input displacement, then wrap.
    ///
    /// The delta is reduced modulo the period and wrapped without forming a
    /// sum past the period, so neither huge deltas nor periods near
    /// `f64::MAX` can overflow.
    ///
    /// # Errors
    /// [`InvalidInputError::NonFinite`] for NaN or infinite `delta`.
    pub fn apply_delta(&mut self, delta: f64) -> Result<(), InvalidInputError> {
        let delta = self.reject_non_finite("apply_delta", delta)?;
        let step = normalize(delta, self.period);
        self.current = advance(self.current, step, self.period);
        self.target = advance(self.target, step, self.period);
        trace!(
            delta,
            current = self.current,
            target = self.target,
            "Scroll delta applied"
        );
        Ok(())
    }

    /// Set the target offset directly, then wrap it.
    ///
    /// # Errors
    /// [`InvalidInputError::NonFinite`] for NaN or infinite `target`.
    pub fn set_target(&mut self, target: f64) -> Result<(), InvalidInputError> {
        let target = self.reject_non_finite("set_target", target)?;
        self.target = normalize(target, self.period);
        trace!(target = self.target, "Scroll target set");
        Ok(())
    }

    /// Move current toward target by whatever `easing` decides.
    ///
    /// `easing` receives the signed shortest-path distance still to cover
    /// and returns the displacement to apply this step. Returning the full
    /// distance lands exactly on target. Not called when already settled.
    ///
    /// # Errors
    /// [`InvalidInputError::NonFinite`] if `easing` returns NaN or infinity.
    pub fn tick_with<F>(&mut self, easing: F) -> Result<(), InvalidInputError>
    where
        F: FnOnce(f64) -> f64,
    {
        let remaining = shortest_delta(self.current, self.target, self.period);
        if remaining == 0.0 {
            self.current = self.target;
            return Ok(());
        }

        let moved = self.reject_non_finite("tick", easing(remaining))?;
        self.current = if moved == remaining {
            self.target
        } else {
            advance(self.current, moved, self.period)
        };
        trace!(remaining, moved, current = self.current, "Scroll ticked");
        Ok(())
    }

    /// Ease current toward target for a frame of `dt` seconds.
    ///
    /// # Errors
    /// - [`InvalidInputError::NonFinite`] for NaN or infinite `dt`
    /// - [`InvalidInputError::NegativeDeltaTime`] for `dt < 0`
    pub fn tick(&mut self, dt: f64, smoothing: &Smoothing) -> Result<(), InvalidInputError> {
        let dt = self.reject_non_finite("tick", dt)?;
        if dt < 0.0 {
            warn!(dt, "Rejected negative frame time");
            return Err(InvalidInputError::NegativeDeltaTime(dt));
        }
        self.tick_with(|remaining| smoothing.displacement(remaining, dt))
    }

    fn reject_non_finite(
        &self,
        operation: &'static str,
        value: f64,
    ) -> Result<f64, InvalidInputError> {
        InvalidInputError::check_finite(operation, value).inspect_err(|err| {
            warn!(%err, "Rejected scroll input");
        })
    }
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod tests;
