//! Read-only scroll snapshot.

use serde::Serialize;

/// Scroll position over a periodic virtual axis.
///
/// Values handed out by the engine are always canonical:
/// `0 <= current_offset < period` and `0 <= target_offset < period`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollState {
    /// Position the carousel is drawn at.
    pub current_offset: f64,
    /// Position the carousel is easing toward.
    pub target_offset: f64,
    /// Length of one full content loop.
    pub period: f64,
}

impl ScrollState {
    /// Whether both offsets lie in `[0, period)`.
    pub fn is_canonical(&self) -> bool {
        let in_range = |offset: f64| (0.0..self.period).contains(&offset);
        in_range(self.current_offset) && in_range(self.target_offset)
    }

    /// Whether current has caught up with target.
    pub fn is_settled(&self) -> bool {
        self.current_offset == self.target_offset
    }
}
