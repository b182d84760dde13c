//! Per-column placement output.

use serde::Serialize;

/// Column index on the ring. 0-indexed internally, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ColumnIndex(usize);

impl ColumnIndex {
    /// Create a new ColumnIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the 1-based index for display purposes.
    pub fn display(&self) -> usize {
        self.0 + 1
    }
}

impl From<usize> for ColumnIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for ColumnIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Where one column sits on screen for the current frame.
///
/// Recomputed on every request; never cached by the engine.
///
/// # Invariants
/// - `angle_deg` in `(-180, 180]` for clamped rotation, and within half the
///   ring arc either side of centre for free rotation
/// - `visible == (angle_deg.abs() <= visible_arc / 2)`
/// - `depth >= 0`, non-decreasing in `angle_deg.abs()`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnTransform {
    /// Which column this describes.
    pub index: ColumnIndex,
    /// Signed angle from screen centre, in degrees.
    pub angle_deg: f64,
    /// Apparent distance behind the front plane, for z-ordering and fade.
    pub depth: f64,
    /// Whether the column lies inside the visible arc.
    pub visible: bool,
}
