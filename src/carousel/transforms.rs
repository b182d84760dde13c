//! Lazy per-column placement sequence.

use super::options::DepthCurve;
use crate::model::{ColumnIndex, ColumnTransform};
use crate::scroll::signed_offset;
use std::ops::Range;

/// Everything needed to place a column, frozen for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FrameLayout {
    pub angle_step_deg: f64,
    pub rotation_deg: f64,
    pub half_visible_arc: f64,
    pub radius: f64,
    pub depth_curve: DepthCurve,
    /// Angles are folded into `(-wrap_span_deg / 2, wrap_span_deg / 2]`.
    pub wrap_span_deg: f64,
}

impl FrameLayout {
    fn place(&self, index: usize) -> ColumnTransform {
        let raw_deg = index as f64 * self.angle_step_deg - self.rotation_deg;
        let angle_deg = signed_offset(raw_deg, self.wrap_span_deg);
        ColumnTransform {
            index: ColumnIndex::new(index),
            angle_deg,
            depth: self.depth_curve.depth(angle_deg, self.radius),
            visible: angle_deg.abs() <= self.half_visible_arc,
        }
    }
}

/// One [`ColumnTransform`] per column, computed as it is pulled.
///
/// Empty when the controller has no geometry yet.
#[derive(Debug, Clone)]
pub struct ColumnTransforms {
    layout: Option<FrameLayout>,
    indices: Range<usize>,
}

impl ColumnTransforms {
    pub(crate) fn new(layout: FrameLayout, column_count: usize) -> Self {
        Self {
            layout: Some(layout),
            indices: 0..column_count,
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            layout: None,
            indices: 0..0,
        }
    }
}

impl Iterator for ColumnTransforms {
    type Item = ColumnTransform;

    fn next(&mut self) -> Option<Self::Item> {
        let layout = self.layout?;
        self.indices.next().map(|index| layout.place(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl DoubleEndedIterator for ColumnTransforms {
    fn next_back(&mut self) -> Option<Self::Item> {
        let layout = self.layout?;
        self.indices.next_back().map(|index| layout.place(index))
    }
}

impl ExactSizeIterator for ColumnTransforms {}

impl std::iter::FusedIterator for ColumnTransforms {}
