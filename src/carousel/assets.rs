//! Opaque per-column asset handles.

use crate::model::ColumnIndex;

/// Column index → opaque handle (URL, path, texture id...).
///
/// The engine never looks inside a handle; it only hands it back next to the
/// column it belongs to. With fewer handles than columns the handles repeat,
/// so column `i` gets handle `i % len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMap<H> {
    handles: Vec<H>,
}

impl<H> AssetMap<H> {
    /// Wrap an ordered list of handles.
    pub fn new(handles: Vec<H>) -> Self {
        Self { handles }
    }

    /// Handle for `index`, or `None` when the map is empty.
    pub fn handle_for(&self, index: ColumnIndex) -> Option<&H> {
        if self.handles.is_empty() {
            return None;
        }
        self.handles.get(index.get() % self.handles.len())
    }

    /// Number of distinct handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether there are no handles.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H> FromIterator<H> for AssetMap<H> {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
