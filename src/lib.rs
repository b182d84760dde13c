//! Carousel geometry and infinite-scroll engine.
//!
//! Computes where each column of a rotating, perspective carousel sits for
//! the current scroll position. Columns are laid out on a cylinder; scroll
//! input wraps over a fixed period so the content loops forever.
//!
//! Data flows one way:
//! layout constants → [`geometry`] → angle step and rotation bound;
//! scroll delta → [`scroll`] → canonical offset;
//! both → [`carousel`] → per-column transforms for an external renderer.
//!
//! Everything is synchronous and driven by the caller's frame loop.

pub mod carousel;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod model;
pub mod scroll;

pub use carousel::CarouselController;
pub use model::{ColumnTransform, GeometryConfig, GeometryResult, ScrollState};
pub use scroll::ScrollStateMachine;
