//! Infinite-scroll state over a periodic virtual axis.
//!
//! The scroll axis repeats every `period` units ("set height"). Offsets are
//! kept in `[0, period)` at all times so the content loops seamlessly no
//! matter how far the user scrolls in either direction.

pub mod machine;
pub mod smoothing;
pub mod wrap;

pub use machine::ScrollStateMachine;
pub use smoothing::Smoothing;
pub use wrap::{advance, normalize, shortest_delta, signed_offset};
