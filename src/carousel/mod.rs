//! Carousel controller: geometry and scroll state combined into placements.

pub mod assets;
pub mod controller;
pub mod options;
pub mod transforms;

pub use assets::AssetMap;
pub use controller::CarouselController;
pub use options::{DepthCurve, RotationMode, ScrollScale};
pub use transforms::ColumnTransforms;
