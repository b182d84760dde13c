//! Domain data types.
//!
//! Plain values flowing through the engine: layout constants in, column
//! placements out, plus the error taxonomy.

pub mod column;
pub mod error;
pub mod geometry;
pub mod scroll_state;

pub use column::{ColumnIndex, ColumnTransform};
pub use error::{
    CarouselError, InvalidConfigurationError, InvalidGeometryError, InvalidInputError,
};
pub use geometry::{GeometryConfig, GeometryResult};
pub use scroll_state::ScrollState;
