//! Document serialization module
//!
//! Serializes a decoded [`crate::LinesDocument`] into output markup. SVG is
//! the only target: the `.lines` format records freehand ink, and vector
//! polylines reproduce it losslessly.

pub mod svg;

pub use svg::{RenderOptions, SvgSerializer};
