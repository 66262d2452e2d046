//! # relines-backend
//!
//! Binary decoder and conversion entry point for reMarkable `.lines` stroke
//! notebooks.
//!
//! The `.lines` format is a versioned, loosely self-describing little-endian
//! layout with no length fields for variable-size regions: a fixed 45-byte
//! signature, a layer count, then per layer a stroke count and per stroke a
//! header plus a run of 24-byte point records. This crate validates the
//! header, decodes the stroke tree with truncation/corruption recovery, and
//! hands the result to the SVG serializer in `relines-core`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use relines_backend::LinesConverter;
//! use relines_core::RenderOptions;
//!
//! let converter = LinesConverter::new();
//! converter.convert_to_file("page.lines", "page.svg", &RenderOptions::default())?;
//! # Ok::<(), relines_core::LinesError>(())
//! ```

pub mod converter;
pub mod cursor;
pub mod decoder;
pub mod header;

pub use converter::LinesConverter;
pub use cursor::ByteCursor;
pub use decoder::{DecodeOutcome, LinesDecoder, MAX_STROKES_PER_LAYER};
pub use header::{parse_header, ParsedHeader, HEADER_LEN, SIGNATURE_LEN};

// Re-export the result types from relines_core for consistency
pub use relines_core::{ConversionResult, DecodeWarning, RenderOptions};
