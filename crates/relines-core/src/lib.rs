//! # relines-core
//!
//! Core types for converting reMarkable `.lines` stroke notebooks to SVG.
//!
//! This crate holds the decoded document model (layers, strokes, segments),
//! the format-version and pen-kind vocabularies, the per-pen style policy,
//! the device-to-canvas coordinate mapper, and the SVG serializer. The binary
//! decoder and the conversion entry point live in `relines-backend`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! // Note: LinesConverter is in the relines-backend crate
//! use relines_backend::LinesConverter;
//! use relines_core::RenderOptions;
//!
//! let converter = LinesConverter::new();
//! let result = converter.convert_file("page.lines", &RenderOptions::default())?;
//!
//! println!(
//!     "{} layers, {} strokes",
//!     result.document.layers.len(),
//!     result.document.stroke_count()
//! );
//! result.save("page.svg")?;
//! # Ok::<(), relines_core::LinesError>(())
//! ```
//!
//! ## Degradation model
//!
//! Truncated or corrupted input never panics and never aborts a conversion
//! once the header has validated: decoding stops at the damaged structure and
//! everything read before it is rendered. Each such decision is logged via
//! the `log` facade and recorded as a [`DecodeWarning`] on the conversion
//! result.

pub mod document;
pub mod error;
pub mod format;
pub mod geometry;
pub mod pen;
pub mod serializer;
pub mod style;

pub use document::{ConversionResult, DecodeWarning, Layer, LinesDocument, Segment, Stroke};
pub use error::{LinesError, Result};
pub use format::{FormatVersion, StrokeLayout};
pub use geometry::{CoordinateMapper, NATIVE_HEIGHT, NATIVE_WIDTH};
pub use pen::PenKind;
pub use serializer::{RenderOptions, SvgSerializer};
pub use style::{dynamic_style, palette, resolve_style, StrokeStyle, WIDTH_SCALE};
