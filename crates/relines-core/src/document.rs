//! In-memory model of a decoded `.lines` page
//!
//! A [`LinesDocument`] is created once per decode call, is immutable after
//! construction, and is consumed entirely by the SVG serializer. Layers and
//! strokes appear in file order; the decoder never reorders or retroactively
//! discards anything it has read.

use crate::error::Result;
use crate::format::FormatVersion;
use crate::pen::PenKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// One sampled point of a stroke, in device-native 1404x1872 coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Horizontal position in device units
    pub x: f32,
    /// Vertical position in device units
    pub y: f32,
    /// Pen pressure in `[0, 1]`
    pub pressure: f32,
    /// Pen tilt
    pub tilt: f32,
    /// Reserved field, recorded but not interpreted
    pub reserved1: f32,
    /// Reserved field, recorded but not interpreted
    pub reserved2: f32,
}

/// One continuous pen gesture
///
/// A stroke with zero or partially-read segments is still part of the
/// document (rendered as an empty or truncated polyline); strokes are never
/// dropped once their header has been read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Tool used to draw the stroke
    pub pen: PenKind,
    /// Index into the 4-entry color palette
    pub color_index: u32,
    /// Reserved header field, recorded but not interpreted
    pub reserved: u32,
    /// Base width parameter fed into the per-pen width formula
    pub raw_width: f32,
    /// Trailing header field present in V5/V6 records only
    pub extra: Option<u32>,
    /// Sampled points in file order
    pub segments: Vec<Segment>,
}

/// An ordered group of strokes sharing a z-order on the page
///
/// A layer may be partially populated if decoding stopped early within it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Strokes in file order
    pub strokes: Vec<Stroke>,
}

/// A fully decoded `.lines` page
///
/// Holds at least one layer whenever the header validated successfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinesDocument {
    /// Format version the stroke layout was selected from
    pub version: FormatVersion,
    /// Layers in z-order
    pub layers: Vec<Layer>,
}

impl LinesDocument {
    /// Total number of strokes across all layers
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.layers.iter().map(|l| l.strokes.len()).sum()
    }

    /// Total number of segments across all strokes
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.layers
            .iter()
            .flat_map(|l| &l.strokes)
            .map(|s| s.segments.len())
            .sum()
    }
}

/// A recovery decision taken while decoding corrupted or truncated input
///
/// Every warning is also emitted through the `log` facade at `warn!` level;
/// the structured form lets library callers inspect how a conversion
/// degraded without scraping log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeWarning {
    /// Version digits outside `{3,4,5,6}`; the V5 stroke layout was selected
    VersionFallback {
        /// Digits found in the signature
        digits: String,
    },
    /// Declared layer count exceeded the sanity threshold and was clamped
    LayerCountClamped {
        /// Count declared in the header
        declared: u32,
        /// Count actually decoded
        clamped: u32,
    },
    /// A layer's declared stroke count failed the sanity threshold
    ///
    /// The layer is recorded empty and decoding stops: with no independent
    /// length field for a stroke run, the cursor cannot be resynchronized
    /// onto the next layer boundary.
    StrokeCountRejected {
        /// Zero-based layer index
        layer: usize,
        /// Count declared in the file
        declared: u32,
    },
    /// Buffer ended before a layer's stroke count could be read
    TruncatedLayerDirectory {
        /// Zero-based index of the first undecoded layer
        layer: usize,
    },
    /// Buffer ended inside a stroke header
    TruncatedStrokeHeader {
        /// Zero-based layer index
        layer: usize,
        /// Zero-based stroke index within the layer
        stroke: usize,
    },
    /// Buffer ended inside a segment record
    TruncatedSegments {
        /// Zero-based layer index
        layer: usize,
        /// Zero-based stroke index within the layer
        stroke: usize,
        /// Segments fully read before the cut
        read: usize,
        /// Segment count declared in the stroke header
        declared: u32,
    },
    /// A stroke header carried an unrecognized pen identifier
    ///
    /// The stroke renders with the opaque default style.
    UnknownPen {
        /// Raw identifier from the file
        raw: u32,
    },
}

impl std::fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VersionFallback { digits } => {
                write!(f, "unrecognized version '{digits}', using v5 stroke layout")
            }
            Self::LayerCountClamped { declared, clamped } => {
                write!(f, "layer count {declared} exceeds sanity limit, clamped to {clamped}")
            }
            Self::StrokeCountRejected { layer, declared } => {
                write!(
                    f,
                    "layer {layer} declares {declared} strokes, treating as corrupted and stopping"
                )
            }
            Self::TruncatedLayerDirectory { layer } => {
                write!(f, "input ended before stroke count of layer {layer}")
            }
            Self::TruncatedStrokeHeader { layer, stroke } => {
                write!(f, "input ended inside header of stroke {stroke} in layer {layer}")
            }
            Self::TruncatedSegments {
                layer,
                stroke,
                read,
                declared,
            } => {
                write!(
                    f,
                    "input ended after {read} of {declared} segments of stroke {stroke} in layer {layer}"
                )
            }
            Self::UnknownPen { raw } => {
                write!(f, "unknown pen id {raw}, rendering with default style")
            }
        }
    }
}

/// Result of one conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// The decoded stroke document
    pub document: LinesDocument,
    /// Rendered SVG markup
    pub svg: String,
    /// Recovery decisions taken while decoding
    pub warnings: Vec<DecodeWarning>,
    /// Time taken to decode and render
    pub latency: Duration,
}

impl ConversionResult {
    /// Save the SVG output to a file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LinesError::Io`] if the write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.svg)?;
        Ok(())
    }
}
