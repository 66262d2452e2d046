//! Stroke decoder for the `.lines` binary layout
//!
//! Walks the buffer strictly forward: per layer a `u32` stroke count, per
//! stroke a 20- or 24-byte header (selected once from the format version)
//! followed by `segment_count` 24-byte point records. The format carries no
//! independent length fields, so any mid-structure truncation or rejected
//! count makes the position of the next record unknowable; decoding stops at
//! that boundary and everything read before it is kept. Truncation is never
//! an error here — the outcome is always a valid, possibly partial, document.

use crate::cursor::ByteCursor;
use crate::header::{parse_header, HEADER_LEN};
use log::{debug, warn};
use relines_core::{
    DecodeWarning, Layer, LinesDocument, PenKind, Result, Segment, Stroke, StrokeLayout,
};

/// Declared per-layer stroke counts above this are treated as corruption
///
/// Native files realistically hold a few thousand strokes per layer.
pub const MAX_STROKES_PER_LAYER: u32 = 1_000_000;

/// Size of one segment record: six little-endian `f32` fields
const SEGMENT_LEN: usize = 24;

/// A decoded document together with the recovery decisions taken
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOutcome {
    /// The decoded page
    pub document: LinesDocument,
    /// Recovery decisions, in the order they were taken
    pub warnings: Vec<DecodeWarning>,
}

/// Decoder from raw `.lines` bytes to the in-memory document model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LinesDecoder;

impl LinesDecoder {
    /// Create a new decoder instance
    #[inline]
    #[must_use = "creates a decoder that should be used"]
    pub const fn new() -> Self {
        Self
    }

    /// Decode a `.lines` buffer into a document
    ///
    /// # Errors
    ///
    /// Returns [`relines_core::LinesError::InvalidFormat`] if the header does
    /// not validate. Truncation and corruption past the header never fail:
    /// they stop decoding at the damaged structure and are reported through
    /// the outcome's warnings.
    pub fn decode(&self, data: &[u8]) -> Result<DecodeOutcome> {
        let header = parse_header(data)?;
        let mut warnings = header.warnings;
        let layout = header.version.stroke_layout();

        let mut cursor = ByteCursor::new(data);
        // Cannot fail: parse_header guarantees HEADER_LEN bytes.
        cursor.read_bytes(HEADER_LEN)?;

        let mut layers: Vec<Layer> = Vec::new();
        for layer_index in 0..header.layer_count as usize {
            let stroke_count = match cursor.read_u32() {
                Ok(count) => count,
                Err(_) => {
                    warn!("input ended before stroke count of layer {layer_index}");
                    warnings.push(DecodeWarning::TruncatedLayerDirectory { layer: layer_index });
                    break;
                }
            };

            if stroke_count > MAX_STROKES_PER_LAYER {
                warn!(
                    "layer {layer_index} declares {stroke_count} strokes, \
                     treating as corrupted and stopping"
                );
                warnings.push(DecodeWarning::StrokeCountRejected {
                    layer: layer_index,
                    declared: stroke_count,
                });
                // Without a length field for the stroke run the cursor cannot
                // be resynchronized onto the next layer boundary.
                layers.push(Layer::default());
                break;
            }

            debug!("layer {layer_index}: {stroke_count} strokes");
            let (layer, layer_truncated) = Self::decode_layer(
                &mut cursor,
                layout,
                layer_index,
                stroke_count,
                &mut warnings,
            );
            layers.push(layer);
            if layer_truncated {
                break;
            }
        }

        Ok(DecodeOutcome {
            document: LinesDocument {
                version: header.version,
                layers,
            },
            warnings,
        })
    }

    /// Decode one layer's strokes; returns the layer and whether it was cut
    /// short by the end of the buffer
    fn decode_layer(
        cursor: &mut ByteCursor<'_>,
        layout: StrokeLayout,
        layer_index: usize,
        stroke_count: u32,
        warnings: &mut Vec<DecodeWarning>,
    ) -> (Layer, bool) {
        let mut strokes = Vec::new();
        for stroke_index in 0..stroke_count as usize {
            let record = match cursor.read_bytes(layout.record_len) {
                Ok(record) => record,
                Err(_) => {
                    warn!(
                        "input ended inside header of stroke {stroke_index} in layer {layer_index}"
                    );
                    warnings.push(DecodeWarning::TruncatedStrokeHeader {
                        layer: layer_index,
                        stroke: stroke_index,
                    });
                    return (Layer { strokes }, true);
                }
            };

            let pen_raw = read_u32_at(record, 0);
            let pen = PenKind::from_raw(pen_raw);
            if let PenKind::Unknown(raw) = pen {
                warn!("layer {layer_index} stroke {stroke_index}: unknown pen id {raw}");
                warnings.push(DecodeWarning::UnknownPen { raw });
            }
            let color_index = read_u32_at(record, 4);
            let reserved = read_u32_at(record, 8);
            let raw_width = read_f32_at(record, 12);
            let segment_count = read_u32_at(record, 16);
            let extra = layout.has_extra_field.then(|| read_u32_at(record, 20));

            let mut segments = Vec::new();
            let mut truncated = false;
            for _ in 0..segment_count {
                match cursor.read_bytes(SEGMENT_LEN) {
                    Ok(raw) => segments.push(parse_segment(raw)),
                    Err(_) => {
                        truncated = true;
                        break;
                    }
                }
            }

            let read = segments.len();
            strokes.push(Stroke {
                pen,
                color_index,
                reserved,
                raw_width,
                extra,
                segments,
            });

            if truncated {
                warn!(
                    "input ended after {read} of {segment_count} segments \
                     of stroke {stroke_index} in layer {layer_index}"
                );
                warnings.push(DecodeWarning::TruncatedSegments {
                    layer: layer_index,
                    stroke: stroke_index,
                    read,
                    declared: segment_count,
                });
                return (Layer { strokes }, true);
            }
        }
        (Layer { strokes }, false)
    }
}

fn read_u32_at(record: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        record[offset],
        record[offset + 1],
        record[offset + 2],
        record[offset + 3],
    ])
}

fn read_f32_at(record: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        record[offset],
        record[offset + 1],
        record[offset + 2],
        record[offset + 3],
    ])
}

fn parse_segment(raw: &[u8]) -> Segment {
    Segment {
        x: read_f32_at(raw, 0),
        y: read_f32_at(raw, 4),
        pressure: read_f32_at(raw, 8),
        tilt: read_f32_at(raw, 12),
        reserved1: read_f32_at(raw, 16),
        reserved2: read_f32_at(raw, 20),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::SIGNATURE_LEN;

    fn push_stroke_header(
        data: &mut Vec<u8>,
        record_len: usize,
        pen: u32,
        color: u32,
        width: f32,
        segment_count: u32,
    ) {
        data.extend_from_slice(&pen.to_le_bytes());
        data.extend_from_slice(&color.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&width.to_le_bytes());
        data.extend_from_slice(&segment_count.to_le_bytes());
        if record_len == 24 {
            data.extend_from_slice(&0u32.to_le_bytes());
        }
    }

    fn push_segment(data: &mut Vec<u8>, x: f32, y: f32) {
        for value in [x, y, 0.5f32, 0.1, 0.0, 0.0] {
            data.extend_from_slice(&value.to_le_bytes());
        }
    }

    fn file_header(digits: &str, layers: u32) -> Vec<u8> {
        let mut data = format!("reMarkable .lines file, version={digits}").into_bytes();
        data.resize(SIGNATURE_LEN, b' ');
        data.extend_from_slice(&layers.to_le_bytes());
        data
    }

    #[test]
    fn decodes_one_stroke_with_segments() {
        let mut data = file_header("5", 1);
        data.extend_from_slice(&1u32.to_le_bytes());
        push_stroke_header(&mut data, 24, 2, 0, 0.5, 2);
        push_segment(&mut data, 10.0, 20.0);
        push_segment(&mut data, 30.0, 40.0);

        let outcome = LinesDecoder::new().decode(&data).unwrap();
        assert!(outcome.warnings.is_empty());
        let doc = outcome.document;
        assert_eq!(doc.layers.len(), 1);
        let stroke = &doc.layers[0].strokes[0];
        assert_eq!(stroke.pen, PenKind::Fineliner);
        assert_eq!(stroke.extra, Some(0));
        assert_eq!(stroke.segments.len(), 2);
        assert!((stroke.segments[1].x - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn v3_layout_has_no_extra_field() {
        let mut data = file_header("3", 1);
        data.extend_from_slice(&1u32.to_le_bytes());
        push_stroke_header(&mut data, 20, 4, 1, 1.0, 0);

        let outcome = LinesDecoder::new().decode(&data).unwrap();
        let stroke = &outcome.document.layers[0].strokes[0];
        assert_eq!(stroke.pen, PenKind::Pen);
        assert_eq!(stroke.extra, None);
    }

    #[test]
    fn rejected_stroke_count_stops_decoding() {
        let mut data = file_header("5", 3);
        data.extend_from_slice(&2_000_000u32.to_le_bytes());
        // Bytes that would otherwise decode as a second layer.
        data.extend_from_slice(&1u32.to_le_bytes());
        push_stroke_header(&mut data, 24, 2, 0, 1.0, 0);

        let outcome = LinesDecoder::new().decode(&data).unwrap();
        assert_eq!(outcome.document.layers.len(), 1);
        assert!(outcome.document.layers[0].strokes.is_empty());
        assert!(matches!(
            outcome.warnings[0],
            DecodeWarning::StrokeCountRejected {
                layer: 0,
                declared: 2_000_000
            }
        ));
    }

    #[test]
    fn truncated_stroke_header_keeps_prior_strokes() {
        let mut data = file_header("5", 1);
        data.extend_from_slice(&2u32.to_le_bytes());
        push_stroke_header(&mut data, 24, 2, 0, 1.0, 0);
        // Second stroke header cut off after 5 bytes.
        data.extend_from_slice(&[0, 0, 0, 0, 0]);

        let outcome = LinesDecoder::new().decode(&data).unwrap();
        assert_eq!(outcome.document.layers[0].strokes.len(), 1);
        assert!(matches!(
            outcome.warnings[0],
            DecodeWarning::TruncatedStrokeHeader {
                layer: 0,
                stroke: 1
            }
        ));
    }

    #[test]
    fn truncated_segments_finalize_the_stroke() {
        let mut data = file_header("5", 1);
        data.extend_from_slice(&1u32.to_le_bytes());
        push_stroke_header(&mut data, 24, 2, 0, 1.0, 3);
        push_segment(&mut data, 1.0, 2.0);
        // Second segment cut off mid-record.
        data.extend_from_slice(&3.0f32.to_le_bytes());
        data.extend_from_slice(&4.0f32.to_le_bytes());

        let outcome = LinesDecoder::new().decode(&data).unwrap();
        let stroke = &outcome.document.layers[0].strokes[0];
        assert_eq!(stroke.segments.len(), 1);
        assert!(matches!(
            outcome.warnings[0],
            DecodeWarning::TruncatedSegments {
                layer: 0,
                stroke: 0,
                read: 1,
                declared: 3
            }
        ));
    }

    #[test]
    fn unknown_pen_is_decoded_and_flagged() {
        let mut data = file_header("5", 1);
        data.extend_from_slice(&1u32.to_le_bytes());
        push_stroke_header(&mut data, 24, 42, 0, 1.0, 0);

        let outcome = LinesDecoder::new().decode(&data).unwrap();
        assert_eq!(
            outcome.document.layers[0].strokes[0].pen,
            PenKind::Unknown(42)
        );
        assert_eq!(outcome.warnings, vec![DecodeWarning::UnknownPen { raw: 42 }]);
    }

    #[test]
    fn multiple_layers_decode_in_order() {
        let mut data = file_header("5", 2);
        data.extend_from_slice(&1u32.to_le_bytes());
        push_stroke_header(&mut data, 24, 2, 0, 1.0, 0);
        data.extend_from_slice(&2u32.to_le_bytes());
        push_stroke_header(&mut data, 24, 3, 1, 2.0, 0);
        push_stroke_header(&mut data, 24, 4, 2, 3.0, 0);

        let outcome = LinesDecoder::new().decode(&data).unwrap();
        assert_eq!(outcome.document.layers.len(), 2);
        assert_eq!(outcome.document.layers[0].strokes.len(), 1);
        assert_eq!(outcome.document.layers[1].strokes.len(), 2);
    }
}
