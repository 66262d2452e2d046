//! Shared builders for synthetic `.lines` buffers

#![allow(dead_code)]

use relines_backend::SIGNATURE_LEN;

/// One stroke to encode into a test buffer
#[derive(Debug, Clone)]
pub struct TestStroke {
    pub pen: u32,
    pub color: u32,
    pub width: f32,
    /// `(x, y)` points; pressure/tilt are fixed test values
    pub segments: Vec<(f32, f32)>,
}

impl TestStroke {
    pub fn new(pen: u32, width: f32) -> Self {
        Self {
            pen,
            color: 0,
            width,
            segments: Vec::new(),
        }
    }

    pub fn with_segments(mut self, segments: Vec<(f32, f32)>) -> Self {
        self.segments = segments;
        self
    }
}

/// Encode the 45-byte signature for the given version digits
pub fn signature(digits: &str) -> Vec<u8> {
    let mut data = format!("reMarkable .lines file, version={digits}").into_bytes();
    data.resize(SIGNATURE_LEN, b' ');
    data
}

/// Build a complete `.lines` buffer declaring exactly `layers.len()` layers
pub fn build_file(digits: &str, layers: &[Vec<TestStroke>]) -> Vec<u8> {
    build_file_with_layer_count(digits, layers.len() as u32, layers)
}

/// Build a `.lines` buffer with an explicit declared layer count
///
/// The declared count may disagree with the encoded layers, which is exactly
/// what the corruption tests need.
pub fn build_file_with_layer_count(
    digits: &str,
    declared: u32,
    layers: &[Vec<TestStroke>],
) -> Vec<u8> {
    // V3/V4 use 20-byte stroke records; everything else 24 bytes.
    let long_record = !matches!(digits, "3" | "4");

    let mut data = signature(digits);
    data.extend_from_slice(&declared.to_le_bytes());
    for strokes in layers {
        data.extend_from_slice(&(strokes.len() as u32).to_le_bytes());
        for stroke in strokes {
            data.extend_from_slice(&stroke.pen.to_le_bytes());
            data.extend_from_slice(&stroke.color.to_le_bytes());
            data.extend_from_slice(&0u32.to_le_bytes());
            data.extend_from_slice(&stroke.width.to_le_bytes());
            data.extend_from_slice(&(stroke.segments.len() as u32).to_le_bytes());
            if long_record {
                data.extend_from_slice(&0u32.to_le_bytes());
            }
            for &(x, y) in &stroke.segments {
                for value in [x, y, 0.6f32, 0.2, 0.0, 0.0] {
                    data.extend_from_slice(&value.to_le_bytes());
                }
            }
        }
    }
    data
}
