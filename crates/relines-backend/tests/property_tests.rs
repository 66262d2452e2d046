//! Property-based robustness tests
//!
//! The decoder ingests attacker-controlled bytes (anything synced off a
//! tablet), so the core guarantees are exercised against arbitrary input:
//! no panic on any buffer, and bit-identical output for identical input.

mod common;

use common::{build_file, TestStroke};
use proptest::prelude::*;
use relines_backend::{LinesConverter, LinesDecoder};
use relines_core::RenderOptions;

proptest! {
    #[test]
    fn decode_never_panics(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let _ = LinesDecoder::new().decode(&data);
    }

    #[test]
    fn decode_of_valid_header_with_garbage_body_never_panics(
        tail in proptest::collection::vec(any::<u8>(), 0..1024)
    ) {
        let mut data = build_file("5", &[Vec::<TestStroke>::new()]);
        data.extend_from_slice(&tail);
        let _ = LinesDecoder::new().decode(&data);
    }

    #[test]
    fn conversion_is_deterministic_for_arbitrary_bytes(
        data in proptest::collection::vec(any::<u8>(), 0..2048)
    ) {
        let converter = LinesConverter::new();
        let options = RenderOptions::default();
        let first = converter.convert_bytes(&data, &options);
        let second = converter.convert_bytes(&data, &options);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.svg, b.svg),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "conversion result not deterministic"),
        }
    }

    #[test]
    fn synthetic_files_always_convert(
        pen in 0u32..12,
        width in 0.0f32..5.0,
        points in proptest::collection::vec((0.0f32..1404.0, 0.0f32..1872.0), 0..64)
    ) {
        let stroke = TestStroke::new(pen, width).with_segments(points);
        let data = build_file("5", &[vec![stroke]]);
        let result = LinesConverter::new()
            .convert_bytes(&data, &RenderOptions::default());
        prop_assert!(result.is_ok());
        let svg = result.unwrap().svg;
        prop_assert!(svg.trim_end().ends_with("</svg>"));
    }
}
