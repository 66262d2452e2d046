//! Per-pen rendering style policy
//!
//! Maps a pen kind and its raw header parameters to the color, stroke width,
//! and opacity used by the SVG serializer. Everything here is a pure function
//! of its arguments: the color palette is constructed per call from the
//! `colored_annotations` flag, so conversions can run concurrently with no
//! shared state.

use crate::pen::PenKind;
use log::warn;

/// Empirical device-to-A4 scale divisor applied to every computed width
pub const WIDTH_SCALE: f32 = 2.3;

/// Resolved rendering style for one polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// SVG color name
    pub color: &'static str,
    /// Stroke width in output pixels (already divided by [`WIDTH_SCALE`])
    pub width: f32,
    /// Stroke opacity in `[0, 1]`
    pub opacity: f32,
}

/// Color palette indexed by the stroke header's color field
///
/// The default palette renders ink in greyscale; the colored-annotations
/// palette maps the first two indices to blue and red so annotation layers
/// stand out against printed content.
#[must_use]
pub const fn palette(colored_annotations: bool) -> [&'static str; 4] {
    if colored_annotations {
        ["blue", "red", "white", "yellow"]
    } else {
        ["black", "grey", "white", "yellow"]
    }
}

/// Resolve a color index against the per-call palette
///
/// Out-of-range indices resolve to black and are logged.
#[must_use]
pub fn resolve_color(index: u32, colored_annotations: bool) -> &'static str {
    let table = palette(colored_annotations);
    match table.get(index as usize).copied() {
        Some(color) => color,
        None => {
            warn!("unknown color index {index}, rendering black");
            "black"
        }
    }
}

/// Resolve the base style for a stroke
///
/// Applies the per-pen width/opacity policy and color overrides:
///
/// - Highlighter forces color index 3 (yellow) when `colored_annotations`
///   is set.
/// - Eraser always draws in color index 2 (white).
/// - Unrecognized pens keep the raw width and render fully opaque (logged),
///   never invisible.
///
/// Dynamic pens (brush, tilt pencil) get their base width here and are
/// re-styled per 8-segment run by the serializer via [`dynamic_style`].
#[must_use]
pub fn resolve_style(
    pen: PenKind,
    raw_width: f32,
    color_index: u32,
    colored_annotations: bool,
) -> StrokeStyle {
    let w = raw_width;
    let (width, opacity, override_index) = match pen {
        PenKind::Brush | PenKind::TiltPencil => (w, 1.0, None),
        PenKind::Fineliner | PenKind::Pen => (32.0 * w * w - 116.0 * w + 107.0, 1.0, None),
        PenKind::Marker => (64.0 * w - 112.0, 0.9, None),
        PenKind::Highlighter => (30.0, 0.2, colored_annotations.then_some(3)),
        PenKind::Eraser => (1280.0 * w * w - 4800.0 * w + 4510.0, 1.0, Some(2)),
        PenKind::PencilSharp => (16.0 * w - 27.0, 0.9, None),
        PenKind::EraseArea => (w, 0.0, None),
        PenKind::Unknown(id) => {
            warn!("unknown pen id {id}, rendering with default style");
            (w, 1.0, None)
        }
    };
    let index = override_index.unwrap_or(color_index);
    StrokeStyle {
        color: resolve_color(index, colored_annotations),
        width: width / WIDTH_SCALE,
        opacity,
    }
}

/// Recompute width/opacity for one 8-segment run of a dynamic pen
///
/// Returns `None` for pens that keep a single polyline per stroke.
#[must_use]
pub fn dynamic_style(
    pen: PenKind,
    base_width: f32,
    pressure: f32,
    tilt: f32,
) -> Option<(f32, f32)> {
    match pen {
        PenKind::Brush => {
            let width = 5.0 * tilt * (6.0 * base_width - 10.0) * (1.0 + 2.0 * pressure.powi(3));
            Some((width / WIDTH_SCALE, 1.0))
        }
        PenKind::TiltPencil => {
            let width = (10.0 * tilt - 2.0) * (8.0 * base_width - 14.0);
            let opacity = (pressure - 0.2).powi(2);
            Some((width / WIDTH_SCALE, opacity))
        }
        _ => None,
    }
}
