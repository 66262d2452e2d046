//! SVG serialization for decoded `.lines` documents.
//!
//! Walks the layer/stroke/segment tree and emits one `<polyline>` per stroke
//! (or a run of polylines for the pressure/tilt-sensitive pens), mapped onto
//! the requested canvas. The root `<svg>` element is opened and closed
//! unconditionally, so the output is well-formed markup even when decoding
//! stopped early inside the document.
//!
//! # Examples
//!
//! ```
//! use relines_core::{FormatVersion, LinesDocument, SvgSerializer};
//!
//! let doc = LinesDocument {
//!     version: FormatVersion::V5,
//!     layers: Vec::new(),
//! };
//! let svg = SvgSerializer::new().serialize(&doc);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.trim_end().ends_with("</svg>"));
//! ```

use crate::document::{LinesDocument, Stroke};
use crate::geometry::{CoordinateMapper, NATIVE_HEIGHT, NATIVE_WIDTH};
use crate::style::{dynamic_style, resolve_style, StrokeStyle};
use std::fmt::Write;

/// Segment interval at which dynamic pens are re-styled
const DYNAMIC_RUN_LEN: usize = 8;

/// Rendering options for one conversion
///
/// Immutable once supplied; the serializer never mutates it mid-run. The
/// color palette is derived from `colored_annotations` per call, so there is
/// no process-wide style state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Output canvas width in pixels
    pub canvas_width: f32,
    /// Output canvas height in pixels
    pub canvas_height: f32,
    /// Render color indices 0/1 as blue/red instead of black/grey
    pub colored_annotations: bool,
}

impl Default for RenderOptions {
    #[inline]
    fn default() -> Self {
        Self {
            canvas_width: NATIVE_WIDTH,
            canvas_height: NATIVE_HEIGHT,
            colored_annotations: false,
        }
    }
}

impl RenderOptions {
    /// Set the output canvas size
    #[inline]
    #[must_use = "returns options with the canvas size configured"]
    pub const fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Enable or disable the colored-annotations palette
    #[inline]
    #[must_use = "returns options with the palette configured"]
    pub const fn with_colored_annotations(mut self, enable: bool) -> Self {
        self.colored_annotations = enable;
        self
    }
}

/// Serializer from [`LinesDocument`] to SVG markup
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvgSerializer {
    options: RenderOptions,
}

impl SvgSerializer {
    /// Create a serializer with default options (native canvas, greyscale)
    #[inline]
    #[must_use = "creates a serializer that should be used"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a serializer with custom options
    #[inline]
    #[must_use = "creates a serializer that should be used"]
    pub const fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the document to an SVG string
    ///
    /// Every stroke in the document is emitted, including empty and truncated
    /// ones, and the closing tags are always written.
    #[must_use = "returns SVG markup that should be written somewhere"]
    pub fn serialize(&self, document: &LinesDocument) -> String {
        let width = self.options.canvas_width;
        let height = self.options.canvas_height;
        let mapper = CoordinateMapper::new(width, height);

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
        );
        let _ = writeln!(svg, r#"<g id="p1" style="display:inline">"#);

        for layer in &document.layers {
            for stroke in &layer.strokes {
                self.write_stroke(&mut svg, stroke, &mapper);
            }
        }

        // Invisible full-canvas rect kept for downstream page-navigation
        // hit-testing.
        let _ = writeln!(
            svg,
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill-opacity="0" />"#
        );
        let _ = writeln!(svg, "</g>");
        let _ = writeln!(svg, "</svg>");
        svg
    }

    fn write_stroke(&self, svg: &mut String, stroke: &Stroke, mapper: &CoordinateMapper) {
        let base = resolve_style(
            stroke.pen,
            stroke.raw_width,
            stroke.color_index,
            self.options.colored_annotations,
        );
        if stroke.pen.is_dynamic() && !stroke.segments.is_empty() {
            Self::write_dynamic_stroke(svg, stroke, base, mapper);
        } else {
            let mut points = String::new();
            for segment in &stroke.segments {
                let (x, y) = mapper.map(segment.x, segment.y);
                let _ = write!(points, "{x:.3},{y:.3} ");
            }
            emit_polyline(svg, base.color, base.width, base.opacity, &points);
        }
    }

    /// Emit a dynamic-width stroke as a run of polylines.
    ///
    /// At every [`DYNAMIC_RUN_LEN`]th segment the current polyline is closed
    /// and a new one opened with freshly computed width/opacity; the point
    /// preceding the split is repeated so the rendered path stays continuous.
    fn write_dynamic_stroke(
        svg: &mut String,
        stroke: &Stroke,
        base: StrokeStyle,
        mapper: &CoordinateMapper,
    ) {
        let mut points = String::new();
        let mut run_width = base.width;
        let mut run_opacity = base.opacity;
        let mut prev: Option<(f32, f32)> = None;

        for (index, segment) in stroke.segments.iter().enumerate() {
            if index % DYNAMIC_RUN_LEN == 0 {
                if index > 0 {
                    emit_polyline(svg, base.color, run_width, run_opacity, &points);
                    points.clear();
                    if let Some((px, py)) = prev {
                        let _ = write!(points, "{px:.3},{py:.3} ");
                    }
                }
                let (width, opacity) =
                    dynamic_style(stroke.pen, stroke.raw_width, segment.pressure, segment.tilt)
                        .unwrap_or((base.width, base.opacity));
                run_width = width;
                run_opacity = opacity;
            }
            let (x, y) = mapper.map(segment.x, segment.y);
            let _ = write!(points, "{x:.3},{y:.3} ");
            prev = Some((x, y));
        }

        emit_polyline(svg, base.color, run_width, run_opacity, &points);
    }
}

fn emit_polyline(svg: &mut String, color: &str, width: f32, opacity: f32, points: &str) {
    let _ = writeln!(
        svg,
        r#"<polyline fill="none" stroke="{color}" stroke-width="{width:.3}" opacity="{opacity}" points="{points}" />"#
    );
}
