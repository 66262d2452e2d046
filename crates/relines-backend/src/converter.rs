//! Conversion entry point: `.lines` bytes in, SVG out
//!
//! Runs header validation, stroke decoding, and SVG serialization in
//! sequence. Recoverable decode conditions never fail a conversion — the
//! output then contains whatever was decoded before the damage. Nothing is
//! written to the output path unless the conversion succeeded.

use crate::decoder::LinesDecoder;
use log::debug;
use relines_core::{ConversionResult, RenderOptions, Result, SvgSerializer};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Converter from `.lines` input to SVG output
///
/// Stateless: one instance may serve any number of conversions, concurrently
/// from multiple threads.
///
/// # Examples
///
/// ```no_run
/// use relines_backend::LinesConverter;
/// use relines_core::RenderOptions;
///
/// let converter = LinesConverter::new();
/// let result = converter.convert_file("page.lines", &RenderOptions::default())?;
/// result.save("page.svg")?;
/// # Ok::<(), relines_core::LinesError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LinesConverter;

impl LinesConverter {
    /// Create a new converter instance
    #[inline]
    #[must_use = "creates a converter that should be used"]
    pub const fn new() -> Self {
        Self
    }

    /// Convert an in-memory `.lines` buffer to SVG
    ///
    /// # Errors
    ///
    /// Returns [`relines_core::LinesError::InvalidFormat`] if the header does
    /// not validate. Truncation and corruption past the header degrade to a
    /// partial rendering instead of failing.
    pub fn convert_bytes(&self, data: &[u8], options: &RenderOptions) -> Result<ConversionResult> {
        let start = Instant::now();
        let outcome = LinesDecoder::new().decode(data)?;
        let svg = SvgSerializer::with_options(*options).serialize(&outcome.document);
        let latency = start.elapsed();
        debug!(
            "decoded {} layers, {} strokes, {} segments in {latency:?}",
            outcome.document.layers.len(),
            outcome.document.stroke_count(),
            outcome.document.segment_count()
        );
        Ok(ConversionResult {
            document: outcome.document,
            svg,
            warnings: outcome.warnings,
            latency,
        })
    }

    /// Convert a `.lines` file to SVG
    ///
    /// # Errors
    ///
    /// Returns [`relines_core::LinesError::Io`] if the file cannot be read,
    /// or [`relines_core::LinesError::InvalidFormat`] if its header does not
    /// validate.
    pub fn convert_file<P: AsRef<Path>>(
        &self,
        input: P,
        options: &RenderOptions,
    ) -> Result<ConversionResult> {
        let data = fs::read(input)?;
        self.convert_bytes(&data, options)
    }

    /// Convert a `.lines` file and write the SVG to `output`
    ///
    /// The output file is only created once the conversion has succeeded; a
    /// rejected header leaves the filesystem untouched.
    ///
    /// # Errors
    ///
    /// Propagates conversion errors, plus [`relines_core::LinesError::Io`]
    /// if writing the SVG fails.
    pub fn convert_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
        options: &RenderOptions,
    ) -> Result<()> {
        let result = self.convert_file(input, options)?;
        result.save(output)
    }
}
