//! Error types for `.lines` decoding and SVG rendering.

use thiserror::Error;

/// Result type for relines operations
pub type Result<T> = std::result::Result<T, LinesError>;

/// Errors that can occur while decoding a `.lines` file or writing its SVG
/// rendering.
///
/// Only two conditions are fatal: a header that does not validate
/// (`InvalidFormat`) and a failed read/write on the filesystem (`Io`).
/// `Truncated` is produced by the byte cursor when a fixed-size structure
/// runs past the end of the buffer; the decoder converts every occurrence
/// into a recovery decision and never lets it escape a decode call.
#[derive(Debug, Error)]
pub enum LinesError {
    /// Input is not a recognizable `.lines` file
    ///
    /// Raised for a missing or corrupted signature, a buffer shorter than the
    /// fixed header, or a declared layer count of zero. No output is produced.
    #[error("invalid .lines format: {0}")]
    InvalidFormat(String),

    /// End of buffer reached inside a fixed-size structure
    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        /// Bytes the read required
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },

    /// Failed to read the input file or write the SVG output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LinesError {
    /// Create an invalid format error
    #[inline]
    #[must_use = "creates an error that should be returned or handled"]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }

    /// Create a truncation error
    #[inline]
    #[must_use = "creates an error that should be returned or handled"]
    pub const fn truncated(needed: usize, remaining: usize) -> Self {
        Self::Truncated { needed, remaining }
    }

    /// Whether this error is recoverable by the decoder
    ///
    /// Truncation stops decoding at the current structure boundary but keeps
    /// everything decoded before it; format and I/O errors abort the
    /// conversion.
    #[inline]
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}
