//! `.lines` file header validation
//!
//! A `.lines` page starts with a fixed 45-byte ASCII signature of the form
//! `"reMarkable .lines file, version=<digits>"` padded with spaces,
//! immediately followed by a little-endian `u32` layer count. Everything the
//! decoder needs from the header — the stroke-record layout version and the
//! (possibly clamped) layer count — is extracted here, exactly once per
//! document.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use relines_core::{DecodeWarning, FormatVersion, LinesError, Result};

/// Size of the fixed ASCII signature in bytes
pub const SIGNATURE_LEN: usize = 45;

/// Size of the full header: signature plus the `u32` layer count
pub const HEADER_LEN: usize = SIGNATURE_LEN + 4;

/// Declared layer counts above this are assumed corrupted
const MAX_DECLARED_LAYERS: u32 = 100;

/// Layer count substituted when the declared count fails the sanity check
const CLAMPED_LAYERS: u32 = 10;

/// Strict signature pattern: the version digits followed only by padding
static SIGNATURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^reMarkable \.lines file, version=(\d+) *$").expect("Invalid signature regex")
});

/// Fallback pattern tolerating extra text around `version=`
static SIGNATURE_FALLBACK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"version=(\d+)").expect("Invalid fallback signature regex"));

/// Validated header contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    /// Version the stroke layout will be selected from
    pub version: FormatVersion,
    /// Layer count to decode, after sanity clamping
    pub layer_count: u32,
    /// Recovery decisions taken while validating
    pub warnings: Vec<DecodeWarning>,
}

/// Validate the signature and layer count of a `.lines` buffer
///
/// Unrecognized version digits are accepted with the V5 layout substituted;
/// an implausible layer count is clamped rather than rejected. Both paths are
/// logged and recorded as warnings.
///
/// # Errors
///
/// Returns [`LinesError::InvalidFormat`] if the buffer is shorter than
/// [`HEADER_LEN`], the signature matches neither pattern, or the declared
/// layer count is zero.
pub fn parse_header(data: &[u8]) -> Result<ParsedHeader> {
    if data.len() < HEADER_LEN {
        return Err(LinesError::invalid_format(format!(
            "buffer holds {} bytes, header needs {HEADER_LEN}",
            data.len()
        )));
    }

    let signature = String::from_utf8_lossy(&data[..SIGNATURE_LEN]);
    let digits = SIGNATURE
        .captures(&signature)
        .or_else(|| SIGNATURE_FALLBACK.captures(&signature))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_owned())
        .ok_or_else(|| {
            LinesError::invalid_format(format!("unrecognized signature: {signature:?}"))
        })?;

    let mut warnings = Vec::new();
    let version = FormatVersion::from_digits(&digits).unwrap_or_else(|| {
        warn!("unrecognized version '{digits}', falling back to v5 stroke layout");
        warnings.push(DecodeWarning::VersionFallback {
            digits: digits.clone(),
        });
        FormatVersion::V5
    });

    let declared = u32::from_le_bytes([
        data[SIGNATURE_LEN],
        data[SIGNATURE_LEN + 1],
        data[SIGNATURE_LEN + 2],
        data[SIGNATURE_LEN + 3],
    ]);
    if declared == 0 {
        return Err(LinesError::invalid_format("layer count is zero"));
    }
    let layer_count = if declared > MAX_DECLARED_LAYERS {
        warn!("layer count {declared} exceeds sanity limit, clamping to {CLAMPED_LAYERS}");
        warnings.push(DecodeWarning::LayerCountClamped {
            declared,
            clamped: CLAMPED_LAYERS,
        });
        CLAMPED_LAYERS
    } else {
        declared
    };

    Ok(ParsedHeader {
        version,
        layer_count,
        warnings,
    })
}
