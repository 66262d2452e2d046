//! Format versions of the `.lines` binary layout
//!
//! The tablet firmware has shipped several revisions of the per-page notebook
//! format. The on-disk difference that matters to this decoder is the size of
//! the stroke record: later firmware appended one unused trailing field. The
//! version digit embedded in the file signature selects the record layout
//! exactly once per document; getting the record width wrong desynchronizes
//! every subsequent read.

use serde::{Deserialize, Serialize};

/// Format version declared in the `.lines` file signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatVersion {
    /// Version 3 (20-byte stroke records)
    V3,
    /// Version 4 (20-byte stroke records)
    V4,
    /// Version 5 (24-byte stroke records)
    V5,
    /// Version 6 (24-byte stroke records)
    V6,
}

/// Binary layout of one stroke record, selected from the format version
///
/// All fields are little-endian. The V3/V4 record is
/// `(pen: u32, color: u32, reserved: u32, width: f32, segment_count: u32)`;
/// V5/V6 append one trailing `u32` that this decoder preserves but does not
/// interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokeLayout {
    /// Total record size in bytes (20 or 24)
    pub record_len: usize,
    /// Whether the record carries the trailing `u32`
    pub has_extra_field: bool,
}

/// 20-byte stroke record used by V3 and V4 files
const LAYOUT_V3_V4: StrokeLayout = StrokeLayout {
    record_len: 20,
    has_extra_field: false,
};

/// 24-byte stroke record used by V5, V6, and unrecognized versions
const LAYOUT_V5_V6: StrokeLayout = StrokeLayout {
    record_len: 24,
    has_extra_field: true,
};

impl FormatVersion {
    /// Map a signature version digit string to a known version
    ///
    /// Returns `None` for digits outside `{3, 4, 5, 6}`; the caller decides
    /// the fallback policy (the header parser accepts such files and selects
    /// the [`FormatVersion::V5`] layout with a logged warning).
    #[must_use]
    pub fn from_digits(digits: &str) -> Option<Self> {
        match digits {
            "3" => Some(Self::V3),
            "4" => Some(Self::V4),
            "5" => Some(Self::V5),
            "6" => Some(Self::V6),
            _ => None,
        }
    }

    /// Stroke record layout for this version
    ///
    /// Selected once per document from the validated header, never re-derived
    /// per stroke.
    #[inline]
    #[must_use]
    pub const fn stroke_layout(self) -> StrokeLayout {
        match self {
            Self::V3 | Self::V4 => LAYOUT_V3_V4,
            Self::V5 | Self::V6 => LAYOUT_V5_V6,
        }
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digit = match self {
            Self::V3 => '3',
            Self::V4 => '4',
            Self::V5 => '5',
            Self::V6 => '6',
        };
        write!(f, "v{digit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digits_map_to_versions() {
        assert_eq!(FormatVersion::from_digits("3"), Some(FormatVersion::V3));
        assert_eq!(FormatVersion::from_digits("4"), Some(FormatVersion::V4));
        assert_eq!(FormatVersion::from_digits("5"), Some(FormatVersion::V5));
        assert_eq!(FormatVersion::from_digits("6"), Some(FormatVersion::V6));
    }

    #[test]
    fn unknown_digits_are_rejected() {
        assert_eq!(FormatVersion::from_digits("9"), None);
        assert_eq!(FormatVersion::from_digits("42"), None);
        assert_eq!(FormatVersion::from_digits(""), None);
    }

    #[test]
    fn early_versions_use_short_records() {
        assert_eq!(FormatVersion::V3.stroke_layout().record_len, 20);
        assert_eq!(FormatVersion::V4.stroke_layout().record_len, 20);
        assert!(!FormatVersion::V3.stroke_layout().has_extra_field);
    }

    #[test]
    fn later_versions_use_long_records() {
        assert_eq!(FormatVersion::V5.stroke_layout().record_len, 24);
        assert_eq!(FormatVersion::V6.stroke_layout().record_len, 24);
        assert!(FormatVersion::V6.stroke_layout().has_extra_field);
    }
}
