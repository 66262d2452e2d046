//! Pen tools recorded in stroke headers

use serde::{Deserialize, Serialize};

/// The tool used to draw a stroke
///
/// Each pen kind carries its own width/opacity policy (see
/// [`crate::style`]). Identifiers outside the known range decode to
/// [`PenKind::Unknown`] and render with the opaque default style rather than
/// failing the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenKind {
    /// Pressure- and tilt-sensitive paintbrush
    Brush,
    /// Tilt-sensitive pencil
    TiltPencil,
    /// Fixed-width fineliner
    Fineliner,
    /// Broad marker
    Marker,
    /// Ballpoint pen
    Pen,
    /// Semi-transparent highlighter
    Highlighter,
    /// Eraser (draws in the background color)
    Eraser,
    /// Sharp pencil
    PencilSharp,
    /// Erase-area tool (invisible, kept for structural fidelity)
    EraseArea,
    /// Unrecognized pen identifier
    Unknown(u32),
}

impl PenKind {
    /// Decode the raw pen identifier from a stroke header
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Brush,
            1 => Self::TiltPencil,
            2 => Self::Fineliner,
            3 => Self::Marker,
            4 => Self::Pen,
            5 => Self::Highlighter,
            6 => Self::Eraser,
            7 => Self::PencilSharp,
            8 => Self::EraseArea,
            other => Self::Unknown(other),
        }
    }

    /// Whether this pen varies width/opacity along the stroke
    ///
    /// Dynamic pens are re-styled per 8-segment run from pressure and tilt;
    /// all other pens keep one polyline per stroke.
    #[inline]
    #[must_use]
    pub const fn is_dynamic(self) -> bool {
        matches!(self, Self::Brush | Self::TiltPencil)
    }
}

impl std::fmt::Display for PenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Brush => write!(f, "brush"),
            Self::TiltPencil => write!(f, "tilt-pencil"),
            Self::Fineliner => write!(f, "fineliner"),
            Self::Marker => write!(f, "marker"),
            Self::Pen => write!(f, "pen"),
            Self::Highlighter => write!(f, "highlighter"),
            Self::Eraser => write!(f, "eraser"),
            Self::PencilSharp => write!(f, "pencil-sharp"),
            Self::EraseArea => write!(f, "erase-area"),
            Self::Unknown(id) => write!(f, "unknown({id})"),
        }
    }
}
