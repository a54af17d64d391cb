use std::fmt;

use thiserror::Error;

use crate::atlas::Region;

/// What a rejected bitmap was being validated as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureKind {
    Skin,
    Cape,
}

impl fmt::Display for TextureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureKind::Skin => write!(f, "skin"),
            TextureKind::Cape => write!(f, "cape"),
        }
    }
}

/// Errors surfaced by the skin pipeline.
#[derive(Debug, Error)]
pub enum SkinError {
    /// No skin bitmap at all. The one fatal build condition: the rig is left
    /// untouched and the caller decides what to display.
    #[error("no source bitmap available for this build")]
    SourceMissing,

    /// An atlas rectangle missed the source bitmap entirely. Recovered per
    /// face with a placeholder material; never aborts a build.
    #[error("region {region:?} lies outside the {width}x{height} source bitmap")]
    RegionOutOfBounds {
        region: Region,
        width: u32,
        height: u32,
    },

    /// The bitmap fails the aspect/multiple-of-64 contract. The whole
    /// texture is rejected; any previously accepted texture stays active.
    #[error("{width}x{height} is not a valid {kind} texture size")]
    DimensionMismatch {
        width: u32,
        height: u32,
        kind: TextureKind,
    },

    /// The decoded pixel format is not one we can classify for transparency.
    /// Callers degrade this to "alpha-capable" rather than failing the load.
    #[error("pixel format {0:?} cannot be classified for transparency")]
    UnsupportedColorFormat(image::ColorType),
}
