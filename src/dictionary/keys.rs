use std::fmt;
use std::str::FromStr;

use crate::error::DictionaryError;

use super::Dictionary;

/// Zone dictionary: names the cell zone a surface encloses.
pub const CELL_ZONE_KEY: &str = "cellZone";
/// Zone dictionary: switch that turns the cell zone on.
pub const IS_CELL_ZONE_KEY: &str = "isCellZone";
/// Zone dictionary: names the face zone a surface defines.
pub const FACE_ZONE_KEY: &str = "faceZone";
/// Zone dictionary: how the zone faces are treated.
pub const FACE_TYPE_KEY: &str = "faceType";

/// Face type value: plain internal faces.
pub const NONE_KEY: &str = "none";
/// Face type value: faces become a two-sided boundary.
pub const BOUNDARY_KEY: &str = "boundary";
/// Face type value: faces become a zero-thickness baffle.
pub const BAFFLE_KEY: &str = "baffle";

/// Surface dictionary: surface refinement level.
pub const LEVEL_KEY: &str = "level";
/// Volume dictionary: volume refinement levels.
pub const LEVELS_KEY: &str = "levels";
/// Volume dictionary: volume refinement mode.
pub const MODE_KEY: &str = "mode";

/// Refinement mode value: refine cells inside the surface.
pub const INSIDE_KEY: &str = "inside";
/// Refinement mode value: refine cells outside the surface.
pub const OUTSIDE_KEY: &str = "outside";
/// Refinement mode value: refine cells within a distance of the surface.
pub const DISTANCE_KEY: &str = "distance";

/// How the faces of a zone surface are treated by the mesher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceType {
    /// Internal faces, no patches.
    None,
    /// Two-sided boundary, one patch pair per region.
    Boundary,
    /// Baffle, a single patch pair.
    Baffle,
}

impl FaceType {
    /// Returns the dictionary keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => NONE_KEY,
            Self::Boundary => BOUNDARY_KEY,
            Self::Baffle => BAFFLE_KEY,
        }
    }

    /// Returns `true` for the face types that produce patch pairs.
    #[must_use]
    pub fn creates_patches(self) -> bool {
        matches!(self, Self::Boundary | Self::Baffle)
    }
}

impl FromStr for FaceType {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            NONE_KEY => Ok(Self::None),
            BOUNDARY_KEY => Ok(Self::Boundary),
            BAFFLE_KEY => Ok(Self::Baffle),
            other => Err(DictionaryError::InvalidValue {
                key: FACE_TYPE_KEY,
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for FaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Volume refinement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefinementMode {
    Inside,
    Outside,
    Distance,
}

impl RefinementMode {
    /// Returns the dictionary keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inside => INSIDE_KEY,
            Self::Outside => OUTSIDE_KEY,
            Self::Distance => DISTANCE_KEY,
        }
    }
}

impl FromStr for RefinementMode {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            INSIDE_KEY => Ok(Self::Inside),
            OUTSIDE_KEY => Ok(Self::Outside),
            DISTANCE_KEY => Ok(Self::Distance),
            other => Err(DictionaryError::InvalidValue {
                key: MODE_KEY,
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for RefinementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads the face type of a zone dictionary.
///
/// Returns `None` when the key is absent or holds an unknown word.
#[must_use]
pub fn face_type(dict: &Dictionary) -> Option<FaceType> {
    dict.lookup(FACE_TYPE_KEY)?.parse().ok()
}

/// Reads the refinement mode of a volume dictionary.
///
/// Returns `None` when the key is absent or holds an unknown word.
#[must_use]
pub fn refinement_mode(dict: &Dictionary) -> Option<RefinementMode> {
    dict.lookup(MODE_KEY)?.parse().ok()
}
