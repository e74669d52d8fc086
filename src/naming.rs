use crate::geometry::{Region, Surface};

/// The unit a patch is generated from.
#[derive(Debug, Clone, Copy)]
pub enum PatchSource<'a> {
    /// A whole surface.
    Surface(&'a Surface),
    /// One region of a surface.
    Region {
        surface: &'a Surface,
        region: &'a Region,
    },
}

impl<'a> PatchSource<'a> {
    /// Returns the surface that owns this source.
    #[must_use]
    pub fn surface(&self) -> &'a Surface {
        match self {
            Self::Surface(surface) | Self::Region { surface, .. } => surface,
        }
    }

    /// Returns the name of the surface or region.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            Self::Surface(surface) => surface.name(),
            Self::Region { region, .. } => region.name(),
        }
    }
}

/// Derives mesh entity names from surfaces.
pub trait NamingConvention {
    /// Returns the patch name for a surface or region.
    fn patch_name(&self, source: &PatchSource<'_>) -> String;

    /// Returns the cell zone name for a surface.
    fn cell_zone_name(&self, surface: &Surface) -> String;

    /// Returns the face zone name for a surface.
    fn face_zone_name(&self, surface: &Surface) -> String;
}

/// Names entities after their surface; regions become `<surface>_<region>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNamingConvention;

impl NamingConvention for DefaultNamingConvention {
    fn patch_name(&self, source: &PatchSource<'_>) -> String {
        match source {
            PatchSource::Surface(surface) => surface.name().to_owned(),
            PatchSource::Region { surface, region } => {
                format!("{}_{}", surface.name(), region.name())
            }
        }
    }

    fn cell_zone_name(&self, surface: &Surface) -> String {
        surface.name().to_owned()
    }

    fn face_zone_name(&self, surface: &Surface) -> String {
        surface.name().to_owned()
    }
}
