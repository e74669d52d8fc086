mod classifier;
mod roles;

pub use classifier::SurfaceClassifier;
pub use roles::{
    is_surface_refinement, is_volume_refinement, will_be_a_cell_zone, will_be_a_face_zone,
    SurfaceRoles,
};

use std::collections::HashSet;
use std::mem;

use crate::geometry::SurfaceId;
use crate::model::{CellZone, FaceZone, Patch};

/// Suffix appended to the second patch of a patch pair.
pub const SLAVE_SUFFIX: &str = "_slave";

/// Parameters controlling classification.
#[derive(Debug, Clone)]
pub struct ClassifyParams {
    /// Suffix of the slave patch in a patch pair.
    pub slave_suffix: String,
    /// Maximum number of solid-to-parent steps followed before giving up.
    pub max_parent_depth: usize,
    /// Whether the background block contributes patches.
    pub include_block: bool,
}

impl Default for ClassifyParams {
    fn default() -> Self {
        Self {
            slave_suffix: SLAVE_SUFFIX.to_owned(),
            max_parent_depth: 32,
            include_block: true,
        }
    }
}

/// The surface an entity was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceSource {
    /// A surface of the geometry store.
    Surface(SurfaceId),
    /// The background block.
    Block,
}

/// Entities produced by one classification pass.
///
/// Each entity list has a parallel source list of the same length.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    patches: Vec<Patch>,
    cell_zones: Vec<CellZone>,
    face_zones: Vec<FaceZone>,
    patch_sources: Vec<SurfaceSource>,
    cell_zone_sources: Vec<SurfaceSource>,
    face_zone_sources: Vec<SurfaceSource>,
}

impl Classification {
    #[must_use]
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    #[must_use]
    pub fn cell_zones(&self) -> &[CellZone] {
        &self.cell_zones
    }

    #[must_use]
    pub fn face_zones(&self) -> &[FaceZone] {
        &self.face_zones
    }

    /// Source of each patch; a surface appears once per patch it produced.
    #[must_use]
    pub fn patch_sources(&self) -> &[SurfaceSource] {
        &self.patch_sources
    }

    /// Source of each cell zone.
    #[must_use]
    pub fn cell_zone_sources(&self) -> &[SurfaceSource] {
        &self.cell_zone_sources
    }

    /// Source of each face zone.
    #[must_use]
    pub fn face_zone_sources(&self) -> &[SurfaceSource] {
        &self.face_zone_sources
    }

    /// Returns the patch names in generation order.
    #[must_use]
    pub fn patch_names(&self) -> Vec<String> {
        self.patches.iter().map(|patch| patch.name.clone()).collect()
    }

    /// Consumes the classification, returning patches, cell zones and face zones.
    #[must_use]
    pub fn into_entities(self) -> (Vec<Patch>, Vec<CellZone>, Vec<FaceZone>) {
        (self.patches, self.cell_zones, self.face_zones)
    }

    /// Drops patches a surface produced more than once under the same name,
    /// keeping the first, and returns how many were dropped.
    ///
    /// A patch-worthy surface that is also patch-paired names its master
    /// patch twice. The same name coming from two different surfaces is kept,
    /// so such collisions still reach the model.
    pub fn merge_repeated_patches(&mut self) -> usize {
        let before = self.patches.len();
        let mut seen: HashSet<(String, SurfaceSource)> = HashSet::new();
        (self.patches, self.patch_sources) = mem::take(&mut self.patches)
            .into_iter()
            .zip(mem::take(&mut self.patch_sources))
            .filter(|(patch, source)| seen.insert((patch.name.clone(), *source)))
            .unzip();
        before - self.patches.len()
    }

    fn push_patch(&mut self, patch: Patch, source: SurfaceSource) {
        self.patches.push(patch);
        self.patch_sources.push(source);
    }

    fn push_cell_zone(&mut self, zone: CellZone, source: SurfaceSource) {
        self.cell_zones.push(zone);
        self.cell_zone_sources.push(source);
    }

    fn push_face_zone(&mut self, zone: FaceZone, source: SurfaceSource) {
        self.face_zones.push(zone);
        self.face_zone_sources.push(source);
    }
}
