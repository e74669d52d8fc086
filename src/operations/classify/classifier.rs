use std::collections::HashMap;

use tracing::{debug, warn};

use crate::dictionary::FaceType;
use crate::geometry::{Geometry, Surface, SurfaceId};
use crate::model::{CellZone, FaceZone, Patch};
use crate::naming::{DefaultNamingConvention, NamingConvention, PatchSource};

use super::{Classification, ClassifyParams, SurfaceRoles, SurfaceSource};

/// Decides which patches, cell zones and face zones a geometry produces.
///
/// Each surface, in insertion order, goes through four steps:
/// 1. patches: the surface (singleton or undivided) or each region, if
///    the surface is patch-worthy,
/// 2. a cell zone,
/// 3. a face zone,
/// 4. patch pairs (`<name>` and `<name>_slave`) for `boundary` and `baffle`
///    face types.
///
/// The background block only goes through step 1.
///
/// A surface is patch-worthy if it is a plane, if it is not a solid and
/// only carries surface refinement, or if it is a solid whose parent is
/// patch-worthy.
pub struct SurfaceClassifier<'g, N = DefaultNamingConvention> {
    geometry: &'g Geometry,
    naming: N,
    params: ClassifyParams,
}

impl<'g> SurfaceClassifier<'g> {
    /// Creates a classifier with the default naming convention and parameters.
    #[must_use]
    pub fn new(geometry: &'g Geometry) -> Self {
        Self {
            geometry,
            naming: DefaultNamingConvention,
            params: ClassifyParams::default(),
        }
    }
}

impl<'g, N: NamingConvention> SurfaceClassifier<'g, N> {
    /// Replaces the naming convention.
    #[must_use]
    pub fn with_naming<M: NamingConvention>(self, naming: M) -> SurfaceClassifier<'g, M> {
        SurfaceClassifier {
            geometry: self.geometry,
            naming,
            params: self.params,
        }
    }

    /// Replaces the classification parameters.
    #[must_use]
    pub fn with_params(mut self, params: ClassifyParams) -> Self {
        self.params = params;
        self
    }

    /// Runs one classification pass over the geometry.
    ///
    /// Every call starts from an empty [`Classification`].
    #[must_use]
    pub fn classify(&self) -> Classification {
        let mut pass = Pass {
            classifier: self,
            ascents: HashMap::new(),
            out: Classification::default(),
        };

        for (id, surface) in self.geometry.surfaces() {
            pass.classify_surface(surface, SurfaceSource::Surface(id));
        }

        if self.params.include_block {
            if let Some(block) = self.geometry.block() {
                let roles = SurfaceRoles::of(block);
                pass.surface_to_patch(block, &roles, SurfaceSource::Block);
            }
        }

        pass.out
    }

    /// Returns the patch name of a surface.
    #[must_use]
    pub fn patch_name(&self, surface: &Surface) -> String {
        self.naming.patch_name(&PatchSource::Surface(surface))
    }

    /// Returns the cell zone name of a surface.
    #[must_use]
    pub fn cell_zone_name(&self, surface: &Surface) -> String {
        self.naming.cell_zone_name(surface)
    }

    /// Returns the face zone name of a surface.
    #[must_use]
    pub fn face_zone_name(&self, surface: &Surface) -> String {
        self.naming.face_zone_name(surface)
    }
}

/// State private to one classification pass.
struct Pass<'c, 'g, N> {
    classifier: &'c SurfaceClassifier<'g, N>,
    /// Solid ancestors already walked: root patch-worthiness and steps to the root.
    ascents: HashMap<SurfaceId, (bool, usize)>,
    out: Classification,
}

impl<N: NamingConvention> Pass<'_, '_, N> {
    fn classify_surface(&mut self, surface: &Surface, source: SurfaceSource) {
        debug!(
            "Surface {} ({}): {:?} {:?} {:?}",
            surface.name(),
            surface.kind().keyword(),
            surface.surface_dictionary(),
            surface.volume_dictionary(),
            surface.zone_dictionary()
        );
        let roles = SurfaceRoles::of(surface);

        self.surface_to_patch(surface, &roles, source);
        self.surface_to_cell_zone(surface, &roles, source);
        self.surface_to_face_zone(surface, &roles, source);

        match roles.patch_pair_face_type() {
            Some(face_type) => self.zone_to_patches(surface, face_type, source),
            None => debug!("'{}' does NOT become a PATCH+SLAVE", surface.name()),
        }
    }

    fn surface_to_patch(
        &mut self,
        surface: &Surface,
        roles: &SurfaceRoles,
        source: SurfaceSource,
    ) {
        let worthy = self.will_be_a_patch(surface, roles);

        if surface.is_singleton() || !surface.has_regions() {
            self.add_patch(&PatchSource::Surface(surface), worthy, source);
        } else {
            for region in surface.regions() {
                self.add_patch(&PatchSource::Region { surface, region }, worthy, source);
            }
        }
    }

    fn surface_to_cell_zone(
        &mut self,
        surface: &Surface,
        roles: &SurfaceRoles,
        source: SurfaceSource,
    ) {
        if !roles.cell_zone {
            debug!("'{}' does NOT become a CELLZONE", surface.name());
            return;
        }
        let name = self.classifier.naming.cell_zone_name(surface);
        debug!("'{}' becomes a CELLZONE with name {name}", surface.name());
        self.out.push_cell_zone(CellZone::new(name), source);
    }

    fn surface_to_face_zone(
        &mut self,
        surface: &Surface,
        roles: &SurfaceRoles,
        source: SurfaceSource,
    ) {
        if !roles.face_zone {
            debug!("'{}' does NOT become a FACEZONE", surface.name());
            return;
        }
        let name = self.classifier.naming.face_zone_name(surface);
        debug!("'{}' becomes a FACEZONE with name {name}", surface.name());
        self.out.push_face_zone(FaceZone::new(name), source);
    }

    /// Expands a `boundary` or `baffle` zone into patch pairs.
    ///
    /// A baffle, or a singleton, only pairs its first region; a boundary
    /// pairs every region.
    fn zone_to_patches(&mut self, surface: &Surface, face_type: FaceType, source: SurfaceSource) {
        debug_assert!(face_type.creates_patches(), "no patch pairs for {face_type}");
        if !face_type.creates_patches() {
            warn!("'{}' reached patch pairing with face type {face_type}", surface.name());
            return;
        }

        if !surface.has_regions() {
            self.add_patch_and_slave(&PatchSource::Surface(surface), source);
            return;
        }

        let count = if surface.is_singleton() || face_type == FaceType::Baffle {
            1
        } else {
            surface.regions().len()
        };
        for region in surface.regions().iter().take(count) {
            self.add_patch_and_slave(&PatchSource::Region { surface, region }, source);
        }
    }

    fn add_patch(&mut self, candidate: &PatchSource<'_>, worthy: bool, source: SurfaceSource) {
        if !worthy {
            debug!("'{}' does NOT become a PATCH", candidate.name());
            return;
        }
        let name = self.classifier.naming.patch_name(candidate);
        debug!(
            "'{}' becomes a PATCH with name {name}, {:?}",
            candidate.name(),
            candidate.surface().surface_dictionary()
        );
        self.out.push_patch(Patch::new(name), source);
    }

    fn add_patch_and_slave(&mut self, candidate: &PatchSource<'_>, source: SurfaceSource) {
        let name = self.classifier.naming.patch_name(candidate);
        let slave = format!("{name}{}", self.classifier.params.slave_suffix);
        debug!("'{}' becomes 2 PATCHES with name {name} and {slave}", candidate.name());
        self.out.push_patch(Patch::new(name), source);
        self.out.push_patch(Patch::new(slave), source);
    }

    fn will_be_a_patch(&mut self, surface: &Surface, roles: &SurfaceRoles) -> bool {
        match surface.kind().parent() {
            Some(parent) => self.parent_will_be_a_patch(parent),
            None => plain_will_be_a_patch(surface, roles),
        }
    }

    /// Walks the solid-to-parent chain up to the first non-solid surface.
    ///
    /// A missing parent, a cycle or a root more than `max_parent_depth`
    /// steps away reads as not patch-worthy.
    fn parent_will_be_a_patch(&mut self, parent: SurfaceId) -> bool {
        let geometry = self.classifier.geometry;
        let max_depth = self.classifier.params.max_parent_depth;
        let mut chain: Vec<SurfaceId> = Vec::new();
        let mut current = parent;

        // (root patch-worthiness, steps from the last chain entry to the root)
        let resolved = loop {
            if let Some(&(worthy, depth)) = self.ascents.get(&current) {
                if chain.is_empty() {
                    break Some((worthy, depth));
                }
                break Some((worthy, depth + 1));
            }
            if chain.contains(&current) {
                warn!("solid parent chain loops back to {current:?}");
                break None;
            }
            if chain.len() >= max_depth {
                warn!("solid parent chain deeper than {max_depth}");
                break None;
            }
            let Ok(surface) = geometry.surface(current) else {
                warn!("solid parent {current:?} not found");
                break None;
            };
            chain.push(current);
            match surface.kind().parent() {
                Some(next) => current = next,
                None => {
                    let roles = SurfaceRoles::of(surface);
                    break Some((plain_will_be_a_patch(surface, &roles), 0));
                }
            }
        };

        let Some((worthy, base)) = resolved else {
            return false;
        };
        for (steps, id) in chain.iter().rev().enumerate() {
            self.ascents.insert(*id, (worthy, base + steps));
        }

        let parent_depth = self.ascents.get(&parent).map_or(base, |(_, depth)| *depth);
        if parent_depth + 1 > max_depth {
            warn!("solid parent chain deeper than {max_depth}");
            return false;
        }
        worthy
    }
}

/// Patch-worthiness of a surface that is not a solid.
///
/// Singleton STL surfaces that only carry surface refinement fall under
/// the general refinement-only rule.
fn plain_will_be_a_patch(surface: &Surface, roles: &SurfaceRoles) -> bool {
    surface.kind().is_plane() || roles.refinement_only()
}
