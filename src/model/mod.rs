mod collection;
mod patch;
mod zone;

pub use collection::{EntityCollection, MeshEntity};
pub use patch::{BoundaryConditions, BoundaryType, Patch};
pub use zone::{CellZone, FaceZone};

use crate::error::Result;
use crate::geometry::Geometry;

/// Ordered, name-unique patches.
pub type Patches = EntityCollection<Patch>;
/// Ordered, name-unique cell zones.
pub type CellZones = EntityCollection<CellZone>;
/// Ordered, name-unique face zones.
pub type FaceZones = EntityCollection<FaceZone>;

/// A meshing case: the input geometry and the entities declared for the mesher.
#[derive(Debug, Default)]
pub struct Model {
    geometry: Geometry,
    patches: Patches,
    cell_zones: CellZones,
    face_zones: FaceZones,
}

impl Model {
    /// Creates a model over `geometry` with no mesh entities.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut Geometry {
        &mut self.geometry
    }

    #[must_use]
    pub fn patches(&self) -> &Patches {
        &self.patches
    }

    #[must_use]
    pub fn cell_zones(&self) -> &CellZones {
        &self.cell_zones
    }

    #[must_use]
    pub fn face_zones(&self) -> &FaceZones {
        &self.face_zones
    }

    /// Replaces all three entity collections as a unit.
    ///
    /// Every collection is validated before the model is touched, so on
    /// error the previous entities stay in place.
    ///
    /// # Errors
    ///
    /// Returns an error if any collection contains a duplicate name.
    pub fn replace_entities(
        &mut self,
        patches: Vec<Patch>,
        cell_zones: Vec<CellZone>,
        face_zones: Vec<FaceZone>,
    ) -> Result<()> {
        let patches = Patches::from_vec(patches)?;
        let cell_zones = CellZones::from_vec(cell_zones)?;
        let face_zones = FaceZones::from_vec(face_zones)?;

        self.patches = patches;
        self.cell_zones = cell_zones;
        self.face_zones = face_zones;
        Ok(())
    }

    /// Removes every patch, cell zone and face zone.
    pub fn clear_entities(&mut self) {
        self.patches.clear();
        self.cell_zones.clear();
        self.face_zones.clear();
    }
}
