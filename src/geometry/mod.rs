mod region;
mod surface;

pub use region::Region;
pub use surface::{Surface, SurfaceId, SurfaceKind};

use crate::error::{GeometryError, Result};
use slotmap::SlotMap;

/// Central arena that owns all surfaces of a case.
///
/// Surfaces reference each other (solid to parent) via typed IDs
/// (generational indices). Insertion order is kept separately since it
/// decides the order of the generated patches.
#[derive(Debug, Default)]
pub struct Geometry {
    surfaces: SlotMap<SurfaceId, Surface>,
    order: Vec<SurfaceId>,
    block: Option<Surface>,
}

impl Geometry {
    /// Creates a new, empty geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a surface and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface is a solid whose parent is not in the store.
    pub fn add_surface(&mut self, surface: Surface) -> Result<SurfaceId> {
        if let Some(parent) = surface.kind().parent() {
            self.surface(parent)?;
        }
        let id = self.surfaces.insert(surface);
        self.order.push(id);
        Ok(id)
    }

    /// Inserts one solid of `parent`, named `name`, and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is not in the store.
    pub fn add_solid(&mut self, parent: SurfaceId, name: impl Into<String>) -> Result<SurfaceId> {
        self.add_surface(Surface::new(name, SurfaceKind::Solid { parent }))
    }

    /// Returns a reference to the surface, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface is not found in the store.
    pub fn surface(&self, id: SurfaceId) -> Result<&Surface> {
        self.surfaces
            .get(id)
            .ok_or_else(|| GeometryError::SurfaceNotFound(format!("{id:?}")).into())
    }

    /// Returns a mutable reference to the surface, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface is not found in the store.
    pub fn surface_mut(&mut self, id: SurfaceId) -> Result<&mut Surface> {
        self.surfaces
            .get_mut(id)
            .ok_or_else(|| GeometryError::SurfaceNotFound(format!("{id:?}")).into())
    }

    /// Looks up a surface by name.
    #[must_use]
    pub fn surface_by_name(&self, name: &str) -> Option<(SurfaceId, &Surface)> {
        self.surfaces().find(|(_, surface)| surface.name() == name)
    }

    /// Iterates the surfaces in insertion order.
    pub fn surfaces(&self) -> impl Iterator<Item = (SurfaceId, &Surface)> {
        self.order
            .iter()
            .filter_map(|id| self.surfaces.get(*id).map(|surface| (*id, surface)))
    }

    /// Removes a surface and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface is not found, or if a solid still
    /// names it as parent.
    pub fn remove_surface(&mut self, id: SurfaceId) -> Result<Surface> {
        let name = self.surface(id)?.name().to_owned();
        if let Some((_, solid)) = self
            .surfaces()
            .find(|(_, surface)| surface.kind().parent() == Some(id))
        {
            return Err(GeometryError::SurfaceInUse {
                name,
                solid: solid.name().to_owned(),
            }
            .into());
        }
        self.order.retain(|other| *other != id);
        self.surfaces
            .remove(id)
            .ok_or_else(|| GeometryError::SurfaceNotFound(name).into())
    }

    /// Sets the background block surface, returning the previous one.
    pub fn set_block(&mut self, block: Surface) -> Option<Surface> {
        self.block.replace(block)
    }

    /// Removes the background block surface.
    pub fn clear_block(&mut self) -> Option<Surface> {
        self.block.take()
    }

    /// Returns the background block surface.
    #[must_use]
    pub fn block(&self) -> Option<&Surface> {
        self.block.as_ref()
    }

    /// Returns `true` if a background block is set.
    #[must_use]
    pub fn has_block(&self) -> bool {
        self.block.is_some()
    }

    /// Returns the number of surfaces, not counting the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there are no surfaces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeomeshError;
    use crate::math::Point3;

    #[test]
    fn surfaces_keep_insertion_order() {
        let mut geometry = Geometry::new();
        geometry.add_surface(Surface::new("b", SurfaceKind::Stl)).unwrap();
        geometry.add_surface(Surface::new("a", SurfaceKind::Stl)).unwrap();
        geometry.add_surface(Surface::new("c", SurfaceKind::Stl)).unwrap();

        let names: Vec<_> = geometry.surfaces().map(|(_, s)| s.name()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(geometry.len(), 3);
    }

    #[test]
    fn solid_needs_existing_parent() {
        let mut geometry = Geometry::new();
        let parent = geometry.add_surface(Surface::new("p", SurfaceKind::Stl)).unwrap();
        let solid = geometry.add_solid(parent, "p_solid").unwrap();
        assert_eq!(geometry.surface(solid).unwrap().kind().parent(), Some(parent));

        let mut other = Geometry::new();
        let result = other.add_solid(parent, "orphan");
        assert!(matches!(
            result,
            Err(GeomeshError::Geometry(GeometryError::SurfaceNotFound(_)))
        ));
        assert!(other.is_empty());
    }

    #[test]
    fn parent_in_use_cannot_be_removed() {
        let mut geometry = Geometry::new();
        let parent = geometry.add_surface(Surface::new("p", SurfaceKind::Stl)).unwrap();
        let solid = geometry.add_solid(parent, "p_solid").unwrap();

        let result = geometry.remove_surface(parent);
        assert!(matches!(
            result,
            Err(GeomeshError::Geometry(GeometryError::SurfaceInUse { .. }))
        ));

        geometry.remove_surface(solid).unwrap();
        geometry.remove_surface(parent).unwrap();
        assert!(geometry.is_empty());
        assert!(geometry.surface(parent).is_err());
    }

    #[test]
    fn lookup_by_name() {
        let mut geometry = Geometry::new();
        let id = geometry.add_surface(Surface::new("inlet", SurfaceKind::Stl)).unwrap();
        assert_eq!(geometry.surface_by_name("inlet").map(|(i, _)| i), Some(id));
        assert!(geometry.surface_by_name("outlet").is_none());
    }

    #[test]
    fn block_is_separate_from_surfaces() {
        let mut geometry = Geometry::new();
        assert!(!geometry.has_block());
        let kind = SurfaceKind::bounding_box(Point3::origin(), Point3::new(1.0, 1.0, 1.0)).unwrap();
        geometry.set_block(Surface::new("block", kind));
        assert!(geometry.has_block());
        assert!(geometry.is_empty());
        assert_eq!(geometry.clear_block().unwrap().name(), "block");
        assert!(geometry.block().is_none());
    }

    #[test]
    fn surface_mut_edits_in_place() {
        let mut geometry = Geometry::new();
        let id = geometry.add_surface(Surface::new("s", SurfaceKind::Stl)).unwrap();
        *geometry.surface_mut(id).unwrap().zone_dictionary_mut() =
            Some(crate::dictionary::Dictionary::new("zone"));
        assert!(geometry.surface(id).unwrap().zone_dictionary().is_some());
    }
}
