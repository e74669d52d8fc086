use crate::dictionary::keys::{
    CELL_ZONE_KEY, FACE_TYPE_KEY, FACE_ZONE_KEY, IS_CELL_ZONE_KEY, LEVELS_KEY, LEVEL_KEY,
    MODE_KEY, NONE_KEY,
};
use crate::dictionary::{face_type, refinement_mode, Dictionary, FaceType, RefinementMode};
use crate::geometry::Surface;

/// The roles a surface's dictionaries assign to it.
///
/// Every field is a pure function of the surface's own dictionaries, so a
/// snapshot can be taken once per surface and reused by every step of a
/// classification pass. Missing dictionaries read as `false`/`None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SurfaceRoles {
    /// The surface becomes a cell zone.
    pub cell_zone: bool,
    /// The surface becomes a face zone.
    pub face_zone: bool,
    /// Face type declared by the zone dictionary, if it is a known one.
    pub face_type: Option<FaceType>,
    /// The surface dictionary requests surface refinement.
    pub surface_refinement: bool,
    /// The volume dictionary requests inside/outside volume refinement.
    pub volume_refinement: bool,
}

impl SurfaceRoles {
    /// Reads the roles of `surface`.
    #[must_use]
    pub fn of(surface: &Surface) -> Self {
        let zone = surface.zone_dictionary();
        Self {
            cell_zone: zone.is_some_and(will_be_a_cell_zone),
            face_zone: zone.is_some_and(will_be_a_face_zone),
            face_type: zone.and_then(face_type),
            surface_refinement: surface.surface_dictionary().is_some_and(is_surface_refinement),
            volume_refinement: surface.volume_dictionary().is_some_and(is_volume_refinement),
        }
    }

    /// Returns `true` if surface refinement is the only thing configured.
    #[must_use]
    pub fn refinement_only(&self) -> bool {
        self.surface_refinement && !self.volume_refinement && !self.cell_zone && !self.face_zone
    }

    /// Returns the face type if it produces patch pairs.
    #[must_use]
    pub fn patch_pair_face_type(&self) -> Option<FaceType> {
        self.face_type.filter(|ft| ft.creates_patches())
    }
}

/// `faceType` is present and is not `none`.
///
/// Unknown words count as declared, only the literal `none` switches zones off.
fn declares_face_type(zone: &Dictionary) -> bool {
    zone.found(FACE_TYPE_KEY) && zone.lookup(FACE_TYPE_KEY) != Some(NONE_KEY)
}

/// Zone dictionary names a cell zone, switches it on and declares a face type.
#[must_use]
pub fn will_be_a_cell_zone(zone: &Dictionary) -> bool {
    zone.is_field(CELL_ZONE_KEY) && zone.lookup_bool(IS_CELL_ZONE_KEY) && declares_face_type(zone)
}

/// Zone dictionary names a face zone and declares a face type.
#[must_use]
pub fn will_be_a_face_zone(zone: &Dictionary) -> bool {
    zone.is_field(FACE_ZONE_KEY) && declares_face_type(zone)
}

/// Surface dictionary carries a refinement `level`.
#[must_use]
pub fn is_surface_refinement(surface: &Dictionary) -> bool {
    !surface.is_empty() && surface.is_field(LEVEL_KEY)
}

/// Volume dictionary carries `levels` and an inside/outside `mode`.
#[must_use]
pub fn is_volume_refinement(volume: &Dictionary) -> bool {
    !volume.is_empty()
        && volume.is_field(LEVELS_KEY)
        && volume.is_field(MODE_KEY)
        && matches!(
            refinement_mode(volume),
            Some(RefinementMode::Inside | RefinementMode::Outside)
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::keys::{BAFFLE_KEY, BOUNDARY_KEY, DISTANCE_KEY, INSIDE_KEY};
    use crate::dictionary::Value;
    use crate::geometry::SurfaceKind;

    fn zone(face_type: &str) -> Dictionary {
        Dictionary::new("zone").with(FACE_TYPE_KEY, face_type)
    }

    #[test]
    fn cell_zone_needs_all_three_fields() {
        let full = zone(BOUNDARY_KEY)
            .with(CELL_ZONE_KEY, "fluid")
            .with(IS_CELL_ZONE_KEY, true);
        assert!(will_be_a_cell_zone(&full));

        let switched_off = full.clone().with(IS_CELL_ZONE_KEY, false);
        assert!(!will_be_a_cell_zone(&switched_off));

        let mut unnamed = full.clone();
        unnamed.remove(CELL_ZONE_KEY);
        assert!(!will_be_a_cell_zone(&unnamed));

        let none_type = full.with(FACE_TYPE_KEY, NONE_KEY);
        assert!(!will_be_a_cell_zone(&none_type));
    }

    #[test]
    fn cell_zone_name_must_be_a_field() {
        let dict = zone(BAFFLE_KEY)
            .with(CELL_ZONE_KEY, Dictionary::new(CELL_ZONE_KEY))
            .with(IS_CELL_ZONE_KEY, true);
        assert!(!will_be_a_cell_zone(&dict));
    }

    #[test]
    fn face_zone_ignores_cell_zone_switch() {
        let dict = zone(BAFFLE_KEY).with(FACE_ZONE_KEY, "baffles");
        assert!(will_be_a_face_zone(&dict));
        assert!(!will_be_a_cell_zone(&dict));

        let missing_type = Dictionary::new("zone").with(FACE_ZONE_KEY, "baffles");
        assert!(!will_be_a_face_zone(&missing_type));
    }

    #[test]
    fn unknown_face_type_still_declares_zones() {
        let dict = zone("internal").with(FACE_ZONE_KEY, "fz");
        assert!(will_be_a_face_zone(&dict));

        let surface = Surface::new("s", SurfaceKind::Stl).with_zone_dictionary(dict);
        let roles = SurfaceRoles::of(&surface);
        assert!(roles.face_zone);
        assert_eq!(roles.face_type, None);
        assert_eq!(roles.patch_pair_face_type(), None);
    }

    #[test]
    fn volume_refinement_needs_inside_or_outside() {
        let inside = Dictionary::new("volume")
            .with(MODE_KEY, INSIDE_KEY)
            .with(LEVELS_KEY, Value::List(vec![Value::Float(1.0), Value::Int(2)]));
        assert!(is_volume_refinement(&inside));

        let distance = inside.clone().with(MODE_KEY, DISTANCE_KEY);
        assert!(!is_volume_refinement(&distance));

        let mut no_levels = inside;
        no_levels.remove(LEVELS_KEY);
        assert!(!is_volume_refinement(&no_levels));
        assert!(!is_volume_refinement(&Dictionary::new("volume")));
    }

    #[test]
    fn surface_refinement_needs_level() {
        assert!(is_surface_refinement(
            &Dictionary::new("surface").with(LEVEL_KEY, 2_i64)
        ));
        assert!(!is_surface_refinement(
            &Dictionary::new("surface").with(LEVELS_KEY, 2_i64)
        ));
        assert!(!is_surface_refinement(&Dictionary::new("surface")));
    }

    #[test]
    fn refinement_only_excludes_zones_and_volume_refinement() {
        let level = Dictionary::new("surface").with(LEVEL_KEY, 1_i64);
        let plain = Surface::new("s", SurfaceKind::Stl).with_surface_dictionary(level);
        assert!(SurfaceRoles::of(&plain).refinement_only());

        let zoned = plain.clone().with_zone_dictionary(
            zone(BOUNDARY_KEY)
                .with(CELL_ZONE_KEY, "c")
                .with(IS_CELL_ZONE_KEY, true),
        );
        let roles = SurfaceRoles::of(&zoned);
        assert!(roles.cell_zone);
        assert!(!roles.refinement_only());
        assert_eq!(roles.patch_pair_face_type(), Some(FaceType::Boundary));

        let volume = plain.with_volume_dictionary(
            Dictionary::new("volume")
                .with(MODE_KEY, "outside")
                .with(LEVELS_KEY, 1_i64),
        );
        assert!(!SurfaceRoles::of(&volume).refinement_only());
    }

    #[test]
    fn missing_dictionaries_read_as_no_roles() {
        let surface = Surface::new("s", SurfaceKind::Stl);
        assert_eq!(SurfaceRoles::of(&surface), SurfaceRoles::default());
    }
}
