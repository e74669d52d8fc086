use tracing::debug;

use crate::error::Result;
use crate::geometry::Surface;
use crate::model::Model;
use crate::naming::{DefaultNamingConvention, NamingConvention, PatchSource};
use crate::operations::classify::{Classification, ClassifyParams, SurfaceClassifier};

/// Counts of the entities committed by [`GeometryToMesh::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshSummary {
    pub patches: usize,
    pub cell_zones: usize,
    pub face_zones: usize,
}

/// Replaces the model's patches, cell zones and face zones with the ones
/// its geometry produces.
pub struct GeometryToMesh<N = DefaultNamingConvention> {
    naming: N,
    params: ClassifyParams,
}

impl GeometryToMesh {
    /// Creates a new `GeometryToMesh` operation with the default naming convention.
    #[must_use]
    pub fn new() -> Self {
        Self {
            naming: DefaultNamingConvention,
            params: ClassifyParams::default(),
        }
    }
}

impl Default for GeometryToMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NamingConvention + Clone> GeometryToMesh<N> {
    /// Replaces the naming convention.
    #[must_use]
    pub fn with_naming<M: NamingConvention + Clone>(self, naming: M) -> GeometryToMesh<M> {
        GeometryToMesh {
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

    /// Classifies the model's geometry without committing anything.
    ///
    /// The result records which surface produced each entity.
    #[must_use]
    pub fn classify(&self, model: &Model) -> Classification {
        SurfaceClassifier::new(model.geometry())
            .with_naming(self.naming.clone())
            .with_params(self.params.clone())
            .classify()
    }

    /// Executes the operation, replacing all mesh entities of the model.
    ///
    /// The three collections are swapped as a unit; running it twice leaves
    /// a single generation of entities. A patch that one surface produces
    /// twice, as a plain patch and as the master of a patch pair, is
    /// committed once.
    ///
    /// # Errors
    ///
    /// Returns an error if the naming convention gives the same name to
    /// entities of different surfaces. The model is left unchanged in that case.
    pub fn execute(&self, model: &mut Model) -> Result<MeshSummary> {
        let mut classification = self.classify(model);
        let merged = classification.merge_repeated_patches();
        if merged > 0 {
            debug!("merged {merged} repeated patches");
        }

        let (patches, cell_zones, face_zones) = classification.into_entities();
        let summary = MeshSummary {
            patches: patches.len(),
            cell_zones: cell_zones.len(),
            face_zones: face_zones.len(),
        };

        model.replace_entities(patches, cell_zones, face_zones)?;
        debug!(
            "committed {} patches, {} cell zones, {} face zones",
            summary.patches, summary.cell_zones, summary.face_zones
        );
        Ok(summary)
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dictionary::keys::{
        BAFFLE_KEY, BOUNDARY_KEY, CELL_ZONE_KEY, FACE_TYPE_KEY, FACE_ZONE_KEY, IS_CELL_ZONE_KEY,
        LEVEL_KEY,
    };
    use crate::dictionary::Dictionary;
    use crate::error::{GeomeshError, ModelError};
    use crate::geometry::{Geometry, Region, SurfaceKind};
    use crate::math::{Point3, Vector3};
    use crate::model::{BoundaryType, Patch};
    use crate::operations::classify::SurfaceSource;
    use crate::operations::ListPatches;

    fn model() -> Model {
        let mut geometry = Geometry::new();
        geometry
            .add_surface(
                Surface::new("sym", SurfaceKind::plane(Point3::origin(), Vector3::y()).unwrap()),
            )
            .unwrap();
        geometry
            .add_surface(
                Surface::new("fan", SurfaceKind::Stl)
                    .with_regions(vec![Region::new("hub"), Region::new("blades")])
                    .with_zone_dictionary(
                        Dictionary::new("zone")
                            .with(FACE_TYPE_KEY, BAFFLE_KEY)
                            .with(CELL_ZONE_KEY, "rotor")
                            .with(IS_CELL_ZONE_KEY, true)
                            .with(FACE_ZONE_KEY, "rotor"),
                    ),
            )
            .unwrap();
        geometry
            .add_surface(
                Surface::new("body", SurfaceKind::Stl)
                    .with_surface_dictionary(Dictionary::new("surface").with(LEVEL_KEY, 3_i64)),
            )
            .unwrap();
        Model::new(geometry)
    }

    #[test]
    fn execute_replaces_entities() {
        let mut model = model();
        model
            .replace_entities(vec![Patch::new("stale")], vec![], vec![])
            .unwrap();

        let summary = GeometryToMesh::new().execute(&mut model).unwrap();
        assert_eq!(
            summary,
            MeshSummary {
                patches: 4,
                cell_zones: 1,
                face_zones: 1
            }
        );
        assert_eq!(
            model.patches().names(),
            vec!["sym", "fan_hub", "fan_hub_slave", "body"]
        );
        assert_eq!(model.cell_zones().names(), vec!["fan"]);
        assert_eq!(model.face_zones().names(), vec!["fan"]);
        assert!(!model.patches().contains("stale"));

        let patch = model.patches().get("fan_hub_slave").unwrap();
        assert!(patch.visible && patch.loaded && !patch.empty);
        assert_eq!(patch.physical_type, BoundaryType::Wall);
        assert_eq!(patch.dictionary.name(), "fan_hub_slave");
    }

    #[test]
    fn execute_twice_leaves_one_generation() {
        let mut model = model();
        let op = GeometryToMesh::new();
        op.execute(&mut model).unwrap();
        let first = model.patches().names();
        op.execute(&mut model).unwrap();
        assert_eq!(model.patches().names(), first);
        assert_eq!(model.cell_zones().len(), 1);
        assert_eq!(model.face_zones().len(), 1);
    }

    #[test]
    fn classify_records_sources() {
        let model = model();
        let out = GeometryToMesh::new().classify(&model);
        let (fan, _) = model.geometry().surface_by_name("fan").unwrap();
        assert_eq!(
            &out.patch_sources()[1..3],
            &[SurfaceSource::Surface(fan), SurfaceSource::Surface(fan)]
        );
        assert_eq!(out.cell_zone_sources(), &[SurfaceSource::Surface(fan)]);
        assert_eq!(out.face_zone_sources(), &[SurfaceSource::Surface(fan)]);
    }

    #[test]
    fn duplicate_names_leave_model_unchanged() {
        let mut model = model();
        GeometryToMesh::new().execute(&mut model).unwrap();
        let before = model.patches().names();

        // A second plane named like an existing patch.
        model
            .geometry_mut()
            .add_surface(
                Surface::new("body", SurfaceKind::plane(Point3::origin(), Vector3::x()).unwrap()),
            )
            .unwrap();

        let result = GeometryToMesh::new().execute(&mut model);
        assert!(matches!(
            result,
            Err(GeomeshError::Model(ModelError::DuplicateName { kind: "patch", .. }))
        ));
        assert_eq!(model.patches().names(), before);
    }

    #[test]
    fn plane_baffle_commits_each_patch_once() {
        let mut geometry = Geometry::new();
        geometry
            .add_surface(
                Surface::new("cut", SurfaceKind::plane(Point3::origin(), Vector3::z()).unwrap())
                    .with_zone_dictionary(Dictionary::new("zone").with(FACE_TYPE_KEY, BAFFLE_KEY)),
            )
            .unwrap();
        let mut model = Model::new(geometry);

        assert_eq!(
            ListPatches::new().execute(&model),
            vec!["cut", "cut", "cut_slave"]
        );
        let summary = GeometryToMesh::new().execute(&mut model).unwrap();
        assert_eq!(summary.patches, 2);
        assert_eq!(model.patches().names(), vec!["cut", "cut_slave"]);
    }

    #[test]
    fn refined_boundary_regions_commit_each_patch_once() {
        let mut geometry = Geometry::new();
        geometry
            .add_surface(
                Surface::new("wall", SurfaceKind::Stl)
                    .with_regions(vec![Region::new("a"), Region::new("b")])
                    .with_surface_dictionary(Dictionary::new("surface").with(LEVEL_KEY, 2_i64))
                    .with_zone_dictionary(
                        Dictionary::new("zone").with(FACE_TYPE_KEY, BOUNDARY_KEY),
                    ),
            )
            .unwrap();
        let mut model = Model::new(geometry);

        let op = GeometryToMesh::new();
        let out = op.classify(&model);
        assert_eq!(
            out.patch_names(),
            vec!["wall_a", "wall_b", "wall_a", "wall_a_slave", "wall_b", "wall_b_slave"]
        );

        op.execute(&mut model).unwrap();
        assert_eq!(
            model.patches().names(),
            vec!["wall_a", "wall_b", "wall_a_slave", "wall_b_slave"]
        );
        assert!(model.cell_zones().is_empty());
        assert!(model.face_zones().is_empty());
    }

    #[derive(Clone)]
    struct Prefixed;

    impl NamingConvention for Prefixed {
        fn patch_name(&self, source: &PatchSource<'_>) -> String {
            format!("p_{}", source.name())
        }

        fn cell_zone_name(&self, surface: &Surface) -> String {
            format!("c_{}", surface.name())
        }

        fn face_zone_name(&self, surface: &Surface) -> String {
            format!("f_{}", surface.name())
        }
    }

    #[test]
    fn naming_helpers_follow_convention() {
        let op = GeometryToMesh::new().with_naming(Prefixed);
        let surface = Surface::new("inlet", SurfaceKind::Stl);
        assert_eq!(op.patch_name(&surface), "p_inlet");
        assert_eq!(op.cell_zone_name(&surface), "c_inlet");
        assert_eq!(op.face_zone_name(&surface), "f_inlet");

        let mut model = model();
        op.execute(&mut model).unwrap();
        assert_eq!(model.cell_zones().names(), vec!["c_fan"]);
        assert!(model.patches().contains("p_hub_slave"));
    }

    #[test]
    fn logs_through_installed_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let mut model = model();
        let summary = tracing::subscriber::with_default(subscriber, || {
            GeometryToMesh::new().execute(&mut model)
        })
        .unwrap();
        assert_eq!(summary.patches, 4);
    }
}
