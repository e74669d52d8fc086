use super::collection::MeshEntity;

/// A named volumetric sub-region of the mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellZone {
    pub name: String,
    pub visible: bool,
    pub loaded: bool,
}

impl CellZone {
    /// Creates a visible, loaded cell zone.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            loaded: true,
        }
    }
}

impl MeshEntity for CellZone {
    const KIND: &'static str = "cell zone";

    fn name(&self) -> &str {
        &self.name
    }
}

/// A named set of mesh faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceZone {
    pub name: String,
    pub visible: bool,
    pub loaded: bool,
}

impl FaceZone {
    /// Creates a visible, loaded face zone.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            loaded: true,
        }
    }
}

impl MeshEntity for FaceZone {
    const KIND: &'static str = "face zone";

    fn name(&self) -> &str {
        &self.name
    }
}
