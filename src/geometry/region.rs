/// A named sub-division of a surface, e.g. one `solid` block of an STL file.
///
/// Regions are classified in the context of their owning surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    name: String,
}

impl Region {
    /// Creates a new region.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
