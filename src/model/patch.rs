use crate::dictionary::Dictionary;

use super::collection::MeshEntity;

/// Physical type of a boundary patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryType {
    Patch,
    #[default]
    Wall,
    Symmetry,
    Empty,
    Inlet,
    Outlet,
    Opening,
}

impl BoundaryType {
    /// Returns the keyword written to the boundary file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Wall => "wall",
            Self::Symmetry => "symmetry",
            Self::Empty => "empty",
            Self::Inlet => "inlet",
            Self::Outlet => "outlet",
            Self::Opening => "opening",
        }
    }
}

/// Per-field boundary conditions of a patch, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryConditions {
    fields: Vec<(String, Dictionary)>,
}

impl BoundaryConditions {
    /// Creates an empty set of boundary conditions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the condition for `field`, replacing any previous one.
    pub fn set(&mut self, field: impl Into<String>, condition: Dictionary) {
        let field = field.into();
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = condition,
            None => self.fields.push((field, condition)),
        }
    }

    /// Returns the condition for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Dictionary> {
        self.fields
            .iter()
            .find_map(|(f, condition)| (f == field).then_some(condition))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A named boundary face group consumed by the mesher.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// Patch name, unique within the model.
    pub name: String,
    /// Patch dictionary, named after the patch.
    pub dictionary: Dictionary,
    pub visible: bool,
    pub loaded: bool,
    /// `true` if the patch has no faces yet.
    pub empty: bool,
    pub physical_type: BoundaryType,
    pub boundary_conditions: BoundaryConditions,
}

impl Patch {
    /// Creates a visible, loaded, non-empty patch with default type and conditions.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            dictionary: Dictionary::new(name.clone()),
            name,
            visible: true,
            loaded: true,
            empty: false,
            physical_type: BoundaryType::default(),
            boundary_conditions: BoundaryConditions::new(),
        }
    }
}

impl MeshEntity for Patch {
    const KIND: &'static str = "patch";

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_patch_defaults() {
        let patch = Patch::new("inlet");
        assert_eq!(patch.name, "inlet");
        assert_eq!(patch.dictionary.name(), "inlet");
        assert!(patch.dictionary.is_empty());
        assert!(patch.visible);
        assert!(patch.loaded);
        assert!(!patch.empty);
        assert_eq!(patch.physical_type, BoundaryType::Wall);
        assert!(patch.boundary_conditions.is_empty());
    }

    #[test]
    fn boundary_conditions_replace_by_field() {
        let mut conditions = BoundaryConditions::new();
        conditions.set("U", Dictionary::new("fixedValue"));
        conditions.set("U", Dictionary::new("zeroGradient"));
        conditions.set("p", Dictionary::new("fixedValue"));
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions.get("U").map(Dictionary::name), Some("zeroGradient"));
        assert!(conditions.get("T").is_none());
    }

    #[test]
    fn boundary_type_keywords() {
        assert_eq!(BoundaryType::default().as_str(), "wall");
        assert_eq!(BoundaryType::Symmetry.as_str(), "symmetry");
    }
}
