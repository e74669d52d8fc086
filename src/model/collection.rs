use std::collections::HashSet;

use crate::error::{ModelError, Result};

/// An entity stored in an [`EntityCollection`].
pub trait MeshEntity {
    /// Human-readable entity kind, used in errors.
    const KIND: &'static str;

    /// Returns the entity name.
    fn name(&self) -> &str;
}

/// An ordered collection of entities with unique names.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCollection<T> {
    items: Vec<T>,
}

impl<T> Default for EntityCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: MeshEntity> EntityCollection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from `items`, rejecting duplicate names.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first duplicate.
    pub fn from_vec(items: Vec<T>) -> Result<Self> {
        check_unique(&items)?;
        Ok(Self { items })
    }

    /// Appends an entity.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity with the same name exists.
    pub fn add(&mut self, item: T) -> Result<()> {
        if self.contains(item.name()) {
            return Err(duplicate::<T>(item.name()));
        }
        self.items.push(item);
        Ok(())
    }

    /// Appends all entities, or none of them.
    ///
    /// # Errors
    ///
    /// Returns an error if any name is duplicated, within `items` or
    /// against the collection.
    pub fn add_all(&mut self, items: Vec<T>) -> Result<()> {
        check_unique(&items)?;
        if let Some(clash) = items.iter().find(|item| self.contains(item.name())) {
            return Err(duplicate::<T>(clash.name()));
        }
        self.items.extend(items);
        Ok(())
    }

    /// Removes every entity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the entity named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Returns `true` if an entity named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the entity names in order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name().to_owned()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: MeshEntity> IntoIterator for &'a EntityCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn check_unique<T: MeshEntity>(items: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.name()) {
            return Err(duplicate::<T>(item.name()));
        }
    }
    Ok(())
}

fn duplicate<T: MeshEntity>(name: &str) -> crate::error::GeomeshError {
    ModelError::DuplicateName {
        kind: T::KIND,
        name: name.to_owned(),
    }
    .into()
}
