// src/catalog/mod.rs
//! Property reference resolution and value display.
//!
//! Views written by older clients reference properties by display name;
//! newer ones use canonical ids. The catalog reconciles both against a
//! database's property list. Resolution never fails: a reference that
//! matches nothing passes through unchanged, and callers tolerate the
//! dangling id the same way they tolerate a property deleted after a view
//! was saved.

mod format;

pub use format::render_value;

use crate::constants::TITLE_PROPERTY;
use crate::model::{Entry, Property};
use crate::types::{PropertyId, PropertyRef};

/// A borrowed view over a database's property list.
#[derive(Debug, Clone, Copy)]
pub struct PropertyCatalog<'a> {
    properties: &'a [Property],
}

impl<'a> PropertyCatalog<'a> {
    pub fn new(properties: &'a [Property]) -> Self {
        Self { properties }
    }

    /// Resolve a stored reference to a canonical property id.
    ///
    /// Exact id match wins; otherwise the first case-insensitive name
    /// match; otherwise the candidate passes through as-is. Blank
    /// references stay blank. Resolving an already-resolved id is a
    /// no-op, so normalization can run any number of times.
    pub fn resolve(&self, candidate: &PropertyRef) -> PropertyId {
        if candidate.is_empty() {
            return PropertyId::new(candidate.as_str());
        }

        if self
            .properties
            .iter()
            .any(|property| property.id.as_str() == candidate.as_str())
        {
            return PropertyId::new(candidate.as_str());
        }

        let lowered = candidate.as_str().to_lowercase();
        if let Some(property) = self
            .properties
            .iter()
            .find(|property| property.name.to_lowercase() == lowered)
        {
            log::debug!(
                "Resolved property reference '{}' by name to id '{}'",
                candidate,
                property.id
            );
            return property.id.clone();
        }

        PropertyId::new(candidate.as_str())
    }

    /// The display label for a property id: the property's name, or the
    /// raw id when the property no longer exists (stale views still need
    /// readable headers).
    pub fn label(&self, property: &PropertyId) -> String {
        match self.get(property) {
            Some(found) if !found.name.is_empty() => found.name.clone(),
            _ => property.as_str().to_string(),
        }
    }

    /// Look up a property by id.
    pub fn get(&self, property: &PropertyId) -> Option<&'a Property> {
        self.properties.iter().find(|p| &p.id == property)
    }

    /// Properties in display order (by `position`, list order for ties).
    pub fn ordered(&self) -> Vec<&'a Property> {
        let mut ordered: Vec<_> = self.properties.iter().collect();
        ordered.sort_by_key(|property| property.position);
        ordered
    }
}

/// The display string for one entry cell.
///
/// The reserved `title` key addresses the entry's title, which lives
/// outside the property map; every other key formats the stored value by
/// shape (missing values render empty).
pub fn format_entry_value(entry: &Entry, property: &PropertyId) -> String {
    log::trace!("Formatting entry {} property {}", entry.id, property);

    if property.as_str() == TITLE_PROPERTY {
        return entry.title.clone();
    }
    render_value(entry.value(property))
}
