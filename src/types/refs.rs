// src/types/refs.rs
//! The unresolved side of property references.
//!
//! View options written by older clients store either a canonical property
//! id or the property's display name, and the two are indistinguishable as
//! strings. `PropertyRef` keeps that ambiguity explicit in the type system:
//! a ref only becomes a [`PropertyId`](crate::types::PropertyId) by going
//! through catalog resolution, so grouping and formatting can demand
//! resolved ids at compile time.

use crate::types::PropertyId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A property reference as stored in view options: canonical id or
/// human-typed display name, not yet resolved against a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyRef(String);

impl PropertyRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the reference is blank. Blank refs are left alone by
    /// normalization, matching how older clients stored "no selection".
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PropertyRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PropertyRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An already-resolved id is trivially a valid reference.
impl From<PropertyId> for PropertyRef {
    fn from(id: PropertyId) -> Self {
        Self(id.into_string())
    }
}

impl From<&PropertyId> for PropertyRef {
    fn from(id: &PropertyId) -> Self {
        Self(id.as_str().to_string())
    }
}
