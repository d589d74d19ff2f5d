use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Strong typing for record ids with phantom types.
///
/// Ids are opaque strings: server records carry uuids, option ids are
/// slugs, and unset references are the empty string. No format is
/// enforced, the wrapper only keeps ids of different record kinds from
/// being mixed up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different id kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatabaseMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewMarker;

/// Type aliases for specific id types
pub type PageId = Id<PageMarker>;
pub type BlockId = Id<BlockMarker>;
pub type DatabaseId = Id<DatabaseMarker>;
pub type EntryId = Id<EntryMarker>;
pub type PropertyId = Id<PropertyMarker>;
pub type OptionId = Id<OptionMarker>;
pub type ViewId = Id<ViewMarker>;

impl<T> Id<T> {
    /// Wrap a raw id string.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _phantom: PhantomData,
        }
    }

    /// Create a new random v4 uuid id.
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4();
        Self {
            value: uuid.as_simple().to_string(),
            _phantom: PhantomData,
        }
    }

    /// Get the id as a string reference.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether this id is the unset placeholder.
    ///
    /// Draft records reference not-yet-saved targets with an empty id.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Consume the wrapper and return the raw string.
    pub fn into_string(self) -> String {
        self.value
    }
}

/// The unset reference. Drafts use it where a target has not been chosen.
impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}
