mod block;

pub use block::{Block, BlockContent, BlockKind};

use crate::catalog::PropertyCatalog;
use crate::error::Result;
use crate::types::{
    DatabaseId, EntryId, OptionSet, PageId, PropertyId, PropertyRef, PropertyType, PropertyValue,
    ViewId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A database property definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionSet>,
    #[serde(default)]
    pub position: usize,
}

impl Property {
    pub fn new(
        id: impl Into<PropertyId>,
        name: impl Into<String>,
        property_type: PropertyType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            property_type,
            options: None,
            position: 0,
        }
    }
}

/// How a view presents its database's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Table,
    Kanban,
    Gallery,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Table => "table",
            ViewType::Kanban => "kanban",
            ViewType::Gallery => "gallery",
        }
    }
}

impl std::fmt::Display for ViewType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-view configuration. References are stored as [`PropertyRef`] because
/// older clients wrote display names where ids belong; normalization
/// rewrites them before grouping or projection consume the view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<PropertyRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_property: Option<PropertyRef>,
}

/// A saved presentation of a database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub id: ViewId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub view_type: ViewType,
    #[serde(default)]
    pub options: ViewOptions,
    #[serde(default)]
    pub position: usize,
}

impl View {
    pub fn new(id: impl Into<ViewId>, name: impl Into<String>, view_type: ViewType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            view_type,
            options: ViewOptions::default(),
            position: 0,
        }
    }
}

/// A structured database: schema plus saved views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    pub id: DatabaseId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub views: Vec<View>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Database {
    /// Borrow the property list as a resolution catalog.
    pub fn catalog(&self) -> PropertyCatalog<'_> {
        PropertyCatalog::new(&self.properties)
    }

    /// Look up a view by id.
    pub fn view(&self, id: &ViewId) -> Option<&View> {
        self.views.iter().find(|view| &view.id == id)
    }

    /// The view shown when none is selected (first by list order).
    pub fn default_view(&self) -> Option<&View> {
        self.views.first()
    }

    /// Decode a database record from a JSON response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// One row of a database.
///
/// The title lives outside the property map and is addressed through the
/// reserved `title` pseudo-property key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    #[serde(default, skip_serializing_if = "DatabaseId::is_empty")]
    pub database_id: DatabaseId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub properties: HashMap<PropertyId, PropertyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// The stored value for a property, if the entry has one.
    pub fn value(&self, property: &PropertyId) -> Option<&PropertyValue> {
        self.properties.get(property)
    }

    /// Decode an entry record from a JSON response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// A document page. Content blocks travel separately (see
/// [`PageWithBlocks`]); the record itself is metadata only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<PageId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Page {
    /// Decode a page record from a JSON response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// A page with its ordered content and the pages that link to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageWithBlocks {
    pub page: Page,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub backlinks: Vec<Page>,
}

impl PageWithBlocks {
    /// Decode a full page response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Pages this page links to, in block order. Duplicate targets are
    /// kept; blank targets (unsaved link drafts) are skipped.
    pub fn linked_pages(&self) -> Vec<&PageId> {
        self.blocks
            .iter()
            .filter_map(|block| match &block.content {
                BlockContent::PageLink { target_page_id, .. } if !target_page_id.is_empty() => {
                    Some(target_page_id)
                }
                _ => None,
            })
            .collect()
    }
}

/// A database with its entries, as served for view rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseWithEntries {
    pub database: Database,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl DatabaseWithEntries {
    /// Decode a database-with-entries response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}
