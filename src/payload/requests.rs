// src/payload/requests.rs
//! Request bodies for the workspace HTTP API.
//!
//! These are the write-side counterparts of the records in
//! [`crate::model`]: what a client submits rather than what the server
//! returns. Serialization is the contract here, so every body can render
//! itself to a JSON string.

use std::collections::HashMap;

use serde::Serialize;

use super::blocks::BlockPayload;
use super::property::PropertyPayload;
use crate::error::Result;
use crate::model::{Page, ViewOptions, ViewType};
use crate::types::{PageId, PropertyId, PropertyValue};

/// Anything that can be posted as a JSON request body.
pub trait RequestBody: Serialize {
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Body for creating a database together with its schema and views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatabaseRequest {
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,
    pub properties: Vec<PropertyPayload>,
    pub views: Vec<ViewPayload>,
}

impl RequestBody for CreateDatabaseRequest {}

/// One view in a database create or update body. Position is assigned
/// by the server from list order.
#[derive(Debug, Clone, Serialize)]
pub struct ViewPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub view_type: ViewType,
    pub options: ViewOptions,
}

impl ViewPayload {
    pub fn new(name: impl Into<String>, view_type: ViewType) -> Self {
        Self {
            name: name.into(),
            view_type,
            options: ViewOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ViewOptions) -> Self {
        self.options = options;
        self
    }
}

/// Body for creating one entry in a database. The value map travels
/// under `values` on the wire; the server stores it as the entry's
/// properties.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEntryRequest {
    pub title: String,
    pub values: HashMap<PropertyId, PropertyValue>,
}

impl RequestBody for CreateEntryRequest {}

/// Body for replacing a page's entire block list.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaceBlocksRequest {
    pub blocks: Vec<BlockPayload>,
}

impl ReplaceBlocksRequest {
    pub fn new(blocks: Vec<BlockPayload>) -> Self {
        Self { blocks }
    }
}

impl RequestBody for ReplaceBlocksRequest {}

/// Body for creating a page, optionally under a parent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<PageId>,
}

impl RequestBody for CreatePageRequest {}

/// Body for updating a page. The endpoint overwrites title, icon, and
/// parent wholesale, so callers start from the loaded page and edit
/// from there. A `None` parent serializes as an explicit null and
/// marks a root page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageRequest {
    pub title: String,
    pub icon: String,
    pub parent_id: Option<PageId>,
}

impl UpdatePageRequest {
    /// Seed the body with the page's current fields.
    pub fn for_page(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            icon: page.icon.clone(),
            parent_id: page.parent_id.clone(),
        }
    }
}

impl RequestBody for UpdatePageRequest {}
