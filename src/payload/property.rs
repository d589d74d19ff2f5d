// src/payload/property.rs
//! Builds server-ready property payloads from editor drafts.
//!
//! The database editor collects properties as free text: a name, a type
//! picked from a list and, for option-bearing types, a single
//! comma-separated line of option labels. This module turns those drafts
//! into the structured shape the create/update endpoints expect,
//! minting option ids along the way.

use serde::{Deserialize, Serialize};

use super::ids::IdGenerator;
use super::slug::slugify;
use crate::types::{OptionSet, PropertyType, SelectOption};

/// A property as typed into the editor, before any validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Comma-separated option labels. Ignored for types without options.
    #[serde(default)]
    pub options_text: String,
}

impl PropertyDraft {
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            options_text: String::new(),
        }
    }

    pub fn with_options_text(mut self, text: impl Into<String>) -> Self {
        self.options_text = text.into();
        self
    }
}

/// One property in the shape the server accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub position: usize,
    /// Present exactly when the type carries options, even if the set
    /// came out empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionSet>,
}

/// Turns [`PropertyDraft`]s into [`PropertyPayload`]s.
///
/// Borrows its id source so one generator can serve a whole request
/// assembly pass.
#[derive(Clone, Copy)]
pub struct PropertyPayloadBuilder<'a> {
    ids: &'a dyn IdGenerator,
}

impl<'a> PropertyPayloadBuilder<'a> {
    pub fn new(ids: &'a dyn IdGenerator) -> Self {
        Self { ids }
    }

    /// Build the payload for one draft at the given position.
    ///
    /// Option-bearing types get their options line split on commas, each
    /// label trimmed and empty segments dropped, so `"To Do, Done,"`
    /// yields two options. Every option id is slugified from its label.
    pub fn build(&self, draft: &PropertyDraft, position: usize) -> PropertyPayload {
        let options = if draft.property_type.has_options() {
            Some(self.parse_options(&draft.options_text))
        } else {
            None
        };

        PropertyPayload {
            name: draft.name.clone(),
            property_type: draft.property_type,
            position,
            options,
        }
    }

    /// Build payloads for a whole editor form.
    ///
    /// Drafts whose name is blank after trimming are skipped entirely;
    /// the survivors are numbered 0..n in the order they appeared.
    pub fn build_all(&self, drafts: &[PropertyDraft]) -> Vec<PropertyPayload> {
        drafts
            .iter()
            .filter(|draft| !draft.name.trim().is_empty())
            .enumerate()
            .map(|(position, draft)| self.build(draft, position))
            .collect()
    }

    fn parse_options(&self, options_text: &str) -> OptionSet {
        let options = options_text
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(|label| SelectOption::new(slugify(label, self.ids), label))
            .collect();
        OptionSet::new(options)
    }
}
