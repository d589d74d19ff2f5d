// src/view/board.rs
//! Kanban board construction: bucketing entries by a select-like property.
//!
//! Column order is first-seen order over the entry list, never a sort.
//! The database's entry order is the user's manual order, so the board
//! reflects it; re-grouping the same list always yields the same columns.

use crate::catalog::render_value;
use crate::constants::{
    DEFAULT_COLUMN_KEY, DEFAULT_COLUMN_LABEL, UNSORTED_COLUMN_KEY, UNSORTED_COLUMN_LABEL,
    UNTITLED_COLUMN_LABEL,
};
use crate::model::Entry;
use crate::types::{PropertyId, PropertyValue};
use indexmap::map::Entry as Slot;
use indexmap::IndexMap;

/// One column of a kanban board.
///
/// `key` identifies the column (an option id where one exists) and `label`
/// is what the header shows. Items borrow from the entry list the board
/// was built over; multi-select entries appear in several columns.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn<'a> {
    pub key: String,
    pub label: String,
    pub items: Vec<&'a Entry>,
}

/// A database's entries bucketed into ordered kanban columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Board<'a> {
    pub columns: Vec<BoardColumn<'a>>,
}

impl<'a> Board<'a> {
    /// Bucket `entries` by the value they store under `group_by`.
    ///
    /// With no grouping property (or a blank one) every entry lands on a
    /// single `Ungrouped` column. A board is never empty: when grouping
    /// produces no columns at all, whether the entry list is empty or
    /// every entry holds an empty multi-select, a single `Unsorted`
    /// column carries the whole list so callers always have something
    /// to render.
    pub fn build(entries: &'a [Entry], group_by: Option<&PropertyId>) -> Self {
        let Some(group_by) = group_by.filter(|id| !id.is_empty()) else {
            return Self::single_column(DEFAULT_COLUMN_KEY, DEFAULT_COLUMN_LABEL, entries);
        };

        let mut columns: IndexMap<String, BoardColumn<'a>> = IndexMap::new();

        for entry in entries {
            match entry.value(group_by) {
                Some(PropertyValue::MultiSelect(items)) => {
                    // One column per element; an empty list files the
                    // entry nowhere, mirroring how pickers treat it.
                    for item in items {
                        push_to_column(&mut columns, element_key(item), element_label(item), entry);
                    }
                }
                value => {
                    push_to_column(&mut columns, scalar_key(value), scalar_label(value), entry);
                }
            }
        }

        if columns.is_empty() {
            return Self::single_column(UNSORTED_COLUMN_KEY, UNSORTED_COLUMN_LABEL, entries);
        }

        Board {
            columns: columns.into_values().collect(),
        }
    }

    fn single_column(key: &str, label: &str, entries: &'a [Entry]) -> Self {
        Board {
            columns: vec![BoardColumn {
                key: key.to_string(),
                label: label.to_string(),
                items: entries.iter().collect(),
            }],
        }
    }

    /// Look up a column by key.
    pub fn column(&self, key: &str) -> Option<&BoardColumn<'a>> {
        self.columns.iter().find(|column| column.key == key)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total item placements across all columns. At least the entry count
    /// when every entry carries the grouping property.
    pub fn total_items(&self) -> usize {
        self.columns.iter().map(|column| column.items.len()).sum()
    }
}

fn push_to_column<'a>(
    columns: &mut IndexMap<String, BoardColumn<'a>>,
    key: String,
    label: String,
    entry: &'a Entry,
) {
    let column = match columns.entry(key) {
        Slot::Occupied(slot) => slot.into_mut(),
        Slot::Vacant(slot) => {
            log::debug!("Creating board column '{}' (key '{}')", label, slot.key());
            let key = slot.key().clone();
            slot.insert(BoardColumn {
                key,
                label,
                items: Vec::new(),
            })
        }
    };
    column.items.push(entry);
}

/// The identity a grouping value offers: its id, else its name. Only
/// object-shaped values carry one; scalars group under the shared
/// catch-all key.
fn identity_of(value: &PropertyValue) -> Option<&str> {
    match value {
        PropertyValue::Select(object) => object
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| object.name.as_deref().filter(|name| !name.is_empty())),
        _ => None,
    }
}

fn scalar_key(value: Option<&PropertyValue>) -> String {
    value
        .and_then(identity_of)
        .unwrap_or(UNSORTED_COLUMN_KEY)
        .to_string()
}

/// Label for a single-valued column: the value's name, else the rendered
/// literal, else the untitled placeholder.
fn scalar_label(value: Option<&PropertyValue>) -> String {
    if let Some(PropertyValue::Select(object)) = value {
        if let Some(name) = object.name.as_deref().filter(|name| !name.is_empty()) {
            return name.to_string();
        }
    }
    let rendered = render_value(value);
    if rendered.is_empty() {
        UNTITLED_COLUMN_LABEL.to_string()
    } else {
        rendered
    }
}

fn element_key(item: &PropertyValue) -> String {
    identity_of(item).unwrap_or(UNSORTED_COLUMN_KEY).to_string()
}

/// Label for a multi-select element: its name or the untitled placeholder.
/// Elements get no literal fallback; a bare string in a tag list has no
/// name to show.
fn element_label(item: &PropertyValue) -> String {
    match item {
        PropertyValue::Select(object) => object
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(UNTITLED_COLUMN_LABEL)
            .to_string(),
        _ => UNTITLED_COLUMN_LABEL.to_string(),
    }
}
