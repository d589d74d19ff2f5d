// src/view/projection.rs
//! Render-ready projections of (database, view, entries).
//!
//! A projection is plain data a renderer walks without touching the
//! resolution machinery: labels are resolved, cells are formatted, and
//! view option references are already normalized. This keeps the one
//! required ordering (normalize, then consume) in a single place.

use super::board::Board;
use super::normalize::resolve_view_references;
use crate::catalog::format_entry_value;
use crate::model::{Database, Entry, View, ViewType};
use crate::types::PropertyId;

/// One table column: a property id with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    pub id: PropertyId,
    pub label: String,
}

/// One table row: the entry (whose title leads the row) plus one
/// formatted cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<'a> {
    pub entry: &'a Entry,
    pub cells: Vec<String>,
}

/// A database's entries as a grid of formatted cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TableProjection<'a> {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow<'a>>,
}

impl<'a> TableProjection<'a> {
    /// Build the grid: columns in property display order, rows in entry
    /// order, each cell formatted by stored shape.
    pub fn build(database: &Database, entries: &'a [Entry]) -> Self {
        let catalog = database.catalog();
        let columns: Vec<TableColumn> = catalog
            .ordered()
            .into_iter()
            .map(|property| TableColumn {
                id: property.id.clone(),
                label: catalog.label(&property.id),
            })
            .collect();

        log::debug!(
            "Building table projection for '{}': {} columns, {} entries",
            database.title,
            columns.len(),
            entries.len()
        );

        let rows = entries
            .iter()
            .map(|entry| TableRow {
                entry,
                cells: columns
                    .iter()
                    .map(|column| format_entry_value(entry, &column.id))
                    .collect(),
            })
            .collect();

        Self { columns, rows }
    }
}

/// One gallery card: the entry plus its formatted cover value, when a
/// cover property is configured.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryCard<'a> {
    pub entry: &'a Entry,
    pub cover: Option<String>,
}

/// A database's entries as gallery cards.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryProjection<'a> {
    pub cards: Vec<GalleryCard<'a>>,
}

impl<'a> GalleryProjection<'a> {
    pub fn build(entries: &'a [Entry], cover: Option<&PropertyId>) -> Self {
        let cover = cover.filter(|id| !id.is_empty());
        let cards = entries
            .iter()
            .map(|entry| GalleryCard {
                entry,
                cover: cover.map(|id| format_entry_value(entry, id)),
            })
            .collect();
        Self { cards }
    }
}

/// A view's entries shaped for its view type.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewProjection<'a> {
    Table(TableProjection<'a>),
    Board(Board<'a>),
    Gallery(GalleryProjection<'a>),
}

impl ViewProjection<'_> {
    pub fn view_type(&self) -> ViewType {
        match self {
            ViewProjection::Table(_) => ViewType::Table,
            ViewProjection::Board(_) => ViewType::Kanban,
            ViewProjection::Gallery(_) => ViewType::Gallery,
        }
    }
}

/// Project a view over its database's entries.
///
/// The view's option references are normalized first, so name-based
/// references saved by older clients group and cover correctly.
pub fn project_view<'a>(
    database: &Database,
    view: &View,
    entries: &'a [Entry],
) -> ViewProjection<'a> {
    let view = resolve_view_references(view, &database.properties);

    match view.view_type {
        ViewType::Table => ViewProjection::Table(TableProjection::build(database, entries)),
        ViewType::Kanban => {
            let group_by = view
                .options
                .group_by
                .as_ref()
                .map(|reference| PropertyId::new(reference.as_str()));
            ViewProjection::Board(Board::build(entries, group_by.as_ref()))
        }
        ViewType::Gallery => {
            let cover = view
                .options
                .cover_property
                .as_ref()
                .map(|reference| PropertyId::new(reference.as_str()));
            ViewProjection::Gallery(GalleryProjection::build(entries, cover.as_ref()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Property;
    use crate::types::{EntryId, PropertyType, PropertyValue};

    fn database() -> Database {
        Database {
            id: "db1".into(),
            title: "Tasks".to_string(),
            description: String::new(),
            icon: String::new(),
            properties: vec![
                Property::new("p1", "Status", PropertyType::Select),
                Property::new("p2", "Done", PropertyType::Checkbox),
            ],
            views: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn entry(id: &str, title: &str) -> Entry {
        let mut entry = Entry {
            id: EntryId::new(id),
            database_id: "db1".into(),
            title: title.to_string(),
            properties: Default::default(),
            created_at: None,
            updated_at: None,
        };
        entry
            .properties
            .insert(PropertyId::new("p1"), PropertyValue::option("todo", "To Do"));
        entry
            .properties
            .insert(PropertyId::new("p2"), PropertyValue::Checkbox(true));
        entry
    }

    #[test]
    fn test_table_formats_every_cell() {
        let database = database();
        let entries = vec![entry("e1", "Write the report")];
        let table = TableProjection::build(&database, &entries);

        let labels: Vec<_> = table.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Status", "Done"]);
        assert_eq!(table.rows[0].entry.title, "Write the report");
        assert_eq!(table.rows[0].cells, vec!["To Do", "Yes"]);
    }

    #[test]
    fn test_gallery_cover_requires_a_property() {
        let entries = vec![entry("e1", "Card")];
        let without = GalleryProjection::build(&entries, None);
        assert_eq!(without.cards[0].cover, None);

        let cover = PropertyId::new("p1");
        let with = GalleryProjection::build(&entries, Some(&cover));
        assert_eq!(with.cards[0].cover.as_deref(), Some("To Do"));
    }
}
