// src/view/normalize.rs
//! Rewrites legacy view options onto canonical property ids.
//!
//! Views saved by older clients hold display names in `groupBy` and
//! `coverProperty`. Normalization resolves those through the catalog so
//! downstream consumers only ever see ids. It must run before grouping or
//! projection; both take [`PropertyId`](crate::types::PropertyId) and will
//! not accept a raw reference.

use crate::catalog::PropertyCatalog;
use crate::model::{Property, View, ViewType};
use crate::types::PropertyRef;

/// Normalize a view's property references against a property list.
///
/// Returns a rewritten clone; the stored view is untouched, since the
/// rewrite is a read-path repair and only an explicit save should change
/// what is persisted. `None` passes through so callers can feed an
/// unloaded view straight in.
pub fn normalize_view_options(view: Option<&View>, properties: &[Property]) -> Option<View> {
    view.map(|view| resolve_view_references(view, properties))
}

pub(crate) fn resolve_view_references(view: &View, properties: &[Property]) -> View {
    let catalog = PropertyCatalog::new(properties);
    let mut copy = view.clone();

    match view.view_type {
        ViewType::Kanban => {
            copy.options.group_by = resolve_reference(&catalog, copy.options.group_by);
        }
        ViewType::Gallery => {
            copy.options.cover_property = resolve_reference(&catalog, copy.options.cover_property);
        }
        ViewType::Table => {}
    }

    copy
}

/// Blank references are left as stored; older clients used them for
/// "no selection" and rewriting would invent a property id of "".
fn resolve_reference(
    catalog: &PropertyCatalog<'_>,
    reference: Option<PropertyRef>,
) -> Option<PropertyRef> {
    match reference {
        Some(reference) if !reference.is_empty() => {
            let resolved = catalog.resolve(&reference);
            if resolved.as_str() != reference.as_str() {
                log::debug!(
                    "Normalized view reference '{}' to property id '{}'",
                    reference,
                    resolved
                );
            }
            Some(PropertyRef::from(resolved))
        }
        other => other,
    }
}
