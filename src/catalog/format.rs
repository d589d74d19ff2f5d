// src/catalog/format.rs
//! Shape-driven display formatting for entry values.
//!
//! Rendering follows the stored shape, not the declared property type, so
//! a column whose type changed after entries were written still renders
//! something sensible. Every shape maps to a string; there is no failure
//! path.

use crate::types::{ObjectValue, PropertyValue};
use serde_json::Value;

/// Renders a stored value to its display string. `None` (the entry has no
/// value for the property) renders as the empty string.
pub fn render_value(value: Option<&PropertyValue>) -> String {
    match value {
        None => String::new(),
        Some(PropertyValue::Checkbox(flag)) => render_flag(*flag),
        Some(PropertyValue::Number(number)) => render_number(*number),
        Some(PropertyValue::Text(text)) => text.clone(),
        Some(PropertyValue::MultiSelect(items)) => render_list(items),
        Some(PropertyValue::Select(object)) => render_object(object),
        Some(PropertyValue::Other(raw)) => render_raw(raw),
    }
}

/// Booleans read as answers, not as code literals.
fn render_flag(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

/// Formats a number the way an editor displayed it: integral values
/// without a decimal point, everything else as-is.
fn render_number(number: f64) -> String {
    if number.fract() == 0.0 && number.is_finite() {
        format!("{:.0}", number)
    } else {
        number.to_string()
    }
}

/// Multi-valued cells join their element names with commas. Elements that
/// are not named objects fall back to their own scalar rendering.
fn render_list(items: &[PropertyValue]) -> String {
    items
        .iter()
        .map(|item| match item {
            PropertyValue::Select(object) => match &object.name {
                Some(name) => name.clone(),
                None => render_object(object),
            },
            other => render_value(Some(other)),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Object-shaped values display their name, else their title, else a
/// compact JSON dump so stale data stays inspectable instead of vanishing.
fn render_object(object: &ObjectValue) -> String {
    if let Some(name) = &object.name {
        return name.clone();
    }
    if let Some(title) = &object.title {
        return title.clone();
    }
    serde_json::to_string(object).unwrap_or_default()
}

/// Catch-all shapes: null renders empty, anything else dumps as JSON.
fn render_raw(raw: &Value) -> String {
    match raw {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
