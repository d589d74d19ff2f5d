use super::OptionId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared type of a database property.
///
/// A closed vocabulary: every consumer matches exhaustively, so adding a
/// type is a compile-visible event rather than a stringly-typed surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Title,
    Text,
    Number,
    Select,
    MultiSelect,
    Date,
    Checkbox,
}

impl PropertyType {
    /// Get the property type as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Title => "title",
            PropertyType::Text => "text",
            PropertyType::Number => "number",
            PropertyType::Select => "select",
            PropertyType::MultiSelect => "multi_select",
            PropertyType::Date => "date",
            PropertyType::Checkbox => "checkbox",
        }
    }

    /// Whether properties of this type carry an option list.
    pub fn has_options(&self) -> bool {
        matches!(self, PropertyType::Select | PropertyType::MultiSelect)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One choice a select or multi-select property offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: OptionId,
    pub name: String,
}

impl SelectOption {
    pub fn new(id: impl Into<OptionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The ordered option list of a select/multi-select property.
///
/// Kept as a wrapper because the wire nests the array one level down
/// (`"options": {"options": [...]}`), and order is meaningful: it is the
/// order options were authored in and the order pickers display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionSet {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl OptionSet {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.options.iter()
    }

    /// Look up an option by id.
    pub fn get(&self, id: &OptionId) -> Option<&SelectOption> {
        self.options.iter().find(|option| &option.id == id)
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
