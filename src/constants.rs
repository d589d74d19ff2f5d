// src/constants.rs
//! Domain constants that define the fixed vocabulary of the workspace model.
//!
//! Each constant is named for the domain concept it pins down, not its
//! technical role. Reading these constants should tell you the story of
//! how the model behaves at its edges: what the implicit title column is
//! called, where unsortable entries land, how long a generated slug may be.

// ---------------------------------------------------------------------------
// Property catalog
// ---------------------------------------------------------------------------

/// Key of the implicit title pseudo-property.
///
/// Every entry carries a title outside its property map. Views address it
/// with this reserved key, so no real property may claim it.
pub const TITLE_PROPERTY: &str = "title";

// ---------------------------------------------------------------------------
// Board grouping fallbacks
// ---------------------------------------------------------------------------

/// Column key used when a board has no grouping property configured.
pub const DEFAULT_COLUMN_KEY: &str = "default";

/// Column label shown when a board has no grouping property configured.
pub const DEFAULT_COLUMN_LABEL: &str = "Ungrouped";

/// Column key for entries whose grouping value carries no usable identity.
pub const UNSORTED_COLUMN_KEY: &str = "unsorted";

/// Column label for the catch-all column on an otherwise empty board.
pub const UNSORTED_COLUMN_LABEL: &str = "Unsorted";

/// Column label for a grouping value that renders to nothing.
pub const UNTITLED_COLUMN_LABEL: &str = "Untitled";

// ---------------------------------------------------------------------------
// Slug generation
// ---------------------------------------------------------------------------

/// Maximum length of a slug derived from an option label.
///
/// Longer labels are truncated so option ids stay short enough to read in
/// payloads and URLs. Labels that normalize to nothing fall back to a
/// generated id instead, which is exempt from this cap.
pub const SLUG_MAX_LENGTH: usize = 24;
