// src/lib.rs
//! potion-core library — the data model of a personal knowledge-base
//! workspace: pages built from typed blocks, databases with typed
//! properties, and the views that present them.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `CoreError`, `Result`
//! - **Domain model** — `Page`, `Block`, `Database`, `Entry`, `View`
//! - **Domain types** — `PageId`, `PropertyId`, `PropertyValue`, `PropertyRef`, etc.
//! - **Property catalog** — `PropertyCatalog`, `format_entry_value`
//! - **Views** — `Board`, `normalize_view_options`, `project_view`
//! - **Payload assembly** — `PropertyPayloadBuilder`, `prepare_blocks_for_save`, request bodies

// Internal modules
mod catalog;
mod constants;
mod error;
mod model;
mod payload;
mod types;
mod view;

// --- Error Handling ---
pub use crate::error::{CoreError, Result};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockContent, BlockKind, Database, DatabaseWithEntries, Entry, Page, PageWithBlocks,
    Property, View, ViewOptions, ViewType,
};

// --- Domain Types ---
pub use crate::types::{
    BlockId, DatabaseId, EntryId, Id, ObjectValue, OptionId, OptionSet, PageId, PropertyId,
    PropertyRef, PropertyType, PropertyValue, SelectOption, ViewId,
};

// --- Property Catalog ---
pub use crate::catalog::{format_entry_value, render_value, PropertyCatalog};

// --- Views ---
pub use crate::view::{
    normalize_view_options, project_view, Board, BoardColumn, GalleryCard, GalleryProjection,
    TableColumn, TableProjection, TableRow, ViewProjection,
};

// --- Payload Assembly ---
pub use crate::payload::{
    prepare_blocks_for_save, slugify, BlockPayload, CreateDatabaseRequest, CreateEntryRequest,
    CreatePageRequest, IdGenerator, PropertyDraft, PropertyPayload, PropertyPayloadBuilder,
    ReplaceBlocksRequest, RequestBody, SequenceIdGenerator, UpdatePageRequest, UuidIdGenerator,
    ViewPayload,
};

// --- Constants ---
pub use crate::constants::TITLE_PROPERTY;
