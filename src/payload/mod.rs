// src/payload/mod.rs
//! Write-side payload assembly.
//!
//! Everything the client sends to the server is built here: property
//! schemas from editor drafts, block lists prepared for a full-page
//! save, and the request bodies that wrap them. Id minting is injected
//! through [`IdGenerator`] so the write path stays deterministic under
//! test.

mod blocks;
mod ids;
mod property;
mod requests;
mod slug;

pub use blocks::{prepare_blocks_for_save, BlockPayload};
pub use ids::{IdGenerator, SequenceIdGenerator, UuidIdGenerator};
pub use property::{PropertyDraft, PropertyPayload, PropertyPayloadBuilder};
pub use requests::{
    CreateDatabaseRequest, CreateEntryRequest, CreatePageRequest, ReplaceBlocksRequest,
    RequestBody, UpdatePageRequest, ViewPayload,
};
pub use slug::slugify;
