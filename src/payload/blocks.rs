// src/payload/blocks.rs
//! Prepares page block lists for a full save.
//!
//! The editor replaces a page body wholesale: the client sends every
//! block, the server overwrites whatever it held before. Blocks the
//! server has already seen keep their ids; blocks created in the editor
//! get fresh ones. Position is wholly owned by the client and is simply
//! the index in the submitted list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ids::IdGenerator;
use crate::model::{Block, BlockContent};
use crate::types::BlockId;

/// One block in the shape the replace endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockPayload {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub block_type: String,
    pub position: usize,
    pub data: Map<String, Value>,
}

/// Assign ids and positions to an editor block list.
///
/// Saved blocks keep their id; unsaved ones draw a fresh id from `ids`.
/// Positions are reassigned from scratch as the list index, so deletes
/// and reorders in the editor never leave gaps. Running the result back
/// through this function changes nothing.
pub fn prepare_blocks_for_save(blocks: &[Block], ids: &dyn IdGenerator) -> Vec<BlockPayload> {
    blocks
        .iter()
        .enumerate()
        .map(|(position, block)| {
            let id = match &block.id {
                Some(id) if !id.is_empty() => id.clone(),
                _ => {
                    let fresh = BlockId::new(ids.generate());
                    log::debug!(
                        "Assigning id {} to new {} block at position {}",
                        fresh,
                        block.kind().as_str(),
                        position
                    );
                    fresh
                }
            };

            BlockPayload {
                id,
                block_type: block.content.block_type().to_string(),
                position,
                data: block_data(&block.content),
            }
        })
        .collect()
}

/// The `data` object for one block, keyed the way the wire spells it.
fn block_data(content: &BlockContent) -> Map<String, Value> {
    let mut data = Map::new();
    match content {
        BlockContent::Markdown { text } | BlockContent::Heading { text } => {
            data.insert("text".to_string(), Value::String(text.clone()));
        }
        BlockContent::PageLink {
            target_page_id,
            alias,
        } => {
            data.insert(
                "targetPageId".to_string(),
                Value::String(target_page_id.as_str().to_string()),
            );
            data.insert("alias".to_string(), Value::String(alias.clone()));
        }
        BlockContent::DatabaseView {
            database_id,
            view_id,
        } => {
            data.insert(
                "databaseId".to_string(),
                Value::String(database_id.as_str().to_string()),
            );
            data.insert(
                "viewId".to_string(),
                Value::String(view_id.as_str().to_string()),
            );
        }
    }
    data
}
