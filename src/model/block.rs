use crate::types::{BlockId, DatabaseId, PageId, ViewId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The payload of a page content block.
///
/// A closed union: the editor, the save path and the renderer all match
/// exhaustively, so a new block kind cannot be half-wired. On the wire
/// this is the `type` discriminator plus a `data` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum BlockContent {
    #[serde(rename = "markdown")]
    Markdown {
        #[serde(default)]
        text: String,
    },
    #[serde(rename = "heading")]
    Heading {
        #[serde(default)]
        text: String,
    },
    #[serde(rename = "pageLink", rename_all = "camelCase")]
    PageLink {
        #[serde(default)]
        target_page_id: PageId,
        #[serde(default)]
        alias: String,
    },
    #[serde(rename = "databaseView", rename_all = "camelCase")]
    DatabaseView {
        #[serde(default)]
        database_id: DatabaseId,
        #[serde(default)]
        view_id: ViewId,
    },
}

/// The payload-free discriminant of a block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Markdown,
    Heading,
    PageLink,
    DatabaseView,
}

impl BlockKind {
    /// Every kind, in the order editors offer them.
    pub const ALL: [BlockKind; 4] = [
        BlockKind::Markdown,
        BlockKind::Heading,
        BlockKind::PageLink,
        BlockKind::DatabaseView,
    ];

    /// The wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Markdown => "markdown",
            BlockKind::Heading => "heading",
            BlockKind::PageLink => "pageLink",
            BlockKind::DatabaseView => "databaseView",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BlockContent {
    /// Which kind of block this payload belongs to.
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Markdown { .. } => BlockKind::Markdown,
            BlockContent::Heading { .. } => BlockKind::Heading,
            BlockContent::PageLink { .. } => BlockKind::PageLink,
            BlockContent::DatabaseView { .. } => BlockKind::DatabaseView,
        }
    }

    /// The wire name of this block's type.
    pub fn block_type(&self) -> &'static str {
        self.kind().as_str()
    }

    /// The content a freshly inserted block of the given kind starts with.
    ///
    /// Headings seed a placeholder so the new block is visible; link and
    /// view blocks start with unset references the user fills in.
    pub fn default_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Markdown => BlockContent::Markdown {
                text: String::new(),
            },
            BlockKind::Heading => BlockContent::Heading {
                text: "New heading".to_string(),
            },
            BlockKind::PageLink => BlockContent::PageLink {
                target_page_id: PageId::default(),
                alias: String::new(),
            },
            BlockKind::DatabaseView => BlockContent::DatabaseView {
                database_id: DatabaseId::default(),
                view_id: ViewId::default(),
            },
        }
    }
}

/// A block as the editor holds it: content plus identity and position,
/// both unset until the block has been through a save.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BlockId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(flatten)]
    pub content: BlockContent,
}

/// The persisted shape, with `data` nullable: the server marshals a
/// block whose payload map is nil as `"data": null`, and old rows may
/// lack the key entirely. Only the `type` discriminator is required.
#[derive(Deserialize)]
struct BlockWire {
    #[serde(default)]
    id: Option<BlockId>,
    #[serde(default)]
    position: Option<usize>,
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    data: Option<Map<String, Value>>,
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = BlockWire::deserialize(deserializer)?;
        let tagged = serde_json::json!({
            "type": wire.block_type,
            "data": Value::Object(wire.data.unwrap_or_default()),
        });
        let content = BlockContent::deserialize(tagged).map_err(serde::de::Error::custom)?;
        Ok(Block {
            id: wire.id,
            position: wire.position,
            content,
        })
    }
}

impl Block {
    /// A new draft block, not yet saved.
    pub fn new(content: BlockContent) -> Self {
        Self {
            id: None,
            position: None,
            content,
        }
    }

    /// A new draft block with the default content for `kind`.
    pub fn default_for(kind: BlockKind) -> Self {
        Self::new(BlockContent::default_for(kind))
    }

    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }

    /// Whether this block already has a persisted identity.
    pub fn is_saved(&self) -> bool {
        matches!(&self.id, Some(id) if !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_is_type_plus_data() {
        let block = Block {
            id: Some(BlockId::new("b1")),
            position: Some(2),
            content: BlockContent::PageLink {
                target_page_id: PageId::new("p9"),
                alias: "See also".to_string(),
            },
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["id"], "b1");
        assert_eq!(json["position"], 2);
        assert_eq!(json["type"], "pageLink");
        assert_eq!(json["data"]["targetPageId"], "p9");
        assert_eq!(json["data"]["alias"], "See also");
    }

    #[test]
    fn test_decodes_persisted_blocks_with_missing_fields() {
        let block: Block = serde_json::from_str(r#"{"type":"heading","data":{}}"#).unwrap();
        assert_eq!(block.id, None);
        assert_eq!(block.position, None);
        assert_eq!(
            block.content,
            BlockContent::Heading {
                text: String::new()
            }
        );
        assert!(!block.is_saved());
    }

    #[test]
    fn test_decodes_blocks_with_absent_or_null_data() {
        let absent: Block = serde_json::from_str(r#"{"id":"b1","type":"heading"}"#).unwrap();
        assert_eq!(absent.id, Some(BlockId::new("b1")));
        assert_eq!(
            absent.content,
            BlockContent::Heading {
                text: String::new()
            }
        );

        let null_data: Block =
            serde_json::from_str(r#"{"id":"b2","position":1,"type":"pageLink","data":null}"#)
                .unwrap();
        assert_eq!(null_data.position, Some(1));
        assert_eq!(
            null_data.content,
            BlockContent::PageLink {
                target_page_id: PageId::default(),
                alias: String::new()
            }
        );
    }

    #[test]
    fn test_empty_id_is_not_saved() {
        let block: Block =
            serde_json::from_str(r#"{"id":"","type":"markdown","data":{"text":"hi"}}"#).unwrap();
        assert!(!block.is_saved());
    }

    #[test]
    fn test_default_content_per_kind() {
        assert_eq!(
            BlockContent::default_for(BlockKind::Heading),
            BlockContent::Heading {
                text: "New heading".to_string()
            }
        );
        let link = Block::default_for(BlockKind::PageLink);
        assert_eq!(
            link.content,
            BlockContent::PageLink {
                target_page_id: PageId::default(),
                alias: String::new()
            }
        );
        assert!(!link.is_saved());
        for kind in BlockKind::ALL {
            assert_eq!(BlockContent::default_for(kind).kind(), kind);
        }
    }
}
