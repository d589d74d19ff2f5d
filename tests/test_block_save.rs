//! The full page save loop: load, edit, prepare, serialize.
//!
//! A page body is replaced wholesale on save, so the client prepares
//! every block each time. These tests decode a page response the way
//! the editor receives it, splice in new blocks, and check the prepared
//! payload: stable ids for persisted blocks, fresh ids for drafts,
//! positions renumbered from list order, and a request body the replace
//! endpoint accepts. Preparing an already-prepared list changes nothing.

use potion_core::{
    prepare_blocks_for_save, Block, BlockContent, BlockKind, PageId, PageWithBlocks,
    ReplaceBlocksRequest, RequestBody, SequenceIdGenerator,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn page_fixture() -> PageWithBlocks {
    let body = r#"{
        "page": {
            "id": "p1",
            "title": "Weekly notes",
            "icon": "📓",
            "createdAt": "2024-03-01T09:30:00Z",
            "updatedAt": "2024-03-08T17:45:00Z"
        },
        "blocks": [
            {"id": "b1", "position": 0, "type": "heading",
             "data": {"text": "Monday"}},
            {"id": "b2", "position": 1, "type": "markdown",
             "data": {"text": "Standup moved to 10:00."}},
            {"id": "b3", "position": 2, "type": "pageLink",
             "data": {"targetPageId": "p-retro", "alias": "Retro notes"}},
            {"id": "b4", "position": 3, "type": "databaseView",
             "data": {"databaseId": "db-tasks", "viewId": "v-board"}}
        ],
        "backlinks": [
            {"id": "p-index", "title": "Index"}
        ]
    }"#;
    PageWithBlocks::from_json(body).expect("page fixture should decode")
}

#[test]
fn test_page_response_decodes_with_typed_blocks() {
    let page = page_fixture();

    assert_eq!(page.page.title, "Weekly notes");
    assert_eq!(page.blocks.len(), 4);
    assert_eq!(page.blocks[0].kind(), BlockKind::Heading);
    assert!(page.blocks.iter().all(Block::is_saved));
    assert_eq!(page.backlinks[0].title, "Index");
}

#[test]
fn test_page_response_tolerates_null_and_absent_block_data() {
    // The server marshals a block whose payload map is nil as
    // "data": null, and rows written before the data column existed
    // omit the key entirely.
    let body = r#"{
        "page": {"id": "p2", "title": "Scratch", "icon": ""},
        "blocks": [
            {"id": "b1", "position": 0, "type": "heading", "data": null},
            {"id": "b2", "position": 1, "type": "markdown"}
        ],
        "backlinks": []
    }"#;

    let page = PageWithBlocks::from_json(body).expect("sparse blocks should decode");

    assert_eq!(
        page.blocks[0].content,
        BlockContent::Heading {
            text: String::new()
        }
    );
    assert_eq!(
        page.blocks[1].content,
        BlockContent::Markdown {
            text: String::new()
        }
    );

    let ids = SequenceIdGenerator::new("blk");
    let payloads = prepare_blocks_for_save(&page.blocks, &ids);
    assert_eq!(
        serde_json::to_value(&payloads[0]).expect("payload serializes"),
        json!({"id": "b1", "type": "heading", "position": 0, "data": {"text": ""}})
    );
}

#[test]
fn test_linked_pages_come_from_page_link_blocks() {
    let mut page = page_fixture();
    page.blocks.push(Block::default_for(BlockKind::PageLink));

    let linked = page.linked_pages();

    // The draft link has no target yet and is skipped.
    assert_eq!(linked, vec![&PageId::new("p-retro")]);
}

#[test]
fn test_prepare_renumbers_after_an_edit() {
    let ids = SequenceIdGenerator::new("blk");
    let mut page = page_fixture();
    page.blocks.remove(1);
    page.blocks.insert(
        1,
        Block::new(BlockContent::Markdown {
            text: "Standup cancelled.".to_string(),
        }),
    );
    page.blocks.push(Block::default_for(BlockKind::Heading));

    let payloads = prepare_blocks_for_save(&page.blocks, &ids);

    let summary: Vec<_> = payloads
        .iter()
        .map(|payload| (payload.id.as_str().to_string(), payload.position))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("b1".to_string(), 0),
            ("blk-1".to_string(), 1),
            ("b3".to_string(), 2),
            ("b4".to_string(), 3),
            ("blk-2".to_string(), 4)
        ]
    );
}

#[test]
fn test_replace_request_body_matches_the_wire_shape() {
    let ids = SequenceIdGenerator::new("blk");
    let blocks = vec![
        Block::new(BlockContent::Heading {
            text: "Plan".to_string(),
        }),
        Block::new(BlockContent::DatabaseView {
            database_id: "db-tasks".into(),
            view_id: "v-board".into(),
        }),
    ];

    let request = ReplaceBlocksRequest::new(prepare_blocks_for_save(&blocks, &ids));
    let body: serde_json::Value =
        serde_json::from_str(&request.to_json().expect("body should serialize"))
            .expect("body should be valid JSON");

    assert_eq!(
        body,
        json!({
            "blocks": [
                {"id": "blk-1", "type": "heading", "position": 0,
                 "data": {"text": "Plan"}},
                {"id": "blk-2", "type": "databaseView", "position": 1,
                 "data": {"databaseId": "db-tasks", "viewId": "v-board"}}
            ]
        })
    );
}

#[test]
fn test_preparing_a_prepared_list_is_a_no_op() {
    let ids = SequenceIdGenerator::new("blk");
    let mut page = page_fixture();
    page.blocks.push(Block::default_for(BlockKind::Markdown));

    let first = prepare_blocks_for_save(&page.blocks, &ids);
    let reloaded: Vec<Block> =
        serde_json::from_str(&serde_json::to_string(&first).expect("payloads serialize"))
            .expect("payloads decode back into blocks");
    let second = prepare_blocks_for_save(&reloaded, &ids);

    assert_eq!(first, second);
}
