/*!
 * # Block Editor State
 *
 * An [`EditorSession`] is the single source of truth for an article body while
 * it is being authored. The authoring UI drives it exclusively through the
 * session's operations and converts it back to an [`ArticleContent`] on save.
 *
 * ## Lifecycle
 *
 * - **Create**: [`EditorSession::new`] (empty) or [`EditorSession::from_content`]
 *   (hydrated from a stored article)
 * - **Mutate**: `add_block`, `update_block`, `delete_block`, `reorder_blocks`,
 *   `move_block_up`, `move_block_down`, `duplicate_block`, `set_blocks`
 * - **Save**: [`EditorSession::get_content`] snapshots the body at the current
 *   format version
 * - **Reset**: `clear_blocks` keeps the session id, `create_new_session` does not
 *
 * Sessions are plain owned values. Editing two articles at once means holding
 * two sessions; nothing is shared between them.
 *
 * ```rust
 * use newsdesk_engine::{BlockType, EditorSession};
 * use serde_json::json;
 *
 * let mut session = EditorSession::new();
 * let intro = session.add_block(BlockType::Text, Some(&json!({ "content": "<p>Hi</p>" }))).id.clone();
 * session.add_block(BlockType::Image, Some(&json!({ "imageUrl": "hero.jpg" })));
 * session.move_block_down(&intro);
 *
 * let content = session.get_content();
 * assert_eq!(content.blocks[1].id, intro);
 * assert_eq!(content.blocks[1].order, 1);
 * ```
 *
 * [`ArticleContent`]: crate::content::ArticleContent
 */

pub mod session;

pub use session::EditorSession;
