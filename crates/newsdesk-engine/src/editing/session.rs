use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::blocks::{BlockError, BlockType, ContentBlock, build_block, canonical_fields};
use crate::content::ArticleContent;

/// The working copy of one article body while it is being authored.
///
/// A session is owned by exactly one editing surface. Every mutation keeps
/// the block list valid: `order` is dense `0..n` in list order and ids are
/// unique, so callers never renumber by hand.
///
/// Operations addressed by id are no-ops when the id is missing and report
/// that through their return value. A stale UI action racing a delete is
/// expected and must not fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSession {
    blocks: Vec<ContentBlock>,
    session_id: String,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// An empty session with a fresh session id.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            session_id: new_id(),
        }
    }

    /// A session hydrated from stored content.
    pub fn from_content(content: ArticleContent) -> Self {
        let mut session = Self::new();
        session.load_initial_content(Some(content));
        session
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn block(&self, id: &str) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Append a new block of `block_type` built from `data`.
    pub fn add_block(&mut self, block_type: BlockType, data: Option<&Value>) -> &ContentBlock {
        let block = build_block(block_type, new_id(), self.blocks.len(), data);
        log::debug!(
            "session {}: add {} block {}",
            self.session_id,
            block_type,
            block.id
        );
        self.blocks.push(block);
        &self.blocks[self.blocks.len() - 1]
    }

    /// Merge `updates` into the block with `id`.
    ///
    /// Top-level keys replace the block's own (`id` and `order` are ignored);
    /// `data` is merged recursively so a partial payload edit keeps sibling
    /// fields. Legacy field names in `data` apply to the field they alias.
    /// Returns `Ok(false)` when no block has `id`. If the update names an
    /// unknown `type` the block is left as it was.
    pub fn update_block(&mut self, id: &str, updates: &Value) -> Result<bool, BlockError> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };

        let current = &self.blocks[index];
        let block_type: BlockType = match updates.get("type").and_then(Value::as_str) {
            Some(ty) => ty.parse()?,
            None => current.block_type(),
        };
        let mut data = current.data.to_value();
        if let Some(patch) = updates.get("data") {
            merge(&mut data, &canonical_fields(block_type, patch));
        }

        let updated = build_block(block_type, current.id.clone(), current.order, Some(&data));
        log::debug!("session {}: update block {}", self.session_id, id);
        self.blocks[index] = updated;
        Ok(true)
    }

    /// Remove the block with `id` and close the gap in `order`.
    pub fn delete_block(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.blocks.remove(index);
        self.renumber();
        log::debug!("session {}: delete block {}", self.session_id, id);
        true
    }

    /// Move the block at `from_index` so it ends up at `to_index`.
    ///
    /// Splice semantics: the block is removed first, then inserted at
    /// `to_index` of the shortened list. Out-of-range indices leave the
    /// session unchanged and return `false`.
    pub fn reorder_blocks(&mut self, from_index: usize, to_index: usize) -> bool {
        if from_index >= self.blocks.len() || to_index >= self.blocks.len() {
            return false;
        }
        let block = self.blocks.remove(from_index);
        self.blocks.insert(to_index, block);
        self.renumber();
        log::debug!(
            "session {}: reorder {} -> {}",
            self.session_id,
            from_index,
            to_index
        );
        true
    }

    /// Swap the block with its predecessor. No-op on the first block.
    pub fn move_block_up(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => self.reorder_blocks(index, index - 1),
            _ => false,
        }
    }

    /// Swap the block with its successor. No-op on the last block.
    pub fn move_block_down(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.blocks.len() => self.reorder_blocks(index, index + 1),
            _ => false,
        }
    }

    /// Append a copy of the block with `id` under a new id.
    ///
    /// The copy goes to the end of the document, not next to the original.
    pub fn duplicate_block(&mut self, id: &str) -> Option<&ContentBlock> {
        let original = self.block(id)?;
        let copy = ContentBlock {
            id: new_id(),
            order: self.blocks.len(),
            data: original.data.clone(),
        };
        log::debug!(
            "session {}: duplicate block {} as {}",
            self.session_id,
            id,
            copy.id
        );
        self.blocks.push(copy);
        self.blocks.last()
    }

    /// Replace every block. The caller is responsible for dense order and
    /// unique ids.
    pub fn set_blocks(&mut self, blocks: Vec<ContentBlock>) {
        self.blocks = blocks;
    }

    /// Hydrate from stored content; `None` leaves the session as it is.
    pub fn load_initial_content(&mut self, content: Option<ArticleContent>) {
        if let Some(content) = content {
            self.set_blocks(content.blocks);
        }
    }

    /// Snapshot of the current document, stamped with the current format version.
    pub fn get_content(&self) -> ArticleContent {
        ArticleContent::new(self.blocks.clone())
    }

    /// Drop all blocks; the session id stays.
    pub fn clear_blocks(&mut self) {
        self.blocks.clear();
    }

    /// Drop all blocks and start over under a new session id.
    pub fn create_new_session(&mut self) {
        let previous = std::mem::replace(&mut self.session_id, new_id());
        self.blocks.clear();
        log::debug!("session {} replaced by {}", previous, self.session_id);
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    fn renumber(&mut self) {
        for (index, block) in self.blocks.iter_mut().enumerate() {
            block.order = index;
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Merge `patch` into `target`: objects merge key by key, anything else replaces.
fn merge(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}
