//! Persisted shape of an article body: ordered blocks plus a format version.
//!
//! Two views of the same JSON exist. [`ArticleContent`] is strict and typed,
//! used on the authoring side where an unknown block must be rejected.
//! [`StoredContent`] keeps blocks as [`RawBlock`]s so a reader-facing page can
//! render what it understands and skip the rest.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::blocks::{BlockError, ContentBlock, RawBlock};

/// Format tag stamped on every document produced by the editor.
pub const CONTENT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleContent {
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
    #[serde(default)]
    pub version: String,
}

impl ArticleContent {
    /// A fresh document at the current format version.
    pub fn new(blocks: Vec<ContentBlock>) -> Self {
        Self {
            blocks,
            version: CONTENT_VERSION.to_string(),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks ordered by their `order` field (stable for equal values).
    pub fn sorted(mut self) -> Self {
        self.blocks.sort_by_key(|b| b.order);
        self
    }
}

impl Default for ArticleContent {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Reading-side document. Decoding never fails because of a single block:
/// entries are read one at a time with [`RawBlock::from_loose`] and entries
/// that are not objects are dropped with a warning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredContent {
    #[serde(default, deserialize_with = "loose_blocks")]
    pub blocks: Vec<RawBlock>,
    #[serde(default)]
    pub version: String,
}

impl StoredContent {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks in ascending `order`.
    pub fn ordered_blocks(&self) -> Vec<&RawBlock> {
        let mut blocks: Vec<&RawBlock> = self.blocks.iter().collect();
        blocks.sort_by_key(|b| b.order);
        blocks
    }

    /// Strict conversion for hydrating an editor. The version is kept as stored.
    pub fn into_article_content(self) -> Result<ArticleContent, BlockError> {
        let blocks = self
            .blocks
            .into_iter()
            .map(ContentBlock::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ArticleContent {
            blocks,
            version: self.version,
        })
    }
}

fn loose_blocks<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<RawBlock>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let Some(entries) = value.as_array() else {
        if !value.is_null() {
            log::warn!("Ignoring stored blocks: expected an array, got {value}");
        }
        return Ok(Vec::new());
    };

    Ok(entries
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let block = RawBlock::from_loose(entry, position);
            if block.is_none() {
                log::warn!("Skipping stored block at position {position}: not an object");
            }
            block
        })
        .collect())
}

impl From<ArticleContent> for StoredContent {
    fn from(content: ArticleContent) -> Self {
        Self {
            blocks: content.blocks.into_iter().map(RawBlock::from).collect(),
            version: content.version,
        }
    }
}
