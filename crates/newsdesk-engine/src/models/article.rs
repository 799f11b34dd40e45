use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::content::{ArticleContent, StoredContent};

/// Response/request wrapper used by the articles API: `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

/// An article as the persistence API sees it.
///
/// Only the fields the block core needs are typed. Everything else (category,
/// tags, author, language, ...) is kept in `extra` and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<StoredContent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Replace the body with a document produced by the editor.
    pub fn set_content(&mut self, content: ArticleContent) {
        self.content = Some(content.into());
    }

    /// Whether there are blocks to render instead of the excerpt.
    pub fn has_blocks(&self) -> bool {
        self.content.as_ref().is_some_and(|c| !c.is_empty())
    }
}
