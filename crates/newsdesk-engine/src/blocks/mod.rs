//! # Block Type Registry
//!
//! The closed set of article body blocks and their payload shapes.
//!
//! - **`types`**: `BlockType`, the per-variant payload structs, `ContentBlock` and its
//!   loose wire form `RawBlock`
//! - **`registry`**: `create_block`, which builds a fully populated block from
//!   partial JSON and is the single place unknown types are rejected
//!
//! ```rust
//! use newsdesk_engine::blocks::{create_block, BlockType};
//! use serde_json::json;
//!
//! let block = create_block("image", "b1", 0, Some(&json!({ "url": "a.jpg" }))).unwrap();
//! assert_eq!(block.block_type(), BlockType::Image);
//! assert!(create_block("bogus", "b2", 1, None).is_err());
//! ```

pub mod registry;
pub mod types;

pub use registry::{build_block, build_data, canonical_fields, create_block};
pub use types::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("Unknown block type: {0:?}")]
    UnknownBlockType(String),
}
