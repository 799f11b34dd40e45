pub mod blocks;
pub mod content;
pub mod editing;
pub mod io;
pub mod models;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use blocks::*;
pub use content::*;
pub use editing::EditorSession;
pub use io::*;
pub use models::{article::*, article_file::*, article_index::*};
pub use render::{Node, RenderContext, render_article, render_block, render_content, render_raw};
