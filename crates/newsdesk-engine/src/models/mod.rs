pub mod article;
pub mod article_file;
pub mod article_index;

pub use article::{Article, Envelope};
pub use article_file::ArticleFile;
pub use article_index::{ArticleEntry, ArticleIndex};
