//! # Block Renderer Dispatch
//!
//! Maps each block to its display tree. This is the only boundary the article
//! page calls, one block at a time in document order.
//!
//! Rendering runs on already-persisted content in front of readers, so it
//! never fails: a block whose type is not recognized logs a warning and
//! renders as [`Node::Empty`]. Construction is where strictness lives, see
//! [`crate::blocks::create_block`].

pub mod kinds;
pub mod node;
pub mod video;

pub use node::Node;

use crate::blocks::{BlockData, ContentBlock, RawBlock, create_block};
use crate::content::StoredContent;
use crate::models::Article;

pub const DEFAULT_ARTICLE_PATH_PREFIX: &str = "/news";

/// Site-level settings the renderers need.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    /// Path that article slugs are appended to when linking, e.g. `/news`.
    pub article_path_prefix: String,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            article_path_prefix: DEFAULT_ARTICLE_PATH_PREFIX.to_string(),
        }
    }
}

impl RenderContext {
    pub fn new(article_path_prefix: impl Into<String>) -> Self {
        Self {
            article_path_prefix: article_path_prefix.into(),
        }
    }

    pub fn article_href(&self, slug: &str) -> String {
        format!("{}/{}", self.article_path_prefix.trim_end_matches('/'), slug)
    }
}

pub fn render_block(block: &ContentBlock, ctx: &RenderContext) -> Node {
    match &block.data {
        BlockData::Text(data) => kinds::text(data),
        BlockData::Quote(data) => kinds::quote(data),
        BlockData::Image(data) => kinds::image(data),
        BlockData::Video(data) => kinds::video(data),
        BlockData::ImageWithText(data) => kinds::image_with_text(data),
        BlockData::Banner(data) => kinds::banner(data),
        BlockData::RelatedNews(data) => kinds::related_news(data, ctx),
    }
}

/// Render a block straight from storage; unknown types degrade to nothing.
pub fn render_raw(raw: &RawBlock, ctx: &RenderContext) -> Node {
    match create_block(&raw.block_type, raw.id.as_str(), raw.order, Some(&raw.data)) {
        Ok(block) => render_block(&block, ctx),
        Err(err) => {
            log::warn!(
                "Not rendering block {:?} at position {}: {err}",
                raw.id,
                raw.order
            );
            Node::Empty
        }
    }
}

/// All blocks of a stored document in ascending `order`.
pub fn render_content(content: &StoredContent, ctx: &RenderContext) -> Node {
    Node::element("div").attr("class", "article-content").children(
        content
            .ordered_blocks()
            .into_iter()
            .map(|raw| render_raw(raw, ctx)),
    )
}

/// The article body, or its excerpt when it has no blocks.
pub fn render_article(article: &Article, ctx: &RenderContext) -> Node {
    if article.has_blocks()
        && let Some(content) = &article.content
    {
        return render_content(content, ctx);
    }

    match article.excerpt.as_deref().filter(|e| !e.trim().is_empty()) {
        Some(excerpt) => Node::element("div")
            .attr("class", "article-excerpt")
            .child(Node::element("p").child(Node::text(excerpt))),
        None => Node::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{BlockType, build_block};
    use serde_json::{Value, json};

    fn html(block_type: BlockType, data: Value) -> String {
        let block = build_block(block_type, "b1", 0, Some(&data));
        render_block(&block, &RenderContext::default()).to_html()
    }

    fn raw(block_type: &str, order: usize, data: Value) -> RawBlock {
        RawBlock {
            id: format!("{block_type}-{order}"),
            order,
            block_type: block_type.to_string(),
            data,
        }
    }

    #[test]
    fn test_text_renders_markup_verbatim() {
        insta::assert_snapshot!(
            html(BlockType::Text, json!({ "content": "<p>Polls <em>open</em> at 8</p>" })),
            @r#"<div class="block-text"><p>Polls <em>open</em> at 8</p></div>"#
        );
    }

    #[test]
    fn test_quote_with_attribution() {
        insta::assert_snapshot!(
            html(
                BlockType::Quote,
                json!({ "text": "We will rebuild", "author": "M. Rahman", "designation": "Mayor" })
            ),
            @r#"<blockquote class="block-quote"><p>We will rebuild</p><footer><cite>M. Rahman</cite>, <span class="designation">Mayor</span></footer></blockquote>"#
        );
    }

    #[test]
    fn test_quote_without_attribution_has_no_footer() {
        insta::assert_snapshot!(
            html(BlockType::Quote, json!({ "text": "Anonymous & proud" })),
            @r#"<blockquote class="block-quote"><p>Anonymous &amp; proud</p></blockquote>"#
        );
    }

    #[test]
    fn test_image_with_caption_and_size() {
        insta::assert_snapshot!(
            html(
                BlockType::Image,
                json!({ "imageUrl": "https://cdn.example/flood.jpg", "alt": "Flooded street", "caption": "Dhaka, Monday", "width": 1200, "height": 800 })
            ),
            @r#"<figure class="block-image"><img src="https://cdn.example/flood.jpg" alt="Flooded street" width="1200" height="800"><figcaption>Dhaka, Monday</figcaption></figure>"#
        );
    }

    #[test]
    fn test_video_url_is_normalized() {
        insta::assert_snapshot!(
            html(BlockType::Video, json!({ "url": "https://youtu.be/dQw4w9WgXcQ" })),
            @r#"<div class="block-video"><iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ" title="Embedded video" allowfullscreen=""></iframe></div>"#
        );
    }

    #[test]
    fn test_image_with_text_left() {
        insta::assert_snapshot!(
            html(
                BlockType::ImageWithText,
                json!({ "imageUrl": "a.jpg", "imagePosition": "left", "content": "<p>Body</p>" })
            ),
            @r#"<div class="block-image-with-text image-left"><figure><img src="a.jpg" alt=""></figure><div class="block-image-with-text__text"><p>Body</p></div></div>"#
        );
    }

    #[test]
    fn test_image_with_text_unknown_position_mirrors_right() {
        insta::assert_snapshot!(
            html(
                BlockType::ImageWithText,
                json!({ "url": "a.jpg", "layout": "top", "content": "<p>Body</p>", "caption": "Cap" })
            ),
            @r#"<div class="block-image-with-text image-right"><div class="block-image-with-text__text"><p>Body</p></div><figure><img src="a.jpg" alt="Cap"><figcaption>Cap</figcaption></figure></div>"#
        );
    }

    #[test]
    fn test_image_with_text_without_image_keeps_text() {
        insta::assert_snapshot!(
            html(BlockType::ImageWithText, json!({ "content": "<p>Only text</p>" })),
            @r#"<div class="block-image-with-text image-right"><div class="block-image-with-text__text"><p>Only text</p></div></div>"#
        );
    }

    #[test]
    fn test_banner_with_and_without_link() {
        insta::assert_snapshot!(
            html(BlockType::Banner, json!({ "imageUrl": "ad.png", "linkUrl": "https://sponsor.example" })),
            @r#"<div class="block-banner"><a href="https://sponsor.example"><img src="ad.png" alt="Banner"></a></div>"#
        );
        insta::assert_snapshot!(
            html(BlockType::Banner, json!({ "imageUrl": "ad.png" })),
            @r#"<div class="block-banner"><img src="ad.png" alt="Banner"></div>"#
        );
    }

    #[test]
    fn test_related_news_links_use_prefix() {
        let block = build_block(
            BlockType::RelatedNews,
            "b1",
            0,
            Some(&json!({
                "title": "More on this",
                "articles": [{ "id": 1, "title": "Dam opens", "slug": "dam-opens", "excerpt": "Water levels rise" }]
            })),
        );

        insta::assert_snapshot!(
            render_block(&block, &RenderContext::new("/en/news/")).to_html(),
            @r#"<section class="block-related-news"><h3>More on this</h3><ul><li><a href="/en/news/dam-opens"><span class="title">Dam opens</span><p>Water levels rise</p></a></li></ul></section>"#
        );
    }

    #[test]
    fn test_related_news_without_articles_renders_empty_list() {
        insta::assert_snapshot!(
            html(BlockType::RelatedNews, json!({})),
            @r#"<section class="block-related-news"><h3>Related News</h3><ul></ul></section>"#
        );
    }

    #[test]
    fn test_blocks_without_primary_url_render_nothing() {
        for ty in [BlockType::Image, BlockType::Video, BlockType::Banner] {
            let block = build_block(ty, "b1", 0, None);
            assert_eq!(render_block(&block, &RenderContext::default()), Node::Empty);
        }
        let quote = build_block(BlockType::Quote, "b1", 0, None);
        assert_eq!(render_block(&quote, &RenderContext::default()), Node::Empty);
    }

    #[test]
    fn test_unknown_raw_block_renders_nothing() {
        let node = render_raw(&raw("bogus", 0, json!({ "x": 1 })), &RenderContext::default());

        assert_eq!(node, Node::Empty);
        assert_eq!(node.to_html(), "");
    }

    #[test]
    fn test_unknown_raw_block_logs_a_warning() {
        crate::tests::record_logs();

        render_raw(&raw("liveblog", 6, json!({})), &RenderContext::default());

        let warnings = crate::tests::logged(log::Level::Warn, "\"liveblog-6\"");
        assert_eq!(
            warnings,
            vec![r#"Not rendering block "liveblog-6" at position 6: Unknown block type: "liveblog""#]
        );
    }

    #[test]
    fn test_content_skips_unknown_blocks_and_follows_order() {
        let content = StoredContent {
            blocks: vec![
                raw("text", 2, json!({ "content": "<p>third</p>" })),
                raw("bogus", 1, json!({})),
                raw("text", 0, json!({ "content": "<p>first</p>" })),
            ],
            version: "1.0".to_string(),
        };

        insta::assert_snapshot!(
            render_content(&content, &RenderContext::default()).to_html(),
            @r#"<div class="article-content"><div class="block-text"><p>first</p></div><div class="block-text"><p>third</p></div></div>"#
        );
    }
}
