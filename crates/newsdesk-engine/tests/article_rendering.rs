//! Rendering stored articles the way the article page does: one block at a
//! time, in document order, degrading on content it does not understand.

use newsdesk_engine::{
    Article, ArticleStore, Envelope, FsArticleStore, Node, RenderContext, StoredContent,
    render_article,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn load_fixture(name: &str) -> Article {
    let json = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.json",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let envelope: Envelope<Article> = serde_json::from_str(&json).unwrap();
    envelope.into_inner()
}

#[test]
fn test_fixture_article_renders_in_order_without_unknown_block() {
    let article = load_fixture("flood-relief");

    let html = render_article(&article, &RenderContext::default()).to_html();

    insta::assert_snapshot!(
        html,
        @r#"<div class="article-content"><div class="block-text"><p>Aid convoys reached <strong>Kurigram</strong> on Monday.</p></div><blockquote class="block-quote"><p>Every hour counts</p><footer><cite>R. Karim</cite>, <span class="designation">Relief coordinator</span></footer></blockquote><section class="block-related-news"><h3>Related News</h3><ul><li><a href="/news/rivers-danger"><span class="title">Rivers above danger level</span><p>Six rivers rose overnight.</p></a></li></ul></section><div class="block-video"><iframe src="https://www.youtube.com/embed/abc123XYZ_-" title="Embedded video" allowfullscreen=""></iframe></div></div>"#
    );
}

#[test]
fn test_fixture_article_plain_text_projection() {
    let article = load_fixture("flood-relief");

    let lines = render_article(&article, &RenderContext::default()).text_lines();

    assert_eq!(
        lines,
        vec![
            "Aid convoys reached Kurigram on Monday.",
            "Every hour counts",
            "R. Karim, Relief coordinator",
            "Related News",
            "Rivers above danger level",
            "Six rivers rose overnight.",
        ]
    );
}

#[test]
fn test_malformed_blocks_drop_out_and_the_rest_renders() {
    let article = load_fixture("market-close");

    let html = render_article(&article, &RenderContext::default()).to_html();

    insta::assert_snapshot!(
        html,
        @r#"<div class="article-content"><div class="block-text"><p>Stocks closed higher on Thursday.</p></div><blockquote class="block-quote"><p>A steady week for traders</p></blockquote><div class="block-text"><p>Turnover rose for a third day.</p></div></div>"#
    );
}

#[test]
fn test_malformed_blocks_keep_their_readable_fields() {
    let content = load_fixture("market-close").content.unwrap();

    let ids: Vec<&str> = content.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["m0", "7", "m2", "m3", "m4"]);
    assert_eq!(content.blocks[2].order, 2);
}

#[test]
fn test_store_serves_article_with_malformed_blocks() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(
        format!("{}/tests/fixtures/market-close.json", env!("CARGO_MANIFEST_DIR")),
        dir.path().join("market-close.json"),
    )
    .unwrap();
    let store = FsArticleStore::new(dir.path());

    let article = store.get("market-close").unwrap().unwrap();

    assert_eq!(
        render_article(&article, &RenderContext::default()).text_lines(),
        vec![
            "Stocks closed higher on Thursday.",
            "A steady week for traders",
            "Turnover rose for a third day.",
        ]
    );
}

#[test]
fn test_fixture_keeps_unrelated_article_fields() {
    let article = load_fixture("flood-relief");

    assert_eq!(article.extra["language"], json!("en"));
    assert_eq!(article.extra["category"]["name"], json!("National"));
}

#[test]
fn test_article_without_content_falls_back_to_excerpt() {
    let mut article = Article::new("brief", "Brief");
    article.excerpt = Some("Markets closed higher.".to_string());

    insta::assert_snapshot!(
        render_article(&article, &RenderContext::default()).to_html(),
        @r#"<div class="article-excerpt"><p>Markets closed higher.</p></div>"#
    );

    article.content = Some(StoredContent::default());
    assert_eq!(
        render_article(&article, &RenderContext::default()).text_content(),
        "Markets closed higher."
    );
}

#[test]
fn test_article_without_content_or_excerpt_renders_nothing() {
    let article = Article::new("empty", "Empty");
    assert_eq!(render_article(&article, &RenderContext::default()), Node::Empty);
}

#[test]
fn test_strict_hydration_rejects_fixture_with_unknown_block() {
    let article = load_fixture("flood-relief");

    let err = article.content.unwrap().into_article_content().unwrap_err();
    assert_eq!(err.to_string(), r#"Unknown block type: "poll""#);
}

#[test]
fn test_store_round_trip_preserves_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsArticleStore::new(dir.path());
    let article = load_fixture("flood-relief");

    store.put(&article).unwrap();
    let reloaded = store.get("flood-relief").unwrap().unwrap();

    let ctx = RenderContext::new("/bn/khobor");
    assert_eq!(reloaded, article);
    assert_eq!(
        render_article(&reloaded, &ctx).to_html(),
        render_article(&article, &ctx).to_html()
    );
}
