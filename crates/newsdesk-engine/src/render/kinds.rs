//! One renderer per block variant. Each is a pure function of its payload.

use crate::blocks::{
    BannerData, ImageData, ImagePosition, ImageWithTextData, QuoteData, RelatedArticle,
    RelatedNewsData, TextData, VideoData,
};

use super::{Node, RenderContext, video};

const DEFAULT_RELATED_TITLE: &str = "Related News";

pub fn text(data: &TextData) -> Node {
    Node::element("div")
        .attr("class", "block-text")
        .child(Node::raw(data.content.as_str()))
}

pub fn quote(data: &QuoteData) -> Node {
    if data.text.is_empty() {
        return Node::Empty;
    }

    let author = non_empty(&data.author).map(|a| Node::element("cite").child(Node::text(a)));
    let designation = non_empty(&data.designation)
        .map(|d| Node::element("span").attr("class", "designation").child(Node::text(d)));

    let footer = match (author, designation) {
        (None, None) => Node::Empty,
        (Some(author), Some(designation)) => Node::element("footer")
            .child(author)
            .child(Node::text(", "))
            .child(designation),
        (author, designation) => Node::element("footer")
            .children(author)
            .children(designation),
    };

    Node::element("blockquote")
        .attr("class", "block-quote")
        .child(Node::element("p").child(Node::text(data.text.as_str())))
        .child(footer)
}

pub fn image(data: &ImageData) -> Node {
    if data.image_url.is_empty() {
        return Node::Empty;
    }

    Node::element("figure")
        .attr("class", "block-image")
        .child(
            Node::element("img")
                .attr("src", data.image_url.as_str())
                .attr("alt", data.alt.as_deref().unwrap_or_default())
                .attr_opt("width", data.width)
                .attr_opt("height", data.height),
        )
        .child(caption(&data.caption))
}

pub fn video(data: &VideoData) -> Node {
    if data.url.trim().is_empty() {
        return Node::Empty;
    }

    Node::element("div").attr("class", "block-video").child(
        Node::element("iframe")
            .attr("src", video::embed_url(&data.url))
            .attr("title", "Embedded video")
            .attr("allowfullscreen", ""),
    )
}

pub fn image_with_text(data: &ImageWithTextData) -> Node {
    let figure = if data.image_url.is_empty() {
        Node::Empty
    } else {
        Node::element("figure")
            .child(
                Node::element("img")
                    .attr("src", data.image_url.as_str())
                    .attr("alt", data.image_caption.as_deref().unwrap_or_default())
                    .attr_opt("width", data.image_width)
                    .attr_opt("height", data.image_height),
            )
            .child(caption(&data.image_caption))
    };
    let text = Node::element("div")
        .attr("class", "block-image-with-text__text")
        .child(Node::raw(data.content.as_str()));

    let (class, parts) = match data.image_position {
        ImagePosition::Left => ("block-image-with-text image-left", [figure, text]),
        ImagePosition::Right => ("block-image-with-text image-right", [text, figure]),
    };

    Node::element("div").attr("class", class).children(parts)
}

pub fn banner(data: &BannerData) -> Node {
    if data.image_url.is_empty() {
        return Node::Empty;
    }

    let img = Node::element("img")
        .attr("src", data.image_url.as_str())
        .attr("alt", "Banner");
    let inner = match non_empty(&data.link_url) {
        Some(link) => Node::element("a").attr("href", link).child(img),
        None => img,
    };

    Node::element("div").attr("class", "block-banner").child(inner)
}

pub fn related_news(data: &RelatedNewsData, ctx: &RenderContext) -> Node {
    let title = non_empty(&data.title).unwrap_or(DEFAULT_RELATED_TITLE);

    Node::element("section")
        .attr("class", "block-related-news")
        .child(Node::element("h3").child(Node::text(title)))
        .child(Node::element("ul").children(data.articles.iter().map(|a| related_item(a, ctx))))
}

fn related_item(article: &RelatedArticle, ctx: &RenderContext) -> Node {
    let thumbnail = non_empty(&article.image_url)
        .map(|src| Node::element("img").attr("src", src).attr("alt", article.title.as_str()));
    let excerpt = non_empty(&article.excerpt).map(|e| Node::element("p").child(Node::text(e)));
    let published = non_empty(&article.published_at)
        .map(|at| Node::element("time").attr("datetime", at).child(Node::text(at)));

    Node::element("li").child(
        Node::element("a")
            .attr("href", ctx.article_href(&article.slug))
            .children(thumbnail)
            .child(
                Node::element("span")
                    .attr("class", "title")
                    .child(Node::text(article.title.as_str())),
            )
            .children(excerpt)
            .children(published),
    )
}

fn caption(text: &Option<String>) -> Node {
    match non_empty(text) {
        Some(text) => Node::element("figcaption").child(Node::text(text)),
        None => Node::Empty,
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
