use serde_json::{Map, Value};

use super::types::*;
use super::BlockError;

// Accepted names per payload field. The first name is the one written back.
const TEXT_CONTENT: &[&str] = &["content", "text"];
const QUOTE_TEXT: &[&str] = &["text", "quote"];
const QUOTE_AUTHOR: &[&str] = &["author", "source"];
const QUOTE_DESIGNATION: &[&str] = &["designation"];
const IMAGE_URL: &[&str] = &["imageUrl", "url", "src"];
const IMAGE_ALT: &[&str] = &["alt", "altText"];
const IMAGE_CAPTION: &[&str] = &["caption"];
const IMAGE_WIDTH: &[&str] = &["width"];
const IMAGE_HEIGHT: &[&str] = &["height"];
const VIDEO_URL: &[&str] = &["url", "videoUrl"];
const SIDE_IMAGE_URL: &[&str] = &["imageUrl", "url"];
const SIDE_IMAGE_POSITION: &[&str] = &["imagePosition", "layout"];
const SIDE_IMAGE_CAPTION: &[&str] = &["imageCaption", "caption"];
const SIDE_CONTENT: &[&str] = &["content", "text"];
const SIDE_IMAGE_WIDTH: &[&str] = &["imageWidth", "width"];
const SIDE_IMAGE_HEIGHT: &[&str] = &["imageHeight", "height"];
const BANNER_IMAGE_URL: &[&str] = &["imageUrl", "url"];
const BANNER_LINK_URL: &[&str] = &["linkUrl", "link"];
const RELATED_TITLE: &[&str] = &["title"];
const RELATED_ARTICLES: &[&str] = &["articles"];

fn payload_fields(block_type: BlockType) -> &'static [&'static [&'static str]] {
    match block_type {
        BlockType::Text => &[TEXT_CONTENT],
        BlockType::Quote => &[QUOTE_TEXT, QUOTE_AUTHOR, QUOTE_DESIGNATION],
        BlockType::Image => &[IMAGE_URL, IMAGE_ALT, IMAGE_CAPTION, IMAGE_WIDTH, IMAGE_HEIGHT],
        BlockType::Video => &[VIDEO_URL],
        BlockType::ImageWithText => &[
            SIDE_IMAGE_URL,
            SIDE_IMAGE_POSITION,
            SIDE_IMAGE_CAPTION,
            SIDE_CONTENT,
            SIDE_IMAGE_WIDTH,
            SIDE_IMAGE_HEIGHT,
        ],
        BlockType::Banner => &[BANNER_IMAGE_URL, BANNER_LINK_URL],
        BlockType::RelatedNews => &[RELATED_TITLE, RELATED_ARTICLES],
    }
}

/// Rewrite legacy field names in a partial payload to the names
/// [`build_data`] gives priority to.
///
/// Used for edits: merged over a canonical payload, a legacy key would
/// otherwise lose to the canonical key it is meant to replace. When a patch
/// carries both spellings of a field, the canonical one wins. Keys that are
/// not payload fields of `block_type` pass through unchanged.
pub fn canonical_fields(block_type: BlockType, patch: &Value) -> Value {
    let Some(patch) = patch.as_object() else {
        return patch.clone();
    };
    let groups = payload_fields(block_type);

    let mut out = Map::new();
    for (key, value) in patch {
        let canonical = groups
            .iter()
            .find(|names| names.contains(&key.as_str()))
            .map_or(key.as_str(), |names| names[0]);
        if canonical == key.as_str() || !patch.contains_key(canonical) {
            out.insert(canonical.to_string(), value.clone());
        }
    }
    Value::Object(out)
}

/// Build a well-formed block of `block_type` from a loose bag of fields.
///
/// Fails only when `block_type` is outside the closed set. Missing fields
/// default to empty values and legacy field names (`url` for `imageUrl`,
/// `layout` for `imagePosition`, ...) are accepted.
pub fn create_block(
    block_type: &str,
    id: impl Into<String>,
    order: usize,
    raw_data: Option<&Value>,
) -> Result<ContentBlock, BlockError> {
    let block_type: BlockType = block_type.parse()?;
    Ok(build_block(block_type, id, order, raw_data))
}

/// Infallible counterpart of [`create_block`] for an already-checked type.
pub fn build_block(
    block_type: BlockType,
    id: impl Into<String>,
    order: usize,
    raw_data: Option<&Value>,
) -> ContentBlock {
    ContentBlock {
        id: id.into(),
        order,
        data: build_data(block_type, raw_data),
    }
}

/// Resolve the payload for `block_type`. Non-object input counts as empty.
pub fn build_data(block_type: BlockType, raw_data: Option<&Value>) -> BlockData {
    let empty = Map::new();
    let fields = Fields(raw_data.and_then(Value::as_object).unwrap_or(&empty));

    match block_type {
        BlockType::Text => BlockData::Text(TextData {
            content: fields.string(TEXT_CONTENT),
        }),
        BlockType::Quote => BlockData::Quote(QuoteData {
            text: fields.string(QUOTE_TEXT),
            author: fields.optional(QUOTE_AUTHOR),
            designation: fields.optional(QUOTE_DESIGNATION),
        }),
        BlockType::Image => BlockData::Image(ImageData {
            image_url: fields.string(IMAGE_URL),
            alt: fields.optional(IMAGE_ALT),
            caption: fields.optional(IMAGE_CAPTION),
            width: fields.dimension(IMAGE_WIDTH),
            height: fields.dimension(IMAGE_HEIGHT),
        }),
        BlockType::Video => BlockData::Video(VideoData {
            url: fields.string(VIDEO_URL),
        }),
        BlockType::ImageWithText => BlockData::ImageWithText(ImageWithTextData {
            image_url: fields.string(SIDE_IMAGE_URL),
            image_position: fields
                .optional(SIDE_IMAGE_POSITION)
                .map(|p| ImagePosition::from_wire(&p))
                .unwrap_or_default(),
            image_caption: fields.optional(SIDE_IMAGE_CAPTION),
            content: fields.string(SIDE_CONTENT),
            image_width: fields.dimension(SIDE_IMAGE_WIDTH),
            image_height: fields.dimension(SIDE_IMAGE_HEIGHT),
        }),
        BlockType::Banner => BlockData::Banner(BannerData {
            image_url: fields.string(BANNER_IMAGE_URL),
            link_url: fields.optional(BANNER_LINK_URL),
        }),
        BlockType::RelatedNews => BlockData::RelatedNews(RelatedNewsData {
            title: fields.optional(RELATED_TITLE),
            articles: fields
                .array(RELATED_ARTICLES)
                .iter()
                .filter_map(Value::as_object)
                .map(|article| related_article(Fields(article)))
                .collect(),
        }),
    }
}

fn related_article(fields: Fields<'_>) -> RelatedArticle {
    RelatedArticle {
        id: fields.identifier(&["id"]),
        title: fields.string(&["title"]),
        excerpt: fields.optional(&["excerpt"]),
        image_url: fields.optional(&["imageUrl", "image", "featuredImage"]),
        slug: fields.string(&["slug"]),
        published_at: fields.optional(&["publishedAt"]),
    }
}

/// Alias-aware lookups over one JSON object. Each lookup takes the names to
/// try in priority order and returns the first one holding a usable value.
struct Fields<'a>(&'a Map<String, Value>);

impl Fields<'_> {
    fn optional(&self, names: &[&str]) -> Option<String> {
        names
            .iter()
            .find_map(|name| self.0.get(*name).and_then(Value::as_str))
            .map(str::to_string)
    }

    fn string(&self, names: &[&str]) -> String {
        self.optional(names).unwrap_or_default()
    }

    /// Ids come from different backends as strings or numbers.
    fn identifier(&self, names: &[&str]) -> String {
        names
            .iter()
            .find_map(|name| match self.0.get(*name)? {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Pixel sizes as JSON numbers or numeric strings.
    fn dimension(&self, names: &[&str]) -> Option<u32> {
        names.iter().find_map(|name| match self.0.get(*name)? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
                .and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    fn array(&self, names: &[&str]) -> &[Value] {
        names
            .iter()
            .find_map(|name| self.0.get(*name).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
