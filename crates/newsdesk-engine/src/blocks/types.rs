use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::BlockError;

/// The closed set of block variants an article body can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Text,
    Quote,
    Image,
    Video,
    ImageWithText,
    Banner,
    RelatedNews,
}

impl BlockType {
    /// Every variant, in declaration order.
    pub const ALL: [BlockType; 7] = [
        BlockType::Text,
        BlockType::Quote,
        BlockType::Image,
        BlockType::Video,
        BlockType::ImageWithText,
        BlockType::Banner,
        BlockType::RelatedNews,
    ];

    /// The discriminant as it appears in persisted JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Text => "text",
            BlockType::Quote => "quote",
            BlockType::Image => "image",
            BlockType::Video => "video",
            BlockType::ImageWithText => "imageWithText",
            BlockType::Banner => "banner",
            BlockType::RelatedNews => "relatedNews",
        }
    }
}

impl FromStr for BlockType {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| BlockError::UnknownBlockType(s.to_string()))
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rich-text paragraph; `content` is editor markup and is rendered verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextData {
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteData {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Embedded video; `url` may be in any provider format, see [`crate::render::video`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoData {
    pub url: String,
}

/// Which side of the text the image sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImagePosition {
    Left,
    #[default]
    Right,
}

impl ImagePosition {
    /// `"left"` is the only value that places the image on the left.
    pub fn from_wire(value: &str) -> Self {
        if value == "left" {
            ImagePosition::Left
        } else {
            ImagePosition::Right
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImagePosition::Left => "left",
            ImagePosition::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageWithTextData {
    pub image_url: String,
    pub image_position: ImagePosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_caption: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerData {
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

/// Lightweight summary of another article, as shown in a related-news block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedArticle {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedNewsData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub articles: Vec<RelatedArticle>,
}

/// Variant-specific payload of a [`ContentBlock`].
///
/// Serializes untagged: the discriminant lives next to `data` on the block,
/// not inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BlockData {
    Text(TextData),
    Quote(QuoteData),
    Image(ImageData),
    Video(VideoData),
    ImageWithText(ImageWithTextData),
    Banner(BannerData),
    RelatedNews(RelatedNewsData),
}

impl BlockData {
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockData::Text(_) => BlockType::Text,
            BlockData::Quote(_) => BlockType::Quote,
            BlockData::Image(_) => BlockType::Image,
            BlockData::Video(_) => BlockType::Video,
            BlockData::ImageWithText(_) => BlockType::ImageWithText,
            BlockData::Banner(_) => BlockType::Banner,
            BlockData::RelatedNews(_) => BlockType::RelatedNews,
        }
    }

    /// The payload as loose JSON, the shape [`super::create_block`] reads back.
    pub fn to_value(&self) -> Value {
        // Payload structs hold only strings, integers, enums and vectors.
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Default::default()))
    }
}

/// One discrete unit of an article body.
///
/// On the wire a block is `{ "id", "order", "type", "data" }`. Decoding goes
/// through [`RawBlock`] and the registry, so legacy field names are accepted
/// and unknown types are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock", into = "RawBlock")]
pub struct ContentBlock {
    pub id: String,
    pub order: usize,
    pub data: BlockData,
}

impl ContentBlock {
    pub fn block_type(&self) -> BlockType {
        self.data.block_type()
    }
}

/// A block exactly as it arrives from storage, before the type is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub order: usize,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub data: Value,
}

impl RawBlock {
    /// Best-effort read of one stored block entry.
    ///
    /// Numeric ids are stringified, an `order` that is missing or not a
    /// non-negative integer becomes `position`, and a missing or non-string
    /// `type` is kept as text that no registry entry matches. Returns `None`
    /// only when the entry is not a JSON object.
    pub fn from_loose(value: &Value, position: usize) -> Option<Self> {
        let fields = value.as_object()?;

        let id = match fields.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let order = fields
            .get("order")
            .and_then(Value::as_u64)
            .and_then(|o| usize::try_from(o).ok())
            .unwrap_or(position);
        let block_type = match fields.get("type") {
            Some(Value::String(s)) => s.clone(),
            None | Some(Value::Null) => String::new(),
            Some(other) => other.to_string(),
        };

        Some(RawBlock {
            id,
            order,
            block_type,
            data: fields.get("data").cloned().unwrap_or_default(),
        })
    }
}

impl TryFrom<RawBlock> for ContentBlock {
    type Error = BlockError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        super::create_block(&raw.block_type, raw.id, raw.order, Some(&raw.data))
    }
}

impl From<ContentBlock> for RawBlock {
    fn from(block: ContentBlock) -> Self {
        RawBlock {
            block_type: block.block_type().as_str().to_string(),
            data: block.data.to_value(),
            id: block.id,
            order: block.order,
        }
    }
}

impl From<&ContentBlock> for RawBlock {
    fn from(block: &ContentBlock) -> Self {
        RawBlock {
            id: block.id.clone(),
            order: block.order,
            block_type: block.block_type().as_str().to_string(),
            data: block.data.to_value(),
        }
    }
}
