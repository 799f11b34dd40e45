use std::fmt::Write;
use std::sync::OnceLock;

use regex::Regex;

/// Visual tree produced by the block renderers.
///
/// Frontends either serialize it with [`Node::to_html`] or flatten it with
/// [`Node::text_lines`] for plain-text surfaces such as the terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    /// Plain text, escaped on output.
    Text(String),
    /// Trusted markup from the rich-text editor, emitted verbatim.
    Raw(String),
    Empty,
}

const VOID_TAGS: &[&str] = &["img", "br", "hr"];

/// Tags that start a new line in the plain-text projection.
const BLOCK_TAGS: &[&str] = &[
    "article",
    "blockquote",
    "div",
    "figcaption",
    "figure",
    "footer",
    "h3",
    "li",
    "p",
    "section",
    "ul",
];

impl Node {
    pub fn element(tag: &'static str) -> Self {
        Node::Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn raw(html: impl Into<String>) -> Self {
        Node::Raw(html.into())
    }

    /// Add an attribute. Has no effect on non-element nodes.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    /// Add an attribute only when `value` is present.
    pub fn attr_opt<V: ToString>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value.to_string()),
            None => self,
        }
    }

    /// Append a child. `Empty` children are dropped.
    pub fn child(mut self, child: Node) -> Self {
        if let Node::Element { children, .. } = &mut self
            && !child.is_empty()
        {
            children.push(child);
        }
        self
    }

    pub fn children(self, nodes: impl IntoIterator<Item = Node>) -> Self {
        nodes.into_iter().fold(self, Node::child)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    let _ = write!(
                        out,
                        " {}=\"{}\"",
                        name,
                        html_escape::encode_double_quoted_attribute(value)
                    );
                }
                out.push('>');
                if VOID_TAGS.contains(tag) {
                    return;
                }
                for child in children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{tag}>");
            }
            Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
            Node::Raw(html) => out.push_str(html),
            Node::Empty => {}
        }
    }

    /// Visible text, one entry per non-blank line.
    pub fn text_lines(&self) -> Vec<String> {
        let mut out = String::new();
        self.write_text(&mut out);
        out.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn text_content(&self) -> String {
        self.text_lines().join("\n")
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Node::Element { tag, children, .. } => {
                let block = BLOCK_TAGS.contains(tag);
                if block {
                    out.push('\n');
                }
                for child in children {
                    child.write_text(out);
                }
                if block {
                    out.push('\n');
                }
            }
            Node::Text(text) => out.push_str(text),
            Node::Raw(html) => out.push_str(&strip_markup(html)),
            Node::Empty => {}
        }
    }
}

fn strip_markup(html: &str) -> String {
    static LINE_BREAKS: OnceLock<Regex> = OnceLock::new();
    static TAGS: OnceLock<Regex> = OnceLock::new();

    let line_breaks = LINE_BREAKS.get_or_init(|| {
        Regex::new(r"(?i)<br\s*/?>|</(p|div|li|h[1-6]|blockquote|ul|ol)>")
            .expect("Invalid line break regex")
    });
    let tags = TAGS.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

    let with_breaks = line_breaks.replace_all(html, "\n");
    let text = tags.replace_all(&with_breaks, "");
    html_escape::decode_html_entities(&text).into_owned()
}
