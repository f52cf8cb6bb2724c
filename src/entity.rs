use serde::Serialize;

/// One display unit per source line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderNode {
    Heading {
        level: usize,
        text: String,
    },
    ListItem {
        text: String,
    },
    /// `ordinal` is the literal digit run, not a parsed number.
    OrderedItem {
        ordinal: String,
        text: String,
    },
    Image {
        #[serde(rename = "altText")]
        alt_text: String,
        url: String,
    },
    EmphasisParagraph {
        segments: Vec<Segment>,
    },
    LineBreak,
    Paragraph {
        text: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
}

impl Segment {
    pub fn new(text: &str, bold: bool) -> Self {
        Segment {
            text: text.to_string(),
            bold,
        }
    }
}

impl RenderNode {
    pub fn kind(&self) -> &'static str {
        match self {
            RenderNode::Heading { .. } => "heading",
            RenderNode::ListItem { .. } => "listItem",
            RenderNode::OrderedItem { .. } => "orderedItem",
            RenderNode::Image { .. } => "image",
            RenderNode::EmphasisParagraph { .. } => "emphasisParagraph",
            RenderNode::LineBreak => "lineBreak",
            RenderNode::Paragraph { .. } => "paragraph",
        }
    }
}
