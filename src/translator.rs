use crate::entity::RenderNode;
use crate::entity::Segment;

/// HTML output settings.
///
/// Without a class (or with a blank one) the wrapper is exactly
/// `class="markdown-body"`, with no trailing space after the base class.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranslateOptions {
    /// Extra class appended to the `markdown-body` wrapper.
    pub class_name: Option<String>,
}

/// Translates rendered nodes into HTML, one fragment per node in order.
///
/// Text is emitted as-is; callers displaying untrusted content must sanitize it.
pub fn translate(nodes: &[RenderNode], options: &TranslateOptions) -> String {
    let body: String = nodes.iter().map(translate_node).collect();
    match options.class_name.as_deref().map(str::trim) {
        Some(class) if !class.is_empty() => {
            format!("<div class=\"markdown-body {}\">{}</div>", class, body)
        }
        _ => format!("<div class=\"markdown-body\">{}</div>", body),
    }
}

fn translate_node(node: &RenderNode) -> String {
    match node {
        RenderNode::Heading { level, text } => format!("<h{}>{}</h{}>", level, text, level),
        RenderNode::ListItem { text } => format!("<li>{}</li>", text),
        RenderNode::OrderedItem { ordinal, text } => format!(
            "<div class=\"ordered-item\"><span>{}.</span>{}</div>",
            ordinal, text
        ),
        RenderNode::Image { alt_text, url } => format!(
            "<div class=\"figure\"><img src=\"{}\" alt=\"{}\"><p class=\"caption\">{}</p></div>",
            url, alt_text, alt_text
        ),
        RenderNode::EmphasisParagraph { segments } => {
            format!("<p>{}</p>", translate_segments(segments))
        }
        RenderNode::LineBreak => String::from("<br>"),
        RenderNode::Paragraph { text } => format!("<p>{}</p>", text),
    }
}

fn translate_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.bold {
                format!("<strong>{}</strong>", segment.text)
            } else {
                segment.text.clone()
            }
        })
        .collect()
}
