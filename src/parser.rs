use crate::entity::RenderNode;
use crate::entity::Segment;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{map, peek, rest, value, verify},
    error::{Error, ErrorKind},
    sequence::{pair, preceded, terminated},
    IResult,
};
use once_cell::sync::Lazy;
use regex::Regex;

const BOLD_DELIMITER: &str = "**";

// `.` of the source pattern stops at any line terminator, not just '\n'
static IMAGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[([^\r\n\u{2028}\u{2029}]*?)\]\(([^\r\n\u{2028}\u{2029}]*?)\)")
        .expect("image pattern is valid")
});

/// Renders a markup block into one node per `\n`-separated line.
///
/// Total: every line classifies, the last resort being a plain paragraph.
pub fn render(source: &str) -> Vec<RenderNode> {
    let nodes: Vec<RenderNode> = source
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            let node = classify_line(line);
            tracing::trace!(line = index, kind = node.kind(), "classified line");
            node
        })
        .collect();
    tracing::debug!(lines = nodes.len(), "rendered markup");
    nodes
}

/// Classifies a single line. Rules are tried in order and the first match wins;
/// longer heading prefixes must come before shorter ones.
pub fn classify_line(line: &str) -> RenderNode {
    let mut rules = alt((
        parse_heading,
        parse_list_item,
        parse_ordered_item,
        map(parse_image, |(alt_text, url): (&str, &str)| {
            RenderNode::Image {
                alt_text: alt_text.to_string(),
                url: url.to_string(),
            }
        }),
        parse_emphasis,
        parse_blank,
    ));
    match rules(line) {
        Ok((_, node)) => node,
        Err(_) => RenderNode::Paragraph {
            text: line.to_string(),
        },
    }
}

/// Splits on every `**` and marks odd-indexed parts bold. Unmatched
/// delimiters are not repaired.
pub fn split_segments(line: &str) -> Vec<Segment> {
    line.split(BOLD_DELIMITER)
        .enumerate()
        .map(|(index, part)| Segment::new(part, index % 2 == 1))
        .collect()
}

fn parse_heading_tag(i: &str) -> IResult<&str, usize> {
    alt((
        value(3, tag("### ")),
        value(2, tag("## ")),
        value(1, tag("# ")),
    ))(i)
}

fn parse_heading(i: &str) -> IResult<&str, RenderNode> {
    map(pair(parse_heading_tag, rest), |(level, text): (usize, &str)| {
        RenderNode::Heading {
            level,
            text: text.to_string(),
        }
    })(i)
}

fn parse_list_item(i: &str) -> IResult<&str, RenderNode> {
    map(preceded(tag("* "), rest), |text: &str| RenderNode::ListItem {
        text: text.to_string(),
    })(i)
}

// only the digits are consumed; the ". " is peeked so the text keeps its space
fn parse_ordered_tag(i: &str) -> IResult<&str, &str> {
    terminated(digit1, peek(tag(". ")))(i)
}

// text starts right after the dot, so unlike "* " items the space survives
fn parse_ordered_item(i: &str) -> IResult<&str, RenderNode> {
    map(
        pair(parse_ordered_tag, preceded(char('.'), rest)),
        |(ordinal, text): (&str, &str)| RenderNode::OrderedItem {
            ordinal: ordinal.to_string(),
            text: text.to_string(),
        },
    )(i)
}

// matches anywhere in the line; the whole line is consumed
fn parse_image(i: &str) -> IResult<&str, (&str, &str)> {
    match IMAGE_REGEX.captures(i) {
        Some(caps) => {
            let alt_text = caps.get(1).map_or("", |m| m.as_str());
            let url = caps.get(2).map_or("", |m| m.as_str());
            Ok((&i[i.len()..], (alt_text, url)))
        }
        None => Err(nom::Err::Error(Error::new(i, ErrorKind::RegexpCapture))),
    }
}

fn parse_emphasis(i: &str) -> IResult<&str, RenderNode> {
    map(
        verify(rest, |s: &str| s.contains(BOLD_DELIMITER)),
        |line: &str| RenderNode::EmphasisParagraph {
            segments: split_segments(line),
        },
    )(i)
}

fn parse_blank(i: &str) -> IResult<&str, RenderNode> {
    map(verify(rest, |s: &str| is_blank(s)), |_: &str| RenderNode::LineBreak)(i)
}

// same set as a JS `trim`: Unicode whitespace minus NEL, plus the BOM
fn is_trimmed(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn is_blank(line: &str) -> bool {
    line.trim_matches(is_trimmed).is_empty()
}
