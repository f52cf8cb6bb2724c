//! Renderer for the line-oriented markup used in orientation guide content.
//!
//! Each `\n`-separated line of a source block becomes exactly one
//! [`RenderNode`](entity::RenderNode); [`translator`] turns the node sequence
//! into HTML.

pub mod entity;
pub mod error;
pub mod parser;
pub mod translator;

pub use entity::{RenderNode, Segment};
pub use parser::render;
pub use translator::{translate, TranslateOptions};
