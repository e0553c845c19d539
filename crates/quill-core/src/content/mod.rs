//! Text pipeline: slug derivation and restricted markdown rendering.

mod markdown;
mod slug;

pub use markdown::{RULES, Rule, render_markdown};
pub use slug::slugify;
