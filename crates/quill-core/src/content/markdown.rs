//! Restricted markdown: headings (levels 1-3), bold, italic and line breaks.
//!
//! Rules run in the fixed order of [`RULES`]. Anything else is left as
//! literal text, and embedded markup is passed through unescaped, so the
//! output is only safe for content written by trusted admins.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_3: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^### (.*)$").expect("h3 pattern is valid"));
static HEADING_2: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^## (.*)$").expect("h2 pattern is valid"));
static HEADING_1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^# (.*)$").expect("h1 pattern is valid"));
static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern is valid"));

/// One transformation step of the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// A whole line starting with 1-3 `#` and a space.
    Heading(u8),
    /// `**text**`, within one line.
    Bold,
    /// `*text*`, within one line.
    Italic,
    /// Every newline still present.
    LineBreak,
}

/// Application order. Longer heading prefixes go first, and bold precedes
/// italic so `**` is never read as two italic markers.
pub const RULES: [Rule; 6] = [
    Rule::Heading(3),
    Rule::Heading(2),
    Rule::Heading(1),
    Rule::Bold,
    Rule::Italic,
    Rule::LineBreak,
];

impl Rule {
    pub fn apply(self, input: &str) -> String {
        match self {
            Rule::Heading(level) => {
                let pattern = match level {
                    3 => &*HEADING_3,
                    2 => &*HEADING_2,
                    _ => &*HEADING_1,
                };
                let replacement = format!("<h{level}>${{1}}</h{level}>");
                pattern
                    .replace_all(input, replacement.as_str())
                    .into_owned()
            }
            Rule::Bold => BOLD
                .replace_all(input, "<strong>${1}</strong>")
                .into_owned(),
            Rule::Italic => ITALIC.replace_all(input, "<em>${1}</em>").into_owned(),
            Rule::LineBreak => input.replace('\n', "<br />"),
        }
    }
}

/// Render restricted markdown to markup.
///
/// CRLF line endings (as submitted by HTML forms) are read as plain newlines.
pub fn render_markdown(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    RULES
        .iter()
        .fold(normalized, |markup, rule| rule.apply(&markup))
}
