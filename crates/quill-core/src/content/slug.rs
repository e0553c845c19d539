//! Title to URL-safe identifier.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

// Word characters are the ASCII set `[0-9A-Za-z_]`; anything else goes.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9A-Za-z_\-]+").expect("non-word pattern is valid"));

static HYPHEN_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-{2,}").expect("hyphen pattern is valid"));

/// Derive a URL-safe slug from a post title.
///
/// Lower-cases, trims, turns whitespace runs into a hyphen, strips every
/// non-word character and collapses repeated hyphens. Total: titles made
/// only of punctuation yield an empty slug.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(lowered.trim(), "-");
    let stripped = NON_WORD.replace_all(&hyphenated, "");
    HYPHEN_RUN.replace_all(&stripped, "-").into_owned()
}
