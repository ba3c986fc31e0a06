//! Post shaping: blank-line normalization and hard length truncation
//!
//! Every piece of generated text passes through here before it is recorded
//! or published. Lengths are counted in Unicode scalar values, and the cut is
//! a raw character cut that may land mid-word: the ceiling always wins.

use tracing::warn;

use crate::types::{ShapedPost, Target, LINKEDIN_CHAR_LIMIT, TWEET_CHAR_LIMIT};

/// Appended to truncated text
pub const ELLIPSIS: char = '…';

/// Collapse every run of three or more `\n` down to exactly two
///
/// Leaves at most one blank line between sections. Idempotent.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;

    for c in text.chars() {
        if c == '\n' {
            run += 1;
            if run > 2 {
                continue;
            }
        } else {
            run = 0;
        }
        out.push(c);
    }

    out
}

/// Cut `text` to at most `ceiling` characters
///
/// Text within the ceiling is returned unchanged. Longer text keeps its first
/// `ceiling - 1` characters followed by [`ELLIPSIS`], for exactly `ceiling`
/// characters in total.
pub fn truncate_to(text: &str, ceiling: usize) -> String {
    let count = text.chars().count();
    if count <= ceiling {
        return text.to_string();
    }
    if ceiling == 0 {
        return String::new();
    }

    warn!(
        "Text exceeded {} chars ({} chars). Truncating automatically.",
        ceiling, count
    );

    let mut out: String = text.chars().take(ceiling - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Normalize then truncate
pub fn shape(text: &str, ceiling: usize, collapse: bool) -> String {
    if text.is_empty() {
        return String::new();
    }

    if collapse {
        truncate_to(&collapse_blank_lines(text), ceiling)
    } else {
        truncate_to(text, ceiling)
    }
}

impl ShapedPost {
    /// Shape `text` with the rules of `target`
    pub fn for_target(target: Target, text: &str) -> Self {
        let shaped = shape(text, target.char_limit(), target.collapses_blank_lines());
        Self::from_shaped(target, shaped)
    }

    /// Shape for X: collapse blank lines, 280 characters
    pub fn tweet(text: &str) -> Self {
        Self::for_target(Target::Tweet, text)
    }

    /// Shape for LinkedIn: 3000 characters, spacing untouched
    pub fn linkedin(text: &str) -> Self {
        Self::for_target(Target::LinkedIn, text)
    }
}

/// Convenience wrapper returning the shaped tweet text
pub fn shape_tweet(text: &str) -> String {
    shape(text, TWEET_CHAR_LIMIT, true)
}

/// Convenience wrapper returning the shaped LinkedIn text
pub fn shape_linkedin(text: &str) -> String {
    shape(text, LINKEDIN_CHAR_LIMIT, false)
}
