//! Core types for Learncast

use serde::{Deserialize, Serialize};

/// Maximum length of a tweet, in characters
pub const TWEET_CHAR_LIMIT: usize = 280;

/// Maximum length of a LinkedIn post, in characters
pub const LINKEDIN_CHAR_LIMIT: usize = 3000;

/// Characters LinkedIn shows before folding a post behind "See more"
pub const LINKEDIN_SEE_MORE_LIMIT: usize = 200;

/// Platform a piece of generated text is shaped for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Tweet,
    LinkedIn,
}

impl Target {
    /// Hard character ceiling for this platform
    pub fn char_limit(&self) -> usize {
        match self {
            Target::Tweet => TWEET_CHAR_LIMIT,
            Target::LinkedIn => LINKEDIN_CHAR_LIMIT,
        }
    }

    /// Whether runs of blank lines are collapsed before truncation
    pub fn collapses_blank_lines(&self) -> bool {
        matches!(self, Target::Tweet)
    }

    /// Lowercase identifier used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Tweet => "tweet",
            Target::LinkedIn => "linkedin",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw learning notes read from the input file
///
/// Always trimmed and never empty; see [`crate::input::read_raw_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput(String);

impl RawInput {
    /// Trim `text` and wrap it, returning `None` when nothing is left
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Generated text after shaping for a target platform
///
/// Invariant: `char_count() <= target.char_limit()`. Only the functions in
/// [`crate::shaper`] construct it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapedPost {
    target: Target,
    text: String,
}

impl ShapedPost {
    pub(crate) fn from_shaped(target: Target, text: String) -> Self {
        debug_assert!(text.chars().count() <= target.char_limit());
        Self { target, text }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for ShapedPost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Result of a successful publish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostReceipt {
    /// Platform name (e.g., "x")
    pub platform: String,
    /// Platform-assigned identifier, when the platform returned one
    pub post_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_limits() {
        assert_eq!(Target::Tweet.char_limit(), 280);
        assert_eq!(Target::LinkedIn.char_limit(), 3000);
        assert!(Target::Tweet.collapses_blank_lines());
        assert!(!Target::LinkedIn.collapses_blank_lines());
    }

    #[test]
    fn test_raw_input_trims() {
        let raw = RawInput::new("  \nDay 5: learned recursion.\n\n").unwrap();
        assert_eq!(raw.as_str(), "Day 5: learned recursion.");
    }

    #[test]
    fn test_raw_input_rejects_blank() {
        assert!(RawInput::new("").is_none());
        assert!(RawInput::new(" \n\t ").is_none());
    }

    #[test]
    fn test_target_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Target::LinkedIn).unwrap(), "\"linkedin\"");
        assert_eq!(Target::Tweet.to_string(), "tweet");
    }
}
