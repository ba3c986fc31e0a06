//! Instruction templates sent to the generation service

use crate::types::{Target, LINKEDIN_CHAR_LIMIT, LINKEDIN_SEE_MORE_LIMIT, TWEET_CHAR_LIMIT};

/// Line that introduces the raw notes at the end of every prompt
pub const INPUT_MARKER: &str = "Text:\n";

/// Build the prompt asking for a single learning-in-public tweet
pub fn tweet_prompt(raw: &str) -> String {
    format!(
        r#"
Paraphrase the text below into a single tweet for learning in public.

Rules:
- Keep "Day X" or "Day <number>" exactly as written if present.
- Structure the tweet into 2–3 short lines for readability.
- Add a blank line between sections (use line breaks).
- Add 1–2 relevant emojis naturally.
- Tone should be clear, motivating, and slightly cool.
- Not too formal, not too casual.
- Use simple, easy-to-understand English.
- Avoid fancy or complex words.
- Include 1–3 relevant hashtags on the last line.
- Return ONLY one version.
- No explanations, no options, no formatting.
- STRICTLY limit the output to a maximum of {limit} characters.

{marker}{raw}
"#,
        limit = TWEET_CHAR_LIMIT,
        marker = INPUT_MARKER,
        raw = raw,
    )
}

/// Build the prompt asking for a long-form LinkedIn post
///
/// The "see more" hook is only requested here; nothing enforces it after
/// generation.
pub fn linkedin_prompt(raw: &str) -> String {
    format!(
        r#"
Rewrite the text below as a LinkedIn learning-in-public post.

Rules:
- First ~{hook} characters must hook the reader before "See more".
- Use short paragraphs and spacing.
- Bold important points using **bold**.
- Professional, authentic tone.
- Simple English.
- 0–2 emojis max.
- Add 3–5 relevant hashtags at the end.
- Max length: {limit} characters.
- Return ONLY the post content.

{marker}{raw}
"#,
        hook = LINKEDIN_SEE_MORE_LIMIT,
        limit = LINKEDIN_CHAR_LIMIT,
        marker = INPUT_MARKER,
        raw = raw,
    )
}

pub fn build_prompt(target: Target, raw: &str) -> String {
    match target {
        Target::Tweet => tweet_prompt(raw),
        Target::LinkedIn => linkedin_prompt(raw),
    }
}

/// Recover the raw notes embedded in a prompt built by this module
pub fn embedded_input(prompt: &str) -> Option<&str> {
    prompt
        .find(INPUT_MARKER)
        .map(|idx| prompt[idx + INPUT_MARKER.len()..].trim_end_matches('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tweet_prompt_embeds_input_and_limit() {
        let prompt = tweet_prompt("Day 5: learned recursion.");
        assert!(prompt.contains("single tweet"));
        assert!(prompt.contains("maximum of 280 characters"));
        assert!(prompt.ends_with("Text:\nDay 5: learned recursion.\n"));
    }

    #[test]
    fn test_linkedin_prompt_mentions_hook_and_limit() {
        let prompt = linkedin_prompt("notes");
        assert!(prompt.contains("LinkedIn learning-in-public post"));
        assert!(prompt.contains("First ~200 characters"));
        assert!(prompt.contains("Max length: 3000 characters"));
    }

    #[test]
    fn test_prompts_are_distinguishable() {
        assert!(!tweet_prompt("x").contains("LinkedIn"));
        assert!(!linkedin_prompt("x").contains("single tweet"));
    }

    #[test]
    fn test_build_prompt_dispatches_on_target() {
        assert_eq!(build_prompt(Target::Tweet, "a"), tweet_prompt("a"));
        assert_eq!(build_prompt(Target::LinkedIn, "a"), linkedin_prompt("a"));
    }

    #[test]
    fn test_embedded_input_recovers_notes() {
        let raw = "Day 12\n\nBuilt a parser.";
        assert_eq!(embedded_input(&tweet_prompt(raw)), Some(raw));
        assert_eq!(embedded_input(&linkedin_prompt(raw)), Some(raw));
        assert_eq!(embedded_input("no marker here"), None);
    }
}
