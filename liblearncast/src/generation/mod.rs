//! Text generation
//!
//! A [`Generator`] turns a prompt into raw model output. Provider failures
//! come back as a [`GenerationError`] whose variant tells the caller what
//! went wrong; nothing is swallowed at this layer.
//!
//! # Examples
//!
//! ```no_run
//! use liblearncast::config::GeminiConfig;
//! use liblearncast::generation::{generate_for, gemini::GeminiClient};
//! use liblearncast::types::{RawInput, Target};
//!
//! # async fn example() -> Result<(), liblearncast::error::GenerationError> {
//! let client = GeminiClient::new(&GeminiConfig::default(), liblearncast::credentials::gemini_api_key())?;
//! let raw = RawInput::new("Day 5: learned recursion.").unwrap();
//! let tweet = generate_for(&client, Target::Tweet, &raw).await?;
//! println!("{}", tweet);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use tracing::debug;

use crate::error::GenerationError;
use crate::prompt;
use crate::types::{RawInput, Target};

pub mod gemini;

// Available outside tests so integration tests and binaries can use it
pub mod mock;

/// A text-generation backend
#[async_trait]
pub trait Generator: Send + Sync {
    /// Send `prompt` and return the model's text
    ///
    /// Exactly one outbound request per call; no retries.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Backend identifier for logs (e.g., "gemini")
    fn name(&self) -> &str;
}

/// Build the prompt for `target`, generate, and trim the result
///
/// # Errors
///
/// Propagates the backend's error, and returns `GenerationError::Empty`
/// when the backend answers with only whitespace.
pub async fn generate_for(
    generator: &dyn Generator,
    target: Target,
    raw: &RawInput,
) -> Result<String, GenerationError> {
    debug!(
        generator = generator.name(),
        target = %target,
        "Generating text"
    );

    let prompt = prompt::build_prompt(target, raw.as_str());
    let text = generator.generate(&prompt).await?;

    let text = text.trim();
    if text.is_empty() {
        return Err(GenerationError::Empty);
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::mock::MockGenerator;
    use super::*;

    #[tokio::test]
    async fn test_generate_for_trims_output() {
        let generator = MockGenerator::reply("  Day 5 🚀\n\n#100DaysOfCode \n\n");
        let raw = RawInput::new("Day 5").unwrap();

        let text = generate_for(&generator, Target::Tweet, &raw).await.unwrap();
        assert_eq!(text, "Day 5 🚀\n\n#100DaysOfCode");
    }

    #[tokio::test]
    async fn test_generate_for_whitespace_is_empty_error() {
        let generator = MockGenerator::reply(" \n ");
        let raw = RawInput::new("Day 5").unwrap();

        let err = generate_for(&generator, Target::LinkedIn, &raw)
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::Empty);
    }

    #[tokio::test]
    async fn test_generate_for_uses_target_prompt() {
        let generator = MockGenerator::echo();
        let raw = RawInput::new("Day 7: closures").unwrap();

        generate_for(&generator, Target::LinkedIn, &raw).await.unwrap();

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("LinkedIn learning-in-public post"));
    }

    #[tokio::test]
    async fn test_generate_for_propagates_error_kind() {
        let generator = MockGenerator::failing(GenerationError::Unreachable(
            "connection refused".to_string(),
        ));
        let raw = RawInput::new("Day 5").unwrap();

        let err = generate_for(&generator, Target::Tweet, &raw)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "unreachable");
    }
}
