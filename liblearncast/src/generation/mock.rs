//! Mock generator for testing
//!
//! Simulates the generation service without credentials or network access.
//! Every call is counted and its prompt kept for verification.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::GenerationError;
use crate::generation::Generator;
use crate::prompt;

/// What the mock answers with
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return the raw notes embedded in the prompt, unmodified
    Echo,
    /// Return this text for every prompt
    Reply(String),
    /// Return `tweet` for tweet prompts and `linkedin` for LinkedIn prompts
    PerTarget { tweet: String, linkedin: String },
    /// Fail every call with this error
    Fail(GenerationError),
}

#[derive(Debug, Clone)]
pub struct MockGenerator {
    behavior: MockBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn reply(text: &str) -> Self {
        Self::new(MockBehavior::Reply(text.to_string()))
    }

    pub fn per_target(tweet: &str, linkedin: &str) -> Self {
        Self::new(MockBehavior::PerTarget {
            tweet: tweet.to_string(),
            linkedin: linkedin.to_string(),
        })
    }

    pub fn failing(error: GenerationError) -> Self {
        Self::new(MockBehavior::Fail(error))
    }

    /// Number of times generate was called
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Every prompt received, in order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.behavior {
            MockBehavior::Echo => Ok(prompt::embedded_input(prompt)
                .unwrap_or(prompt)
                .to_string()),
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::PerTarget { tweet, linkedin } => {
                if prompt.contains("LinkedIn") {
                    Ok(linkedin.clone())
                } else {
                    Ok(tweet.clone())
                }
            }
            MockBehavior::Fail(error) => Err(error.clone()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
