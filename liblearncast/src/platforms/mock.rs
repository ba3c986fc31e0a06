//! Mock platform implementation for testing
//!
//! Simulates successful posts, API rejections and transport failures without
//! credentials or network access. Call counts and posted content are shared
//! between clones so tests can hand one copy to the pipeline and inspect the
//! other.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::{PlatformError, Result};
use crate::platforms::Platform;
use crate::types::PostReceipt;

/// Configuration for mock platform behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Platform name (e.g., "mock-x")
    pub name: String,

    /// Error returned by every post, `None` to succeed
    pub post_error: Option<PlatformError>,

    /// Whether successful posts return an id
    pub returns_id: bool,

    /// Character limit for validation
    pub character_limit: Option<usize>,

    /// Reported by `is_configured`
    pub configured: bool,

    /// Number of times post has been called
    pub post_call_count: Arc<Mutex<usize>>,

    /// Posts that have been made (for verification)
    pub posted_content: Arc<Mutex<Vec<String>>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            name: "mock".to_string(),
            post_error: None,
            returns_id: true,
            character_limit: None,
            configured: true,
            post_call_count: Arc::new(Mutex::new(0)),
            posted_content: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock platform for testing
#[derive(Debug, Clone)]
pub struct MockPlatform {
    config: MockConfig,
}

impl MockPlatform {
    /// Create a new mock platform with the given configuration
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// Create a mock platform that always succeeds with an id
    pub fn success(name: &str) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            ..Default::default()
        })
    }

    /// Create a mock platform that succeeds without returning an id
    pub fn success_without_id(name: &str) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            returns_id: false,
            ..Default::default()
        })
    }

    /// Create a mock platform whose posts fail with `error`
    pub fn post_failure(name: &str, error: PlatformError) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            post_error: Some(error),
            ..Default::default()
        })
    }

    /// Create a mock platform with a character limit
    pub fn with_limit(name: &str, limit: usize) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            character_limit: Some(limit),
            ..Default::default()
        })
    }

    /// Create a mock platform that reports missing credentials
    pub fn unconfigured(name: &str) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            configured: false,
            ..Default::default()
        })
    }

    /// Get the number of times post was called
    pub fn post_call_count(&self) -> usize {
        *self.config.post_call_count.lock().unwrap()
    }

    /// Get all content that was posted
    pub fn posted_content(&self) -> Vec<String> {
        self.config.posted_content.lock().unwrap().clone()
    }
}

#[async_trait]
impl Platform for MockPlatform {
    async fn post(&self, content: &str) -> Result<PostReceipt> {
        let call = {
            let mut count = self.config.post_call_count.lock().unwrap();
            *count += 1;
            *count
        };

        if let Some(error) = &self.config.post_error {
            return Err(error.clone().into());
        }

        self.config
            .posted_content
            .lock()
            .unwrap()
            .push(content.to_string());

        let post_id = self
            .config
            .returns_id
            .then(|| format!("{}-{}", self.config.name, call));

        Ok(PostReceipt {
            platform: self.config.name.clone(),
            post_id,
        })
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    fn character_limit(&self) -> Option<usize> {
        self.config.character_limit
    }

    fn is_configured(&self) -> bool {
        self.config.configured
    }
}
