//! Publishing platforms
//!
//! Only X is published to automatically. LinkedIn text is generated and
//! recorded but never posted by this crate.
//!
//! # Examples
//!
//! ```no_run
//! use liblearncast::config::XConfig;
//! use liblearncast::credentials::XCredentials;
//! use liblearncast::platforms::{Platform, x::XClient};
//!
//! # async fn example() -> liblearncast::error::Result<()> {
//! let credentials = XCredentials::from_env()?;
//! let platform = XClient::new(&XConfig::default(), credentials)?;
//!
//! platform.validate_content("Day 5: learned recursion.")?;
//! let receipt = platform.post("Day 5: learned recursion.").await?;
//! println!("Posted: {:?}", receipt.post_id);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::{PlatformError, Result};
use crate::types::PostReceipt;

pub mod x;

// Mock platform is available for all builds (not just tests) to support integration tests
pub mod mock;

/// A social platform that can publish text
#[async_trait]
pub trait Platform: Send + Sync {
    /// Publish `content`
    ///
    /// Returns a receipt carrying the platform-assigned id when the platform
    /// returned one.
    ///
    /// # Errors
    ///
    /// - `PlatformError::Api` when the platform rejects the request
    /// - `PlatformError::Network` / `PlatformError::Malformed` for anything
    ///   unexpected
    async fn post(&self, content: &str) -> Result<PostReceipt>;

    /// Check content against platform rules before posting
    ///
    /// The default implementation rejects empty content and content over
    /// [`Platform::character_limit`].
    fn validate_content(&self, content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(PlatformError::Validation("Content cannot be empty".to_string()).into());
        }

        if let Some(limit) = self.character_limit() {
            let count = content.chars().count();
            if count > limit {
                return Err(PlatformError::Validation(format!(
                    "Content exceeds {}'s {} character limit (current: {} characters)",
                    self.name(),
                    limit,
                    count
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Lowercase identifier (e.g., "x")
    fn name(&self) -> &str;

    /// Maximum characters per post, `None` for no hard limit
    fn character_limit(&self) -> Option<usize>;

    /// Whether the platform has everything it needs to post
    fn is_configured(&self) -> bool;
}
