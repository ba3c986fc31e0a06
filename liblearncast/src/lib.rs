//! Learncast - learning-in-public posts from plain notes
//!
//! This library turns a short notes file into a tweet and a LinkedIn post
//! with a text-generation model, records every generated pair, and
//! optionally publishes the tweet to X.

pub mod config;
pub mod confirm;
pub mod credentials;
pub mod error;
pub mod generation;
pub mod input;
pub mod logging;
pub mod pipeline;
pub mod platforms;
pub mod prompt;
pub mod recorder;
pub mod shaper;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use confirm::{Confirmer, TerminalConfirmer};
pub use credentials::XCredentials;
pub use error::{
    ConfigError, GenerationError, InputError, LearncastError, PlatformError, Result,
};
pub use generation::{gemini::GeminiClient, Generator};
pub use pipeline::{Pipeline, RunOutcome, RunSettings};
pub use platforms::{x::XClient, Platform};
pub use recorder::{OutputRecord, OutputRecorder};
pub use types::{PostReceipt, RawInput, ShapedPost, Target};
