//! Error types for Learncast

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LearncastError>;

#[derive(Error, Debug)]
pub enum LearncastError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),
}

impl LearncastError {
    /// Returns the appropriate exit code for this error
    ///
    /// Mirrors the exit codes of `learn-post`: missing posting credentials
    /// exit with 2, client construction failures with 3, unusable input or
    /// generation failures with 4, API rejections with 6 and any other
    /// posting failure with 7.
    pub fn exit_code(&self) -> i32 {
        match self {
            LearncastError::Config(ConfigError::MissingEnv(_)) => 2,
            LearncastError::Config(_) => 1,
            LearncastError::Input(_) => 4,
            LearncastError::Generation(_) => 4,
            LearncastError::Platform(PlatformError::ClientInit(_)) => 3,
            LearncastError::Platform(PlatformError::Api { .. }) => 6,
            LearncastError::Platform(_) => 7,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is empty", .0.display())]
    Empty(PathBuf),
}

/// Failure of the text-generation service
///
/// Each variant is a distinct outcome so callers can tell an unreachable
/// service from one that answered with nothing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("Failed to build generation client: {0}")]
    ClientInit(String),

    #[error("Generation service unreachable: {0}")]
    Unreachable(String),

    #[error("Generation service error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed generation response: {0}")]
    Malformed(String),

    #[error("Generation service returned no text")]
    Empty,
}

impl GenerationError {
    /// Short, stable label used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::MissingApiKey => "missing_api_key",
            GenerationError::ClientInit(_) => "client_init",
            GenerationError::Unreachable(_) => "unreachable",
            GenerationError::Api { .. } => "api",
            GenerationError::Malformed(_) => "malformed",
            GenerationError::Empty => "empty",
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum PlatformError {
    #[error("Failed to initialize client: {0}")]
    ClientInit(String),

    #[error("Content validation failed: {0}")]
    Validation(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Malformed(String),
}

impl PlatformError {
    /// Whether the platform itself rejected the request
    ///
    /// Everything else (transport failures, undecodable responses, local
    /// validation) is treated as an unexpected error by the pipeline.
    pub fn is_api_error(&self) -> bool {
        matches!(self, PlatformError::Api { .. })
    }
}
