//! End-to-end run: read, generate, shape, record, confirm, publish
//!
//! Every way a run can end is a [`RunOutcome`]; the binary turns it into a
//! process exit code.

use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::confirm::{Confirmer, POST_PROMPT};
use crate::error::{GenerationError, InputError, LearncastError, Result};
use crate::generation::{generate_for, Generator};
use crate::input::read_raw_input;
use crate::platforms::Platform;
use crate::recorder::{OutputRecord, OutputRecorder};
use crate::types::{RawInput, ShapedPost, Target};

pub const NOTE_DRY_RUN: &str = "DRY RUN";
pub const NOTE_SKIPPED: &str = "User skipped posting";
pub const NOTE_API_ERROR: &str = "Failed to post tweet (API error)";
pub const NOTE_UNEXPECTED_ERROR: &str = "Failed to post tweet (unexpected error)";
pub const NOTE_POSTED_NO_ID: &str = "Tweet posted (no id returned)";

/// Choices for a single run
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub dry_run: bool,
    pub include_linkedin: bool,
    /// Post without asking the confirmer (`--yes`)
    pub auto_confirm: bool,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Posted { post_id: Option<String> },
    DryRun,
    Declined,
    /// Input file missing, unreadable or empty
    InputUnavailable,
    EmptyTweet,
    EmptyLinkedIn,
    MissingCredentials,
    ClientInitFailed,
    /// The platform rejected the post
    ApiError,
    UnexpectedError,
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Posted { .. } | RunOutcome::DryRun | RunOutcome::Declined => 0,
            RunOutcome::MissingCredentials => 2,
            RunOutcome::ClientInitFailed => 3,
            RunOutcome::InputUnavailable | RunOutcome::EmptyTweet => 4,
            RunOutcome::EmptyLinkedIn => 5,
            RunOutcome::ApiError => 6,
            RunOutcome::UnexpectedError => 7,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == 0
    }
}

/// Shaped output of one generation pass
///
/// Each text is either a shaped post or the reason generation failed.
#[derive(Debug)]
pub struct LearningUpdate {
    pub tweet: std::result::Result<ShapedPost, GenerationError>,
    pub linkedin: Option<std::result::Result<ShapedPost, GenerationError>>,
}

async fn generate_shaped(
    generator: &dyn Generator,
    target: Target,
    raw: &RawInput,
) -> std::result::Result<ShapedPost, GenerationError> {
    match generate_for(generator, target, raw).await {
        Ok(text) => Ok(ShapedPost::for_target(target, &text)),
        Err(e) => {
            error!(kind = e.kind(), target = %target, "Generation failed: {}", e);
            Err(e)
        }
    }
}

/// Read the notes in `input_path` and generate shaped posts from them
///
/// # Errors
///
/// Returns the `InputError` when the notes cannot be used; the generator is
/// not called in that case.
pub async fn generate_learning_update(
    generator: &dyn Generator,
    input_path: &Path,
    include_linkedin: bool,
) -> std::result::Result<LearningUpdate, InputError> {
    let raw = read_raw_input(input_path)?;

    info!("Generating learning updates from {}", input_path.display());

    let tweet = generate_shaped(generator, Target::Tweet, &raw).await;
    let linkedin = if include_linkedin {
        Some(generate_shaped(generator, Target::LinkedIn, &raw).await)
    } else {
        None
    };

    Ok(LearningUpdate { tweet, linkedin })
}

/// Preview text printed before any posting decision
pub fn render_previews(tweet: &ShapedPost, linkedin: Option<&ShapedPost>) -> String {
    let mut out = format!("\n--- X / TWITTER PREVIEW ---\n\n{}\n", tweet);
    if let Some(post) = linkedin {
        out.push_str(&format!("\n--- LINKEDIN POST PREVIEW ---\n\n{}\n", post));
    }
    out
}

pub struct Pipeline<'a> {
    generator: &'a dyn Generator,
    confirmer: &'a dyn Confirmer,
    recorder: OutputRecorder,
    settings: RunSettings,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        generator: &'a dyn Generator,
        confirmer: &'a dyn Confirmer,
        settings: RunSettings,
    ) -> Self {
        Self {
            generator,
            confirmer,
            recorder: OutputRecorder::new(settings.output_path.clone()),
            settings,
        }
    }

    fn record(&self, tweet: &ShapedPost, linkedin: Option<&ShapedPost>, note: Option<&str>) {
        let record = OutputRecord::new(tweet.as_str(), linkedin.map(|p| p.as_str()), note);
        self.recorder.append(&record);
    }

    /// Run once
    ///
    /// `connect` builds the publishing platform. It is only called after
    /// generation succeeded and dry-run is off.
    pub async fn run<F>(&self, connect: F) -> RunOutcome
    where
        F: FnOnce() -> Result<Box<dyn Platform>>,
    {
        let update = match generate_learning_update(
            self.generator,
            &self.settings.input_path,
            self.settings.include_linkedin,
        )
        .await
        {
            Ok(update) => update,
            Err(e) => {
                error!("Failed to read input text: {}", e);
                return RunOutcome::InputUnavailable;
            }
        };

        let tweet = match update.tweet {
            Ok(tweet) if !tweet.is_empty() => tweet,
            _ => {
                error!("Generated tweet is empty.");
                return RunOutcome::EmptyTweet;
            }
        };

        let linkedin = match update.linkedin {
            None => None,
            Some(Ok(post)) if !post.is_empty() => Some(post),
            Some(_) => {
                error!("Generated LinkedIn post is empty.");
                return RunOutcome::EmptyLinkedIn;
            }
        };

        let dry_run_note = self.settings.dry_run.then_some(NOTE_DRY_RUN);
        self.record(&tweet, linkedin.as_ref(), dry_run_note);

        print!("{}", render_previews(&tweet, linkedin.as_ref()));

        if self.settings.dry_run {
            info!("DRY RUN ENABLED: no posts published");
            return RunOutcome::DryRun;
        }

        let platform = match connect() {
            Ok(platform) => platform,
            Err(LearncastError::Config(e)) => {
                error!("{}", e);
                return RunOutcome::MissingCredentials;
            }
            Err(e) => {
                error!("Failed to initialize X client: {}", e);
                return RunOutcome::ClientInitFailed;
            }
        };

        if !platform.is_configured() {
            error!("{} client is missing credentials", platform.name());
            return RunOutcome::MissingCredentials;
        }

        if !self.settings.auto_confirm && !self.confirmer.confirm(POST_PROMPT) {
            info!("Posting skipped by user");
            self.record(&tweet, linkedin.as_ref(), Some(NOTE_SKIPPED));
            return RunOutcome::Declined;
        }

        let posted = match platform.validate_content(tweet.as_str()) {
            Ok(()) => platform.post(tweet.as_str()).await,
            Err(e) => Err(e),
        };

        let outcome = match posted {
            Ok(receipt) => {
                info!("Tweet posted successfully");
                let note = match &receipt.post_id {
                    Some(id) => {
                        info!("Tweet ID: {}", id);
                        format!("Tweet posted (id={})", id)
                    }
                    None => NOTE_POSTED_NO_ID.to_string(),
                };
                self.record(&tweet, linkedin.as_ref(), Some(&note));
                RunOutcome::Posted {
                    post_id: receipt.post_id,
                }
            }
            Err(LearncastError::Platform(e)) if e.is_api_error() => {
                error!("{} API error while posting tweet: {}", platform.name(), e);
                self.record(&tweet, linkedin.as_ref(), Some(NOTE_API_ERROR));
                RunOutcome::ApiError
            }
            Err(e) => {
                error!("Unexpected error while posting tweet: {}", e);
                self.record(&tweet, linkedin.as_ref(), Some(NOTE_UNEXPECTED_ERROR));
                RunOutcome::UnexpectedError
            }
        };

        if linkedin.is_some() {
            info!("LinkedIn post generated (manual posting recommended)");
        }

        outcome
    }
}
