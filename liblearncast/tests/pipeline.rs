//! End-to-end pipeline tests with mock generation and publishing
//!
//! These tests verify complete runs including:
//! - Generating, recording and posting a tweet
//! - Input and generation failures
//! - Dry runs, declined confirmation and posting failures

use liblearncast::confirm::FixedConfirmer;
use liblearncast::error::{ConfigError, GenerationError, PlatformError};
use liblearncast::generation::mock::MockGenerator;
use liblearncast::platforms::mock::MockPlatform;
use liblearncast::recorder::OutputRecorder;
use liblearncast::{OutputRecord, Pipeline, Platform, Result, RunOutcome, RunSettings};
use std::fs;
use tempfile::TempDir;

/// Helper to create a scratch directory with an input file
fn setup(input: &str) -> (TempDir, RunSettings) {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    fs::write(&input_path, input).unwrap();

    let settings = RunSettings {
        input_path,
        output_path: temp_dir.path().join("output.txt"),
        dry_run: false,
        include_linkedin: true,
        auto_confirm: false,
    };

    (temp_dir, settings)
}

fn connect_to(platform: &MockPlatform) -> impl FnOnce() -> Result<Box<dyn Platform>> + '_ {
    move || Ok(Box::new(platform.clone()) as Box<dyn Platform>)
}

fn records(settings: &RunSettings) -> Vec<OutputRecord> {
    OutputRecorder::new(&settings.output_path).read_all().unwrap()
}

#[tokio::test]
async fn test_echo_run_posts_tweet_and_records_it() {
    let (_temp_dir, settings) = setup("Day 5: learned recursion.\n");
    let generator = MockGenerator::echo();
    let platform = MockPlatform::success("x");
    let confirmer = FixedConfirmer(true);

    let pipeline = Pipeline::new(&generator, &confirmer, settings.clone());
    let outcome = pipeline.run(connect_to(&platform)).await;

    assert_eq!(
        outcome,
        RunOutcome::Posted {
            post_id: Some("x-1".to_string())
        }
    );
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(generator.call_count(), 2);
    assert_eq!(platform.post_call_count(), 1);
    assert!(platform.posted_content()[0].contains("Day 5"));

    let records = records(&settings);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].note, None);
    assert!(records[0].tweet.contains("Day 5"));
    assert!(records[0].linkedin.as_deref().unwrap().contains("Day 5"));
    assert_eq!(records[1].note.as_deref(), Some("Tweet posted (id=x-1)"));
}

#[tokio::test]
async fn test_empty_input_exits_4_without_generation() {
    let (_temp_dir, settings) = setup("  \n\n");
    let generator = MockGenerator::echo();
    let confirmer = FixedConfirmer(true);

    let pipeline = Pipeline::new(&generator, &confirmer, settings.clone());
    let outcome = pipeline
        .run(|| panic!("must not connect without a tweet"))
        .await;

    assert_eq!(outcome, RunOutcome::InputUnavailable);
    assert_eq!(outcome.exit_code(), 4);
    assert_eq!(generator.call_count(), 0);
    assert!(!settings.output_path.exists());
}

#[tokio::test]
async fn test_missing_input_file_exits_4() {
    let (_temp_dir, mut settings) = setup("unused");
    settings.input_path = settings.input_path.with_file_name("missing.txt");
    let generator = MockGenerator::echo();
    let confirmer = FixedConfirmer(true);

    let pipeline = Pipeline::new(&generator, &confirmer, settings);
    let outcome = pipeline.run(|| panic!("must not connect")).await;

    assert_eq!(outcome.exit_code(), 4);
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn test_dry_run_records_without_posting() {
    let (_temp_dir, mut settings) = setup("Day 6: traits.");
    settings.dry_run = true;
    let generator = MockGenerator::echo();
    let confirmer = FixedConfirmer(true);

    let pipeline = Pipeline::new(&generator, &confirmer, settings.clone());
    let outcome = pipeline
        .run(|| panic!("dry run must not connect"))
        .await;

    assert_eq!(outcome, RunOutcome::DryRun);
    assert_eq!(outcome.exit_code(), 0);

    let records = records(&settings);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].note.as_deref(), Some("DRY RUN"));

    let content = fs::read_to_string(&settings.output_path).unwrap();
    assert!(content.contains("NOTE: DRY RUN\n"));
}

#[tokio::test]
async fn test_declined_confirmation_records_skip() {
    let (_temp_dir, settings) = setup("Day 7: lifetimes.");
    let generator = MockGenerator::echo();
    let platform = MockPlatform::success("x");
    let confirmer = FixedConfirmer(false);

    let pipeline = Pipeline::new(&generator, &confirmer, settings.clone());
    let outcome = pipeline.run(connect_to(&platform)).await;

    assert_eq!(outcome, RunOutcome::Declined);
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(platform.post_call_count(), 0);

    let records = records(&settings);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].note.as_deref(), Some("User skipped posting"));
}

#[tokio::test]
async fn test_auto_confirm_posts_without_asking() {
    let (_temp_dir, mut settings) = setup("Day 7: lifetimes.");
    settings.auto_confirm = true;
    let generator = MockGenerator::echo();
    let platform = MockPlatform::success("x");
    let confirmer = FixedConfirmer(false);

    let pipeline = Pipeline::new(&generator, &confirmer, settings);
    let outcome = pipeline.run(connect_to(&platform)).await;

    assert_eq!(
        outcome,
        RunOutcome::Posted {
            post_id: Some("x-1".to_string())
        }
    );
    assert_eq!(platform.post_call_count(), 1);
}

#[tokio::test]
async fn test_unconfigured_platform_exits_2_without_posting() {
    let (_temp_dir, mut settings) = setup("Day 7: lifetimes.");
    settings.auto_confirm = true;
    let generator = MockGenerator::echo();
    let platform = MockPlatform::unconfigured("x");
    let confirmer = FixedConfirmer(true);

    let pipeline = Pipeline::new(&generator, &confirmer, settings.clone());
    let outcome = pipeline.run(connect_to(&platform)).await;

    assert_eq!(outcome, RunOutcome::MissingCredentials);
    assert_eq!(outcome.exit_code(), 2);
    assert_eq!(platform.post_call_count(), 0);
    assert_eq!(records(&settings).len(), 1);
}

#[tokio::test]
async fn test_api_error_exits_6() {
    let (_temp_dir, settings) = setup("Day 8: async.");
    let generator = MockGenerator::echo();
    let platform = MockPlatform::post_failure(
        "x",
        PlatformError::Api {
            status: 403,
            message: "duplicate content".to_string(),
        },
    );
    let confirmer = FixedConfirmer(true);

    let pipeline = Pipeline::new(&generator, &confirmer, settings.clone());
    let outcome = pipeline.run(connect_to(&platform)).await;

    assert_eq!(outcome, RunOutcome::ApiError);
    assert_eq!(outcome.exit_code(), 6);

    let records = records(&settings);
    assert_eq!(
        records.last().unwrap().note.as_deref(),
        Some("Failed to post tweet (API error)")
    );
}

#[tokio::test]
async fn test_network_error_exits_7() {
    let (_temp_dir, settings) = setup("Day 9: tokio.");
    let generator = MockGenerator::echo();
    let platform =
        MockPlatform::post_failure("x", PlatformError::Network("connection reset".to_string()));
    let confirmer = FixedConfirmer(true);

    let pipeline = Pipeline::new(&generator, &confirmer, settings.clone());
    let outcome = pipeline.run(connect_to(&platform)).await;

    assert_eq!(outcome, RunOutcome::UnexpectedError);
    assert_eq!(outcome.exit_code(), 7);

    let records = records(&settings);
    assert_eq!(
        records.last().unwrap().note.as_deref(),
        Some("Failed to post tweet (unexpected error)")
    );
}

#[tokio::test]
async fn test_missing_credentials_exits_2_after_recording() {
    let (_temp_dir, settings) = setup("Day 10: serde.");
    let generator = MockGenerator::echo();
    let confirmer = FixedConfirmer(true);

    let pipeline = Pipeline::new(&generator, &confirmer, settings.clone());
    let outcome = pipeline
        .run(|| Err(ConfigError::MissingEnv("X_API_KEY".to_string()).into()))
        .await;

    assert_eq!(outcome, RunOutcome::MissingCredentials);
    assert_eq!(outcome.exit_code(), 2);
    assert_eq!(records(&settings).len(), 1);
}

#[tokio::test]
async fn test_client_init_failure_exits_3() {
    let (_temp_dir, settings) = setup("Day 11: reqwest.");
    let generator = MockGenerator::echo();
    let confirmer = FixedConfirmer(true);

    let pipeline = Pipeline::new(&generator, &confirmer, settings);
    let outcome = pipeline
        .run(|| Err(PlatformError::ClientInit("tls backend unavailable".to_string()).into()))
        .await;

    assert_eq!(outcome, RunOutcome::ClientInitFailed);
    assert_eq!(outcome.exit_code(), 3);
}

#[tokio::test]
async fn test_generation_failure_is_an_empty_tweet() {
    let (_temp_dir, settings) = setup("Day 12: errors.");
    let generator = MockGenerator::failing(GenerationError::Api {
        status: 500,
        message: "internal".to_string(),
    });
    let confirmer = FixedConfirmer(true);

    let pipeline = Pipeline::new(&generator, &confirmer, settings.clone());
    let outcome = pipeline.run(|| panic!("must not connect")).await;

    assert_eq!(outcome, RunOutcome::EmptyTweet);
    assert_eq!(outcome.exit_code(), 4);
    assert!(!settings.output_path.exists());
}

#[tokio::test]
async fn test_blank_linkedin_post_exits_5() {
    let (_temp_dir, settings) = setup("Day 13: macros.");
    let generator = MockGenerator::per_target("Day 13 🚀 macros", "   ");
    let confirmer = FixedConfirmer(true);

    let pipeline = Pipeline::new(&generator, &confirmer, settings.clone());
    let outcome = pipeline.run(|| panic!("must not connect")).await;

    assert_eq!(outcome, RunOutcome::EmptyLinkedIn);
    assert_eq!(outcome.exit_code(), 5);
    assert!(!settings.output_path.exists());
}

#[tokio::test]
async fn test_tweet_only_skips_linkedin() {
    let (_temp_dir, mut settings) = setup("Day 14: closures.");
    settings.include_linkedin = false;
    let generator = MockGenerator::echo();
    let platform = MockPlatform::success_without_id("x");
    let confirmer = FixedConfirmer(true);

    let pipeline = Pipeline::new(&generator, &confirmer, settings.clone());
    let outcome = pipeline.run(connect_to(&platform)).await;

    assert_eq!(outcome, RunOutcome::Posted { post_id: None });
    assert_eq!(generator.call_count(), 1);

    let records = records(&settings);
    assert!(records.iter().all(|r| r.linkedin.is_none()));
    assert_eq!(
        records.last().unwrap().note.as_deref(),
        Some("Tweet posted (no id returned)")
    );
}

#[tokio::test]
async fn test_long_tweet_is_truncated_before_posting() {
    let (_temp_dir, settings) = setup("Day 15: iterators.");
    let long = "iterators are lazy ".repeat(30);
    let generator = MockGenerator::per_target(&long, "LinkedIn body");
    let platform = MockPlatform::with_limit("x", 280);
    let confirmer = FixedConfirmer(true);

    let pipeline = Pipeline::new(&generator, &confirmer, settings);
    let outcome = pipeline.run(connect_to(&platform)).await;

    assert!(outcome.is_success());
    let posted = &platform.posted_content()[0];
    assert_eq!(posted.chars().count(), 280);
    assert!(posted.ends_with('…'));
}
