//! learn-post - Turn today's learning notes into a tweet and a LinkedIn post

use clap::Parser;
use liblearncast::config::{dry_run_from_env, Config};
use liblearncast::credentials::{self, XCredentials};
use liblearncast::{
    logging, GeminiClient, Platform, Pipeline, RunOutcome, RunSettings, TerminalConfirmer,
    XClient,
};
use std::path::PathBuf;
use tracing::{debug, error, warn};

#[derive(Parser, Debug)]
#[command(name = "learn-post")]
#[command(version, about = "Generate learning-in-public posts and optionally tweet them")]
#[command(long_about = r#"Generate learning-in-public posts and optionally tweet them.

Reads notes from the input file, asks Gemini for a tweet and a LinkedIn
post, prints both, appends them to the output file, and asks before
posting the tweet to X.

EXAMPLES:
    # Preview and confirm interactively
    learn-post

    # Post without asking
    learn-post --yes

    # Generate only, never post
    DRY_RUN=true learn-post

    # Tweet only, custom files
    learn-post --tweet-only --input notes/day5.txt --output log.txt

ENVIRONMENT:
    GEMINI_API_KEY      Gemini API key
    X_API_KEY, X_API_SECRET, X_ACCESS_TOKEN, X_ACCESS_SECRET
                        X credentials (only needed to post)
    DRY_RUN             "true" disables posting
    GEMINI_MODEL        Model name (default: gemini-flash-latest)

EXIT CODES:
    0 - Posted, declined, or dry run
    1 - Configuration file error
    2 - Missing X credential
    3 - X client could not be created
    4 - Empty tweet or unusable input file
    5 - Empty LinkedIn post
    6 - X API error
    7 - Unexpected posting error
"#)]
struct Cli {
    /// Post without asking for confirmation
    #[arg(short = 'y', long)]
    yes: bool,

    /// Notes file to read (default: input.txt)
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// File to append generated posts to (default: output.txt)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Skip the LinkedIn post
    #[arg(long)]
    tweet_only: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    logging::init_default(cli.verbose);

    let code = run(cli).await;
    std::process::exit(code);
}

async fn run(cli: Cli) -> i32 {
    debug!("learn-post started with args: {:?}", cli);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return e.exit_code();
        }
    };

    let settings = RunSettings {
        input_path: cli.input.unwrap_or_else(|| config.paths.input_path()),
        output_path: cli.output.unwrap_or_else(|| config.paths.output_path()),
        dry_run: dry_run_from_env(),
        include_linkedin: !cli.tweet_only,
        auto_confirm: cli.yes,
    };

    let generator = match GeminiClient::new(&config.gemini, credentials::gemini_api_key()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create Gemini client: {}", e);
            return RunOutcome::EmptyTweet.exit_code();
        }
    };

    if !generator.is_configured() {
        warn!("GEMINI_API_KEY is not set; generation will fail");
    }

    let confirmer = TerminalConfirmer;
    let pipeline = Pipeline::new(&generator, &confirmer, settings);

    let x_config = config.x.clone();
    let outcome = pipeline
        .run(move || {
            let credentials = XCredentials::from_env()?;
            let client = XClient::new(&x_config, credentials)?;
            Ok(Box::new(client) as Box<dyn Platform>)
        })
        .await;

    debug!("Run finished: {:?}", outcome);
    outcome.exit_code()
}
