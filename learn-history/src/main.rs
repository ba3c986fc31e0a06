use anyhow::{Context, Result};
use clap::Parser;
use liblearncast::config::Config;
use liblearncast::{logging, OutputRecord, OutputRecorder};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "learn-history")]
#[command(version, about = "List posts recorded by learn-post")]
#[command(long_about = r#"List posts recorded by learn-post, newest first.

EXAMPLES:
    # Show the last 20 records (default)
    learn-history

    # Read a different output file
    learn-history --output ~/notes/output.txt

    # Only records with a note (posted, skipped, failed, dry run)
    learn-history --notes-only

    # JSON output for scripting
    learn-history --format json | jq '.[] | .tweet'

    # JSONL output (one JSON object per line)
    learn-history --format jsonl

OUTPUT FORMATS:
    text  - Timestamp, note and tweet preview (default)
    json  - JSON array
    jsonl - JSON lines, one object per line

EXIT CODES:
    0 - Success (including a missing or empty output file)
    1 - Error (unreadable file, invalid configuration, etc.)
"#)]
struct Args {
    /// Output file written by learn-post
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Maximum number of records to return
    #[arg(short = 'n', long, default_value = "20", value_name = "N")]
    limit: usize,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json", "jsonl"])]
    format: String,

    /// Only show records that carry a note
    #[arg(long)]
    notes_only: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct HistoryEntry<'a> {
    generated_at: String,
    note: Option<&'a str>,
    tweet: &'a str,
    linkedin: Option<&'a str>,
}

impl<'a> From<&'a OutputRecord> for HistoryEntry<'a> {
    fn from(record: &'a OutputRecord) -> Self {
        Self {
            generated_at: record.generated_at.to_rfc3339(),
            note: record.note.as_deref(),
            tweet: &record.tweet,
            linkedin: record.linkedin.as_deref(),
        }
    }
}

/// Newest first, optionally only noted records, at most `limit`
fn select_records(mut records: Vec<OutputRecord>, notes_only: bool, limit: usize) -> Vec<OutputRecord> {
    records.reverse();
    records
        .into_iter()
        .filter(|r| !notes_only || r.note.is_some())
        .take(limit)
        .collect()
}

fn preview(text: &str, max_chars: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() > max_chars {
        let cut: String = single_line.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        single_line
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_default(args.verbose);
    tracing::debug!("learn-history started with args: {:?}", args);

    let output_path = match args.output {
        Some(path) => path,
        None => Config::load()
            .context("Failed to load configuration")?
            .paths
            .output_path(),
    };

    if !output_path.exists() {
        tracing::info!("No output file at {}", output_path.display());
        return Ok(());
    }

    let recorder = OutputRecorder::new(&output_path);
    let records = recorder
        .read_all()
        .with_context(|| format!("Failed to read {}", output_path.display()))?;

    let records = select_records(records, args.notes_only, args.limit);
    let entries: Vec<HistoryEntry> = records.iter().map(HistoryEntry::from).collect();

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        "jsonl" => {
            for entry in &entries {
                println!("{}", serde_json::to_string(entry)?);
            }
        }
        _ => {
            for record in &records {
                let timestamp = record.generated_at.format("%Y-%m-%d %H:%M:%S");
                let note = record.note.as_deref().unwrap_or("-");
                println!("{} | {} | {}", timestamp, note, preview(&record.tweet, 60));
                if let Some(linkedin) = &record.linkedin {
                    println!("  linkedin: {}", preview(linkedin, 60));
                }
                println!();
            }
        }
    }

    Ok(())
}
