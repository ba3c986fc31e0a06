//! Append-only record of generated posts
//!
//! Each run appends one or more blocks to a plain-text file:
//!
//! ```text
//! ===== Generated on 2026-10-19T08:15:02.481516Z =====
//! NOTE: DRY RUN
//! --- X / TWEET ---
//! Day 5 🚀 ...
//!
//! --- LINKEDIN POST ---
//! Day 5 of learning in public ...
//!
//! ```
//!
//! Blocks are never rewritten. [`parse_records`] reads them back.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

const HEADER_PREFIX: &str = "===== Generated on ";
const HEADER_SUFFIX: &str = "Z =====";
const NOTE_PREFIX: &str = "NOTE: ";
const TWEET_LABEL: &str = "--- X / TWEET ---";
const LINKEDIN_LABEL: &str = "--- LINKEDIN POST ---";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One block of the output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub generated_at: DateTime<Utc>,
    pub note: Option<String>,
    pub tweet: String,
    pub linkedin: Option<String>,
}

impl OutputRecord {
    /// A record stamped with the current time
    pub fn new(tweet: &str, linkedin: Option<&str>, note: Option<&str>) -> Self {
        Self::at(Utc::now(), tweet, linkedin, note)
    }

    pub fn at(
        generated_at: DateTime<Utc>,
        tweet: &str,
        linkedin: Option<&str>,
        note: Option<&str>,
    ) -> Self {
        Self {
            generated_at,
            note: note.filter(|n| !n.is_empty()).map(String::from),
            tweet: tweet.to_string(),
            linkedin: linkedin.map(String::from),
        }
    }

    pub fn header(&self) -> String {
        format!(
            "{}{}{}",
            HEADER_PREFIX,
            self.generated_at.format(TIMESTAMP_FORMAT),
            HEADER_SUFFIX
        )
    }
}

impl std::fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header())?;
        if let Some(note) = &self.note {
            writeln!(f, "{}{}", NOTE_PREFIX, note)?;
        }
        writeln!(f, "{}", TWEET_LABEL)?;
        writeln!(f, "{}", self.tweet.trim_end())?;
        writeln!(f)?;
        if let Some(linkedin) = &self.linkedin {
            writeln!(f, "{}", LINKEDIN_LABEL)?;
            writeln!(f, "{}", linkedin.trim_end())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Appends records to one file
#[derive(Debug, Clone)]
pub struct OutputRecorder {
    path: PathBuf,
}

impl OutputRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `record` as a single write
    ///
    /// Best effort: failures are logged and reported through the return
    /// value, never as an error.
    pub fn append(&self, record: &OutputRecord) -> bool {
        let block = record.to_string();

        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(block.as_bytes()));

        match result {
            Ok(()) => {
                info!("Saved outputs to {}", self.path.display());
                true
            }
            Err(e) => {
                error!("Failed to write outputs to {}: {}", self.path.display(), e);
                false
            }
        }
    }

    /// Read every record currently in the file
    pub fn read_all(&self) -> std::io::Result<Vec<OutputRecord>> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(parse_records(&content))
    }
}

fn parse_header(line: &str) -> Option<DateTime<Utc>> {
    let stamp = line
        .strip_prefix(HEADER_PREFIX)?
        .strip_suffix(HEADER_SUFFIX)?;
    NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[derive(PartialEq)]
enum Section {
    Preamble,
    Tweet,
    LinkedIn,
}

fn finish_body(lines: &[&str]) -> String {
    lines.join("\n").trim_end().to_string()
}

/// Split `content` into records, one per header line
///
/// Text before the first header and blocks without a tweet section are
/// skipped.
pub fn parse_records(content: &str) -> Vec<OutputRecord> {
    let mut records = Vec::new();
    let mut current: Option<(DateTime<Utc>, Vec<&str>)> = None;

    for line in content.lines() {
        if let Some(generated_at) = parse_header(line) {
            if let Some((at, lines)) = current.take() {
                records.extend(parse_block(at, &lines));
            }
            current = Some((generated_at, Vec::new()));
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line);
        }
    }

    if let Some((at, lines)) = current {
        records.extend(parse_block(at, &lines));
    }

    records
}

fn parse_block(generated_at: DateTime<Utc>, lines: &[&str]) -> Option<OutputRecord> {
    let mut note = None;
    let mut tweet: Vec<&str> = Vec::new();
    let mut linkedin: Vec<&str> = Vec::new();
    let mut has_tweet = false;
    let mut has_linkedin = false;
    let mut section = Section::Preamble;

    for line in lines {
        match section {
            Section::Preamble => {
                if let Some(text) = line.strip_prefix(NOTE_PREFIX) {
                    note = Some(text.to_string());
                } else if *line == TWEET_LABEL {
                    has_tweet = true;
                    section = Section::Tweet;
                }
            }
            Section::Tweet => {
                if *line == LINKEDIN_LABEL {
                    has_linkedin = true;
                    section = Section::LinkedIn;
                } else {
                    tweet.push(line);
                }
            }
            Section::LinkedIn => linkedin.push(line),
        }
    }

    if !has_tweet {
        return None;
    }

    Some(OutputRecord {
        generated_at,
        note,
        tweet: finish_body(&tweet),
        linkedin: has_linkedin.then(|| finish_body(&linkedin)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 2).unwrap()
    }

    #[test]
    fn test_block_format_with_everything() {
        let record = OutputRecord::at(
            fixed_time(),
            "Day 5 🚀\n\n#100DaysOfCode\n",
            Some("Long form\n\n#LearningInPublic  "),
            Some("DRY RUN"),
        );

        assert_eq!(
            record.to_string(),
            "===== Generated on 2026-10-19T08:15:02.000000Z =====\n\
             NOTE: DRY RUN\n\
             --- X / TWEET ---\n\
             Day 5 🚀\n\n#100DaysOfCode\n\
             \n\
             --- LINKEDIN POST ---\n\
             Long form\n\n#LearningInPublic\n\
             \n"
        );
    }

    #[test]
    fn test_block_format_tweet_only_without_note() {
        let record = OutputRecord::at(fixed_time(), "Day 5", None, None);

        assert_eq!(
            record.to_string(),
            "===== Generated on 2026-10-19T08:15:02.000000Z =====\n\
             --- X / TWEET ---\n\
             Day 5\n\
             \n"
        );
    }

    #[test]
    fn test_empty_note_is_dropped() {
        let record = OutputRecord::new("Day 5", None, Some(""));
        assert_eq!(record.note, None);
    }

    #[test]
    fn test_two_appends_give_two_parseable_blocks() {
        let dir = TempDir::new().unwrap();
        let recorder = OutputRecorder::new(dir.path().join("output.txt"));

        let first = OutputRecord::at(fixed_time(), "first tweet", Some("first post"), Some("DRY RUN"));
        let second = OutputRecord::at(
            fixed_time() + chrono::Duration::seconds(5),
            "second tweet",
            Some("second post"),
            Some("Tweet posted (id=123)"),
        );

        assert!(recorder.append(&first));
        assert!(recorder.append(&second));

        let content = std::fs::read_to_string(recorder.path()).unwrap();
        assert_eq!(content.matches("===== Generated on ").count(), 2);
        assert!(content.starts_with(&first.to_string()));
        assert!(content.ends_with(&second.to_string()));

        let records = recorder.read_all().unwrap();
        assert_eq!(records, vec![first, second]);
    }

    #[test]
    fn test_append_never_rewrites_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.txt");
        std::fs::write(&path, "hand-written notes\n").unwrap();

        let recorder = OutputRecorder::new(&path);
        assert!(recorder.append(&OutputRecord::new("tweet", None, None)));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("hand-written notes\n===== Generated on "));
    }

    #[test]
    fn test_append_failure_is_reported_not_raised() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let recorder = OutputRecorder::new(dir.path());

        assert!(!recorder.append(&OutputRecord::new("tweet", None, None)));
    }

    #[test]
    fn test_parse_preserves_microseconds() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::microseconds(123_456);
        let record = OutputRecord::at(at, "t", None, None);

        let parsed = parse_records(&record.to_string());
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].generated_at, at);
    }

    #[test]
    fn test_parse_accepts_headers_without_fraction() {
        let content = "===== Generated on 2025-12-01T10:00:00Z =====\n--- X / TWEET ---\nhello\n\n";
        let records = parse_records(content);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tweet, "hello");
        assert_eq!(records[0].linkedin, None);
    }

    #[test]
    fn test_parse_skips_garbage_and_headerless_blocks() {
        let content = "\
preamble text
===== Generated on not-a-date Z =====
===== Generated on 2025-12-01T10:00:00Z =====
NOTE: missing tweet section
===== Generated on 2025-12-02T10:00:00Z =====
--- X / TWEET ---
kept
";
        let records = parse_records(content);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tweet, "kept");
    }
}
