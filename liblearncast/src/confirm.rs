//! Confirmation before publishing

use std::io::{self, BufRead, Write};
use tracing::warn;

pub const POST_PROMPT: &str = "Post the tweet now? (y/N): ";

/// Decides whether a post may go out
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Asks on the controlling terminal
///
/// Declines when stdin is not a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        if !atty::is(atty::Stream::Stdin) {
            warn!("No TTY available; refusing to post without --yes flag");
            return false;
        }

        let stdin = io::stdin();
        let mut input = stdin.lock();
        prompt_yes_no(prompt, &mut input, &mut io::stdout())
    }
}

/// Always answers the same way
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirmer(pub bool);

impl Confirmer for FixedConfirmer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// Write `prompt`, read one line, accept only `y` (any case)
///
/// End of input and read errors decline.
pub fn prompt_yes_no<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> bool {
    if write!(output, "{}", prompt).and_then(|_| output.flush()).is_err() {
        warn!("Could not write confirmation prompt; declining");
        return false;
    }

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) => false,
        Ok(_) => answer.trim().eq_ignore_ascii_case("y"),
        Err(e) => {
            warn!("Failed to read confirmation: {}; declining", e);
            false
        }
    }
}
