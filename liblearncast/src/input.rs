//! Reading raw learning notes from disk

use std::path::Path;

use tracing::debug;

use crate::error::InputError;
use crate::types::RawInput;

/// Default input file, relative to the working directory
pub const DEFAULT_INPUT_FILE: &str = "input.txt";

/// Read and trim the notes in `path`
///
/// The file is read fresh on every call.
///
/// # Errors
///
/// - `InputError::NotFound` if the file does not exist
/// - `InputError::Read` if it exists but cannot be read as UTF-8
/// - `InputError::Empty` if it holds only whitespace
pub fn read_raw_input(path: &Path) -> Result<RawInput, InputError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(InputError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(InputError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    debug!("Read {} bytes from {}", content.len(), path.display());

    RawInput::new(&content).ok_or_else(|| InputError::Empty(path.to_path_buf()))
}
