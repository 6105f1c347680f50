// src/command/tokenize.rs

use crate::errors::{HarnessError, Result};

/// Split an assembled command line into argv using POSIX shell word rules.
///
/// Quotes group words and backslashes escape the next character, exactly as
/// `sh` would split them. No expansion (globs, variables) takes place.
///
/// An unbalanced quote, a trailing backslash, or a line that splits into
/// zero words is a [`HarnessError::MalformedCommandLine`].
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let words = shell_words::split(line).map_err(|e| HarnessError::MalformedCommandLine {
        line: line.to_string(),
        reason: e.to_string(),
    })?;

    if words.is_empty() {
        return Err(HarnessError::MalformedCommandLine {
            line: line.to_string(),
            reason: "command line is empty".to_string(),
        });
    }

    Ok(words)
}
