//! Reading puzzle input from disk and splitting it into integers

use crate::error::{InputError, ParseError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read a whole input file.
///
/// A file that does not exist is reported as [`InputError::SourceNotFound`] so
/// callers can tell "you haven't downloaded this yet" apart from real I/O
/// failures.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "read input source");
            Ok(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(InputError::SourceNotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(InputError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parse whitespace or newline separated integers.
///
/// Empty (or all-whitespace) input gives an empty list.
///
/// ```
/// use aoc_solver::input::parse_numbers;
///
/// assert_eq!(parse_numbers("1721\n979 366\n").unwrap(), vec![1721, 979, 366]);
/// assert!(parse_numbers("").unwrap().is_empty());
/// assert!(parse_numbers("12 x").is_err());
/// ```
pub fn parse_numbers(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| {
                ParseError::InvalidFormat(format!(
                    "token '{}' at position {} is not an integer",
                    token,
                    position + 1
                ))
            })
        })
        .collect()
}

/// [`read_source`] followed by [`parse_numbers`].
pub fn read_numbers(path: impl AsRef<Path>) -> Result<Vec<i64>, InputError> {
    let content = read_source(path)?;
    Ok(parse_numbers(&content)?)
}
