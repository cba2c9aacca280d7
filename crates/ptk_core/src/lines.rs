//! Line-oriented stream filters.
//!
//! Each filter reads its input one line at a time, transforms or drops the
//! line, and writes the result followed by `\n`. A trailing newline on the
//! input does not produce an extra empty line, and `\r\n` endings are accepted.
//! Lines are handled as bytes, so input need not be UTF-8.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs;
use std::io::{BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};

use regex::bytes::Regex;
use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Run `transform` over every input line, writing the lines it keeps.
///
/// Lines are raw bytes; nothing is decoded, so input that is not UTF-8
/// passes through untouched. Returns the number of lines written.
pub fn process_lines<R, W, F>(input: R, mut output: W, mut transform: F) -> CoreResult<usize>
where
    R: BufRead,
    W: Write,
    F: FnMut(Vec<u8>) -> Option<Vec<u8>>,
{
    let mut read = 0;
    let mut written = 0;

    for line in input.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        read += 1;

        if let Some(out) = transform(line) {
            output.write_all(&out)?;
            output.write_all(b"\n")?;
            written += 1;
        }
    }
    output.flush()?;

    debug!("Processed {} lines, wrote {}", read, written);
    Ok(written)
}

/// Which lines to keep based on whether they name an existing path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExistenceFilter {
    /// Keep every line.
    #[default]
    Any,
    /// Keep lines naming a path that exists.
    Exists,
    /// Keep lines naming a path that does not exist.
    NotExists,
}

impl ExistenceFilter {
    /// Build a filter from the `--exists` / `--not-exists` flags.
    ///
    /// Setting both keeps nothing, since no path both exists and does not.
    pub fn from_flags(exists: bool, not_exists: bool) -> Option<Self> {
        match (exists, not_exists) {
            (true, true) => None,
            (true, false) => Some(Self::Exists),
            (false, true) => Some(Self::NotExists),
            (false, false) => Some(Self::Any),
        }
    }

    /// Whether the line should be kept.
    pub fn keeps(&self, line: &[u8]) -> bool {
        match self {
            Self::Any => true,
            Self::Exists => path_exists(&line_to_path(line)),
            Self::NotExists => !path_exists(&line_to_path(line)),
        }
    }
}

/// A path exists unless the lookup reports it missing; permission errors
/// and the like still count as existing.
fn path_exists(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != ErrorKind::NotFound,
    }
}

#[cfg(unix)]
fn line_to_path(line: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(line))
}

#[cfg(not(unix))]
fn line_to_path(line: &[u8]) -> PathBuf {
    PathBuf::from(OsStr::new(String::from_utf8_lossy(line).as_ref()))
}

#[cfg(unix)]
fn path_to_line(path: PathBuf) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    path.into_os_string().into_vec()
}

#[cfg(not(unix))]
fn path_to_line(path: PathBuf) -> Vec<u8> {
    path.to_string_lossy().into_owned().into_bytes()
}

/// Append `suffix` to `line`, either as text or as a path component.
pub fn append(line: &[u8], suffix: &str, as_path: bool) -> Vec<u8> {
    if as_path {
        path_to_line(line_to_path(line).join(suffix))
    } else {
        [line, suffix.as_bytes()].concat()
    }
}

/// Regex replacement applied to every match in a line.
#[derive(Debug, Clone)]
pub struct LineReplacer {
    pattern: Regex,
    replacement: String,
}

impl LineReplacer {
    /// Compile a replacer. The replacement may reference capture groups
    /// as `$1` or `${name}`.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> CoreResult<Self> {
        let compiled = Regex::new(pattern).map_err(|source| CoreError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: compiled,
            replacement: replacement.into(),
        })
    }

    /// Replace all matches in `line`.
    pub fn replace<'a>(&self, line: &'a [u8]) -> Cow<'a, [u8]> {
        self.pattern.replace_all(line, self.replacement.as_bytes())
    }
}
