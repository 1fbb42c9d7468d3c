//! Formatting options

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Maximum number of rows emitted under a single `INSERT ... VALUES` header.
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(n) => n,
    None => panic!("batch size must be non-zero"),
};

/// Line terminator written after every emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::CrLf),
            other => Err(Error::InvalidLineEnding(other.to_string())),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Lf => f.write_str("lf"),
            LineEnding::CrLf => f.write_str("crlf"),
        }
    }
}

/// Options controlling the emitted script text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Line terminator (default `\n`)
    pub line_ending: LineEnding,
    /// Rows per `INSERT ... VALUES` batch (default 1000)
    pub batch_size: NonZeroUsize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::default(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl FormatOptions {
    /// Set the line terminator
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Set the number of rows per insert batch
    pub fn batch_size(mut self, batch_size: NonZeroUsize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// The line terminator as text
    pub fn newline(&self) -> &'static str {
        self.line_ending.as_str()
    }
}
