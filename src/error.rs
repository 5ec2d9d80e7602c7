//! Error types for termplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for termplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur in termplot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Failed to open a data file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A data file row could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Draw style name not recognized.
    #[error("Unsupported style: {style} (expected 'point' or 'block')")]
    UnsupportedStyle {
        /// The rejected style name.
        style: String,
    },

    /// Invalid `WIDTHxHEIGHT` size.
    #[error("Invalid size: {0} (expected WIDTHxHEIGHT, e.g. 80x24)")]
    InvalidSize(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an UnsupportedStyle error.
    pub fn unsupported_style(style: impl Into<String>) -> Self {
        Self::UnsupportedStyle {
            style: style.into(),
        }
    }
}
