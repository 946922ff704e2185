//!
//! Benchmark report input error.
//!

use std::path::PathBuf;

///
/// Benchmark report input error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The benchmarks path does not exist or is not a directory.
    #[error("Expected a directory with benchmark reports, but got {path:?}")]
    NotADirectory {
        /// The benchmarks path.
        path: PathBuf,
    },
    /// The discovery pattern is invalid.
    #[error("Invalid benchmark report pattern `{pattern}`: {error}")]
    Pattern {
        /// The underlying pattern error.
        error: glob::PatternError,
        /// The pattern.
        pattern: String,
    },
    /// A directory entry could not be read during discovery.
    #[error("Discovering benchmark reports: {0}")]
    Globbing(#[from] glob::GlobError),
    /// Error reading the report file.
    #[error("Reading benchmark report {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the report file.
        path: PathBuf,
    },
    /// Error parsing the report file.
    #[error("Parsing benchmark report {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the report file.
        path: PathBuf,
    },
    /// No report file matches the naming convention.
    #[error("No `*{suffix}` benchmark reports found in {path:?}")]
    NoReports {
        /// The benchmarks directory.
        path: PathBuf,
        /// The expected file name suffix.
        suffix: &'static str,
    },
}
