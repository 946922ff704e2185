//!
//! Benchmark report discovery and parsing.
//!

pub mod error;
pub mod report;

use std::path::Path;
use std::path::PathBuf;

use crate::model::suite::Suite;

use self::error::Error as InputError;
use self::report::Report;

/// The benchmark report file name suffix.
pub const REPORT_SUFFIX: &str = "_benchmark.json";

///
/// Returns the report files in `directory` in discovery order.
///
/// The search is not recursive and skips hidden files. `glob` yields the
/// matches sorted by name.
///
pub fn discover(directory: &Path) -> Result<Vec<PathBuf>, InputError> {
    if !directory.is_dir() {
        return Err(InputError::NotADirectory {
            path: directory.to_path_buf(),
        });
    }

    let escaped = glob::Pattern::escape(directory.to_string_lossy().as_ref());
    let pattern = Path::new(escaped.as_str())
        .join(format!("*{REPORT_SUFFIX}"))
        .to_string_lossy()
        .into_owned();
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };
    let paths = glob::glob_with(pattern.as_str(), options)
        .map_err(|error| InputError::Pattern { error, pattern })?
        .collect::<Result<Vec<PathBuf>, glob::GlobError>>()?;
    Ok(paths)
}

///
/// Extracts the suite name from a report path.
///
/// Takes the text between the first `/` and the report suffix. This is a plain
/// slice rather than a basename, so `results/sub/x_benchmark.json` yields
/// `sub/x`, and a path without `/` is taken from its start.
///
pub fn extract_suite_name(path: &str) -> &str {
    let start = path.find('/').map(|index| index + 1).unwrap_or_default();
    let end = path.find(REPORT_SUFFIX).unwrap_or(path.len());
    path.get(start..end).unwrap_or_default()
}

///
/// Discovers and parses all reports in `directory`.
///
/// Fails on the first unreadable or malformed report.
///
pub fn load(directory: &Path) -> Result<Vec<Suite>, InputError> {
    let paths = discover(directory)?;
    if paths.is_empty() {
        return Err(InputError::NoReports {
            path: directory.to_path_buf(),
            suffix: REPORT_SUFFIX,
        });
    }

    let mut suites = Vec::with_capacity(paths.len());
    for path in paths.into_iter() {
        let report = Report::try_from(path.as_path())?;
        let path = path.to_string_lossy();
        let name = extract_suite_name(path.as_ref()).to_owned();
        suites.push(Suite::from((name, report)));
    }
    Ok(suites)
}
