//!
//! Google Benchmark JSON report.
//!

pub mod entry;

use std::path::Path;

use crate::input::error::Error as InputError;
use crate::model::suite::Suite;

use self::entry::Entry;

///
/// Google Benchmark JSON report.
///
#[derive(Debug, serde::Deserialize)]
pub struct Report {
    /// The benchmark entries in reporting order.
    pub benchmarks: Vec<Entry>,
}

impl TryFrom<&Path> for Report {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        let json: Self =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(json)
    }
}

impl From<(String, Report)> for Suite {
    fn from((name, report): (String, Report)) -> Self {
        let mut suite = Suite::new(name);
        for entry in report.benchmarks.into_iter() {
            suite.add(entry.name, entry.real_time, entry.time_unit);
        }
        suite
    }
}
