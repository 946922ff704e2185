//!
//! Google Benchmark report entry.
//!

///
/// Google Benchmark report entry.
///
/// Only the fields used for plotting are read, the rest are ignored.
///
#[derive(Debug, serde::Deserialize)]
pub struct Entry {
    /// The benchmark case name.
    pub name: String,
    /// The wall clock time per iteration.
    pub real_time: f64,
    /// The unit of `real_time`.
    pub time_unit: String,
}
