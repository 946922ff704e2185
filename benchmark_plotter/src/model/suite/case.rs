//!
//! A single benchmark case measurement.
//!

///
/// A single benchmark case measurement.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// The case name, e.g. the benchmarked function.
    pub name: String,
    /// The measured time.
    pub time: f64,
    /// The time unit, e.g. `ns`.
    pub unit: String,
}

impl Case {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, time: f64, unit: String) -> Self {
        Self { name, time, unit }
    }
}
