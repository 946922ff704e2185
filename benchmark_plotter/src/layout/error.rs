//!
//! Chart layout error.
//!

///
/// Chart layout error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There is nothing to plot.
    #[error("No benchmark suites to plot")]
    NoSuites,
    /// The first suite has no case to take the axis unit from.
    #[error("Benchmark suite `{suite}` has no cases")]
    NoCases {
        /// The suite name.
        suite: String,
    },
}
