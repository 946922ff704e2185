//!
//! The benchmark plotter library.
//!

pub mod input;
pub mod layout;
pub mod model;
pub mod output;

pub use crate::input::error::Error as InputError;
pub use crate::input::report::entry::Entry as ReportEntry;
pub use crate::input::report::Report;
pub use crate::input::REPORT_SUFFIX;
pub use crate::layout::bar::Bar;
pub use crate::layout::error::Error as LayoutError;
pub use crate::layout::series::Series;
pub use crate::layout::tick::Tick;
pub use crate::layout::Layout;
pub use crate::layout::BAR_WIDTH;
pub use crate::model::suite::case::Case as BenchmarkCase;
pub use crate::model::suite::Suite as BenchmarkSuite;
pub use crate::output::error::Error as OutputError;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
pub const EXIT_CODE_FAILURE: i32 = 1;

/// The default benchmarks directory.
pub const DEFAULT_BENCHMARKS_DIRECTORY: &str = "./";

/// The default chart image path.
pub const DEFAULT_OUTPUT_PATH: &str = "benchmark.svg";
