//!
//! The benchmark plotter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark plotter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to Google Benchmark JSON files named `*_benchmark.json`.
    #[arg(
        short,
        long,
        value_name = "BENCHMARKS_DIR",
        default_value = benchmark_plotter::DEFAULT_BENCHMARKS_DIRECTORY
    )]
    pub benchmarks_dir: PathBuf,

    /// Chart image path. The extension selects the format: `svg` or `png`.
    #[arg(short, long, default_value = benchmark_plotter::DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,
}
