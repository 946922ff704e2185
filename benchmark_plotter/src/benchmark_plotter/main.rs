//!
//! The benchmark plotter binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => benchmark_plotter::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            benchmark_plotter::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let output = benchmark_plotter::Output::try_from(arguments.output_path.as_path())?;

    if !arguments.quiet {
        println!(
            "     {} benchmark reports from {:?}",
            "Loading".bright_green().bold(),
            arguments.benchmarks_dir,
        );
    }
    let suites = benchmark_plotter::input::load(arguments.benchmarks_dir.as_path())?;

    let layout = benchmark_plotter::Layout::try_from(suites.as_slice())?;
    if !arguments.quiet {
        for suite in layout.mismatched_suites() {
            eprintln!(
                "{}: Benchmark suite `{suite}` has a different number of cases than `{}`, its bars will not match the labels.",
                "Warning".bright_yellow().bold(),
                suites[0].name,
            );
        }
        println!(
            "   {} {} suites with {} cases to {:?} ({})",
            "Rendering".bright_green().bold(),
            layout.series.len(),
            layout.ticks.len(),
            output.path,
            output.format,
        );
    }
    output.render(&layout)?;

    if !arguments.quiet {
        println!("    {} {:?}", "Finished".bright_green().bold(), output.path);
    }
    Ok(())
}
