//!
//! The grouped bar chart layout.
//!

pub mod bar;
pub mod error;
pub mod series;
pub mod tick;

use std::ops::Range;

use crate::model::suite::Suite;

use self::bar::Bar;
use self::error::Error as LayoutError;
use self::series::Series;
use self::tick::Tick;

/// The chart title.
pub const TITLE: &str = "Benchmark";

/// The bar width in axis units, where label slots are one unit apart.
pub const BAR_WIDTH: f64 = 0.3;

/// The x axis padding around the outermost bars, in axis units.
pub const SLOT_PADDING: f64 = 0.5;

/// The y axis headroom above the tallest bar, relative to its height.
pub const HEADROOM: f64 = 0.1;

///
/// The grouped bar chart layout.
///
/// Bars of the same case across suites share a label slot and are shifted
/// within it by the suite offset.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// The chart title.
    pub title: String,
    /// The y axis description, taken from the first case of the first suite.
    pub y_label: String,
    /// The label slots, named after the first suite's cases.
    pub ticks: Vec<Tick>,
    /// One series per suite in discovery order.
    pub series: Vec<Series>,
}

///
/// Returns the label slot positions `0, 1, .., count - 1`.
///
pub fn label_positions(count: usize) -> Vec<f64> {
    (0..count).map(|index| index as f64).collect()
}

///
/// Returns the offset of the suite bars from their label slots.
///
/// The schedule is linear and starts one bar to the left of the slot, so the
/// group is centered only for three suites. Other suite counts are drawn
/// off-center.
///
pub fn suite_offset(index: usize, width: f64) -> f64 {
    -width + (index as f64) * width
}

impl Layout {
    ///
    /// Returns the names of suites whose case count differs from the first suite.
    ///
    /// Such suites are drawn as they are, so their bars do not line up with
    /// the tick labels.
    ///
    pub fn mismatched_suites(&self) -> Vec<&str> {
        let expected = match self.series.first() {
            Some(series) => series.bars.len(),
            None => return vec![],
        };
        self.series
            .iter()
            .filter(|series| series.bars.len() != expected)
            .map(|series| series.name.as_str())
            .collect()
    }

    ///
    /// Returns the x axis range covering all bars and ticks.
    ///
    pub fn x_range(&self) -> Range<f64> {
        let (start, end) = self
            .series
            .iter()
            .flat_map(|series| series.bars.iter())
            .map(Bar::edges)
            .chain(self.ticks.iter().map(|tick| (tick.position, tick.position)))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(start, end), (left, right)| {
                (start.min(left), end.max(right))
            });
        if start > end {
            return -SLOT_PADDING..SLOT_PADDING;
        }
        (start - SLOT_PADDING)..(end + SLOT_PADDING)
    }

    ///
    /// Returns the y axis range from zero to the tallest bar with headroom.
    ///
    pub fn y_range(&self) -> Range<f64> {
        let (lowest, highest) = self
            .series
            .iter()
            .flat_map(|series| series.bars.iter())
            .fold((0.0_f64, 0.0_f64), |(lowest, highest), bar| {
                (lowest.min(bar.height), highest.max(bar.height))
            });
        if highest <= 0.0 {
            return lowest..1.0;
        }
        lowest..(highest * (1.0 + HEADROOM))
    }
}

impl TryFrom<&[Suite]> for Layout {
    type Error = LayoutError;

    fn try_from(suites: &[Suite]) -> Result<Self, Self::Error> {
        let first = suites.first().ok_or(LayoutError::NoSuites)?;
        let y_label = first
            .cases()
            .first()
            .map(|case| case.unit.clone())
            .ok_or_else(|| LayoutError::NoCases {
                suite: first.name.clone(),
            })?;

        let labels_count = suites.iter().map(Suite::size).max().unwrap_or_default();
        let positions = label_positions(labels_count);

        let ticks = positions
            .iter()
            .enumerate()
            .map(|(index, position)| Tick {
                position: *position,
                label: first
                    .cases()
                    .get(index)
                    .map(|case| case.name.clone())
                    .unwrap_or_default(),
            })
            .collect();

        let series = suites
            .iter()
            .enumerate()
            .map(|(index, suite)| {
                let offset = suite_offset(index, BAR_WIDTH);
                let bars = suite
                    .cases()
                    .iter()
                    .zip(positions.iter())
                    .map(|(case, position)| Bar {
                        position: position + offset,
                        height: case.time,
                        width: BAR_WIDTH,
                    })
                    .collect();
                Series {
                    name: suite.name.clone(),
                    bars,
                }
            })
            .collect();

        Ok(Self {
            title: TITLE.to_owned(),
            y_label,
            ticks,
            series,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::model::suite::Suite;

    use super::error::Error;
    use super::Layout;
    use super::BAR_WIDTH;

    fn suite(name: &str, cases: &[(&str, f64)]) -> Suite {
        let mut suite = Suite::new(name.to_owned());
        for (case, time) in cases.iter() {
            suite.add((*case).to_owned(), *time, "ns".to_owned());
        }
        suite
    }

    #[test]
    fn offsets_three_suites() {
        let offsets: Vec<f64> = (0..3).map(|index| super::suite_offset(index, 0.3)).collect();
        assert_eq!(offsets, vec![-0.3, 0.0, 0.3]);
    }

    #[test]
    fn offsets_two_suites() {
        assert_eq!(super::suite_offset(0, 0.3), -0.3);
        assert_eq!(super::suite_offset(1, 0.3), 0.0);
    }

    #[test]
    fn label_positions_four() {
        assert_eq!(super::label_positions(4), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn label_positions_empty() {
        assert!(super::label_positions(0).is_empty());
    }

    #[test]
    fn three_suites_two_cases() {
        let suites = vec![
            suite("bitflags", &[("set", 1.0), ("clear", 2.0)]),
            suite("bitset", &[("set", 3.0), ("clear", 4.0)]),
            suite("raw_bitflags", &[("set", 5.0), ("clear", 6.0)]),
        ];
        let layout = Layout::try_from(suites.as_slice()).expect("Failed to compute the layout");

        assert_eq!(layout.title, "Benchmark");
        assert_eq!(layout.y_label, "ns");
        assert_eq!(
            layout
                .ticks
                .iter()
                .map(|tick| (tick.position, tick.label.as_str()))
                .collect::<Vec<_>>(),
            vec![(0.0, "set"), (1.0, "clear")]
        );

        assert_eq!(layout.series.len(), 3);
        let names: Vec<&str> = layout
            .series
            .iter()
            .map(|series| series.name.as_str())
            .collect();
        assert_eq!(names, vec!["bitflags", "bitset", "raw_bitflags"]);

        let expected = [[-0.3, 0.7], [0.0, 1.0], [0.3, 1.3]];
        for (series, expected) in layout.series.iter().zip(expected) {
            assert_eq!(series.bars.len(), expected.len());
            for (bar, position) in series.bars.iter().zip(expected) {
                assert!((bar.position - position).abs() < 1e-9);
            }
        }

        let heights: Vec<f64> = layout
            .series
            .iter()
            .flat_map(|series| series.bars.iter().map(|bar| bar.height))
            .collect();
        assert_eq!(heights, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(layout
            .series
            .iter()
            .flat_map(|series| series.bars.iter())
            .all(|bar| bar.width == BAR_WIDTH));
        assert!(layout.mismatched_suites().is_empty());
    }

    #[test]
    fn uses_max_case_count() {
        let suites = vec![
            suite("short", &[("a", 1.0)]),
            suite("long", &[("a", 1.0), ("b", 2.0), ("c", 3.0)]),
        ];
        let layout = Layout::try_from(suites.as_slice()).expect("Failed to compute the layout");

        let labels: Vec<&str> = layout.ticks.iter().map(|tick| tick.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "", ""]);
        assert_eq!(layout.series[0].bars.len(), 1);
        assert_eq!(layout.series[1].bars.len(), 3);
        assert_eq!(layout.mismatched_suites(), vec!["long"]);
    }

    #[test]
    fn no_suites() {
        let suites: Vec<Suite> = vec![];
        let result = Layout::try_from(suites.as_slice());
        assert!(matches!(result, Err(Error::NoSuites)));
    }

    #[test]
    fn first_suite_without_cases() {
        let suites = vec![suite("empty", &[]), suite("full", &[("a", 1.0)])];
        let result = Layout::try_from(suites.as_slice());
        assert!(matches!(result, Err(Error::NoCases { suite }) if suite == "empty"));
    }

    #[test]
    fn ranges() {
        let suites = vec![
            suite("first", &[("a", 2.0), ("b", 10.0)]),
            suite("second", &[("a", 4.0), ("b", 8.0)]),
        ];
        let layout = Layout::try_from(suites.as_slice()).expect("Failed to compute the layout");

        let x_range = layout.x_range();
        assert!((x_range.start - (-0.3 - 0.15 - 0.5)).abs() < 1e-9);
        assert!((x_range.end - (1.0 + 0.15 + 0.5)).abs() < 1e-9);

        let y_range = layout.y_range();
        assert_eq!(y_range.start, 0.0);
        assert!((y_range.end - 11.0).abs() < 1e-9);
    }

    #[test]
    fn y_range_all_zero() {
        let suites = vec![suite("zero", &[("a", 0.0)])];
        let layout = Layout::try_from(suites.as_slice()).expect("Failed to compute the layout");
        assert_eq!(layout.y_range(), 0.0..1.0);
    }
}
