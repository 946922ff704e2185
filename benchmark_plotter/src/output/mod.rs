//!
//! Benchmark chart output.
//!

pub mod error;
pub mod format;

use std::path::Path;
use std::path::PathBuf;

use plotters::coord::ranged1d::DefaultFormatting;
use plotters::coord::ranged1d::KeyPointHint;
use plotters::coord::combinators::WithKeyPoints;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::layout::Layout;

use self::error::Error as OutputError;
use self::format::Format;

/// The image size in pixels.
pub const IMAGE_SIZE: (u32, u32) = (1024, 640);

// Compact layout: fixed margins and label areas.
const MARGIN: u32 = 20;
const X_LABEL_AREA_SIZE: u32 = 40;
const Y_LABEL_AREA_SIZE: u32 = 70;

const FONT_FAMILY: &str = "sans-serif";
const TITLE_FONT_SIZE: u32 = 32;
const LABEL_FONT_SIZE: u32 = 16;

// The x axis key points are the label slots themselves.
const TICK_TOLERANCE: f64 = 1e-9;

///
/// The chart image file.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// The image path.
    pub path: PathBuf,
    /// The image format, named by the path extension.
    pub format: Format,
}

impl Output {
    ///
    /// Draws the chart and writes it to the image file.
    ///
    pub fn render(&self, layout: &Layout) -> Result<(), OutputError> {
        match self.format {
            Format::Svg => {
                let root = SVGBackend::new(self.path.as_path(), IMAGE_SIZE).into_drawing_area();
                draw(&root, layout).map_err(|error| self.rendering_error(error))
            }
            Format::Png => {
                let root = BitMapBackend::new(self.path.as_path(), IMAGE_SIZE).into_drawing_area();
                draw(&root, layout).map_err(|error| self.rendering_error(error))
            }
        }
    }

    fn rendering_error(&self, error: impl std::fmt::Display) -> OutputError {
        OutputError::Rendering {
            path: self.path.clone(),
            message: error.to_string(),
        }
    }
}

impl TryFrom<&Path> for Output {
    type Error = OutputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let format = Format::from_path(path).ok_or_else(|| OutputError::UnsupportedFormat {
            path: path.to_path_buf(),
            supported: Format::all()
                .into_iter()
                .map(|format| format.to_string())
                .collect::<Vec<String>>()
                .join(", "),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            format,
        })
    }
}

///
/// The x axis coordinate with explicit key points.
///
/// Delegates to `WithKeyPoints<RangedCoordf64>` and opts into the default
/// value formatting, which `configure_mesh` requires.
///
struct KeyPointsCoord(WithKeyPoints<RangedCoordf64>);

impl Ranged for KeyPointsCoord {
    type ValueType = f64;
    type FormatOption = DefaultFormatting;

    fn range(&self) -> std::ops::Range<f64> {
        self.0.range()
    }

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.0.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        self.0.key_points(hint)
    }

    fn axis_pixel_range(&self, limit: (i32, i32)) -> std::ops::Range<i32> {
        self.0.axis_pixel_range(limit)
    }
}

///
/// Issues the grouped bar chart draw calls and presents the result.
///
fn draw<DB>(
    root: &DrawingArea<DB, Shift>,
    layout: &Layout,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE)?;

    let tick_positions: Vec<f64> = layout.ticks.iter().map(|tick| tick.position).collect();
    let mut chart = ChartBuilder::on(root)
        .caption(layout.title.as_str(), (FONT_FAMILY, TITLE_FONT_SIZE))
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(
            KeyPointsCoord(layout.x_range().with_key_points(tick_positions)),
            layout.y_range(),
        )?;

    let tick_label = |position: &f64| {
        layout
            .ticks
            .iter()
            .find(|tick| (tick.position - *position).abs() < TICK_TOLERANCE)
            .map(|tick| tick.label.clone())
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&tick_label)
        .y_desc(layout.y_label.as_str())
        .label_style((FONT_FAMILY, LABEL_FONT_SIZE))
        .draw()?;

    for (index, series) in layout.series.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        chart
            .draw_series(series.bars.iter().map(|bar| {
                let (left, right) = bar.edges();
                Rectangle::new([(left, 0.0), (right, bar.height)], color.filled())
            }))?
            .label(series.name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT_FAMILY, LABEL_FONT_SIZE))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
