//!
//! A chart series.
//!

use crate::layout::bar::Bar;

///
/// The bars of one suite, shown under one legend entry.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// The legend label.
    pub name: String,
    /// The bars in case order.
    pub bars: Vec<Bar>,
}
