//!
//! A chart bar.
//!

///
/// A chart bar, centered at `position`.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// The center of the bar on the x axis.
    pub position: f64,
    /// The bar height.
    pub height: f64,
    /// The bar width.
    pub width: f64,
}

impl Bar {
    ///
    /// Returns the left and right edges.
    ///
    pub fn edges(&self) -> (f64, f64) {
        let half = self.width / 2.0;
        (self.position - half, self.position + half)
    }
}
