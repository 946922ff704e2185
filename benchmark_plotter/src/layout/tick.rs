//!
//! An x axis tick.
//!

///
/// An x axis tick.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// The label slot position.
    pub position: f64,
    /// The case name.
    pub label: String,
}
