//!
//! The benchmark suite representation.
//!

pub mod case;

use self::case::Case;

///
/// The benchmark suite representation.
///
/// Holds the cases of one report file in the order they were reported.
/// No validation is done here: duplicate names and empty suites are accepted.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Suite {
    /// The suite name, derived from the report file name.
    pub name: String,
    /// The cases in arrival order.
    cases: Vec<Case>,
}

impl Suite {
    ///
    /// Creates an empty suite.
    ///
    pub fn new(name: String) -> Self {
        Self {
            name,
            cases: Vec::new(),
        }
    }

    ///
    /// Appends a case.
    ///
    pub fn add(&mut self, name: String, time: f64, unit: String) {
        self.cases.push(Case::new(name, time, unit));
    }

    ///
    /// Returns the number of cases.
    ///
    pub fn size(&self) -> usize {
        self.cases.len()
    }

    ///
    /// Returns the cases in arrival order.
    ///
    pub fn cases(&self) -> &[Case] {
        self.cases.as_slice()
    }
}
