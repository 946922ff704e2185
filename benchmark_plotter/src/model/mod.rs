//!
//! The benchmark data model.
//!

pub mod suite;
