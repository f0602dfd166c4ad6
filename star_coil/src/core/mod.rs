//! Core module has the shared numeric traits and math used by the pattern layout.
pub mod math;
pub mod traits;
