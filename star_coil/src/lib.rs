//! Enumerates star polygon winding patterns.
//!
//! Given `N` points evenly spaced on a circle, every step size `k` with `2 <= k < N / 2` connects
//! each point to the point `k` further around, tracing a star. [StarPatternSet::enumerate] returns
//! the pattern for each such step size along with the [WindingPath] traced from point 1, and
//! [CircleLayout] gives the positions used to draw them.
//!
//! # Examples
//!
//! ```
//! use star_coil::{PointCount, StarPatternSet};
//!
//! let points: PointCount = "5".parse().unwrap();
//! let patterns = StarPatternSet::enumerate(points);
//! assert_eq!(patterns.len(), 1);
//!
//! let pentagram = &patterns.as_slice()[0];
//! assert_eq!(pentagram.step_size(), 2);
//! assert_eq!(pentagram.path().points(), &[1, 3, 5, 2, 4, 1]);
//! assert_eq!(pentagram.file_name(), "P005-S002-T005-I002.jpg");
//! ```

#[macro_use]
mod macros;

pub mod core;
mod error;
mod layout;
pub mod pattern;

pub use crate::error::{Result, StarCoilError};
pub use crate::layout::*;
pub use crate::pattern::*;
