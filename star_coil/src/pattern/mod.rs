//! Star pattern enumeration: the distinct step sizes for a point count and the winding path each
//! one traces.
mod naming;
mod point_count;
mod star_pattern;
mod winding;

pub use naming::*;
pub use point_count::*;
pub use star_pattern::*;
pub use winding::*;
