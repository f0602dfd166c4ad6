use super::PointCount;
use crate::error::{Result, StarCoilError};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of the point every winding path starts and ends at.
pub const START_POINT: u32 = 1;

/// Ordered sequence of 1-based point indexes visited while tracing one star polygon.
///
/// Always starts at [START_POINT] and returns to it exactly once, as the last entry.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<u32>", into = "Vec<u32>")
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindingPath {
    points: Vec<u32>,
}

impl WindingPath {
    /// Trace the path from [START_POINT] by repeatedly stepping `step_size` points around a circle
    /// of `points` points, until the cursor lands back on the start point.
    ///
    /// The cursor is back at the start after `points / gcd(points, step_size)` steps, so a step
    /// size sharing a factor with the point count visits only part of the circle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use star_coil::{PointCount, WindingPath};
    /// let points = PointCount::new(10).unwrap();
    /// let path = WindingPath::trace(points, 3);
    /// assert_eq!(path.points(), &[1, 4, 7, 10, 3, 6, 9, 2, 5, 8, 1]);
    ///
    /// let compound = WindingPath::trace(points, 2);
    /// assert_eq!(compound.stops(), &[3, 5, 7, 9, 1]);
    /// ```
    pub fn trace(points: PointCount, step_size: u32) -> Self {
        let n = u64::from(points.get());
        let step = u64::from(step_size) % n;

        let mut path = vec![START_POINT];
        let mut cursor = u64::from(START_POINT);
        loop {
            cursor += step;
            if cursor > n {
                cursor -= n;
            }
            // cursor is always in 1..=n so it fits back into u32
            path.push(cursor as u32);
            if cursor == u64::from(START_POINT) {
                break;
            }
        }

        WindingPath { points: path }
    }

    /// All points in visiting order including the leading start point, e.g. `[1, 4, 7, ..., 1]`.
    #[inline]
    pub fn points(&self) -> &[u32] {
        &self.points
    }

    /// Points visited after leaving the start point, ending with the start point.
    #[inline]
    pub fn stops(&self) -> &[u32] {
        &self.points[1..]
    }

    /// Number of points visited before the path closes (tips of the star).
    #[inline]
    pub fn tip_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Iterate the straight segments of the path as `(from, to)` point index pairs.
    pub fn segments(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

impl TryFrom<Vec<u32>> for WindingPath {
    type Error = StarCoilError;

    /// Validates the closure invariant: starts and ends at [START_POINT] and does not pass
    /// through it in between.
    fn try_from(points: Vec<u32>) -> Result<Self> {
        let invalid = |reason: &str| {
            let input = points
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",");
            StarCoilError::invalid_argument(input, reason)
        };

        if points.len() < 2 {
            return Err(invalid("winding path needs at least a start and end point"));
        }

        if points[0] != START_POINT || points[points.len() - 1] != START_POINT {
            return Err(invalid("winding path must start and end at point 1"));
        }

        if points[1..points.len() - 1].contains(&START_POINT) {
            return Err(invalid("winding path returns to point 1 before closing"));
        }

        if points.contains(&0) {
            return Err(invalid("point indexes are 1-based"));
        }

        Ok(WindingPath { points })
    }
}

impl From<WindingPath> for Vec<u32> {
    fn from(value: WindingPath) -> Self {
        value.points
    }
}

/// Comma joined point indexes, e.g. `1,3,5,2,4,1`.
impl fmt::Display for WindingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.points.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
        }
        for p in iter {
            write!(f, ",{p}")?;
        }
        Ok(())
    }
}
