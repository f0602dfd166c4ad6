use crate::error::{Result, StarCoilError};
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of points placed evenly on the circle, always at least 1.
///
/// # Examples
///
/// ```
/// # use star_coil::PointCount;
/// let points: PointCount = "10".parse().unwrap();
/// assert_eq!(points.get(), 10);
/// assert!(PointCount::new(0).is_err());
/// assert!("ten".parse::<PointCount>().is_err());
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "i64", into = "u32")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointCount(u32);

impl PointCount {
    /// Validate `points`, it must be positive and fit in a `u32`.
    pub fn new(points: i64) -> Result<Self> {
        if points <= 0 {
            return Err(StarCoilError::invalid_argument(
                points.to_string(),
                "point count must be positive",
            ));
        }

        u32::try_from(points).map(PointCount).map_err(|_| {
            StarCoilError::invalid_argument(points.to_string(), "point count is too large")
        })
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns true if half the point count is an odd integer (e.g. 10, 30, 90).
    ///
    /// These counts give the most interesting set of patterns, other counts are still valid.
    #[inline]
    pub fn has_odd_half(self) -> bool {
        self.0 % 2 == 0 && (self.0 / 2) % 2 == 1
    }
}

impl TryFrom<i64> for PointCount {
    type Error = StarCoilError;

    fn try_from(value: i64) -> Result<Self> {
        PointCount::new(value)
    }
}

impl From<PointCount> for u32 {
    #[inline]
    fn from(value: PointCount) -> Self {
        value.0
    }
}

impl FromStr for PointCount {
    type Err = StarCoilError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let points = trimmed
            .parse::<i64>()
            .map_err(|_| StarCoilError::invalid_argument(trimmed, "point count must be an integer"))?;
        PointCount::new(points)
    }
}

impl fmt::Display for PointCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
