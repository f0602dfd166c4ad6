use super::{naming::pattern_file_name, PointCount, WindingPath};
use crate::core::math::gcd;

#[cfg(feature = "serde")]
use crate::error::StarCoilError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest step size that forms a star (step size 1 traces the outline of the polygon).
pub const MIN_STEP_SIZE: u32 = 2;

/// Pattern index given to the first enumerated star pattern, later patterns count up from here.
pub const FIRST_PATTERN_INDEX: u32 = 2;

/// Largest step size enumerated for `points` (inclusive), the largest `k` with `k < points / 2`.
///
/// Step size `k` and `points - k` trace the same star in opposite directions so only the lower
/// half is kept. For even point counts this also drops `k = points / 2` which just bounces between
/// opposite points.
///
/// # Examples
///
/// ```
/// # use star_coil::{step_size_bound, PointCount};
/// assert_eq!(step_size_bound(PointCount::new(10).unwrap()), 4);
/// assert_eq!(step_size_bound(PointCount::new(11).unwrap()), 5);
/// assert_eq!(step_size_bound(PointCount::new(1).unwrap()), 0);
/// ```
#[inline]
pub fn step_size_bound(points: PointCount) -> u32 {
    (points.get() - 1) / 2
}

/// Number of star patterns enumerated for `points`.
///
/// # Examples
///
/// ```
/// # use star_coil::{pattern_count, PointCount};
/// assert_eq!(pattern_count(PointCount::new(4).unwrap()), 0);
/// assert_eq!(pattern_count(PointCount::new(5).unwrap()), 1);
/// assert_eq!(pattern_count(PointCount::new(10).unwrap()), 3);
/// ```
#[inline]
pub fn pattern_count(points: PointCount) -> u32 {
    step_size_bound(points).saturating_sub(MIN_STEP_SIZE - 1)
}

/// One star pattern: the step size used and the winding path it traces from point 1.
///
/// Deserializing checks that the path is the one traced by the step size on the point count.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", try_from = "RawStarPattern")
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StarPattern {
    index: u32,
    point_count: PointCount,
    step_size: u32,
    path: WindingPath,
}

impl StarPattern {
    /// Trace the star pattern for `step_size` on `point_count` points, `index` is the synthetic
    /// pattern index used for display and file naming.
    pub fn new(index: u32, point_count: PointCount, step_size: u32) -> Self {
        Self {
            index,
            point_count,
            step_size,
            path: WindingPath::trace(point_count, step_size),
        }
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn point_count(&self) -> PointCount {
        self.point_count
    }

    #[inline]
    pub fn step_size(&self) -> u32 {
        self.step_size
    }

    #[inline]
    pub fn path(&self) -> &WindingPath {
        &self.path
    }

    /// Number of tips of the star, equal to `point_count / gcd(point_count, step_size)`.
    #[inline]
    pub fn tip_count(&self) -> usize {
        self.path.tip_count()
    }

    /// Number of separate polygons making up the full star, the path only traces the one through
    /// point 1.
    #[inline]
    pub fn component_count(&self) -> u32 {
        gcd(self.point_count.get(), self.step_size)
    }

    /// Returns true if the star is made of more than one polygon (step size and point count share
    /// a common factor), e.g. a hexagram from two triangles.
    #[inline]
    pub fn is_compound(&self) -> bool {
        self.component_count() > 1
    }

    /// Flat sequence `[step_size, 1, p1, ..., 1]` as written by the original scripts.
    pub fn legacy_sequence(&self) -> Vec<u32> {
        let mut seq = Vec::with_capacity(self.path.points().len() + 1);
        seq.push(self.step_size);
        seq.extend_from_slice(self.path.points());
        seq
    }

    /// Image file name for this pattern, see [pattern_file_name].
    pub fn file_name(&self) -> String {
        pattern_file_name(
            self.point_count.get(),
            self.step_size,
            self.tip_count(),
            self.index,
        )
    }
}

/// All distinct star patterns for a point count, ordered by step size.
///
/// Deserializing only accepts the patterns [StarPatternSet::enumerate] produces for the point
/// count.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", try_from = "RawStarPatternSet")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarPatternSet {
    point_count: PointCount,
    patterns: Vec<StarPattern>,
}

impl StarPatternSet {
    /// Enumerate every star pattern for `points`, one per step size in
    /// `MIN_STEP_SIZE..=step_size_bound(points)`.
    ///
    /// Compound stars (step size sharing a factor with the point count) are included. The result
    /// is empty when there are fewer than 5 points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use star_coil::{PointCount, StarPatternSet};
    /// let set = StarPatternSet::enumerate(PointCount::new(10).unwrap());
    /// let steps: Vec<_> = set.iter().map(|p| p.step_size()).collect();
    /// assert_eq!(steps, vec![2, 3, 4]);
    /// assert_eq!(set.get(3).unwrap().step_size(), 3);
    /// ```
    pub fn enumerate(points: PointCount) -> Self {
        let bound = step_size_bound(points);
        let mut patterns = Vec::with_capacity(pattern_count(points) as usize);
        let mut index = FIRST_PATTERN_INDEX;
        for step_size in MIN_STEP_SIZE..=bound {
            let pattern = StarPattern::new(index, points, step_size);
            log::debug!(
                "star pattern {index}: step size {step_size}, {} tips",
                pattern.tip_count()
            );
            patterns.push(pattern);
            index += 1;
        }

        Self {
            point_count: points,
            patterns,
        }
    }

    #[inline]
    pub fn point_count(&self) -> PointCount {
        self.point_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Look up a pattern by its pattern index (not its position).
    pub fn get(&self, pattern_index: u32) -> Option<&StarPattern> {
        let position = pattern_index.checked_sub(FIRST_PATTERN_INDEX)?;
        self.patterns.get(position as usize)
    }

    #[inline]
    pub fn as_slice(&self) -> &[StarPattern] {
        &self.patterns
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, StarPattern> {
        self.patterns.iter()
    }
}

impl<'a> IntoIterator for &'a StarPatternSet {
    type Item = &'a StarPattern;
    type IntoIter = std::slice::Iter<'a, StarPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for StarPatternSet {
    type Item = StarPattern;
    type IntoIter = std::vec::IntoIter<StarPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.into_iter()
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStarPattern {
    index: u32,
    point_count: PointCount,
    step_size: u32,
    path: WindingPath,
}

#[cfg(feature = "serde")]
impl TryFrom<RawStarPattern> for StarPattern {
    type Error = StarCoilError;

    fn try_from(raw: RawStarPattern) -> Result<Self, Self::Error> {
        let pattern = StarPattern::new(raw.index, raw.point_count, raw.step_size);
        if pattern.path != raw.path {
            return Err(StarCoilError::invalid_argument(
                raw.path.to_string(),
                format!(
                    "not the winding path of step size {} on {} points",
                    raw.step_size, raw.point_count
                ),
            ));
        }

        Ok(pattern)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStarPatternSet {
    point_count: PointCount,
    patterns: Vec<StarPattern>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawStarPatternSet> for StarPatternSet {
    type Error = StarCoilError;

    fn try_from(raw: RawStarPatternSet) -> Result<Self, Self::Error> {
        let set = StarPatternSet::enumerate(raw.point_count);
        if set.patterns != raw.patterns {
            return Err(StarCoilError::invalid_argument(
                raw.point_count.to_string(),
                "patterns do not match the star patterns enumerated for the point count",
            ));
        }

        Ok(set)
    }
}
