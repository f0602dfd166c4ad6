//! Placement of the numbered points evenly around a circle.
use crate::{
    core::{
        math::{deg_to_rad, normalize_radians, point_on_circle, Vector2},
        traits::Real,
    },
    pattern::{PointCount, WindingPath},
};

/// Angle (degrees, from the positive x axis) of point 1. With y pointing down in image
/// coordinates this puts point 1 at the top, like 12 on a clock face.
pub const START_ANGLE_DEGREES: f64 = 270.0;

/// Gap left between the layout circle and the edge of a square image.
pub const IMAGE_MARGIN: u32 = 40;

/// Layout of `point_count` points evenly spaced around a circle.
///
/// Points are numbered from 1, starting at [START_ANGLE_DEGREES] and continuing clockwise on
/// screen.
///
/// # Examples
///
/// ```
/// # use star_coil::{CircleLayout, PointCount};
/// # use star_coil::core::traits::*;
/// let layout = CircleLayout::<f64>::for_image(PointCount::new(4).unwrap(), 800);
/// let top = layout.position(1).unwrap();
/// assert!(top.x.fuzzy_eq(400.0));
/// assert!(top.y.fuzzy_eq(40.0));
/// let right = layout.position(2).unwrap();
/// assert!(right.x.fuzzy_eq(760.0));
/// assert!(layout.position(5).is_none());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleLayout<T = f64> {
    point_count: PointCount,
    center: Vector2<T>,
    radius: T,
}

impl<T> CircleLayout<T>
where
    T: Real,
{
    pub fn new(point_count: PointCount, center: Vector2<T>, radius: T) -> Self {
        Self {
            point_count,
            center,
            radius,
        }
    }

    /// Layout centered in a square image `size` pixels wide with radius `size / 2 - 40`.
    pub fn for_image(point_count: PointCount, size: u32) -> Self {
        let half = T::from_count(size) / T::two();
        let radius = half - T::from_count(IMAGE_MARGIN);
        Self::new(point_count, Vector2::new(half, half), radius)
    }

    #[inline]
    pub fn point_count(&self) -> PointCount {
        self.point_count
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Angle between adjacent points in degrees (`360 / point_count`).
    #[inline]
    pub fn angle_between_points(&self) -> T {
        T::full_turn_degrees() / T::from_count(self.point_count.get())
    }

    /// Position of the 1-based point `index`, `None` if out of range.
    pub fn position(&self, index: u32) -> Option<Vector2<T>> {
        if index == 0 || index > self.point_count.get() {
            return None;
        }

        let start = T::from(START_ANGLE_DEGREES).unwrap();
        let degrees = T::from_count(index - 1) * self.angle_between_points() + start;
        let angle = normalize_radians(deg_to_rad(degrees));
        Some(point_on_circle(self.center, self.radius, angle))
    }

    /// Iterate all `(index, position)` pairs in point order.
    pub fn positions(&self) -> impl Iterator<Item = (u32, Vector2<T>)> + '_ {
        (1..=self.point_count.get()).filter_map(move |i| self.position(i).map(|p| (i, p)))
    }

    /// Map each point of `path` to its position, `None` if the path refers to a point outside
    /// this layout.
    pub fn path_points(&self, path: &WindingPath) -> Option<Vec<Vector2<T>>> {
        path.points().iter().map(|&i| self.position(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    fn layout(n: i64) -> CircleLayout {
        CircleLayout::for_image(PointCount::new(n).unwrap(), 800)
    }

    #[test]
    fn all_points_on_circle() {
        let l = layout(90);
        assert_eq!(l.positions().count(), 90);
        for (_, p) in l.positions() {
            assert_fuzzy_eq!((p - l.center()).length(), 360.0, 1e-9);
        }
    }

    #[test]
    fn angle_between_points() {
        assert_fuzzy_eq!(layout(10).angle_between_points(), 36.0);
        assert_fuzzy_eq!(layout(90).angle_between_points(), 4.0);
    }

    #[test]
    fn quarter_points_go_clockwise_on_screen() {
        let l = layout(4);
        let expected = [(400.0, 40.0), (760.0, 400.0), (400.0, 760.0), (40.0, 400.0)];
        for ((i, p), (x, y)) in l.positions().zip(expected) {
            assert!(p.fuzzy_eq_eps(Vector2::new(x, y), 1e-9), "point {i}: {p:?}");
        }
    }

    #[test]
    fn path_points_rejects_foreign_path() {
        let small = layout(5);
        let path = WindingPath::trace(PointCount::new(7).unwrap(), 3);
        assert!(small.path_points(&path).is_none());

        let own = WindingPath::trace(small.point_count(), 2);
        let pts = small.path_points(&own).unwrap();
        assert_eq!(pts.len(), 6);
        assert!(pts[0].fuzzy_eq(pts[5]));
    }
}
