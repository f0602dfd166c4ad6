use super::FuzzyEq;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) used for laying out points on a circle.
pub trait Real:
    num_traits::real::Real + FuzzyEq + std::default::Default + std::fmt::Debug + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn tau() -> Self {
        Self::from(std::f64::consts::TAU).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Degrees in a full turn (360).
    #[inline]
    fn full_turn_degrees() -> Self {
        Self::from(360.0).unwrap()
    }

    /// Convert a point index or count to this number type.
    #[inline]
    fn from_count(count: u32) -> Self {
        Self::from(count).unwrap()
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn full_turn_degrees() -> Self {
        360.0f32
    }

    #[inline]
    fn from_count(count: u32) -> Self {
        count as f32
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn full_turn_degrees() -> Self {
        360.0f64
    }

    #[inline]
    fn from_count(count: u32) -> Self {
        f64::from(count)
    }
}
