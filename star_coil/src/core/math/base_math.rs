use super::Vector2;
use crate::core::traits::Real;

/// Returns the greatest common divisor of `a` and `b`.
///
/// `gcd(n, 0)` is `n`, so `gcd(0, 0)` is `0`.
///
/// # Examples
///
/// ```
/// # use star_coil::core::math::*;
/// assert_eq!(gcd(10, 4), 2);
/// assert_eq!(gcd(10, 3), 1);
/// assert_eq!(gcd(12, 0), 12);
/// ```
#[inline]
pub fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }

    a
}

/// Convert an angle in degrees to radians.
///
/// # Examples
///
/// ```
/// # use star_coil::core::math::*;
/// # use star_coil::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(deg_to_rad(180.0).fuzzy_eq(PI));
/// assert!(deg_to_rad(270.0).fuzzy_eq(1.5 * PI));
/// ```
#[inline]
pub fn deg_to_rad<T>(degrees: T) -> T
where
    T: Real,
{
    degrees * T::pi() / (T::full_turn_degrees() / T::two())
}

/// Normalize radians to be between `0` and `2PI`, e.g. `-PI/4` becomes `7PI/4` and `5PI` becomes
/// `PI`.
///
/// # Examples
///
/// ```
/// # use star_coil::core::math::*;
/// # use star_coil::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(normalize_radians(5.0 * PI).fuzzy_eq(PI));
/// assert!(normalize_radians(-PI / 4.0).fuzzy_eq(7.0 * PI / 4.0));
/// // anything between 0 and 2PI inclusive is left unchanged
/// assert!(normalize_radians(0.0).fuzzy_eq(0.0));
/// assert!(normalize_radians(2.0 * PI).fuzzy_eq(2.0 * PI));
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle <= T::tau() {
        return angle;
    }

    angle - (angle / T::tau()).floor() * T::tau()
}

/// Returns the point at `angle` (radians, measured from the positive x axis) and `radius` away
/// from `center`.
///
/// Screen coordinates (y down) mean increasing angles run clockwise on screen.
#[inline]
pub fn point_on_circle<T>(center: Vector2<T>, radius: T, angle: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn gcd_is_commutative() {
        for a in 0..30 {
            for b in 0..30 {
                assert_eq!(gcd(a, b), gcd(b, a));
            }
        }
    }

    #[test]
    fn gcd_of_coprime() {
        assert_eq!(gcd(9, 4), 1);
        assert_eq!(gcd(90, 7), 1);
        assert_eq!(gcd(90, 4), 2);
        assert_eq!(gcd(90, 15), 15);
    }

    #[test]
    fn point_on_circle_quadrants() {
        let c = Vector2::new(400.0, 400.0);
        let top = point_on_circle(c, 360.0, deg_to_rad(270.0));
        assert_fuzzy_eq!(top.x, 400.0, 1e-9);
        assert_fuzzy_eq!(top.y, 40.0, 1e-9);

        let right = point_on_circle(c, 360.0, 0.0);
        assert!(right.fuzzy_eq(Vector2::new(760.0, 400.0)));
    }
}
