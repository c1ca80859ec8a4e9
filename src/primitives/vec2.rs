//! 2D displacement vector.

use num_traits::Float;
use std::ops::{Mul, Neg};

/// A 2D vector, the difference of two [`Point2`](super::Point2)s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (z-component of the 3D cross product).
    ///
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Squared length, also the "lifting" term of the circumcircle test.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Unsigned angle to `other` in radians, in `[0, π]`.
    ///
    /// Computed from `atan2(|cross|, dot)`, which stays accurate for nearly
    /// parallel vectors where `acos` of the normalized dot product does not.
    #[inline]
    pub fn angle_to(self, other: Self) -> F {
        self.cross(other).abs().atan2(self.dot(other))
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_cross_sign() {
        let e: Vec2<f64> = Vec2::new(1.0, 0.0);
        let n = Vec2::new(0.0, 1.0);
        assert_eq!(e.cross(n), 1.0);
        assert_eq!(n.cross(e), -1.0);
    }

    #[test]
    fn test_magnitude() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_angle_to() {
        let e: Vec2<f64> = Vec2::new(2.0, 0.0);
        assert_relative_eq!(e.angle_to(Vec2::new(0.0, 5.0)), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(e.angle_to(Vec2::new(0.0, -5.0)), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(e.angle_to(-e), PI, epsilon = 1e-12);
        assert_relative_eq!(e.angle_to(e * 3.0), 0.0, epsilon = 1e-12);
    }
}
