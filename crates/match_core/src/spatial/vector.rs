//! Immutable 2D vector used for every position and velocity in the engine.
//!
//! Coordinates are meters on the pitch frame:
//! - x: 0 = home goal line, 105 = away goal line (length)
//! - y: 0..68 touchline to touchline (width)
//!
//! `PartialEq` is exact. Use [`Vector2D::is_approximately`] for tolerant
//! comparisons; the tolerance is [`EPSILON`].

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::VectorError;

/// Shared tolerance for near-zero checks in the vector and geometry kernels.
pub const EPSILON: f64 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };
    pub const UP: Vector2D = Vector2D { x: 0.0, y: 1.0 };
    pub const DOWN: Vector2D = Vector2D { x: 0.0, y: -1.0 };
    pub const LEFT: Vector2D = Vector2D { x: -1.0, y: 0.0 };
    pub const RIGHT: Vector2D = Vector2D { x: 1.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector of the given length pointing at `angle` radians (atan2 convention).
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        Self::new(magnitude * angle.cos(), magnitude * angle.sin())
    }

    /// Uniformly distributed unit vector. Consumes exactly one draw.
    pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let angle = rng.gen::<f64>() * std::f64::consts::TAU;
        Self::from_polar(1.0, angle)
    }

    // ========== Arithmetic ==========

    #[inline]
    pub fn add(self, other: Vector2D) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn subtract(self, other: Vector2D) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn multiply(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Component-wise division. Fails when `scalar` is within [`EPSILON`] of zero.
    pub fn divide(self, scalar: f64) -> Result<Self, VectorError> {
        if scalar.abs() < EPSILON {
            return Err(VectorError::DivisionByZero { divisor: scalar });
        }
        Ok(Self::new(self.x / scalar, self.y / scalar))
    }

    // ========== Magnitude ==========

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Prefer this over [`magnitude`](Self::magnitude) for relative comparisons.
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction, or [`Vector2D::ZERO`] when the
    /// magnitude is at or below [`EPSILON`]. Never produces NaN.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag > EPSILON {
            Self::new(self.x / mag, self.y / mag)
        } else {
            Self::ZERO
        }
    }

    // ========== Products & projections ==========

    #[inline]
    pub fn dot(self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product (z of the 3D cross). Positive when `other`
    /// is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Vector projection onto `onto`; zero when `onto` is near zero.
    pub fn project_onto(self, onto: Vector2D) -> Self {
        let onto_mag_sq = onto.magnitude_squared();
        if onto_mag_sq < EPSILON * EPSILON {
            return Self::ZERO;
        }
        onto.multiply(self.dot(onto) / onto_mag_sq)
    }

    /// Signed length of the projection onto `onto`; zero when `onto` is near zero.
    pub fn scalar_projection(self, onto: Vector2D) -> f64 {
        let onto_mag = onto.magnitude();
        if onto_mag < EPSILON {
            return 0.0;
        }
        self.dot(onto) / onto_mag
    }

    /// Rotated 90° counter-clockwise.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[inline]
    pub fn perpendicular_clockwise(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Reflection about a surface with unit `normal`: `v - 2(v·n)n`.
    pub fn reflect(self, normal: Vector2D) -> Self {
        self.subtract(normal.multiply(2.0 * self.dot(normal)))
    }

    // ========== Distance ==========

    #[inline]
    pub fn distance_to(self, other: Vector2D) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    #[inline]
    pub fn distance_squared_to(self, other: Vector2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    // ========== Angles ==========

    /// Direction in radians, (-π, π].
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Unsigned angle to `other` in [0, π].
    pub fn angle_to(self, other: Vector2D) -> f64 {
        let dot = self.normalize().dot(other.normalize()).clamp(-1.0, 1.0);
        dot.acos()
    }

    /// Signed angle to `other`; positive means counter-clockwise.
    pub fn signed_angle_to(self, other: Vector2D) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    pub fn rotate(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn lerp(self, target: Vector2D, t: f64) -> Self {
        Self::new(self.x + (target.x - self.x) * t, self.y + (target.y - self.y) * t)
    }

    /// Scales down to `max_magnitude` when longer, keeping direction.
    pub fn clamp(self, max_magnitude: f64) -> Self {
        if self.magnitude() > max_magnitude {
            self.normalize().multiply(max_magnitude)
        } else {
            self
        }
    }

    // ========== Tolerant predicates ==========

    pub fn is_approximately(self, other: Vector2D) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }

    pub fn is_zero(self) -> bool {
        self.magnitude_squared() < EPSILON * EPSILON
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        self.multiply(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_distance_3_4_5() {
        let a = Vector2D::new(0.0, 0.0);
        let b = Vector2D::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.distance_squared_to(b), 25.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vector2D::new(3.0, 4.0).normalize();
        assert!(n.is_approximately(Vector2D::new(0.6, 0.8)));
        assert_eq!(Vector2D::ZERO.normalize(), Vector2D::ZERO);
        // Below epsilon is treated as zero
        assert_eq!(Vector2D::new(1e-5, 0.0).normalize(), Vector2D::ZERO);
    }

    #[test]
    fn test_clamp_preserves_direction() {
        let v = Vector2D::new(3.0, 4.0);
        let clamped = v.clamp(3.0);
        assert!(approx(clamped.magnitude(), 3.0));
        assert!(clamped.normalize().is_approximately(v.normalize()));

        // Shorter vectors are untouched
        assert_eq!(v.clamp(10.0), v);
    }

    #[test]
    fn test_divide_by_near_zero_fails() {
        let v = Vector2D::new(1.0, 2.0);
        assert_eq!(v.divide(2.0), Ok(Vector2D::new(0.5, 1.0)));
        assert!(matches!(v.divide(0.0), Err(VectorError::DivisionByZero { .. })));
        assert!(v.divide(5e-5).is_err());
    }

    #[test]
    fn test_arithmetic_and_operators() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, -1.0);
        assert_eq!(a + b, Vector2D::new(4.0, 1.0));
        assert_eq!(a - b, Vector2D::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(-a, Vector2D::new(-1.0, -2.0));
        assert_eq!(a.dot(b), 1.0);
        assert_eq!(a.cross(b), -7.0);
    }

    #[test]
    fn test_projection() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.project_onto(Vector2D::RIGHT), Vector2D::new(3.0, 0.0));
        assert_eq!(v.project_onto(Vector2D::ZERO), Vector2D::ZERO);
        assert!(approx(v.scalar_projection(Vector2D::new(0.0, 2.0)), 4.0));
        assert_eq!(v.scalar_projection(Vector2D::ZERO), 0.0);
    }

    #[test]
    fn test_perpendicular_and_reflect() {
        let v = Vector2D::new(1.0, 0.0);
        assert_eq!(v.perpendicular(), Vector2D::new(0.0, 1.0));
        assert_eq!(v.perpendicular_clockwise(), Vector2D::new(0.0, -1.0));

        // Ball hitting the floor bounces up
        let incoming = Vector2D::new(1.0, -1.0);
        assert_eq!(incoming.reflect(Vector2D::UP), Vector2D::new(1.0, 1.0));
    }

    #[test]
    fn test_angles() {
        assert!(approx(Vector2D::UP.angle(), FRAC_PI_2));
        assert!(approx(Vector2D::RIGHT.angle_to(Vector2D::LEFT), PI));
        assert!(approx(Vector2D::RIGHT.signed_angle_to(Vector2D::UP), FRAC_PI_2));
        assert!(approx(Vector2D::RIGHT.signed_angle_to(Vector2D::DOWN), -FRAC_PI_2));
        // Zero vector normalizes to zero, dot = 0, acos(0) = π/2
        assert!(approx(Vector2D::ZERO.angle_to(Vector2D::RIGHT), FRAC_PI_2));
    }

    #[test]
    fn test_rotate_lerp() {
        let r = Vector2D::RIGHT.rotate(FRAC_PI_2);
        assert!(r.is_approximately(Vector2D::UP));

        let a = Vector2D::new(0.0, 0.0);
        let b = Vector2D::new(10.0, 20.0);
        assert_eq!(a.lerp(b, 0.5), Vector2D::new(5.0, 10.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_from_polar_and_random_unit() {
        let v = Vector2D::from_polar(2.0, 0.0);
        assert!(v.is_approximately(Vector2D::new(2.0, 0.0)));

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let u = Vector2D::random_unit(&mut rng);
            assert!((u.magnitude() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_is_zero() {
        assert!(Vector2D::ZERO.is_zero());
        assert!(Vector2D::new(5e-5, 5e-5).is_zero());
        assert!(!Vector2D::new(1e-3, 0.0).is_zero());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// normalize never yields NaN/Inf and is unit or zero
            #[test]
            fn prop_normalize_is_total(x in -1e6f64..1e6, y in -1e6f64..1e6) {
                let n = Vector2D::new(x, y).normalize();
                prop_assert!(n.x.is_finite() && n.y.is_finite());
                let m = n.magnitude();
                prop_assert!(m == 0.0 || (m - 1.0).abs() < 1e-9);
            }

            /// clamp never exceeds the bound
            #[test]
            fn prop_clamp_bounded(x in -1e4f64..1e4, y in -1e4f64..1e4, max in 0.01f64..100.0) {
                let c = Vector2D::new(x, y).clamp(max);
                prop_assert!(c.magnitude() <= max + 1e-9);
            }
        }
    }
}
