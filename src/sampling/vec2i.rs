use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Immutable 2D integer vector with exact arithmetic.
///
/// Displacements in the index grid stay in `i64` so that stride multiples
/// never overflow during basis construction, even for large grids; only
/// [`IVec2::length`] leaves integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IVec2 {
    pub x: i64,
    pub y: i64,
}

impl IVec2 {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Dot product, exact.
    pub fn dot(self, other: Self) -> i64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (determinant). Zero iff the vectors are parallel.
    pub fn cross(self, other: Self) -> i64 {
        self.x * other.y - other.x * self.y
    }

    /// Squared Euclidean length, exact.
    pub fn length_squared(self) -> i64 {
        self.dot(self)
    }

    /// Euclidean length as a float.
    pub fn length(self) -> f64 {
        (self.length_squared() as f64).sqrt()
    }
}

impl Add for IVec2 {
    type Output = IVec2;

    fn add(self, rhs: IVec2) -> IVec2 {
        IVec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for IVec2 {
    type Output = IVec2;

    fn sub(self, rhs: IVec2) -> IVec2 {
        IVec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for IVec2 {
    type Output = IVec2;

    fn neg(self) -> IVec2 {
        IVec2::new(-self.x, -self.y)
    }
}

impl Mul<IVec2> for i64 {
    type Output = IVec2;

    fn mul(self, rhs: IVec2) -> IVec2 {
        IVec2::new(self * rhs.x, self * rhs.y)
    }
}

impl Mul<i64> for IVec2 {
    type Output = IVec2;

    fn mul(self, rhs: i64) -> IVec2 {
        rhs * self
    }
}

/// Euclidean greatest common divisor on nonnegative integers.
///
/// `gcd(a, 0) == a`; used throughout the stride search as the coprimality
/// predicate `gcd(area, delta) == 1`.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
