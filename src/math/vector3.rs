use std::ops::{Add, Index, Mul, Neg, Sub};

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{FigurineError, FigurineResult};

/// Immutable three-component `f64` vector.
///
/// Every operation returns a new value. Figure geometry lives in the `z = 0` plane; the third
/// component exists so cross products and reflections behave as in 3D.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    /// X component.
    pub x: f64,
    /// Y component (pixel rows grow downwards on the raster).
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 0, 0)`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// `(0, 1, 0)`.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// `(0, 0, 1)`.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Construct from three scalars.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A point in the raster plane (`z = 0`).
    pub const fn planar(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Component by index: 0, 1, 2 map to x, y, z.
    pub fn component(self, i: usize) -> FigurineResult<f64> {
        match i {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(FigurineError::IndexOutOfRange(i)),
        }
    }

    /// Component-wise sum.
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Component-wise difference `self - other`.
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Component-wise negation.
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Multiply every component by `k`.
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    /// Divide every component by `k`.
    ///
    /// Fails with [`FigurineError::UndefinedResult`] when `k == 0`.
    pub fn divide(self, k: f64) -> FigurineResult<Self> {
        if k == 0.0 {
            return Err(FigurineError::undefined("vector divided by zero"));
        }
        Ok(self.divide_unchecked(k))
    }

    /// Divide every component by `k` with IEEE semantics (`k == 0` yields non-finite components).
    pub fn divide_unchecked(self, k: f64) -> Self {
        Self::new(self.x / k, self.y / k, self.z / k)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared Euclidean length.
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`FigurineError::UndefinedResult`] for the zero vector.
    pub fn unitize(self) -> FigurineResult<Self> {
        let len = self.length();
        if len == 0.0 {
            return Err(FigurineError::undefined("cannot unitize the zero vector"));
        }
        Ok(self.divide_unchecked(len))
    }

    /// Mirror `self` about the plane with unit `normal`: `self - normal * 2 * dot(self, normal)`.
    ///
    /// `normal` is expected to be unit length; this is not checked.
    pub fn reflect(self, normal: Self) -> Self {
        self.subtract(normal.scale(2.0 * self.dot(normal)))
    }

    /// Exact comparison with [`Vector3::ZERO`] (no tolerance).
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Drop `z` and return a raster point.
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Drop `z` and return a raster displacement.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Point> for Vector3 {
    fn from(p: Point) -> Self {
        Self::planar(p.x, p.y)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector3::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    /// Panics for indices other than 0, 1, 2; use [`Vector3::component`] to get an error instead.
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", FigurineError::IndexOutOfRange(i)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/math/vector3.rs"]
mod tests;
