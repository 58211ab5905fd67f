//! Basic 3D point type used throughout the crate.

use std::ops::{Add, Mul, Sub};

/// Representation of a 3D point (or the vector from the origin to it).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The point `(0, 0, 0)`.
    pub fn origin() -> Self {
        Self::default()
    }

    /// Euclidean length of the vector from the origin to this point.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: f64) -> Point3 {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_unit_diagonal() {
        let p = Point3::new(1.0, 2.0, 2.0);
        assert!((p.length() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn vector_ops() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(0.5, 0.5, 0.5);
        assert_eq!(a - b, Point3::new(0.5, 1.5, 2.5));
        assert_eq!(a + b, Point3::new(1.5, 2.5, 3.5));
        assert_eq!(b * 2.0, Point3::new(1.0, 1.0, 1.0));
        assert_eq!(Point3::from((1.0, 2.0, 3.0)), a);
        assert_eq!(Point3::origin(), Point3::new(0.0, 0.0, 0.0));
    }
}
