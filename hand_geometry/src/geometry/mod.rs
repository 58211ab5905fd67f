//! Vector geometry primitives for hand landmark processing.
//!
//! Every function here is pure and works on [`Point3`] values, which double
//! as 3D vectors.

pub mod point3;
pub use point3::Point3;

use thiserror::Error;

/// Failures of the geometry kernel and of the operations built on it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// One of the rays forming the angle has zero length, so the angle is
    /// undefined.
    #[error("angle is undefined: ray from the vertex has zero length")]
    DegenerateAngle,
    /// Point arrays passed to a batch operation differ in length.
    #[error("point arrays differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    /// The output buffer does not match the number of point pairs.
    #[error("output buffer holds {output} values but {pairs} pairs were given")]
    OutputMismatch { pairs: usize, output: usize },
}

/// Calculates the Euclidean distance between two 3D points.
///
/// Uses `hypot` so large and tiny coordinates neither overflow nor flush to
/// zero.
pub fn distance(a: Point3, b: Point3) -> f64 {
    (b.x - a.x).hypot(b.y - a.y).hypot(b.z - a.z)
}

/// Calculates the Euclidean distance between the XY projections of two points.
pub fn distance_2d(a: Point3, b: Point3) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Standard dot product.
pub fn dot(a: Point3, b: Point3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Standard cross product `a × b`.
pub fn cross(a: Point3, b: Point3) -> Point3 {
    Point3 {
        x: a.y * b.z - a.z * b.y,
        y: a.z * b.x - a.x * b.z,
        z: a.x * b.y - a.y * b.x,
    }
}

/// Returns the unit vector pointing in the direction of `v`.
///
/// The zero vector is returned unchanged, so the result is not guaranteed to
/// have unit length.
pub fn normalize(v: Point3) -> Point3 {
    let mag = v.length();
    if mag == 0.0 {
        return v;
    }
    Point3::new(v.x / mag, v.y / mag, v.z / mag)
}

/// Computes the angle at vertex `b` formed by the rays `b→a` and `b→c`.
///
/// The result is in degrees within `[0, 180]`. Returns
/// [`GeometryError::DegenerateAngle`] when `a` or `c` coincides with `b`.
pub fn angle(a: Point3, b: Point3, c: Point3) -> Result<f64, GeometryError> {
    angle_between(a - b, c - b)
}

/// Same as [`angle`] but evaluated on the XY projection of the points.
pub fn angle_2d(a: Point3, b: Point3, c: Point3) -> Result<f64, GeometryError> {
    let ba = Point3::new(a.x - b.x, a.y - b.y, 0.0);
    let bc = Point3::new(c.x - b.x, c.y - b.y, 0.0);
    angle_between(ba, bc)
}

/// Divides `v` by its largest absolute component so products of its
/// coordinates stay within range.
fn rescaled(v: Point3) -> Point3 {
    let m = v.x.abs().max(v.y.abs()).max(v.z.abs());
    Point3::new(v.x / m, v.y / m, v.z / m)
}

fn angle_between(ba: Point3, bc: Point3) -> Result<f64, GeometryError> {
    if ba == Point3::origin() || bc == Point3::origin() {
        return Err(GeometryError::DegenerateAngle);
    }
    let (u, v) = (rescaled(ba), rescaled(bc));
    // clamp keeps rounding noise out of acos' NaN region
    let cos_angle = (dot(u, v) / (u.length() * v.length())).clamp(-1.0, 1.0);
    if !cos_angle.is_finite() {
        return Err(GeometryError::DegenerateAngle);
    }
    Ok(cos_angle.acos().to_degrees())
}
