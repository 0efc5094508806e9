//! Three-component vectors and their algebra

use physcalc_core::{codes, to_fixed, CalcError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("Cannot calculate angle with a zero vector.")]
    ZeroVector,
}

impl From<VectorError> for CalcError {
    fn from(err: VectorError) -> Self {
        match err {
            VectorError::ZeroVector => CalcError::new(codes::ZERO_VECTOR, err.to_string()),
        }
    }
}

/// How a vector is entered and displayed. The stored value is always 3D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "2d")]
    Two,
    #[serde(rename = "3d")]
    Three,
}

impl Dimension {
    pub fn components(self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }

    /// 2D only when both operands are 2D
    pub fn combine(self, other: Dimension) -> Dimension {
        if self == Dimension::Two && other == Dimension::Two {
            Dimension::Two
        } else {
            Dimension::Three
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// A 2D vector: z is fixed at 0
    pub const fn planar(x: f64, y: f64) -> Self {
        Vector3 { x, y, z: 0.0 }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude() == 0.0
    }

    /// `( x, y )` or `( x, y, z )` with 4 decimals
    pub fn display(&self, dim: Dimension) -> String {
        match dim {
            Dimension::Two => format!("( {}, {} )", to_fixed(self.x, 4), to_fixed(self.y, 4)),
            Dimension::Three => format!(
                "( {}, {}, {} )",
                to_fixed(self.x, 4),
                to_fixed(self.y, 4),
                to_fixed(self.z, 4)
            ),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(Dimension::Three))
    }
}

pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

pub fn subtract(a: &Vector3, b: &Vector3) -> Vector3 {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Standard right-handed cross product. Total: two planar vectors give
/// `(0, 0, z)`; rejecting 2D input is the caller's job.
pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Angle between two vectors in degrees, in `[0, 180]`
pub fn angle_between(a: &Vector3, b: &Vector3) -> Result<f64, VectorError> {
    let m1 = a.magnitude();
    let m2 = b.magnitude();
    if m1 == 0.0 || m2 == 0.0 {
        return Err(VectorError::ZeroVector);
    }
    let cos_theta = (dot(a, b) / (m1 * m2)).clamp(-1.0, 1.0);
    Ok(cos_theta.acos().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    #[test]
    fn test_add_subtract() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(add(&a, &b), Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(subtract(&a, &b), Vector3::new(-3.0, -3.0, -3.0));
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&Vector3::new(1.0, 2.0, 3.0), &Vector3::new(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(dot(&X, &Y), 0.0);
    }

    #[test]
    fn test_cross_basis() {
        assert_eq!(cross(&X, &Y), Z);
        assert_eq!(cross(&Y, &Z), X);
        assert_eq!(cross(&Y, &X), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let a = Vector3::new(2.0, -1.0, 3.5);
        let b = Vector3::new(0.5, 4.0, -2.0);
        let c = cross(&a, &b);
        assert!(dot(&a, &c).abs() < 1e-12);
        assert!(dot(&b, &c).abs() < 1e-12);
    }

    #[test]
    fn test_cross_of_planar_vectors_is_total() {
        let c = cross(&Vector3::planar(1.0, 2.0), &Vector3::planar(3.0, 4.0));
        assert_eq!(c, Vector3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn test_angle_right_angle() {
        assert_eq!(angle_between(&X, &Y).unwrap(), 90.0);
    }

    #[test]
    fn test_angle_parallel_and_opposite() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        let b = Vector3::new(3.0, 3.0, 3.0);
        assert!(angle_between(&a, &b).unwrap().abs() < 1e-6);
        let neg = Vector3::new(-2.0, -2.0, -2.0);
        assert!((angle_between(&a, &neg).unwrap() - 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_angle_45_degrees() {
        let angle = angle_between(&X, &Vector3::planar(1.0, 1.0)).unwrap();
        assert!((angle - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_zero_vector() {
        assert_eq!(angle_between(&Vector3::default(), &X), Err(VectorError::ZeroVector));
        assert_eq!(angle_between(&X, &Vector3::default()), Err(VectorError::ZeroVector));
    }

    #[test]
    fn test_zero_vector_error_code() {
        let err: CalcError = VectorError::ZeroVector.into();
        assert_eq!(err.code, codes::ZERO_VECTOR);
        assert_eq!(err.message, "Cannot calculate angle with a zero vector.");
    }

    #[test]
    fn test_display() {
        let v = Vector3::new(1.0, -2.5, 1.0 / 3.0);
        assert_eq!(v.display(Dimension::Three), "( 1.0000, -2.5000, 0.3333 )");
        assert_eq!(v.display(Dimension::Two), "( 1.0000, -2.5000 )");
        assert_eq!(v.to_string(), "( 1.0000, -2.5000, 0.3333 )");
    }

    #[test]
    fn test_dimension_combine() {
        assert_eq!(Dimension::Two.combine(Dimension::Two), Dimension::Two);
        assert_eq!(Dimension::Two.combine(Dimension::Three), Dimension::Three);
        assert_eq!(Dimension::Three.components(), 3);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Vector3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(json, serde_json::json!({"x": 1.0, "y": 2.0, "z": 3.0}));
        assert_eq!(serde_json::to_value(Dimension::Two).unwrap(), "2d");
    }
}
