//! Small fixed-size vector helpers for cell and world coordinates

use crate::spatial::block::Position;

/// Floating point 3-vector
pub type Vec3 = [f64; 3];

/// Convert an integer cell position to floating point
pub fn to_vec3(position: Position) -> Vec3 {
    [
        f64::from(position[0]),
        f64::from(position[1]),
        f64::from(position[2]),
    ]
}

/// Component-wise `a + b`
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Component-wise `a - b`
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Multiply every component by `factor`
pub fn scale(a: Vec3, factor: f64) -> Vec3 {
    [a[0] * factor, a[1] * factor, a[2] * factor]
}

/// Dot product
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0].mul_add(b[0], a[1].mul_add(b[1], a[2] * b[2]))
}

/// Cross product `a x b`
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1].mul_add(b[2], -(a[2] * b[1])),
        a[2].mul_add(b[0], -(a[0] * b[2])),
        a[0].mul_add(b[1], -(a[1] * b[0])),
    ]
}

/// Euclidean length
pub fn length(a: Vec3) -> f64 {
    dot(a, a).sqrt()
}

/// Unit vector in the direction of `a`, or `None` for a zero vector
pub fn normalize(a: Vec3) -> Option<Vec3> {
    let len = length(a);
    (len > f64::EPSILON).then(|| scale(a, 1.0 / len))
}

/// Rotate `v` about a unit `axis` by `degrees` (Rodrigues' formula)
pub fn rotate_about(v: Vec3, axis: Vec3, degrees: f64) -> Vec3 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let parallel = scale(axis, dot(axis, v) * (1.0 - cos));
    add(add(scale(v, cos), scale(cross(axis, v), sin)), parallel)
}
