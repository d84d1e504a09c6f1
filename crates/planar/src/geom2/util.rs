use nalgebra::Vector2;

use super::types::Aff2;

#[inline]
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg.to_radians()
}

/// Pure rotation map for `angle` radians (no translation).
#[inline]
pub fn rotation_transform(angle: f64) -> Aff2 {
    Aff2::rotation(angle)
}

/// `center + t(offset)`: place an offset given in the shape's local frame.
#[inline]
pub(crate) fn place(center: Vector2<f64>, offset: Vector2<f64>, t: &Aff2) -> Vector2<f64> {
    center + t.apply(offset)
}
