//! Circle value type: the degenerate ellipse with `e == 0`.

use nalgebra::Vector2;

use crate::bezier::BezierCurveChain;
use crate::ellipse::Ellipse;
use crate::geom2::{Rect2, Size2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Vector2<f64>,
    radius: f64,
}

impl Circle {
    /// Panics if `radius < 0`.
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        assert!(radius >= 0.0, "radius must be non-negative (r = {radius})");
        Self { center, radius }
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Same center, new radius.
    pub fn with_radius(&self, radius: f64) -> Self {
        Self::new(self.center, radius)
    }

    /// Grow (positive `delta`) or shrink (negative) the radius.
    pub fn inset(&self, delta: f64) -> Self {
        self.with_radius(self.radius + delta)
    }

    pub fn frame(&self) -> Rect2 {
        let d = self.radius * 2.0;
        Rect2::from_center_size(self.center, Size2::new(d, d))
    }

    pub fn to_ellipse(&self) -> Ellipse {
        Ellipse::from_axes(self.center, self.radius, self.radius, 0.0)
    }

    pub fn to_bezier_chain(&self) -> BezierCurveChain {
        self.to_ellipse().to_bezier_chain()
    }
}

impl From<Circle> for BezierCurveChain {
    fn from(circle: Circle) -> Self {
        circle.to_bezier_chain()
    }
}
