//! Parametric ellipse: center, semi-axes, eccentricity, rotation.
//!
//! Purpose
//! - Derive an ellipse from `(a, e)`, `(a, b)`, a bounding size, or a rectangle.
//! - Expose foci, frames, bounding boxes, the degenerate-circle conversion, and a
//!   4-curve cubic Bézier approximation.
//!
//! Invariants (checked at construction, panics otherwise)
//! - `a ≥ b ≥ 0`, `e ∈ [0, 1]`, `F = a·e`.
//! - `e == 0` iff the ellipse is a circle.
//!
//! The point ellipse `a == b == 0` has `e = 0` and `F = 0`.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use nalgebra::Vector2;

use crate::bezier::{BezierCfg, BezierCurve, BezierCurveChain};
use crate::circle::Circle;
use crate::geom2::{place, rotation_transform, Rect2, Size2};

/// Immutable ellipse value.
///
/// `rotation` is the counterclockwise angle (radians) from the reference x-axis
/// to the major axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    center: Vector2<f64>,
    a: f64,
    b: f64,
    e: f64,
    f: f64,
    rotation: f64,
}

impl Ellipse {
    /// Ellipse from semi-major axis `a` and eccentricity `e`; `b = a·sqrt(1 − e²)`.
    ///
    /// Panics if `a < 0` or `e ∉ [0, 1]`.
    pub fn new(center: Vector2<f64>, a: f64, e: f64, rotation: f64) -> Self {
        assert!(a >= 0.0, "semi-major axis must be non-negative (a = {a})");
        assert!(
            (0.0..=1.0).contains(&e),
            "eccentricity must lie in [0, 1] (e = {e})"
        );
        Self {
            center,
            a,
            b: a * (1.0 - e * e).sqrt(),
            e,
            f: a * e,
            rotation,
        }
    }

    /// Ellipse from semi-major `a` and semi-minor `b`; `e = sqrt(1 − (b/a)²)`.
    ///
    /// Panics unless `a ≥ b ≥ 0`. Values are never swapped.
    pub fn from_axes(center: Vector2<f64>, a: f64, b: f64, rotation: f64) -> Self {
        assert!(
            a >= b,
            "semi-major axis shorter than semi-minor axis (a = {a}, b = {b})"
        );
        assert!(b >= 0.0, "semi-minor axis must be non-negative (b = {b})");
        // 1 − (b/a)² factored as (a − b)(a + b)/a², so a > b always gives e > 0.
        // A flat ellipse is exactly e = 1; elsewhere sqrt(a)² can round above
        // a, so clamp to keep e ≤ 1 and F ≤ a.
        let e = if a == b {
            0.0
        } else if b == 0.0 {
            1.0
        } else {
            ((a - b).sqrt() * (a + b).sqrt() / a).min(1.0)
        };
        Self {
            center,
            a,
            b,
            e,
            f: a * e,
            rotation,
        }
    }

    /// Axis-aligned ellipse inscribed in a `size` box around `center`.
    ///
    /// The major axis follows the longer side: rotation is π/2 when
    /// `height > width`, 0 otherwise.
    pub fn from_size(center: Vector2<f64>, size: Size2) -> Self {
        let a = size.max_side() * 0.5;
        let b = size.min_side() * 0.5;
        let rotation = if size.height > size.width {
            FRAC_PI_2
        } else {
            0.0
        };
        Self::from_axes(center, a, b, rotation)
    }

    /// Ellipse inscribed in `rect`.
    pub fn from_rect(rect: Rect2) -> Self {
        Self::from_size(rect.mid(), rect.size)
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.center
    }
    /// Semi-major axis.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }
    /// Semi-minor axis.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Eccentricity.
    #[inline]
    pub fn e(&self) -> f64 {
        self.e
    }
    /// Distance from the center to each focus (`F = a·e`).
    #[inline]
    pub fn linear_eccentricity(&self) -> f64 {
        self.f
    }
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }
    #[inline]
    pub fn is_circle(&self) -> bool {
        self.e == 0.0
    }

    /// The two foci, on the major axis at `∓F` from the center.
    pub fn foci(&self) -> (Vector2<f64>, Vector2<f64>) {
        let t = rotation_transform(self.rotation);
        (
            place(self.center, Vector2::new(-self.f, 0.0), &t),
            place(self.center, Vector2::new(self.f, 0.0), &t),
        )
    }

    /// Size of the ellipse if rotation were 0.
    #[inline]
    pub fn unrotated_size(&self) -> Size2 {
        Size2::new(self.a * 2.0, self.b * 2.0)
    }

    /// Frame of the ellipse if rotation were 0. Only meaningful for unrotated
    /// ellipses; see `bounding_box`.
    pub fn unrotated_frame(&self) -> Rect2 {
        Rect2::from_center_size(self.center, self.unrotated_size())
    }

    /// Smallest rect containing the 4-curve Bézier approximation.
    ///
    /// The curves deviate from the true ellipse by at most ~0.02% of `a`, so
    /// this can differ slightly from the true ellipse box. Use
    /// `analytic_bounding_box` for exact bounds.
    pub fn bounding_box(&self) -> Rect2 {
        let [c0, c1, c2, c3] = self.to_bezier_curves();
        c0.bounding_box()
            .union(&c1.bounding_box())
            .union(&c2.bounding_box())
            .union(&c3.bounding_box())
    }

    /// Exact axis-aligned box of the rotated ellipse.
    pub fn analytic_bounding_box(&self) -> Rect2 {
        let (sin, cos) = self.rotation.sin_cos();
        let (a2, b2) = (self.a * self.a, self.b * self.b);
        let hx = (a2 * cos * cos + b2 * sin * sin).sqrt();
        let hy = (a2 * sin * sin + b2 * cos * cos).sqrt();
        Rect2::from_center_size(self.center, Size2::new(hx * 2.0, hy * 2.0))
    }

    /// The circle this ellipse is, if `e == 0`.
    pub fn to_circle(&self) -> Option<Circle> {
        if self.e == 0.0 {
            debug_assert!(self.a == self.b, "circular ellipse with a != b");
            debug_assert!(self.f == 0.0, "circular ellipse with F != 0");
            Some(Circle::new(self.center, self.a))
        } else {
            None
        }
    }

    /// Four quarter-arc cubics with the default constant (`BezierCfg::default`).
    pub fn to_bezier_curves(&self) -> [BezierCurve; 4] {
        self.to_bezier_curves_with(BezierCfg::default().kappa)
    }

    /// Four quarter-arc cubics, clockwise from the top point `(0, b)` in the
    /// ellipse's local frame: top → right → bottom → left → top.
    ///
    /// Curves 0–3 are the arcs `(0, b) → (a, 0)`, `(a, 0) → (0, −b)`,
    /// `(0, −b) → (−a, 0)` and `(−a, 0) → (0, b)`. With y pointing up that
    /// walk is clockwise; in a y-down view the same order reads
    /// counter-clockwise.
    ///
    /// Control points sit at `c·a` / `c·b` along the tangent at each endpoint.
    pub fn to_bezier_curves_with(&self, c: f64) -> [BezierCurve; 4] {
        let t = rotation_transform(self.rotation);
        let (a, b) = (self.a, self.b);
        let da = a * c;
        let db = b * c;
        let p = |v: Vector2<f64>| place(self.center, v, &t);

        let top = Vector2::new(0.0, b);
        let right = Vector2::new(a, 0.0);
        let bottom = Vector2::new(0.0, -b);
        let left = Vector2::new(-a, 0.0);
        let arc = |start: Vector2<f64>, d1: Vector2<f64>, end: Vector2<f64>, d2: Vector2<f64>| {
            BezierCurve::new(p(start), p(start + d1), p(end + d2), p(end))
        };

        [
            arc(top, Vector2::new(da, 0.0), right, Vector2::new(0.0, db)),
            arc(right, Vector2::new(0.0, -db), bottom, Vector2::new(da, 0.0)),
            arc(bottom, Vector2::new(-da, 0.0), left, Vector2::new(0.0, -db)),
            arc(left, Vector2::new(0.0, db), top, Vector2::new(-da, 0.0)),
        ]
    }

    /// The 4 curves of `to_bezier_curves`, in order, as one closed chain.
    pub fn to_bezier_chain(&self) -> BezierCurveChain {
        BezierCurveChain::new(self.to_bezier_curves().to_vec())
    }
}

impl From<Ellipse> for BezierCurveChain {
    fn from(ellipse: Ellipse) -> Self {
        ellipse.to_bezier_chain()
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ellipse(center: ({}, {}), a: {}, b: {}, e: {}, rotation: {})",
            self.center.x, self.center.y, self.a, self.b, self.e, self.rotation
        )
    }
}

#[cfg(test)]
mod tests;
