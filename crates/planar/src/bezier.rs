//! Cubic Bézier curves and ordered curve chains.
//!
//! - `BezierCurve`: `(start, control1, control2, end)` with Bernstein evaluation
//!   and an exact axis-aligned bounding box (endpoints + derivative roots).
//! - `BezierCurveChain`: ordered curves, e.g. the 4 quarter arcs of an ellipse.
//! - `BezierCfg`: approximation settings used when shapes emit curves.

use nalgebra::Vector2;

use crate::cfg::{KAPPA, QUAD_EPS};
use crate::geom2::Rect2;

/// Settings for arc-to-cubic approximation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierCfg {
    /// Control-point offset as a fraction of the radius along each axis.
    pub kappa: f64,
}

impl Default for BezierCfg {
    fn default() -> Self {
        Self { kappa: KAPPA }
    }
}

/// Cubic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierCurve {
    pub start: Vector2<f64>,
    pub control1: Vector2<f64>,
    pub control2: Vector2<f64>,
    pub end: Vector2<f64>,
}

impl BezierCurve {
    #[inline]
    pub fn new(
        start: Vector2<f64>,
        control1: Vector2<f64>,
        control2: Vector2<f64>,
        end: Vector2<f64>,
    ) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    /// Point at parameter `t ∈ [0, 1]`.
    pub fn point_at(&self, t: f64) -> Vector2<f64> {
        let u = 1.0 - t;
        self.start * (u * u * u)
            + self.control1 * (3.0 * u * u * t)
            + self.control2 * (3.0 * u * t * t)
            + self.end * (t * t * t)
    }

    /// Exact axis-aligned bounding box of the curve (not of its control hull).
    pub fn bounding_box(&self) -> Rect2 {
        let mut lo = self.start.inf(&self.end);
        let mut hi = self.start.sup(&self.end);
        for axis in 0..2 {
            let roots = derivative_roots(
                self.start[axis],
                self.control1[axis],
                self.control2[axis],
                self.end[axis],
            );
            for t in roots.into_iter().flatten() {
                let v = self.point_at(t)[axis];
                lo[axis] = lo[axis].min(v);
                hi[axis] = hi[axis].max(v);
            }
        }
        Rect2::from_corners(lo, hi)
    }
}

/// Roots in the open interval (0,1) of the derivative of a 1D cubic Bézier.
///
/// B'(t)/3 = a t² + b t + c with
/// a = -p0 + 3p1 - 3p2 + p3, b = 2(p0 - 2p1 + p2), c = p1 - p0.
fn derivative_roots(p0: f64, p1: f64, p2: f64, p3: f64) -> [Option<f64>; 2] {
    let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
    let b = 2.0 * (p0 - 2.0 * p1 + p2);
    let c = p1 - p0;
    let inside = |t: f64| (t > 0.0 && t < 1.0).then_some(t);
    if a.abs() < QUAD_EPS {
        if b.abs() < QUAD_EPS {
            return [None, None];
        }
        return [inside(-c / b), None];
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return [None, None];
    }
    let sq = disc.sqrt();
    [inside((-b + sq) / (2.0 * a)), inside((-b - sq) / (2.0 * a))]
}

/// Ordered sequence of cubic curves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BezierCurveChain {
    curves: Vec<BezierCurve>,
}

impl BezierCurveChain {
    pub fn new(curves: Vec<BezierCurve>) -> Self {
        Self { curves }
    }
    #[inline]
    pub fn curves(&self) -> &[BezierCurve] {
        &self.curves
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.curves.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Consecutive curves join (end == next start) and the last curve returns
    /// to the first start, all within `eps`. Empty chains are not closed.
    pub fn is_closed(&self, eps: f64) -> bool {
        let (Some(first), Some(last)) = (self.curves.first(), self.curves.last()) else {
            return false;
        };
        let joined = self
            .curves
            .windows(2)
            .all(|w| (w[0].end - w[1].start).norm() <= eps);
        joined && (last.end - first.start).norm() <= eps
    }

    /// Union of the member curves' bounding boxes; `None` for an empty chain.
    pub fn bounding_box(&self) -> Option<Rect2> {
        Rect2::union_all(self.curves.iter().map(BezierCurve::bounding_box))
    }
}

impl From<Vec<BezierCurve>> for BezierCurveChain {
    fn from(curves: Vec<BezierCurve>) -> Self {
        Self::new(curves)
    }
}
