//! Basic 2D value types: sizes, rectangles, and affine maps.
//!
//! - `Size2`: width/height pair (non-negative in practice, not enforced).
//! - `Rect2`: origin (minimum corner, y-up) plus size.
//! - `Aff2`: 2D affine map `x ↦ M x + t`, used here mostly as a pure rotation.
//!
//! Points are plain `nalgebra::Vector2<f64>`.

use nalgebra::{Matrix2, Rotation2, Vector2};

/// Width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size2 {
    pub width: f64,
    pub height: f64,
}

impl Size2 {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
    #[inline]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
    #[inline]
    pub fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }
    #[inline]
    pub fn scaled(&self, s: f64) -> Self {
        Self::new(self.width * s, self.height * s)
    }
    /// Rectangle with this size anchored at the origin.
    #[inline]
    pub fn to_rect(self) -> Rect2 {
        Rect2::new(Vector2::zeros(), self)
    }
}

/// Axis-aligned rectangle in a y-up frame; `origin` is the minimum corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect2 {
    pub origin: Vector2<f64>,
    pub size: Size2,
}

impl Rect2 {
    #[inline]
    pub fn new(origin: Vector2<f64>, size: Size2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn from_center_size(center: Vector2<f64>, size: Size2) -> Self {
        let origin = Vector2::new(center.x - size.width * 0.5, center.y - size.height * 0.5);
        Self { origin, size }
    }

    /// Smallest rectangle containing both corners (in any order).
    pub fn from_corners(p: Vector2<f64>, q: Vector2<f64>) -> Self {
        let lo = p.inf(&q);
        let hi = p.sup(&q);
        Self::new(lo, Size2::new(hi.x - lo.x, hi.y - lo.y))
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }
    #[inline]
    pub fn mid(&self) -> Vector2<f64> {
        Vector2::new(
            self.origin.x + self.size.width * 0.5,
            self.origin.y + self.size.height * 0.5,
        )
    }
    #[inline]
    pub fn max_corner(&self) -> Vector2<f64> {
        Vector2::new(self.max_x(), self.max_y())
    }

    pub fn union(&self, other: &Rect2) -> Rect2 {
        let lo = self.origin.inf(&other.origin);
        let hi = self.max_corner().sup(&other.max_corner());
        Rect2::from_corners(lo, hi)
    }

    /// Union of all rectangles; `None` for an empty input.
    pub fn union_all<I>(rects: I) -> Option<Rect2>
    where
        I: IntoIterator<Item = Rect2>,
    {
        rects.into_iter().reduce(|acc, r| acc.union(&r))
    }

    /// Closed containment test, enlarged by `eps` on every side.
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        p.x >= self.min_x() - eps
            && p.x <= self.max_x() + eps
            && p.y >= self.min_y() - eps
            && p.y <= self.max_y() + eps
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aff2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Aff2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    /// Counterclockwise rotation by `angle` radians about the origin.
    #[inline]
    pub fn rotation(angle: f64) -> Self {
        Self {
            m: *Rotation2::new(angle).matrix(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn translation(t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }
    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }
    /// `other ∘ self`: apply `self` first, then `other`.
    #[inline]
    pub fn then(&self, other: &Aff2) -> Aff2 {
        Aff2 {
            m: other.m * self.m,
            t: other.m * self.t + other.t,
        }
    }
}
