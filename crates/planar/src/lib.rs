//! 2D graphics conveniences: ellipse geometry, cubic Bézier curves, and
//! image helpers expressed against an external drawing backend.
//!
//! Layout
//! - `geom2`: points (`Vec2`), `Size2`, `Rect2`, rotation transforms.
//! - `bezier`: cubic curves with exact bounding boxes, ordered chains.
//! - `circle`, `ellipse`: immutable shape values; ellipses convert to circles
//!   (when circular) and to 4-curve Bézier chains.
//! - `layout`: scale-and-align of one rectangle into another.
//! - `imaging`: resize/crop/clip/composite built as draw-op lists for a `Backend`.
//!
//! Conventions
//! - y-up frame, angles in radians, counterclockwise rotation.
//! - Invalid geometric input is a programming error and panics at construction.
//!   Expected absence (e.g. a non-circular ellipse asked for its circle) is `Option`.

pub mod bezier;
pub mod cfg;
pub mod circle;
pub mod ellipse;
pub mod geom2;
pub mod imaging;
pub mod layout;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bezier::{BezierCfg, BezierCurve, BezierCurveChain};
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use geom2::{Aff2, Rect2, Size2};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bezier::{BezierCfg, BezierCurve, BezierCurveChain};
    pub use crate::circle::Circle;
    pub use crate::ellipse::Ellipse;
    pub use crate::geom2::{degrees_to_radians, rotation_transform, Aff2, Rect2, Size2};
    pub use crate::imaging::{Backend, BlendMode, DrawOp, Layer, Rgba};
    pub use crate::layout::{scale_and_align_rect, Alignment, Scaling};
    pub use nalgebra::{vector, Vector2 as Vec2};
}
