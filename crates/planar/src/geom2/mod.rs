//! 2D primitives shared by the shape and imaging modules.
//!
//! Purpose
//! - Point/Size/Rect arithmetic: translation, union, center/size construction.
//! - Rotation-by-angle as an `Aff2` so shapes can place local offsets.
//!
//! Frame
//! - y-up, `Rect2::origin` is the minimum corner, positive angles rotate
//!   counterclockwise.

mod types;
mod util;

pub(crate) use util::place;
pub use types::{Aff2, Rect2, Size2};
pub use util::{degrees_to_radians, rotation_transform};
