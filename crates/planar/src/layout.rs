//! Scale-and-align of a source rectangle into a destination rectangle.
//!
//! Used by the imaging helpers to place an image inside a bitmap of another
//! size (aspect-preserving resize, aligned crops). y-up: `Top` means the
//! destination's max-y edge.

use nalgebra::Vector2;

use crate::geom2::{Rect2, Size2};

/// How the source size is mapped before alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scaling {
    /// Keep the source size.
    #[default]
    None,
    /// Uniform scale so the source fits inside the destination.
    Proportionally,
    /// Stretch to exactly the destination size.
    ToFit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Center,
    Top,
    TopLeft,
    TopRight,
    Left,
    Bottom,
    BottomLeft,
    BottomRight,
    Right,
}

impl Alignment {
    /// Fractional anchor within the free space: (0,0) = bottom-left, (1,1) = top-right.
    fn anchor(self) -> (f64, f64) {
        match self {
            Alignment::Center => (0.5, 0.5),
            Alignment::Top => (0.5, 1.0),
            Alignment::TopLeft => (0.0, 1.0),
            Alignment::TopRight => (1.0, 1.0),
            Alignment::Left => (0.0, 0.5),
            Alignment::Bottom => (0.5, 0.0),
            Alignment::BottomLeft => (0.0, 0.0),
            Alignment::BottomRight => (1.0, 0.0),
            Alignment::Right => (1.0, 0.5),
        }
    }
}

fn scaled_size(source: Size2, destination: Size2, scaling: Scaling) -> Size2 {
    match scaling {
        Scaling::None => source,
        Scaling::ToFit => destination,
        Scaling::Proportionally => {
            if source.width <= 0.0 || source.height <= 0.0 {
                return Size2::default();
            }
            let s = (destination.width / source.width).min(destination.height / source.height);
            source.scaled(s)
        }
    }
}

/// Rectangle for `source` after scaling, positioned inside `destination`.
///
/// The result may extend past `destination` (e.g. `Scaling::None` with a
/// larger source); alignment then decides which part overhangs.
pub fn scale_and_align_rect(
    source: Rect2,
    destination: Rect2,
    scaling: Scaling,
    alignment: Alignment,
) -> Rect2 {
    let size = scaled_size(source.size, destination.size, scaling);
    let (fx, fy) = alignment.anchor();
    let free_w = destination.size.width - size.width;
    let free_h = destination.size.height - size.height;
    let origin = destination.origin + Vector2::new(free_w * fx, free_h * fy);
    Rect2::new(origin, size)
}
