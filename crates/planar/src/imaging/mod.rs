//! Image helpers over an external drawing backend.
//!
//! Purpose
//! - Express resize/crop/clip/composite as short lists of `DrawOp`s.
//! - Leave bitmap allocation, rasterization, and pixel formats to a `Backend`.
//!
//! Contract for `Backend::render`
//! - Allocate a bitmap of `size` (transparent), run `ops` in order inside one
//!   save/restore scope, and return the finished image.
//! - Clip paths intersect; blend mode and alpha apply to later draws only.
//! - Coordinates are y-up with the bitmap's origin at (0, 0).

mod ops;

pub use ops::{
    clipped, clipped_to, color_image, composite, composite_all, cropped, cropped_to_rect,
    new_image, resized, with_drawing,
};

use crate::bezier::BezierCurveChain;
use crate::geom2::{Rect2, Size2};

/// Straight (non-premultiplied) RGBA color, components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
}

/// One drawing command for a backend.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp<I> {
    DrawImage { image: I, rect: Rect2 },
    Clip(BezierCurveChain),
    SetBlendMode(BlendMode),
    SetAlpha(f64),
    FillRect { color: Rgba, rect: Rect2 },
    StrokePath {
        path: BezierCurveChain,
        color: Rgba,
        line_width: f64,
    },
}

/// External drawing context: owns bitmaps and executes draw ops.
pub trait Backend {
    type Image: Clone;

    fn image_size(&self, image: &Self::Image) -> Size2;

    fn render(&mut self, size: Size2, ops: &[DrawOp<Self::Image>]) -> Self::Image;
}

/// Input to `composite_all`: an image, or a solid color stretched to fit.
#[derive(Clone, Debug, PartialEq)]
pub enum Layer<I> {
    Image(I),
    Color(Rgba),
}
