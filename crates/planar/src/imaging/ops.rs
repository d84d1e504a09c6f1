use nalgebra::Vector2;

use super::{Backend, BlendMode, DrawOp, Layer, Rgba};
use crate::bezier::BezierCurveChain;
use crate::geom2::{Rect2, Size2};
use crate::layout::{scale_and_align_rect, Alignment, Scaling};

#[inline]
fn full_rect<B: Backend>(backend: &B, image: &B::Image) -> Rect2 {
    backend.image_size(image).to_rect()
}

/// New bitmap of `size` with `ops` drawn into it.
pub fn new_image<B: Backend>(backend: &mut B, size: Size2, ops: &[DrawOp<B::Image>]) -> B::Image {
    backend.render(size, ops)
}

/// Redraw `image` into a bitmap of `size`.
///
/// With `keep_aspect_ratio` the image is scaled uniformly to fit and centered,
/// leaving transparent bars; otherwise it is stretched.
pub fn resized<B: Backend>(
    backend: &mut B,
    image: &B::Image,
    size: Size2,
    keep_aspect_ratio: bool,
) -> B::Image {
    let rect = if keep_aspect_ratio {
        scale_and_align_rect(
            full_rect(backend, image),
            size.to_rect(),
            Scaling::Proportionally,
            Alignment::Center,
        )
    } else {
        size.to_rect()
    };
    backend.render(
        size,
        &[DrawOp::DrawImage {
            image: image.clone(),
            rect,
        }],
    )
}

/// The part of `image` under `rect`, as a bitmap of `rect.size`.
pub fn cropped_to_rect<B: Backend>(backend: &mut B, image: &B::Image, rect: Rect2) -> B::Image {
    let placed = Rect2::new(-rect.origin, backend.image_size(image));
    backend.render(
        rect.size,
        &[DrawOp::DrawImage {
            image: image.clone(),
            rect: placed,
        }],
    )
}

/// Bitmap of `size` showing `image` scaled and aligned inside it; whatever
/// overhangs is cut off.
pub fn cropped<B: Backend>(
    backend: &mut B,
    image: &B::Image,
    size: Size2,
    scaling: Scaling,
    alignment: Alignment,
) -> B::Image {
    let rect = scale_and_align_rect(full_rect(backend, image), size.to_rect(), scaling, alignment);
    backend.render(
        size,
        &[DrawOp::DrawImage {
            image: image.clone(),
            rect,
        }],
    )
}

/// `image` with everything outside `path` made transparent.
pub fn clipped<B: Backend>(backend: &mut B, image: &B::Image, path: BezierCurveChain) -> B::Image {
    let rect = full_rect(backend, image);
    backend.render(
        rect.size,
        &[
            DrawOp::Clip(path),
            DrawOp::DrawImage {
                image: image.clone(),
                rect,
            },
        ],
    )
}

/// `clipped` with any shape that converts to a curve chain (circles, ellipses).
pub fn clipped_to<B, S>(backend: &mut B, image: &B::Image, shape: S) -> B::Image
where
    B: Backend,
    S: Into<BezierCurveChain>,
{
    clipped(backend, image, shape.into())
}

/// `other` drawn over `image` at its own size, with optional blend mode.
///
/// Panics unless `alpha ∈ [0, 1]`.
pub fn composite<B: Backend>(
    backend: &mut B,
    image: &B::Image,
    other: &B::Image,
    blend_mode: Option<BlendMode>,
    alpha: f64,
) -> B::Image {
    assert!((0.0..=1.0).contains(&alpha), "alpha must lie in [0, 1] (alpha = {alpha})");
    let base = full_rect(backend, image);
    let mut ops = vec![DrawOp::DrawImage {
        image: image.clone(),
        rect: base,
    }];
    push_style(&mut ops, blend_mode, alpha);
    ops.push(DrawOp::DrawImage {
        image: other.clone(),
        rect: full_rect(backend, other),
    });
    backend.render(base.size, &ops)
}

/// Solid `color` bitmap of `size`.
pub fn color_image<B: Backend>(backend: &mut B, color: Rgba, size: Size2) -> B::Image {
    backend.render(
        size,
        &[DrawOp::FillRect {
            color,
            rect: size.to_rect(),
        }],
    )
}

/// Stack `layers` bottom-up. The first layer fixes the output size; later
/// layers are resized (stretched) to it. Colors become 1×1 images first.
///
/// Returns `None` for an empty `layers`. Panics unless `alpha ∈ [0, 1]`.
pub fn composite_all<B: Backend>(
    backend: &mut B,
    layers: &[Layer<B::Image>],
    blend_mode: Option<BlendMode>,
    alpha: f64,
) -> Option<B::Image> {
    assert!((0.0..=1.0).contains(&alpha), "alpha must lie in [0, 1] (alpha = {alpha})");
    let images: Vec<B::Image> = layers
        .iter()
        .map(|layer| match layer {
            Layer::Image(image) => image.clone(),
            Layer::Color(color) => color_image(backend, *color, Size2::new(1.0, 1.0)),
        })
        .collect();
    let (first, rest) = images.split_first()?;
    let size = backend.image_size(first);
    let mut ops = vec![DrawOp::DrawImage {
        image: first.clone(),
        rect: size.to_rect(),
    }];
    push_style(&mut ops, blend_mode, alpha);
    for image in rest {
        let fitted = if backend.image_size(image) == size {
            image.clone()
        } else {
            resized(backend, image, size, false)
        };
        ops.push(DrawOp::DrawImage {
            image: fitted,
            rect: size.to_rect(),
        });
    }
    Some(backend.render(size, &ops))
}

/// Redraw `image` (at the origin) into a bitmap of `size` (default: the
/// image's own size), then run `extra` on top.
pub fn with_drawing<B: Backend>(
    backend: &mut B,
    image: &B::Image,
    size: Option<Size2>,
    extra: &[DrawOp<B::Image>],
) -> B::Image {
    let own = backend.image_size(image);
    let size = size.unwrap_or(own);
    let mut ops = Vec::with_capacity(extra.len() + 1);
    ops.push(DrawOp::DrawImage {
        image: image.clone(),
        rect: Rect2::new(Vector2::zeros(), own),
    });
    ops.extend_from_slice(extra);
    backend.render(size, &ops)
}

fn push_style<I>(ops: &mut Vec<DrawOp<I>>, blend_mode: Option<BlendMode>, alpha: f64) {
    if let Some(mode) = blend_mode {
        ops.push(DrawOp::SetBlendMode(mode));
    }
    ops.push(DrawOp::SetAlpha(alpha));
}
