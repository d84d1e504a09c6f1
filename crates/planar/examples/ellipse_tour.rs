//! Walk through the ellipse API on a tall 60×100 frame.
//!
//! Prints the derived parameters, foci, both bounding boxes, and the four
//! quarter-arc curves, then clips a fake image to the ellipse.

use nalgebra::vector;
use planar::imaging::{clipped_to, Backend, DrawOp};
use planar::{Ellipse, Rect2, Size2};

/// Backend that only reports what it was asked to draw.
struct Printer;

impl Backend for Printer {
    type Image = Size2;

    fn image_size(&self, image: &Size2) -> Size2 {
        *image
    }

    fn render(&mut self, size: Size2, ops: &[DrawOp<Size2>]) -> Size2 {
        println!("render {}x{} with {} ops", size.width, size.height, ops.len());
        size
    }
}

fn main() {
    let frame = Rect2::new(vector![0.0, 0.0], Size2::new(60.0, 100.0));
    let ellipse = Ellipse::from_rect(frame);
    println!("{ellipse}");

    let (f1, f2) = ellipse.foci();
    println!("foci: ({:.3}, {:.3}) ({:.3}, {:.3})", f1.x, f1.y, f2.x, f2.y);

    let approx = ellipse.bounding_box();
    let exact = ellipse.analytic_bounding_box();
    println!(
        "bbox bezier: [{:.4}, {:.4}] x [{:.4}, {:.4}]",
        approx.min_x(),
        approx.max_x(),
        approx.min_y(),
        approx.max_y()
    );
    println!(
        "bbox exact:  [{:.4}, {:.4}] x [{:.4}, {:.4}]",
        exact.min_x(),
        exact.max_x(),
        exact.min_y(),
        exact.max_y()
    );

    for (k, c) in ellipse.to_bezier_curves().iter().enumerate() {
        println!(
            "curve {k}: ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            c.start.x, c.start.y, c.end.x, c.end.y
        );
    }

    let mut backend = Printer;
    let _ = clipped_to(&mut backend, &frame.size, ellipse);
}
