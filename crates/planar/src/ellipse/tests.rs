use super::*;
use crate::cfg::CHAIN_CLOSE_EPS;
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

fn close(p: Vector2<f64>, q: Vector2<f64>, eps: f64) -> bool {
    (p - q).norm() <= eps
}

#[test]
fn circle_from_zero_eccentricity() {
    let e = Ellipse::new(vector![0.0, 0.0], 10.0, 0.0, 0.0);
    assert_eq!(e.b(), 10.0);
    assert_eq!(e.linear_eccentricity(), 0.0);
    assert!(e.is_circle());
    let c = e.to_circle().expect("e == 0 is a circle");
    assert_eq!(c.radius(), 10.0);
    assert_eq!(c.center(), vector![0.0, 0.0]);
}

#[test]
fn axes_ten_six_has_foci_at_eight() {
    let e = Ellipse::from_axes(vector![0.0, 0.0], 10.0, 6.0, 0.0);
    assert!((e.e() - 0.8).abs() < 1e-12);
    assert!((e.linear_eccentricity() - 8.0).abs() < 1e-12);
    let (f1, f2) = e.foci();
    assert!(close(f1, vector![-8.0, 0.0], 1e-12));
    assert!(close(f2, vector![8.0, 0.0], 1e-12));
    assert!(e.to_circle().is_none());
}

#[test]
#[should_panic(expected = "semi-major axis shorter")]
fn minor_longer_than_major_panics() {
    let _ = Ellipse::from_axes(vector![0.0, 0.0], 5.0, 10.0, 0.0);
}

#[test]
#[should_panic(expected = "eccentricity must lie in [0, 1]")]
fn eccentricity_above_one_panics() {
    let _ = Ellipse::new(vector![0.0, 0.0], 1.0, 1.5, 0.0);
}

#[test]
#[should_panic(expected = "semi-major axis must be non-negative")]
fn negative_major_axis_panics() {
    let _ = Ellipse::new(vector![0.0, 0.0], -1.0, 0.5, 0.0);
}

#[test]
#[should_panic(expected = "semi-minor axis must be non-negative")]
fn negative_minor_axis_panics() {
    let _ = Ellipse::from_axes(vector![0.0, 0.0], 1.0, -0.5, 0.0);
}

#[test]
fn point_ellipse_has_zero_eccentricity() {
    let e = Ellipse::from_axes(vector![3.0, 4.0], 0.0, 0.0, 0.0);
    assert_eq!(e.e(), 0.0);
    assert_eq!(e.linear_eccentricity(), 0.0);
    let c = e.to_circle().unwrap();
    assert_eq!(c.radius(), 0.0);
    assert_eq!(c.center(), vector![3.0, 4.0]);
}

#[test]
fn degenerate_minor_axis_gives_unit_eccentricity() {
    for a in [2.0, 5.0, 7.0, 10.0, 1e6 + 1.0] {
        let flat = Ellipse::from_axes(vector![0.0, 0.0], a, 0.0, 0.0);
        assert_eq!(flat.e(), 1.0);
        assert_eq!(flat.linear_eccentricity(), a);
        let again = Ellipse::new(vector![0.0, 0.0], a, flat.e(), 0.0);
        assert_eq!(again.b(), 0.0);
        assert_eq!(again.foci(), flat.foci());
    }
}

#[test]
fn focal_distance_is_a_times_e() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let a = rng.gen_range(0.0..50.0);
        let b = rng.gen_range(0.0..=a);
        let from_b = Ellipse::from_axes(vector![0.0, 0.0], a, b, 0.3);
        assert_eq!(from_b.linear_eccentricity(), from_b.a() * from_b.e());
        let from_e = Ellipse::new(vector![0.0, 0.0], a, rng.gen_range(0.0..=1.0), 0.3);
        assert_eq!(from_e.linear_eccentricity(), from_e.a() * from_e.e());
    }
}

#[test]
fn size_constructor_orients_major_axis() {
    let square = Ellipse::from_size(vector![1.0, 1.0], Size2::new(4.0, 4.0));
    assert_eq!(square.e(), 0.0);
    assert_eq!(square.rotation(), 0.0);
    assert!(square.to_circle().is_some());

    let wide = Ellipse::from_size(vector![0.0, 0.0], Size2::new(8.0, 4.0));
    assert_eq!(wide.rotation(), 0.0);
    assert_eq!((wide.a(), wide.b()), (4.0, 2.0));

    let tall = Ellipse::from_size(vector![0.0, 0.0], Size2::new(4.0, 8.0));
    assert_eq!(tall.rotation(), FRAC_PI_2);
    assert_eq!((tall.a(), tall.b()), (4.0, 2.0));
    // Foci of a tall ellipse lie on the y-axis
    let (f1, f2) = tall.foci();
    let fd = tall.linear_eccentricity();
    assert!(close(f1, vector![0.0, -fd], 1e-12));
    assert!(close(f2, vector![0.0, fd], 1e-12));
}

#[test]
fn rect_constructor_uses_mid_and_size() {
    let r = Rect2::new(vector![10.0, 20.0], Size2::new(6.0, 2.0));
    let e = Ellipse::from_rect(r);
    assert_eq!(e.center(), vector![13.0, 21.0]);
    assert_eq!((e.a(), e.b()), (3.0, 1.0));
    assert_eq!(e.rotation(), 0.0);
    assert_eq!(e.unrotated_frame(), r);
    assert_eq!(e.unrotated_size(), Size2::new(6.0, 2.0));
}

#[test]
fn bezier_endpoints_walk_the_axes() {
    let center = vector![1.0, 2.0];
    let (a, b) = (3.0, 2.0);
    let e = Ellipse::from_axes(center, a, b, 0.0);
    let curves = e.to_bezier_curves();
    let expected = [
        vector![0.0, b],
        vector![a, 0.0],
        vector![0.0, -b],
        vector![-a, 0.0],
    ];
    for (k, curve) in curves.iter().enumerate() {
        assert_eq!(curve.start, center + expected[k]);
        assert_eq!(curve.end, center + expected[(k + 1) % 4]);
    }
    assert_eq!(curves[3].end, curves[0].start);
    assert!(e.to_bezier_chain().is_closed(0.0));
}

#[test]
fn bezier_control_points_follow_tangents() {
    let e = Ellipse::from_axes(vector![0.0, 0.0], 10.0, 5.0, 0.0);
    let c = 0.5;
    let [c0, c1, c2, c3] = e.to_bezier_curves_with(c);
    assert_eq!(c0.control1, vector![5.0, 5.0]);
    assert_eq!(c0.control2, vector![10.0, 2.5]);
    assert_eq!(c1.control1, vector![10.0, -2.5]);
    assert_eq!(c1.control2, vector![5.0, -5.0]);
    assert_eq!(c2.control1, vector![-5.0, -5.0]);
    assert_eq!(c2.control2, vector![-10.0, -2.5]);
    assert_eq!(c3.control1, vector![-10.0, 2.5]);
    assert_eq!(c3.control2, vector![-5.0, 5.0]);
}

#[test]
fn default_constant_is_mortensen() {
    let e = Ellipse::from_axes(vector![0.0, 0.0], 1.0, 1.0, 0.0);
    assert_eq!(e.to_bezier_curves(), e.to_bezier_curves_with(0.551915024494));
}

#[test]
fn rotated_curves_start_at_rotated_top() {
    let e = Ellipse::from_axes(vector![1.0, 1.0], 4.0, 2.0, FRAC_PI_2);
    let [c0, ..] = e.to_bezier_curves();
    // (0, b) rotated by 90° is (-b, 0)
    assert!(close(c0.start, vector![-1.0, 1.0], 1e-12));
    assert!(close(c0.end, vector![1.0, 5.0], 1e-12));
    assert!(e.to_bezier_chain().is_closed(CHAIN_CLOSE_EPS));
}

#[test]
fn unrotated_bounding_box_is_axis_box() {
    let e = Ellipse::from_axes(vector![2.0, -1.0], 5.0, 3.0, 0.0);
    let bb = e.bounding_box();
    assert!((bb.min_x() + 3.0).abs() < 1e-12);
    assert!((bb.max_x() - 7.0).abs() < 1e-12);
    assert!((bb.min_y() + 4.0).abs() < 1e-12);
    assert!((bb.max_y() - 2.0).abs() < 1e-12);
    let exact = e.analytic_bounding_box();
    assert!((exact.min_x() - bb.min_x()).abs() < 1e-12);
    assert!((exact.max_y() - bb.max_y()).abs() < 1e-12);
}

#[test]
fn analytic_box_at_45_degrees() {
    let e = Ellipse::from_axes(vector![0.0, 0.0], 2.0, 1.0, FRAC_PI_4);
    let bb = e.analytic_bounding_box();
    let h = 2.5_f64.sqrt();
    assert!((bb.min_x() + h).abs() < 1e-12);
    assert!((bb.max_x() - h).abs() < 1e-12);
    assert!((bb.min_y() + h).abs() < 1e-12);
    assert!((bb.max_y() - h).abs() < 1e-12);
}

#[test]
fn bezier_box_tracks_analytic_box_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let a = rng.gen_range(0.1..100.0);
        let b = rng.gen_range(0.0..=a);
        let rot = rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
        let center = vector![rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)];
        let e = Ellipse::from_axes(center, a, b, rot);
        let approx = e.bounding_box();
        let exact = e.analytic_bounding_box();
        let tol = 1e-3 * a;
        assert!((approx.min_x() - exact.min_x()).abs() < tol);
        assert!((approx.max_x() - exact.max_x()).abs() < tol);
        assert!((approx.min_y() - exact.min_y()).abs() < tol);
        assert!((approx.max_y() - exact.max_y()).abs() < tol);
    }
}

#[test]
fn display_lists_parameters() {
    let e = Ellipse::from_axes(vector![0.0, 0.0], 10.0, 6.0, 0.0);
    let s = e.to_string();
    assert!(s.starts_with("Ellipse(center: (0, 0), a: 10, b: 6, e: 0.8"));
}

proptest! {
    #[test]
    fn eccentricity_round_trips_through_minor_axis(a in 1e-3f64..1e6, e in 0.0f64..=1.0) {
        let from_e = Ellipse::new(vector![0.0, 0.0], a, e, 0.0);
        let from_b = Ellipse::from_axes(vector![0.0, 0.0], a, from_e.b(), 0.0);
        prop_assert!((from_b.e() - e).abs() < 1e-6);
        prop_assert!((from_b.b() - from_e.b()).abs() <= 1e-12 * a);
        prop_assert!(from_b.e() <= 1.0 && from_b.linear_eccentricity() <= from_b.a());
        let again = Ellipse::new(vector![0.0, 0.0], a, from_b.e(), 0.0);
        prop_assert!(again.b() >= 0.0);
    }

    #[test]
    fn circle_iff_zero_eccentricity(a in 0.0f64..1e3, ratio in 0.0f64..=1.0) {
        let ell = Ellipse::from_axes(vector![1.0, -1.0], a, a * ratio, 0.0);
        match ell.to_circle() {
            Some(c) => {
                prop_assert_eq!(ell.e(), 0.0);
                prop_assert_eq!(c.radius(), ell.a());
                prop_assert_eq!(c.radius(), ell.b());
            }
            None => prop_assert!(ell.e() > 0.0),
        }
    }

    #[test]
    fn chain_is_closed_for_any_rotation(
        a in 0.0f64..1e3,
        ratio in 0.0f64..=1.0,
        rot in -10.0f64..10.0,
    ) {
        let ell = Ellipse::from_axes(vector![0.0, 0.0], a, a * ratio, rot);
        let chain = ell.to_bezier_chain();
        prop_assert_eq!(chain.len(), 4);
        prop_assert!(chain.is_closed(CHAIN_CLOSE_EPS * (1.0 + a)));
    }
}
