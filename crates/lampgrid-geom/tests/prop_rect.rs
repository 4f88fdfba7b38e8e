use lampgrid_geom::{Point, Rect};
use proptest::num::f64::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn approx_abs_rel(a: f64, b: f64, atol: f64, rtol: f64) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= atol + rtol * scale
}
fn papprox_abs_rel(a: Point, b: Point, atol: f64, rtol: f64) -> bool {
    approx_abs_rel(a.x, b.x, atol, rtol) && approx_abs_rel(a.y, b.y, atol, rtol)
}

fn bounded_f64() -> impl Strategy<Value = f64> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e6)
}
fn arb_point() -> impl Strategy<Value = Point> {
    (bounded_f64(), bounded_f64()).prop_map(|(x, y)| Point::new(x, y))
}
fn arb_rect() -> impl Strategy<Value = Rect> {
    (arb_point(), arb_point()).prop_map(|(a, b)| Rect::new(a.min(b), a.max(b)))
}

proptest! {
    // Center translates with the rectangle
    #[test]
    fn center_translation(r in arb_rect(), t in arb_point()) {
        let moved = r.translated(t);
        prop_assert!(papprox_abs_rel(moved.center(), r.center() + t, 1e-9, 1e-9));
    }

    // Translation keeps extents
    #[test]
    fn translation_keeps_extents(r in arb_rect(), t in arb_point()) {
        let moved = r.translated(t);
        prop_assert!(approx_abs_rel(moved.width(), r.width(), 1e-6, 1e-9));
        prop_assert!(approx_abs_rel(moved.height(), r.height(), 1e-6, 1e-9));
    }

    // Corners and center of an ordered rectangle are inside it
    #[test]
    fn contains_corners_and_center(r in arb_rect()) {
        prop_assert!(r.contains(r.min));
        prop_assert!(r.contains(r.max));
        prop_assert!(r.contains(r.center()));
    }

    // Union is commutative
    #[test]
    fn union_commutes(a in arb_rect(), b in arb_rect()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }
}
