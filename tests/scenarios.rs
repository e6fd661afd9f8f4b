use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use patchcurve::prelude::*;

fn endpoints(p: [[f64; 3]; 2], n: [[f64; 3]; 2]) -> PatchEndpoints<f64> {
    PatchEndpoints::new(
        [Point3::from(p[0]), Point3::from(p[1])],
        [Vector3::from(n[0]), Vector3::from(n[1])],
    )
}

fn params() -> impl Iterator<Item = f64> {
    (0..=20).map(|i| i as f64 / 20.)
}

#[test]
fn endpoint_reproduction() {
    let cases = [
        endpoints([[0., 0., 0.], [1., 0., 0.]], [[0., 1., 0.], [0., 1., 0.]]),
        endpoints([[0., 0., 0.], [0., 1., 0.]], [[1., -1., 0.], [1., 1., 0.]]),
        endpoints([[1., 0., 0.], [0., 1., 0.]], [[1., 0., 0.], [0., 1., 0.]]),
        endpoints([[-3., 2., 5.], [1., 1., 4.]], [[0., 0., 1.], [0.2, -0.1, 1.]]),
        endpoints([[10., 10., 10.], [10.5, 9., 10.]], [[1., 0.3, 0.7], [0.1, 0.2, 1.]]),
    ];
    for e in cases.iter() {
        let interpolator = PatchInterpolator::new(e);
        let [x0, x1] = e.positions();
        assert_relative_eq!(interpolator.evaluate(e.positions(), 0.), *x0, max_relative = 1e-10);
        assert_relative_eq!(interpolator.evaluate(e.positions(), 1.), *x1, max_relative = 1e-10);
    }
}

#[test]
fn degenerate_fallback() {
    let cases = [
        endpoints([[1., 1., 1.], [1., 1., 1.]], [[0., 1., 0.], [1., 0., 0.]]),
        endpoints([[0., 0., 0.], [1., 0., 0.]], [[0., 0., 0.], [0., 1., 0.]]),
        endpoints([[0., 0., 0.], [1., 0., 0.]], [[0., 1., 0.], [0., 0., 0.]]),
        endpoints([[0., 0., 0.], [1., 0., 0.]], [[0., 0., 0.], [0., 0., 0.]]),
    ];
    for e in cases.iter() {
        let interpolator = PatchInterpolator::new(e);
        assert!(!interpolator.is_valid());
        let [x0, x1] = e.positions();
        for t in params() {
            let p = interpolator.evaluate(e.positions(), t);
            assert!(p.iter().all(|c| c.is_finite()));
            assert_relative_eq!(p, x0 + (x1 - x0) * t, epsilon = 1e-12);
        }
    }
}

#[test]
fn orientation_symmetry() {
    let e = endpoints([[-3., 2., 5.], [1., 1., 4.]], [[0., 0., 1.], [0.4, -0.1, 1.]]);
    let forward = PatchInterpolator::new(&e);
    let r = e.reversed();
    let backward = PatchInterpolator::new(&r);
    for t in params() {
        assert_relative_eq!(
            forward.evaluate(e.positions(), t),
            backward.evaluate(r.positions(), 1. - t),
            epsilon = 1e-10
        );
    }
}

#[test]
fn planar_consistency() {
    let e = endpoints([[0., 0., 0.], [1., 0., 0.]], [[0., 1., 0.], [0., 1., 0.]]);
    let p = PatchInterpolator::new(&e).evaluate(e.positions(), 0.5);
    assert_relative_eq!(p, Point3::new(0.5, 0., 0.), epsilon = 1e-12);
}

#[test]
fn symmetric_quadratic_bump() {
    let e = endpoints([[0., 0., 0.], [0., 1., 0.]], [[1., -1., 0.], [1., 1., 0.]]);
    let interpolator = PatchInterpolator::new(&e);
    for t in [0., 0.2, 0.4, 0.6, 0.8] {
        let p = interpolator.evaluate(e.positions(), t);
        assert!((p - Point3::new(0.25 - (t - 0.5) * (t - 0.5), t, 0.)).norm() < 1e-4);
    }
}

#[test]
fn approximate_arc() {
    let e = endpoints([[1., 0., 0.], [0., 1., 0.]], [[1., 0., 0.], [0., 1., 0.]]);
    let curve = PatchCurve::new(e);
    for t in params() {
        let chord_point = Vector3::new(1. - t, t, 0.);
        let on_arc = Point3::from(chord_point.normalize());
        assert!((curve.point_at(t) - on_arc).norm() < 0.15);
    }
    // a quarter of the unit circle is pi / 2 long
    assert_relative_eq!(
        curve.try_length().unwrap(),
        std::f64::consts::FRAC_PI_2,
        epsilon = 0.1
    );
}
