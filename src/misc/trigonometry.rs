use nalgebra::Point3;

use super::FloatingPoint;

/// Checks whether `p2` lies within `tolerance` of the segment line through `p1` and `p3`.
pub fn three_points_are_flat<T: FloatingPoint>(
    p1: &Point3<T>,
    p2: &Point3<T>,
    p3: &Point3<T>,
    tolerance: T,
) -> bool {
    let p31 = p3 - p1;
    let p21 = p2 - p1;
    let l = p31.norm();
    if l <= T::default_epsilon() {
        return p21.norm() < tolerance;
    }
    // distance from p2 to the line = |p21 x p31| / |p31|
    p21.cross(&p31).norm() / l < tolerance
}

#[cfg(test)]
mod tests {
    use nalgebra::Point3;

    use super::three_points_are_flat;

    #[test]
    fn flatness() {
        let a = Point3::new(0., 0., 0.);
        let c = Point3::new(2., 0., 0.);
        assert!(three_points_are_flat(&a, &Point3::new(1., 1e-6, 0.), &c, 1e-4));
        assert!(!three_points_are_flat(&a, &Point3::new(1., 0., 0.1), &c, 1e-4));
        assert!(three_points_are_flat(&a, &Point3::new(0., 0., 0.), &a, 1e-4));
    }
}
