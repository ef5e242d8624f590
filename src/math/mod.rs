/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns the arithmetic mean of a set of points.
///
/// An empty slice yields the origin.
#[must_use]
pub fn centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Point3::from(sum / n)
}

/// Moves `from` toward `to` by the fraction `t` of the distance between them.
///
/// `t = 0` returns `from`, `t = 1` returns `to`.
#[must_use]
pub fn lerp(from: &Point3, to: &Point3, t: f64) -> Point3 {
    from + (to - from) * t
}

/// Returns `true` if two points coincide within [`TOLERANCE`].
#[must_use]
pub fn coincident(a: &Point3, b: &Point3) -> bool {
    (a - b).norm() < TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centroid_of_unit_square() {
        let c = centroid(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]);
        assert_relative_eq!(c, Point3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn centroid_of_nothing_is_origin() {
        assert_relative_eq!(centroid(&[]), Point3::origin());
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 4.0, -2.0);
        assert_relative_eq!(lerp(&a, &b, 0.0), a);
        assert_relative_eq!(lerp(&a, &b, 1.0), b);
        assert_relative_eq!(lerp(&a, &b, 0.5), Point3::new(1.0, 2.0, -1.0));
    }

    #[test]
    fn coincidence_uses_tolerance() {
        let a = Point3::new(1.0, 1.0, 1.0);
        assert!(coincident(&a, &Point3::new(1.0, 1.0, 1.0 + 1e-12)));
        assert!(!coincident(&a, &Point3::new(1.0, 1.0, 1.001)));
    }
}
