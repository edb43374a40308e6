//! Oblique drawing-plane projection.
//!
//! `project(x, y, z) = (cos30° · (y − x), z − sin30° · (x + y))`: an
//! isometric-like view with the x-axis receding towards the viewer's left.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{Point2, Point3};

/// `cos(30°) = √3 / 2`.
pub const COS_30_DEG: f64 = 0.866_025_403_784_438_6;

/// `sin(30°)`.
pub const SIN_30_DEG: f64 = 0.5;

/// Projects a 3D point onto the drawing plane.
#[must_use]
pub fn project(p: &Point3) -> Point2 {
    Point2::new(COS_30_DEG * (p.y - p.x), p.z - SIN_30_DEG * (p.x + p.y))
}

/// Projects a batch of points, preserving order.
#[must_use]
pub fn project_all(points: &[Point3]) -> Vec<Point2> {
    #[cfg(feature = "parallel")]
    {
        points.par_iter().map(project).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        points.iter().map(project).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cos_constant_matches_sqrt3_over_2() {
        assert_relative_eq!(COS_30_DEG, 0.5 * 3.0_f64.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn axes_project_as_expected() {
        let ex = project(&Point3::new(1.0, 0.0, 0.0));
        let ey = project(&Point3::new(0.0, 1.0, 0.0));
        let ez = project(&Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(ex.x, -COS_30_DEG);
        assert_relative_eq!(ex.y, -0.5);
        assert_relative_eq!(ey.x, COS_30_DEG);
        assert_relative_eq!(ey.y, -0.5);
        assert_relative_eq!(ez.x, 0.0);
        assert_relative_eq!(ez.y, 1.0);
    }

    #[test]
    fn projection_is_linear() {
        let p = Point3::new(1.5, -2.0, 3.25);
        let q = Point3::new(-4.0, 0.5, 7.0);
        let (a, b) = (2.5, -0.75);

        let combined = Point3::from(p.coords * a + q.coords * b);
        let lhs = project(&combined);
        let rhs = project(&p).coords * a + project(&q).coords * b;

        assert_relative_eq!(lhs.x, rhs.x, epsilon = 1e-12);
        assert_relative_eq!(lhs.y, rhs.y, epsilon = 1e-12);
    }

    #[test]
    fn batch_preserves_order() {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-1.0, 4.0, 0.5),
        ];
        let projected = project_all(&pts);
        assert_eq!(projected.len(), pts.len());
        for (pt, xy) in pts.iter().zip(&projected) {
            assert_eq!(project(pt), *xy);
        }
    }

    #[test]
    fn empty_batch() {
        assert!(project_all(&[]).is_empty());
    }
}
