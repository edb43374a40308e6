pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod projection;

/// 2D point type (parameter space `(u, v)` and drawing plane).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Every boolean operation of one figure uses this single value.
pub const TOLERANCE: f64 = 1e-9;

/// Returns `true` if two 2D points coincide within [`TOLERANCE`].
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a - b).norm_squared() < TOLERANCE * TOLERANCE
}

/// 2D cross product (z-component of the 3D cross product).
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns `num` evenly spaced values over `[start, end]`, both ends
/// included.
#[must_use]
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (num - 1) as f64;
            (0..num)
                .map(|i| {
                    if i == num - 1 {
                        end
                    } else {
                        #[allow(clippy::cast_precision_loss)]
                        let k = i as f64;
                        start + step * k
                    }
                })
                .collect()
        }
    }
}
