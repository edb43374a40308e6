use crate::error::{GeometryError, OperationError, Result};
use crate::math::{linspace, Point2, TOLERANCE};

/// A strictly increasing sequence of parameter samples along one axis.
///
/// The first and last samples are the axis bounds; the spacing sets the
/// resolution of every curve built along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledAxis {
    values: Vec<f64>,
}

impl SampledAxis {
    /// Wraps explicit sample values.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if there are fewer than two
    /// samples, a sample is not finite, or the samples are not strictly
    /// increasing.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.len() < 2 {
            return Err(OperationError::InvalidInput(format!(
                "an axis needs at least 2 samples, got {}",
                values.len()
            ))
            .into());
        }
        if values.iter().any(|x| !x.is_finite()) {
            return Err(OperationError::InvalidInput("axis samples must be finite".into()).into());
        }
        if let Some(w) = values.windows(2).find(|w| w[1] <= w[0]) {
            return Err(OperationError::InvalidInput(format!(
                "axis samples must be strictly increasing ({} then {})",
                w[0], w[1]
            ))
            .into());
        }
        Ok(Self { values })
    }

    /// `num` evenly spaced samples over `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `num < 2` or `min >= max`.
    pub fn uniform(min: f64, max: f64, num: usize) -> Result<Self> {
        Self::new(linspace(min, max, num))
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.values[0]
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Returns `true` if `x` lies within the axis bounds (inclusive, with
    /// tolerance).
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min() - TOLERANCE && x <= self.max() + TOLERANCE
    }

    /// The samples with `x` merged in: a sample within tolerance of `x` is
    /// replaced by `x`, otherwise `x` is inserted in order.
    #[must_use]
    pub fn with_value(&self, x: f64) -> Vec<f64> {
        let mut values = self.values.clone();
        if let Some(v) = values.iter_mut().find(|v| (**v - x).abs() < TOLERANCE) {
            *v = x;
            return values;
        }
        let at = values.partition_point(|&v| v < x);
        values.insert(at, x);
        values
    }
}

/// The rectangular parameter domain `[u_min, u_max] × [v_min, v_max]`,
/// sampled along both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledDomain {
    pub u: SampledAxis,
    pub v: SampledAxis,
}

impl SampledDomain {
    #[must_use]
    pub fn new(u: SampledAxis, v: SampledAxis) -> Self {
        Self { u, v }
    }

    /// Evenly sampled domain.
    ///
    /// # Errors
    ///
    /// Returns an error if either axis is invalid.
    pub fn uniform(
        (u_min, u_max): (f64, f64),
        (v_min, v_max): (f64, f64),
        (u_samples, v_samples): (usize, usize),
    ) -> Result<Self> {
        Ok(Self {
            u: SampledAxis::uniform(u_min, u_max, u_samples)?,
            v: SampledAxis::uniform(v_min, v_max, v_samples)?,
        })
    }

    /// Returns `true` if the point lies in the closed rectangle.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        self.u.contains(p.x) && self.v.contains(p.y)
    }

    /// The four corners, counter-clockwise from `(u_min, v_min)`.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.u.min(), self.v.min()),
            Point2::new(self.u.max(), self.v.min()),
            Point2::new(self.u.max(), self.v.max()),
            Point2::new(self.u.min(), self.v.max()),
        ]
    }
}

/// The two axis-aligned cut lines `u = u_cut` and `v = v_cut`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutValues {
    pub u_cut: f64,
    pub v_cut: f64,
}

impl CutValues {
    #[must_use]
    pub fn new(u_cut: f64, v_cut: f64) -> Self {
        Self { u_cut, v_cut }
    }

    /// Checks `u_min ≤ u_cut ≤ u_max` and `v_min ≤ v_cut ≤ v_max`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` naming the offending cut.
    pub fn validate(&self, domain: &SampledDomain) -> Result<()> {
        for (parameter, value, axis) in [
            ("u_cut", self.u_cut, &domain.u),
            ("v_cut", self.v_cut, &domain.v),
        ] {
            if !value.is_finite() || !axis.contains(value) {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: axis.min(),
                    max: axis.max(),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CutawayError;

    #[test]
    fn axis_rejects_bad_samples() {
        assert!(SampledAxis::new(vec![1.0]).is_err());
        assert!(SampledAxis::new(vec![0.0, 1.0, 1.0]).is_err());
        assert!(SampledAxis::new(vec![0.0, 2.0, 1.0]).is_err());
        assert!(SampledAxis::new(vec![0.0, f64::NAN]).is_err());
        assert!(SampledAxis::uniform(1.0, 1.0, 5).is_err());
    }

    #[test]
    fn uniform_axis_bounds() {
        let axis = SampledAxis::uniform(-15.0, 15.0, 51).unwrap();
        assert_eq!(axis.values().len(), 51);
        assert_eq!(axis.min(), -15.0);
        assert_eq!(axis.max(), 15.0);
        assert!(axis.contains(15.0));
        assert!(!axis.contains(15.1));
    }

    #[test]
    fn cut_value_is_merged_or_inserted() {
        let axis = SampledAxis::new(vec![0.0, 1.0, 2.0]).unwrap();
        assert_eq!(axis.with_value(1.0 + 1e-12), vec![0.0, 1.0 + 1e-12, 2.0]);
        assert_eq!(axis.with_value(0.5), vec![0.0, 0.5, 1.0, 2.0]);
        assert_eq!(axis.with_value(2.0), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn cut_outside_domain_is_rejected() {
        let domain = SampledDomain::uniform((-15.0, 15.0), (-20.0, 20.0), (51, 51)).unwrap();
        assert!(CutValues::new(0.0, 0.0).validate(&domain).is_ok());
        assert!(CutValues::new(-15.0, 20.0).validate(&domain).is_ok());
        let err = CutValues::new(16.0, 0.0).validate(&domain).unwrap_err();
        assert!(matches!(
            err,
            CutawayError::Geometry(GeometryError::ParameterOutOfRange {
                parameter: "u_cut",
                ..
            })
        ));
        assert!(CutValues::new(0.0, f64::NAN).validate(&domain).is_err());
    }
}
