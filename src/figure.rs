//! Figure presets: the parameters of one cut-away illustration and the
//! pipeline that turns them into drawable outlines.

use tracing::debug;

use crate::drawing::Outlines;
use crate::error::Result;
use crate::geometry::curve::{ClosedCurve, Ellipse};
use crate::geometry::shell::{default_shell, MidSurfaceKind, Shell, Thickness};
use crate::math::linspace;
use crate::operations::boundary::{CutValues, OuterBoundary, SampledDomain};
use crate::operations::visibility::{VisibilityResolver, VisibilitySet};

/// Sample counts along `u`, `v` and the sub-region curve parameter `t`.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    pub u_samples: usize,
    pub v_samples: usize,
    pub t_samples: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            u_samples: 51,
            v_samples: 51,
            t_samples: 51,
        }
    }
}

/// Parameters of a cut-away figure with an elliptic sub-region.
#[derive(Debug, Clone, Copy)]
pub struct FigureConfig {
    pub u_range: (f64, f64),
    pub v_range: (f64, f64),
    pub cut: CutValues,
    /// Semi-axes of the sub-region ellipse, centered at the origin.
    pub semi_axes: (f64, f64),
    pub sampling: SamplingParams,
    pub mid_surface: MidSurfaceKind,
    pub thickness: Thickness,
}

impl Default for FigureConfig {
    /// Domain `[-15, 15] × [-20, 20]` cut at the origin, ellipse `(7, 10)`,
    /// flat plate of variable thickness.
    fn default() -> Self {
        Self {
            u_range: (-15.0, 15.0),
            v_range: (-20.0, 20.0),
            cut: CutValues::new(0.0, 0.0),
            semi_axes: (7.0, 10.0),
            sampling: SamplingParams::default(),
            mid_surface: MidSurfaceKind::Plate,
            thickness: Thickness::Variable,
        }
    }
}

/// A shell together with the resolved cut-away geometry in its parameter
/// space.
#[derive(Debug)]
pub struct CutawayFigure {
    shell: Shell,
    resolver: VisibilityResolver,
}

impl CutawayFigure {
    /// Builds a figure from explicit parts.
    #[must_use]
    pub fn new(shell: Shell, resolver: VisibilityResolver) -> Self {
        Self { shell, resolver }
    }

    /// Builds the preset shell, domain, cut and elliptic sub-region.
    ///
    /// # Errors
    ///
    /// Returns an error if the sampling is too coarse, the cut lies outside
    /// the domain, or the ellipse is degenerate or leaves the domain.
    pub fn from_config(config: &FigureConfig) -> Result<Self> {
        let sampling = config.sampling;
        let domain = SampledDomain::uniform(
            config.u_range,
            config.v_range,
            (sampling.u_samples, sampling.v_samples),
        )?;
        let boundary = OuterBoundary::new(domain, config.cut)?;
        let ellipse = Ellipse::new(config.semi_axes.0, config.semi_axes.1)?;
        let t = linspace(0.0, ellipse.period(), sampling.t_samples);
        let resolver = VisibilityResolver::from_curve(boundary, &ellipse, &t)?;
        debug!(
            u_samples = sampling.u_samples,
            v_samples = sampling.v_samples,
            t_samples = sampling.t_samples,
            "built cut-away figure"
        );
        Ok(Self::new(default_shell(config.mid_surface, config.thickness), resolver))
    }

    #[must_use]
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    #[must_use]
    pub fn resolver(&self) -> &VisibilityResolver {
        &self.resolver
    }

    /// Resolves visibility in parameter space.
    ///
    /// # Errors
    ///
    /// See [`VisibilityResolver::resolve`].
    pub fn visibility(&self) -> Result<VisibilitySet> {
        self.resolver.resolve()
    }

    /// Resolves visibility and projects every output through the shell.
    ///
    /// # Errors
    ///
    /// Returns an error if visibility cannot be resolved or the shell cannot
    /// be evaluated along a curve.
    pub fn outlines(&self) -> Result<Outlines> {
        Outlines::build(&self.shell, &self.visibility()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::drawing::PathRecorder;

    #[test]
    fn default_figure_builds() {
        let figure = CutawayFigure::from_config(&FigureConfig::default()).unwrap();
        let outlines = figure.outlines().unwrap();
        assert_eq!(outlines.outer_upper_faces.len(), 1);
        assert_eq!(outlines.sub_lateral_faces.len(), 1);
        assert_eq!(outlines.outer_fibers.len(), 4);

        let mut rec = PathRecorder::new();
        outlines.emit(&mut rec);
        assert!(rec.subpath_count() > 10);
    }

    #[test]
    fn saddle_figure_builds() {
        let config = FigureConfig {
            mid_surface: MidSurfaceKind::Saddle,
            thickness: Thickness::Constant,
            ..FigureConfig::default()
        };
        assert!(CutawayFigure::from_config(&config).unwrap().outlines().is_ok());
    }

    #[test]
    fn bad_configs_are_rejected() {
        let coarse = FigureConfig {
            sampling: SamplingParams {
                u_samples: 1,
                ..SamplingParams::default()
            },
            ..FigureConfig::default()
        };
        assert!(CutawayFigure::from_config(&coarse).is_err());

        let off_domain = FigureConfig {
            cut: CutValues::new(0.0, 30.0),
            ..FigureConfig::default()
        };
        assert!(CutawayFigure::from_config(&off_domain).is_err());

        let too_big = FigureConfig {
            semi_axes: (16.0, 10.0),
            ..FigureConfig::default()
        };
        assert!(CutawayFigure::from_config(&too_big).is_err());
    }
}
