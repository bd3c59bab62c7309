//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation in the
//! [Lagrange basis](https://en.wikipedia.org/wiki/Lagrange_polynomial).
//!
//! Node values are sampled once on construction. Each evaluation forms
//! all `n` basis polynomials from scratch, O(n²) per query point.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::{finite_or_err, sample_nodes, Interpolator};


/// Lagrange interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LagrangeCfg::new`] then optional setters.
///
/// # Defaults
/// - Same as [`crate::interpolation::newton::NewtonCfg`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// `L_i(xq) = Π_{j≠i} (xq - x_j) / (x_i - x_j)`
#[inline]
fn basis_value(x: &[f64], i: usize, xq: f64) -> Result<f64, InterpolationError> {
    let mut l = 1.0;
    for (j, &xj) in x.iter().enumerate() {
        if j == i {
            continue;
        }
        let denom = x[i] - xj;
        if denom == 0.0 {
            return Err(InterpolationError::DuplicateNode { i, j, x: xj });
        }
        l *= (xq - xj) / denom;
    }
    Ok(l)
}


/// Lagrange-form interpolator over an owned node set and its cached values.
#[derive(Debug, Clone)]
pub struct LagrangeInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LagrangeInterpolator {
    /// Builds the interpolator and caches `y_i = f(x_i)`.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`]        : no nodes configured
    /// - [`InterpolationError::DuplicateX`]        : eager duplicate check failed
    /// - [`InterpolationError::UndefinedFunction`] : `f` non-finite at a node
    pub fn new<F>(cfg: LagrangeCfg, f: F) -> Result<Self, InterpolationError>
    where
        F: Fn(f64) -> f64,
    {
        cfg.common.validate()?;
        let x = cfg.common.x().to_vec();
        let y = sample_nodes(&x, f)?;
        Ok(Self { x, y })
    }

    /// Shorthand for [`LagrangeInterpolator::new`] with default settings.
    pub fn from_nodes<F>(x: &[f64], f: F) -> Result<Self, InterpolationError>
    where
        F: Fn(f64) -> f64,
    {
        Self::new(LagrangeCfg::new().set_x(x)?, f)
    }

    pub fn nodes(&self) -> &[f64] { &self.x }
    pub fn values(&self) -> &[f64] { &self.y }

    /// Basis polynomial `L_i` at `xq`: 1 at `x_i`, 0 at every other node.
    ///
    /// # Errors
    /// - [`InterpolationError::IndexOutOfRange`] : `i` past the node count
    /// - [`InterpolationError::DuplicateNode`]   : `x_i` coincides with another node
    pub fn basis(&self, i: usize, xq: f64) -> Result<f64, InterpolationError> {
        if i >= self.x.len() {
            return Err(InterpolationError::IndexOutOfRange { idx: i, len: self.x.len() });
        }
        basis_value(&self.x, i, xq)
    }

    /// Returns the polynomial `P(x) = Σ y_i L_i(x)` bound to this node set.
    pub fn calculate(&self) -> LagrangePolynomial<'_> {
        LagrangePolynomial { x: &self.x, y: &self.y }
    }
}


/// Lagrange-form polynomial borrowing its interpolator's nodes and values.
#[derive(Debug, Clone, Copy)]
pub struct LagrangePolynomial<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> LagrangePolynomial<'a> {
    pub fn nodes(&self) -> &'a [f64] { self.x }
    pub fn values(&self) -> &'a [f64] { self.y }
    pub fn degree(&self) -> usize { self.x.len() - 1 }
}

impl Interpolator for LagrangePolynomial<'_> {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let mut p = 0.0;
        for (i, &yi) in self.y.iter().enumerate() {
            p += yi * basis_value(self.x, i, xq)?;
        }

        finite_or_err(xq, p)
    }
}


/// Performs Lagrange interpolation.
///
/// # Behavior
/// - Samples `f` at every node in `cfg.common.x()`.
/// - Evaluates `Σ y_i L_i(xq)` at every point in `cfg.common.x_eval()`.
///
/// # Returns
/// [`InterpolationReport`] with `algorithm_name` `"lagrange"`.
///
/// # Errors
/// Any error from [`LagrangeInterpolator::new`] or evaluation; under lazy
/// node checking coincident nodes surface as
/// [`InterpolationError::DuplicateNode`] at the first evaluation.
pub fn interpolate<F>(cfg: LagrangeCfg, f: F) -> Result<InterpolationReport, InterpolationError>
where
    F: Fn(f64) -> f64,
{
    let evals = cfg.common.x_eval();

    let interpolator = LagrangeInterpolator::new(cfg, f)?;
    let poly = interpolator.calculate();

    let mut report = InterpolationReport::new(
        Algorithm::Lagrange,
        interpolator.nodes().len(),
        evals.len(),
    );
    for &xq in evals {
        report.evaluated.push(poly.eval(xq)?);
    }

    Ok(report)
}
