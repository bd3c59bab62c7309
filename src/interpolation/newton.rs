//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Divided differences are built bottom-up in a triangular table
//! (O(k²) for a k-node subset) instead of the textbook recursion, which
//! recomputes shared sub-results and grows as O(2^k). The resulting
//! polynomial is evaluated using Horner's scheme.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::{finite_or_err, sample_nodes, Interpolator};


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - Minimum allowed spacing between any two nodes;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
/// - Duplicate nodes rejected eagerly
///   ([`crate::interpolation::config::NodeCheck::Eager`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Runs the divided-difference recurrence over the node tuple `idx`.
///
/// On return `c[m] = D(idx[0], ..., idx[m])`, so `c[k]` is the divided
/// difference over the whole tuple and `c` is the Newton coefficient vector
/// when `idx = 0..n`. Level `j` overwrites `c[m]` with
///
/// ```text
/// D(idx[m-j..=m]) = (D(idx[m-j..m]) - D(idx[m-j+1..=m])) / (x[idx[m-j]] - x[idx[m]])
/// ```
///
/// walking `m` downwards so `c[m - 1]` still holds the level `j - 1` value.
fn divided_difference_table(
    x: &[f64],
    y: &[f64],
    idx: &[usize],
) -> Result<Vec<f64>, InterpolationError> {
    let k = idx.len();
    let mut c: Vec<f64> = idx.iter().map(|&i| y[i]).collect();

    for j in 1..k {
        for m in (j..k).rev() {
            let (first, last) = (idx[m - j], idx[m]);
            let denom = x[first] - x[last];
            if denom == 0.0 {
                return Err(InterpolationError::DuplicateNode { i: first, j: last, x: x[first] });
            }
            c[m] = (c[m - 1] - c[m]) / denom;
        }
    }

    Ok(c)
}


/// Newton-form interpolator over an owned node set.
///
/// Samples the function once per node on construction; the polynomial
/// itself is produced by [`NewtonInterpolator::calculate`].
#[derive(Debug, Clone)]
pub struct NewtonInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl NewtonInterpolator {
    /// Builds the interpolator from a validated config and sample function.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`]        : no nodes configured
    /// - [`InterpolationError::DuplicateX`]        : eager duplicate check failed
    /// - [`InterpolationError::UndefinedFunction`] : `f` non-finite at a node
    pub fn new<F>(cfg: NewtonCfg, f: F) -> Result<Self, InterpolationError>
    where
        F: Fn(f64) -> f64,
    {
        cfg.common.validate()?;
        let x = cfg.common.x().to_vec();
        let y = sample_nodes(&x, f)?;
        Ok(Self { x, y })
    }

    /// Shorthand for [`NewtonInterpolator::new`] with default settings.
    pub fn from_nodes<F>(x: &[f64], f: F) -> Result<Self, InterpolationError>
    where
        F: Fn(f64) -> f64,
    {
        Self::new(NewtonCfg::new().set_x(x)?, f)
    }

    pub fn nodes(&self) -> &[f64] { &self.x }
    pub fn values(&self) -> &[f64] { &self.y }

    /// Divided difference `D(i_0, ..., i_k)` over an ordered tuple of
    /// node indices. A single index yields the sampled value `f(x[i])`.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`]      : `indices` is empty
    /// - [`InterpolationError::IndexOutOfRange`] : index past the node count
    /// - [`InterpolationError::DuplicateNode`]   : two referenced nodes coincide
    pub fn divided_difference(&self, indices: &[usize]) -> Result<f64, InterpolationError> {
        let len = self.x.len();
        if indices.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(&idx) = indices.iter().find(|&&i| i >= len) {
            return Err(InterpolationError::IndexOutOfRange { idx, len });
        }

        let table = divided_difference_table(&self.x, &self.y, indices)?;
        Ok(table[table.len() - 1])
    }

    /// Computes the Newton coefficients `D(x_0), D(x_0, x_1), ...,
    /// D(x_0, ..., x_n)` and returns the polynomial bound to this node set.
    ///
    /// # Errors
    /// - [`InterpolationError::DuplicateNode`] : coincident nodes reached the
    ///   recurrence (only possible under lazy node checking)
    pub fn calculate(&self) -> Result<NewtonPolynomial<'_>, InterpolationError> {
        let idx: Vec<usize> = (0..self.x.len()).collect();
        let coeffs = divided_difference_table(&self.x, &self.y, &idx)?;
        Ok(NewtonPolynomial { x: &self.x, coeffs })
    }
}


/// Newton-form polynomial
///
/// ```text
/// P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})
/// ```
#[derive(Debug, Clone)]
pub struct NewtonPolynomial<'a> {
    x: &'a [f64],
    coeffs: Vec<f64>,
}

impl<'a> NewtonPolynomial<'a> {
    pub fn coefficients(&self) -> &[f64] { &self.coeffs }
    pub fn nodes(&self) -> &'a [f64] { self.x }

    /// Degree bound `n - 1`; the expanded polynomial may be of lower degree.
    pub fn degree(&self) -> usize { self.coeffs.len() - 1 }
}

impl Interpolator for NewtonPolynomial<'_> {
    /// Horner's nested form
    ///
    /// ```text
    /// P(xq) = c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[n-1] ... ] ]
    /// ```
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let n = self.coeffs.len();

        let mut p = self.coeffs[n - 1];
        for j in (0..n - 1).rev() {
            p = self.coeffs[j] + (xq - self.x[j]) * p;
        }

        finite_or_err(xq, p)
    }
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Samples `f` at every node in `cfg.common.x()`.
/// - Constructs the divided-difference table to obtain coefficients `c[i]`.
/// - Evaluates the polynomial at every point in `cfg.common.x_eval()`;
///   points outside the node range are extrapolated.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton"`
/// - `n_provided`     : number of nodes
/// - `n_evaluated`    : number of evaluation points
/// - `degree`         : `n_provided - 1`
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// Any error from [`NewtonInterpolator::new`], [`NewtonInterpolator::calculate`]
/// or evaluation.
pub fn interpolate<F>(cfg: NewtonCfg, f: F) -> Result<InterpolationReport, InterpolationError>
where
    F: Fn(f64) -> f64,
{
    let evals = cfg.common.x_eval();

    let interpolator = NewtonInterpolator::new(cfg, f)?;
    let poly = interpolator.calculate()?;

    let mut report = InterpolationReport::new(
        Algorithm::Newton,
        interpolator.nodes().len(),
        evals.len(),
    );
    for &xq in evals {
        report.evaluated.push(poly.eval(xq)?);
    }

    Ok(report)
}
