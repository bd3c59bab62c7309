use crate::interpolation::errors::InterpolationError;

pub trait Interpolator {
    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// absolute interpolation error `|P(x) - f(x)|` against the sampled function
    fn abs_error<F>(&self, f: F, x: f64) -> Result<f64, InterpolationError>
    where
        F: Fn(f64) -> f64,
    {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(InterpolationError::UndefinedFunction { x, fx });
        }
        Ok((self.eval(x)? - fx).abs())
    }
}


/// Samples `f` once per node, failing on the first non-finite value.
pub(crate) fn sample_nodes<F>(x: &[f64], f: F) -> Result<Vec<f64>, InterpolationError>
where
    F: Fn(f64) -> f64,
{
    x.iter()
        .map(|&xi| {
            let fx = f(xi);
            if fx.is_finite() {
                Ok(fx)
            } else {
                Err(InterpolationError::UndefinedFunction { x: xi, fx })
            }
        })
        .collect()
}

/// Checked evaluator output; `p` must be finite for finite `x`.
#[inline]
pub(crate) fn finite_or_err(x: f64, px: f64) -> Result<f64, InterpolationError> {
    if px.is_finite() {
        Ok(px)
    } else {
        Err(InterpolationError::NonFiniteEvaluation { x, px })
    }
}
