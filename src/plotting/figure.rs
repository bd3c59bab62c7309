//! Named functions and their sampled curves.

use serde::Serialize;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::traits::Interpolator;
use crate::plotting::errors::PlotError;

/// Evenly spaced samples per curve unless a plotter is told otherwise.
pub const DEFAULT_SAMPLES: usize = 100;


/// A labeled scalar function handed to a [`crate::plotting::Plotter`].
///
/// Raw functions are checked for finiteness at every sample; interpolating
/// polynomials report their own errors.
pub struct NamedFunction<'a> {
    name: String,
    func: Box<dyn Fn(f64) -> Result<f64, InterpolationError> + 'a>,
}

impl<'a> NamedFunction<'a> {
    pub fn from_fn<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(f64) -> f64 + 'a,
    {
        Self {
            name: name.into(),
            func: Box::new(move |x| {
                let fx = f(x);
                if fx.is_finite() {
                    Ok(fx)
                } else {
                    Err(InterpolationError::UndefinedFunction { x, fx })
                }
            }),
        }
    }

    pub fn from_interpolator<I>(name: impl Into<String>, poly: &'a I) -> Self
    where
        I: Interpolator,
    {
        Self {
            name: name.into(),
            func: Box::new(move |x| poly.eval(x)),
        }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn call(&self, x: f64) -> Result<f64, InterpolationError> {
        (self.func)(x)
    }
}

impl std::fmt::Debug for NamedFunction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedFunction").field("name", &self.name).finish_non_exhaustive()
    }
}


#[derive(Debug, Clone, Serialize)]
pub struct Curve {
    pub label: String,
    pub y: Vec<f64>,
}

/// Every curve sampled on the shared abscissa `x`.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub min_x: f64,
    pub max_x: f64,
    pub x: Vec<f64>,
    pub curves: Vec<Curve>,
}

/// `n` evenly spaced points over `[min_x, max_x]`, both endpoints included.
///
/// `n = 0` yields no points and `n = 1` yields `[min_x]`. Points are blended
/// as `min_x * (1 - t) + max_x * t`, which stays finite even when
/// `max_x - min_x` overflows.
pub fn linspace(min_x: f64, max_x: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min_x],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let t = i as f64 / last;
                    min_x * (1.0 - t) + max_x * t
                })
                .collect()
        }
    }
}

impl Figure {
    /// Samples each function at `n_samples` evenly spaced points.
    ///
    /// # Errors
    /// - [`PlotError::InvalidDomain`] : non-finite bounds or span, or `min_x >= max_x`
    /// - [`PlotError::TooFewSamples`] : `n_samples < 2`
    /// - [`PlotError::Sample`]        : a function failed at some sample point
    pub fn sample(
        min_x: f64,
        max_x: f64,
        n_samples: usize,
        functions: &[NamedFunction<'_>],
    ) -> Result<Self, PlotError> {
        if !(max_x - min_x).is_finite() || min_x >= max_x {
            return Err(PlotError::InvalidDomain { min_x, max_x });
        }
        if n_samples < 2 {
            return Err(PlotError::TooFewSamples { got: n_samples });
        }

        let x = linspace(min_x, max_x, n_samples);
        let mut curves = Vec::with_capacity(functions.len());
        for func in functions {
            let y = x
                .iter()
                .map(|&xi| func.call(xi))
                .collect::<Result<Vec<f64>, _>>()
                .map_err(|source| PlotError::Sample { name: func.name().to_string(), source })?;
            curves.push(Curve { label: func.name().to_string(), y });
        }

        Ok(Self { min_x, max_x, x, curves })
    }

    /// Smallest and largest sampled value across all curves.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.curves
            .iter()
            .flat_map(|c| c.y.iter().copied())
            .fold(None, |acc, y| match acc {
                None             => Some((y, y)),
                Some((lo, hi))   => Some((lo.min(y), hi.max(y))),
            })
    }
}
