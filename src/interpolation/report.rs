//! Defines the struct returned by all interpolation algorithms.
//!
//! Defines the [`InterpolationReport`] struct returned by the batch
//! `interpolate` entry points.
//!
//! This report summarizes key metadata about the interpolation process,
//! including the algorithm used, number of nodes and evaluation points,
//! the polynomial degree and the results of evaluating the interpolant.

use serde::Serialize;

use crate::interpolation::algorithms::Algorithm;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm`      : [`Algorithm`] variant, serialized as its name
/// - `algorithm_name` : name of the interpolation method (e.g. `"newton"`)
/// - `n_provided`     : number of interpolation nodes
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `degree`         : degree bound of the polynomial, `n_provided - 1`
/// - `evaluated`      : interpolated values at each evaluation point
#[derive(Debug, Clone, Serialize)]
pub struct InterpolationReport {
    pub algorithm: Algorithm,
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub degree: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm,
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            degree: n_provided.saturating_sub(1),
            evaluated: Vec::with_capacity(n_evaluated),
        }
    }
}
