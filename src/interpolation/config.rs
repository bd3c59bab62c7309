//! Shared configuration for interpolation algorithms.
//!
//! Provides [`CommonCfg`] with the default minimum allowed spacing between
//! nodes; [`DEFAULT_X_TOL`]. Shared by all interpolation algorithms.
//!
//! [`CommonCfg`] universal fields:
//! - `x`          : interpolation nodes, any order
//! - `x_eval`     : x values to evaluate in a batch run
//! - `x_tol`      : minimum spacing between any two nodes
//! - `node_check` : when duplicate nodes are detected ([`NodeCheck`])
//!
//! [`CommonCfg::new`] initializes configuration with empty slices.

use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;


/// When coincident nodes are reported.
///
/// - [`NodeCheck::Eager`] : pairwise spacing check on construction,
///   fails with [`InterpolationError::DuplicateX`]
/// - [`NodeCheck::Lazy`]  : no up-front check; the first divided difference
///   or basis product dividing by `x_i - x_j == 0` fails with
///   [`InterpolationError::DuplicateNode`]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum NodeCheck {
    #[default]
    Eager,
    Lazy,
}


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
    pub(crate) node_check: NodeCheck,
}

impl<'a> Default for CommonCfg<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
            node_check: NodeCheck::Eager,
        }
    }

    /// Checks the node set before an interpolator is built.
    ///
    /// Runs the O(n²) pairwise spacing check only under [`NodeCheck::Eager`];
    /// nodes are not required to be sorted.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;

        if x.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if self.node_check == NodeCheck::Lazy {
            return Ok(());
        }
        for i in 0..x.len() {
            for j in (i + 1)..x.len() {
                if (x[i] - x[j]).abs() < self.x_min_spacing {
                    return Err(InterpolationError::DuplicateX { x1: x[i], x2: x[j] });
                }
            }
        }
        Ok(())
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self) -> f64 { self.x_min_spacing }
    pub fn node_check(&self) -> NodeCheck { self.node_check }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) { self.x = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a [f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
    pub(crate) fn with_node_check(&mut self, v: NodeCheck) { self.node_check = v; }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }

            pub fn set_node_check(
                mut self,
                v: $crate::interpolation::config::NodeCheck,
            ) -> Self {
                self.common.with_node_check(v);
                self
            }

            pub fn common(&self) -> &$crate::interpolation::config::CommonCfg<'a> {
                &self.common
            }
        }
    };
}
pub(crate) use impl_common_cfg;
