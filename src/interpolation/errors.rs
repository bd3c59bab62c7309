//! Interpolation error types.
//!
//! ┌ input errors    : empty / non-finite nodes, bad tolerance
//! ├ node errors     : duplicate nodes, caught eagerly (`DuplicateX`)
//! │                   or at the first zero denominator (`DuplicateNode`)
//! └ runtime errors  : sample function or evaluator produced NaN/inf

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpolationError {
    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("nodes {i} and {j} coincide at x={x}; divided by zero")]
    DuplicateNode { i: usize, j: usize, x: f64 },

    #[error("sample function undefined at x={x}, f(x)={fx}")]
    UndefinedFunction { x: f64, fx: f64 },

    #[error("polynomial non-finite at x={x}, p(x)={px}")]
    NonFiniteEvaluation { x: f64, px: f64 },

    #[error("node index {idx} out of range for {len} nodes")]
    IndexOutOfRange { idx: usize, len: usize },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 }
}
