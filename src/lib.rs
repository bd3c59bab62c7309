//! Polynomial interpolation through sampled function values.
//!
//! Two classical constructions of the same interpolating polynomial:
//! - [`interpolation::newton`]   : divided-difference (Newton) form
//! - [`interpolation::lagrange`] : basis-polynomial (Lagrange) form
//!
//! [`plotting`] renders any set of named functions over an interval for
//! visual comparison.
//!
//! # Example
//! ```
//! use interpoly::interpolation::Interpolator;
//! use interpoly::interpolation::newton::NewtonInterpolator;
//! use interpoly::interpolation::lagrange::LagrangeInterpolator;
//!
//! let f = |x: f64| x.ln() + x;
//!
//! let newton = NewtonInterpolator::from_nodes(&[0.1, 0.5, 1.1, 1.3], f).unwrap();
//! let p = newton.calculate().unwrap();
//! assert!((p.eval(0.8).unwrap() - f(0.8)).abs() < 0.06);
//!
//! let lagrange = LagrangeInterpolator::from_nodes(&[0.1, 0.5, 0.9, 1.3], f).unwrap();
//! let q = lagrange.calculate();
//! assert!((q.eval(0.8).unwrap() - f(0.8)).abs() < 0.03);
//! ```

pub mod interpolation;
pub mod plotting;
