//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

use serde::Serialize;

/// Interpolation algorithm variants.
/// - [`Algorithm::Newton`]   divided-difference form
/// - [`Algorithm::Lagrange`] basis-polynomial form
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Newton,
    Lagrange,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Newton   => "newton",
            Algorithm::Lagrange => "lagrange",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.algorithm_name())
    }
}
