//! Visual comparison of scalar functions over an interval.
//!
//! A [`Plotter`] samples every [`NamedFunction`] at evenly spaced points
//! over `[min_x, max_x]` into a [`Figure`] and renders it; each curve is
//! labeled with its function's name. Interpolation does not depend on
//! anything in here.

pub mod errors;
pub mod figure;
pub mod json;
pub mod text;

pub use errors::PlotError;
pub use figure::{Curve, Figure, NamedFunction, DEFAULT_SAMPLES};
pub use json::JsonPlotter;
pub use text::TextPlotter;


pub trait Plotter {
    /// renders an already sampled figure
    fn render(&mut self, figure: &Figure) -> Result<(), PlotError>;

    /// samples per curve
    fn samples(&self) -> usize {
        DEFAULT_SAMPLES
    }

    /// samples `functions` over `[min_x, max_x]` and renders them on shared axes
    fn draw(
        &mut self,
        min_x: f64,
        max_x: f64,
        functions: &[NamedFunction<'_>],
    ) -> Result<(), PlotError> {
        let figure = Figure::sample(min_x, max_x, self.samples(), functions)?;
        self.render(&figure)
    }
}
