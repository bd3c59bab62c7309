//! Character-grid rendering for terminals.
//!
//! Curves share one canvas; the `k`-th curve is drawn with `MARKERS[k]`
//! (cycling) and later curves overwrite earlier ones where they overlap.
//! A legend maps each marker to its curve label.

use std::io::Write;

use crate::plotting::errors::PlotError;
use crate::plotting::figure::{Figure, DEFAULT_SAMPLES};
use crate::plotting::Plotter;

const MARKERS: [char; 6] = ['*', '+', 'o', 'x', '#', '@'];

pub const DEFAULT_WIDTH: usize = 72;
pub const DEFAULT_HEIGHT: usize = 20;


#[derive(Debug)]
pub struct TextPlotter<W: Write> {
    writer: W,
    width: usize,
    height: usize,
    samples: usize,
}

impl<W: Write> TextPlotter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            samples: DEFAULT_SAMPLES,
        }
    }

    pub fn set_canvas(mut self, width: usize, height: usize) -> Result<Self, PlotError> {
        if width < 2 || height < 2 {
            return Err(PlotError::InvalidCanvas { width, height });
        }
        self.width = width;
        self.height = height;
        Ok(self)
    }

    pub fn set_samples(mut self, v: usize) -> Result<Self, PlotError> {
        if v < 2 {
            return Err(PlotError::TooFewSamples { got: v });
        }
        self.samples = v;
        Ok(self)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn grid(&self, figure: &Figure) -> (Vec<Vec<char>>, f64, f64) {
        let (mut y_min, mut y_max) = figure.y_range().unwrap_or((-1.0, 1.0));
        // flat data still needs a vertical extent
        if y_max - y_min <= f64::EPSILON * y_max.abs().max(1.0) {
            y_min -= 1.0;
            y_max += 1.0;
        }

        let cols = (self.width - 1) as f64;
        let rows = (self.height - 1) as f64;
        let x_span = figure.max_x - figure.min_x;
        let y_span = y_max - y_min;

        let mut grid = vec![vec![' '; self.width]; self.height];
        for (k, curve) in figure.curves.iter().enumerate() {
            let marker = MARKERS[k % MARKERS.len()];
            for (&x, &y) in figure.x.iter().zip(curve.y.iter()) {
                let col = ((x - figure.min_x) / x_span * cols).round() as usize;
                let row = ((y_max - y) / y_span * rows).round() as usize;
                grid[row.min(self.height - 1)][col.min(self.width - 1)] = marker;
            }
        }

        (grid, y_min, y_max)
    }
}

impl<W: Write> Plotter for TextPlotter<W> {
    fn render(&mut self, figure: &Figure) -> Result<(), PlotError> {
        let (grid, y_min, y_max) = self.grid(figure);

        writeln!(self.writer, "{y_max:>10.4} ┐")?;
        for row in &grid {
            let line: String = row.iter().collect();
            writeln!(self.writer, "{:>10} │{line}", "")?;
        }
        writeln!(self.writer, "{y_min:>10.4} └{}", "─".repeat(self.width))?;
        writeln!(
            self.writer,
            "{:>12}{:<w$.4}{:>8.4}",
            "",
            figure.min_x,
            figure.max_x,
            w = self.width.saturating_sub(8),
        )?;

        for (k, curve) in figure.curves.iter().enumerate() {
            writeln!(self.writer, "  {} {}", MARKERS[k % MARKERS.len()], curve.label)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn samples(&self) -> usize {
        self.samples
    }
}
