//! JSON output for an external plotting script.
//!
//! Writes one figure per line:
//! `{"min_x":..,"max_x":..,"x":[...],"curves":[{"label":"f","y":[...]}, ...]}`

use std::io::Write;

use crate::plotting::errors::PlotError;
use crate::plotting::figure::{Figure, DEFAULT_SAMPLES};
use crate::plotting::Plotter;


#[derive(Debug)]
pub struct JsonPlotter<W: Write> {
    writer: W,
    samples: usize,
}

impl<W: Write> JsonPlotter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, samples: DEFAULT_SAMPLES }
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
}

impl<W: Write> Plotter for JsonPlotter<W> {
    fn render(&mut self, figure: &Figure) -> Result<(), PlotError> {
        serde_json::to_writer(&mut self.writer, figure)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    fn samples(&self) -> usize {
        self.samples
    }
}
