//! Demo driver: interpolates `f(x) = ln(x) + x` with both methods, plots
//! each polynomial against `f` and prints the absolute error at a probe point.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;

use interpoly::interpolation::algorithms::Algorithm;
use interpoly::interpolation::lagrange::LagrangeInterpolator;
use interpoly::interpolation::newton::NewtonInterpolator;
use interpoly::interpolation::Interpolator;
use interpoly::plotting::{JsonPlotter, NamedFunction, Plotter, TextPlotter, DEFAULT_SAMPLES};

const NEWTON_NODES: [f64; 4] = [0.1, 0.5, 1.1, 1.3];
const LAGRANGE_NODES: [f64; 4] = [0.1, 0.5, 0.9, 1.3];
const MIN_X: f64 = 0.1;
const MAX_X: f64 = 1.3;


#[derive(Debug, Parser)]
#[command(name = "interpoly", about = "Newton and Lagrange interpolation of ln(x) + x")]
struct Args {
    /// point at which the interpolation error is reported
    #[arg(long, default_value_t = 0.8)]
    at: f64,

    /// samples per plotted curve
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// write figures as JSON lines to this file instead of drawing them
    #[arg(long)]
    json: Option<PathBuf>,

    /// text canvas width
    #[arg(long, default_value_t = interpoly::plotting::text::DEFAULT_WIDTH)]
    width: usize,

    /// text canvas height
    #[arg(long, default_value_t = interpoly::plotting::text::DEFAULT_HEIGHT)]
    height: usize,
}

fn f(x: f64) -> f64 {
    x.ln() + x
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let newton_interp = NewtonInterpolator::from_nodes(&NEWTON_NODES, f)?;
    let newton = newton_interp.calculate()?;

    let lagrange_interp = LagrangeInterpolator::from_nodes(&LAGRANGE_NODES, f)?;
    let lagrange = lagrange_interp.calculate();

    let newton_figure = [
        NamedFunction::from_fn("f", f),
        NamedFunction::from_interpolator("newton", &newton),
    ];
    let lagrange_figure = [
        NamedFunction::from_fn("f", f),
        NamedFunction::from_interpolator("lagrange", &lagrange),
    ];

    let mut plotter: Box<dyn Plotter> = match &args.json {
        Some(path) => Box::new(
            JsonPlotter::new(BufWriter::new(File::create(path)?)).set_samples(args.samples)?,
        ),
        None => Box::new(
            TextPlotter::new(io::stdout())
                .set_canvas(args.width, args.height)?
                .set_samples(args.samples)?,
        ),
    };
    plotter.draw(MIN_X, MAX_X, &newton_figure)?;
    plotter.draw(MIN_X, MAX_X, &lagrange_figure)?;

    println!("{:<8} absolute error at x={}: {:.6e}", Algorithm::Lagrange, args.at, lagrange.abs_error(f, args.at)?);
    println!("{:<8} absolute error at x={}: {:.6e}", Algorithm::Newton, args.at, newton.abs_error(f, args.at)?);

    Ok(())
}
