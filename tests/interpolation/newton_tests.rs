use std::cell::Cell;

use interpoly::interpolation::config::NodeCheck;
use interpoly::interpolation::errors::InterpolationError;
use interpoly::interpolation::newton::{interpolate, NewtonCfg, NewtonInterpolator};
use interpoly::interpolation::Interpolator;

type InterpResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at index {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

/// Looks `x` up in a node table; NaN off the table.
fn tabulated<'a>(x: &'a [f64], y: &'a [f64]) -> impl Fn(f64) -> f64 + 'a {
    move |xq| x.iter().position(|&xi| xi == xq).map_or(f64::NAN, |i| y[i])
}

#[test]
fn quadratic_global_match() -> InterpResult {
    let x      = [0.0, 1.0, 2.0];
    let x_eval = [0.5, 1.5];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg, |v| v * v)?;
    assert_eq!(rep.algorithm_name, "newton");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert_eq!(rep.degree, 2);
    assert!(approx_eq(rep.evaluated[0], 0.25));
    assert!(approx_eq(rep.evaluated[1], 2.25));
    Ok(())
}

#[test]
fn exact_hits() -> InterpResult {
    let x_for_cfg  = [0.0, 1.0, 2.0, 3.0];
    let x_eval     = [0.0, 1.0, 2.0, 3.0];
    let y_expected = [0.0, 1.0, 4.0, 9.0];

    let cfg = NewtonCfg::new()
        .set_x(&x_for_cfg)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg, |v| v * v)?;
    assert_vec_close(&rep.evaluated, &y_expected);
    Ok(())
}

#[test]
fn two_points() -> InterpResult {
    let poly_src = NewtonInterpolator::from_nodes(&[2.0, 4.0], |v| 2.0 * v + 1.0)?;
    let p = poly_src.calculate()?;
    assert!(approx_eq(p.eval(3.0)?, 7.0));
    assert_eq!(p.degree(), 1);
    Ok(())
}

#[test]
fn many_points() -> InterpResult {
    let x_for_cfg  = [0.0, 1.0, 3.0, 6.0, 10.0];
    let y_for_cfg  = [0.0, 2.0, 3.0, 3.0, 8.0];

    let cfg = NewtonCfg::new()
        .set_x(&x_for_cfg)?
        .set_x_eval(&x_for_cfg)?;

    let rep = interpolate(cfg, tabulated(&x_for_cfg, &y_for_cfg))?;
    assert_vec_close(&rep.evaluated, &y_for_cfg);
    Ok(())
}

#[test]
fn empty_x_eval_ok() -> InterpResult {
    let x = [0.0, 1.0];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_x_eval(&[])?;

    let rep = interpolate(cfg, |v| v)?;
    assert_eq!(rep.n_provided, 2);
    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    Ok(())
}

#[test]
fn extrapolates_outside_nodes() -> InterpResult {
    let interp = NewtonInterpolator::from_nodes(&[0.0, 1.0, 2.0], |v| v * v)?;
    let p = interp.calculate()?;
    assert!(approx_eq(p.eval(5.0)?, 25.0));
    assert!(approx_eq(p.eval(-3.0)?, 9.0));
    Ok(())
}

#[test]
fn coefficients_are_leading_divided_differences() -> InterpResult {
    let interp = NewtonInterpolator::from_nodes(&[0.0, 1.0, 3.0], |v| v * v)?;
    let p = interp.calculate()?;
    assert_vec_close(p.coefficients(), &[0.0, 1.0, 1.0]);
    assert_eq!(p.nodes(), &[0.0, 1.0, 3.0]);
    Ok(())
}

#[test]
fn ln_plus_x_probe() -> InterpResult {
    let f = |v: f64| v.ln() + v;
    let interp = NewtonInterpolator::from_nodes(&[0.1, 0.5, 1.1, 1.3], f)?;
    let p = interp.calculate()?;

    let px = p.eval(0.8)?;
    assert!((px - 0.634_110_621_149_860_4).abs() < 1e-9, "p(0.8) = {px}");
    assert!(p.abs_error(f, 0.8)? < 0.06);
    Ok(())
}

#[test]
fn single_node_is_constant() -> InterpResult {
    let interp = NewtonInterpolator::from_nodes(&[2.0], |v| v * v * v)?;
    let p = interp.calculate()?;
    assert_eq!(p.degree(), 0);
    for xq in [-10.0, 0.0, 2.0, 7.5] {
        assert_eq!(p.eval(xq)?, 8.0);
    }
    Ok(())
}

#[test]
fn divided_difference_base_and_first_order() -> InterpResult {
    let f = |v: f64| v.exp();
    let x = [0.2, 0.7, 1.5];
    let interp = NewtonInterpolator::from_nodes(&x, f)?;

    assert_eq!(interp.divided_difference(&[1])?, f(0.7));

    let d01 = interp.divided_difference(&[0, 1])?;
    assert!(approx_eq(d01, (f(0.2) - f(0.7)) / (0.2 - 0.7)));

    let d012 = interp.divided_difference(&[0, 1, 2])?;
    let d12  = interp.divided_difference(&[1, 2])?;
    assert!(approx_eq(d012, (d01 - d12) / (0.2 - 1.5)));
    Ok(())
}

#[test]
fn divided_difference_is_symmetric() -> InterpResult {
    let interp = NewtonInterpolator::from_nodes(&[0.0, 0.4, 1.0, 2.5], |v: f64| v.sin())?;
    let a = interp.divided_difference(&[0, 1, 2, 3])?;
    let b = interp.divided_difference(&[2, 0, 3, 1])?;
    assert!(approx_eq(a, b), "{a} vs {b}");
    Ok(())
}

#[test]
fn divided_difference_bad_indices() -> InterpResult {
    let interp = NewtonInterpolator::from_nodes(&[0.0, 1.0], |v| v)?;
    assert_eq!(interp.divided_difference(&[]).unwrap_err(), InterpolationError::EmptyInput);
    assert_eq!(
        interp.divided_difference(&[0, 2]).unwrap_err(),
        InterpolationError::IndexOutOfRange { idx: 2, len: 2 }
    );
    Ok(())
}

#[test]
fn samples_function_once_per_node() -> InterpResult {
    let calls = Cell::new(0usize);
    let f = |v: f64| { calls.set(calls.get() + 1); v * v };

    let interp = NewtonInterpolator::from_nodes(&[0.0, 1.0, 2.0, 3.0], f)?;
    assert_eq!(calls.get(), 4);

    let p = interp.calculate()?;
    p.eval_many(&[0.5, 1.5, 2.5])?;
    assert_eq!(calls.get(), 4);
    Ok(())
}

#[test]
fn duplicate_nodes_rejected_eagerly() {
    let err = NewtonInterpolator::from_nodes(&[0.5, 0.5], |v| v).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { x1, x2 } if x1 == 0.5 && x2 == 0.5));
}

#[test]
fn duplicate_nodes_fail_lazily() {
    let cfg = NewtonCfg::new()
        .set_x(&[0.5, 0.5]).unwrap()
        .set_node_check(NodeCheck::Lazy);

    let interp = NewtonInterpolator::new(cfg, |v| v).unwrap();
    let err = interp.calculate().unwrap_err();
    assert_eq!(err, InterpolationError::DuplicateNode { i: 0, j: 1, x: 0.5 });
}

#[test]
fn undefined_function_at_node() {
    let err = NewtonInterpolator::from_nodes(&[0.0, 1.0], |v: f64| v.ln()).unwrap_err();
    assert!(matches!(err, InterpolationError::UndefinedFunction { x, fx }
        if x == 0.0 && fx == f64::NEG_INFINITY));
}

#[test]
fn non_finite_query_reported() -> InterpResult {
    let interp = NewtonInterpolator::from_nodes(&[0.0, 1.0], |v| 3.0 * v)?;
    let p = interp.calculate()?;
    let err = p.eval(f64::NAN).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteEvaluation { .. }));
    Ok(())
}
