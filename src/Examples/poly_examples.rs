// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::symbolic::poly_engine::Expr;
use crate::symbolic::poly_errors::EvalError;
use log::{info, warn};

/// Number of examples `poly_examples` knows about.
pub const NUM_EXAMPLES: usize = 6;

/// What one example tree produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleOutcome {
    pub label: String,
    pub rendered: String,
    pub simplified: String,
    pub values: Vec<(i64, Result<i64, EvalError>)>,
}

impl ExampleOutcome {
    /// Renders, simplifies and evaluates `expr` at every value of X and logs the result.
    fn run(label: &str, expr: &Expr, x_values: &[i64]) -> ExampleOutcome {
        let simplified = expr.simplify();
        info!("{}: {}", label, expr);
        info!("  simplified: {}", simplified);
        let values: Vec<(i64, Result<i64, EvalError>)> =
            x_values.iter().map(|&x| (x, expr.eval_value(x))).collect();
        for (x, value) in &values {
            match value {
                Ok(v) => info!("  evaluated for X = {}: {}", x, v),
                Err(e) => warn!("  evaluation for X = {} failed: {}", x, e),
            }
        }
        ExampleOutcome {
            label: label.to_string(),
            rendered: expr.render(),
            simplified: simplified.render(),
            values,
        }
    }

    /// true if every evaluation succeeded
    pub fn succeeded(&self) -> bool {
        self.values.iter().all(|(_, value)| value.is_ok())
    }
}

/// Runs the numbered example and returns what every tree in it produced.
pub fn poly_examples(example: usize, x_values: &[i64]) -> Result<Vec<ExampleOutcome>, String> {
    let outcomes = match example {
        0 => {
            // ORIGINAL POLYNOMIAL
            // (4 + 3) + (X + 1 * (X * X + 1))
            let poly = Expr::add(
                Expr::add(Expr::int(4), Expr::int(3)),
                Expr::add(
                    Expr::x(),
                    Expr::mul(
                        Expr::int(1),
                        Expr::add(Expr::mul(Expr::x(), Expr::x()), Expr::int(1)),
                    ),
                ),
            );
            vec![ExampleOutcome::run("original polynomial", &poly, x_values)]
        }
        1 => {
            // SUBTRACTION AND DIVISION NODES
            let sub_poly = Expr::sub(Expr::int(10), Expr::int(3));
            let div_poly = Expr::div(Expr::int(15), Expr::int(3));
            vec![
                ExampleOutcome::run("subtraction", &sub_poly, x_values),
                ExampleOutcome::run("division", &div_poly, x_values),
            ]
        }
        2 => {
            // EVALUATION
            // the same tree written with operators: (2 * X - 1) + 6 / 2
            let simple_poly = Expr::int(2) * Expr::x() - Expr::int(1) + Expr::int(6) / Expr::int(2);
            let floor_poly = Expr::div(Expr::int(-7), Expr::int(2));
            vec![
                ExampleOutcome::run("test polynomial", &simple_poly, x_values),
                ExampleOutcome::run("floor division", &floor_poly, x_values),
            ]
        }
        3 => {
            // SIMPLIFICATION
            let trees = [
                ("x + 0", Expr::add(Expr::x(), Expr::int(0))),
                ("x * 1", Expr::mul(Expr::x(), Expr::int(1))),
                ("x * 0", Expr::mul(Expr::x(), Expr::int(0))),
                ("x / 1", Expr::div(Expr::x(), Expr::int(1))),
                ("x - 0", Expr::sub(Expr::x(), Expr::int(0))),
                ("0 / x", Expr::div(Expr::int(0), Expr::x())),
                (
                    "nested",
                    Expr::add(
                        Expr::mul(Expr::add(Expr::int(3), Expr::int(5)), Expr::x()),
                        Expr::sub(Expr::mul(Expr::int(0), Expr::x()), Expr::int(0)),
                    ),
                ),
            ];
            trees
                .iter()
                .map(|(label, expr)| ExampleOutcome::run(label, expr, x_values))
                .collect()
        }
        4 => {
            // DIVISION BY ZERO
            // simplify keeps these divisions so that evaluation reports the error
            let trees = [
                ("5 / 0", Expr::div(Expr::int(5), Expr::int(0))),
                ("0 / 0", Expr::div(Expr::int(0), Expr::int(0))),
                (
                    "X / (X - 2)",
                    Expr::div(Expr::x(), Expr::sub(Expr::x(), Expr::int(2))),
                ),
            ];
            trees
                .iter()
                .map(|(label, expr)| ExampleOutcome::run(label, expr, x_values))
                .collect()
        }
        5 => {
            // PRECEDENCE IN RENDERING
            let trees = [
                (
                    "product of a sum",
                    Expr::mul(Expr::add(Expr::int(1), Expr::int(2)), Expr::int(3)),
                ),
                (
                    "nested subtraction",
                    Expr::sub(Expr::int(10), Expr::sub(Expr::int(3), Expr::int(1))),
                ),
                (
                    "quotient of a difference",
                    Expr::div(Expr::sub(Expr::int(10), Expr::int(2)), Expr::int(4)),
                ),
            ];
            trees
                .iter()
                .map(|(label, expr)| ExampleOutcome::run(label, expr, x_values))
                .collect()
        }
        _ => return Err(format!("example {} not found", example)),
    };
    Ok(outcomes)
}
