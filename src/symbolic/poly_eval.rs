//! # Evaluation
//!
//! Substitutes a value for X and folds the whole tree to a single integer. Division
//! rounds toward negative infinity, so `-7 / 2` is `-4`. The only failures are a zero
//! denominator and a result that does not fit into `i64`; both propagate to the caller
//! of the top-level `evaluate`.

use crate::symbolic::poly_engine::Expr;
use crate::symbolic::poly_errors::EvalError;
use log::debug;
use num::Integer;

/// Floor division that reports a zero denominator and `i64::MIN / -1`.
pub fn floor_div(lhs: i64, rhs: i64) -> Result<i64, EvalError> {
    if rhs == 0 {
        return Err(EvalError::DivisionByZero);
    }
    // checked_div only fails on i64::MIN / -1 once zero is ruled out
    lhs.checked_div(rhs).ok_or(EvalError::Overflow)?;
    Ok(Integer::div_floor(&lhs, &rhs))
}

impl Expr {
    /// Evaluates the expression at `X = x`, returning the result as a `Const`.
    ///
    /// # Errors
    /// `EvalError::DivisionByZero` when the denominator of any `Div` node evaluates to 0,
    /// `EvalError::Overflow` when an intermediate result leaves the `i64` range.
    pub fn evaluate(&self, x: i64) -> Result<Expr, EvalError> {
        self.eval_value(x).map(Expr::Const)
    }

    /// Same as `evaluate`, but returns the bare integer.
    pub fn eval_value(&self, x: i64) -> Result<i64, EvalError> {
        match self {
            Expr::Var => Ok(x),
            Expr::Const(c) => Ok(*c),
            Expr::Add(lhs, rhs) => {
                let (a, b) = (lhs.eval_value(x)?, rhs.eval_value(x)?);
                a.checked_add(b).ok_or(EvalError::Overflow)
            }
            Expr::Sub(lhs, rhs) => {
                let (a, b) = (lhs.eval_value(x)?, rhs.eval_value(x)?);
                a.checked_sub(b).ok_or(EvalError::Overflow)
            }
            Expr::Mul(lhs, rhs) => {
                let (a, b) = (lhs.eval_value(x)?, rhs.eval_value(x)?);
                a.checked_mul(b).ok_or(EvalError::Overflow)
            }
            Expr::Div(lhs, rhs) => {
                let (a, b) = (lhs.eval_value(x)?, rhs.eval_value(x)?);
                floor_div(a, b).inspect_err(|e| debug!("{} while evaluating {} at X = {}", e, self, x))
            }
        }
    }

    /// Evaluates the expression for every integer in `start..=end`.
    ///
    /// Each point is independent: a failure at one value of X does not stop the others.
    pub fn evaluate_range(&self, start: i64, end: i64) -> Vec<(i64, Result<i64, EvalError>)> {
        (start..=end).map(|x| (x, self.eval_value(x))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(7, 2), Ok(3));
        assert_eq!(floor_div(-7, 2), Ok(-4));
        assert_eq!(floor_div(7, -2), Ok(-4));
        assert_eq!(floor_div(-7, -2), Ok(3));
        assert_eq!(floor_div(6, 3), Ok(2));
        assert_eq!(floor_div(5, 0), Err(EvalError::DivisionByZero));
        assert_eq!(floor_div(i64::MIN, -1), Err(EvalError::Overflow));
    }

    #[test]
    fn test_evaluate_constants_ignore_x() {
        let expr = Expr::add(Expr::int(4), Expr::int(3));
        for x in [-100, -1, 0, 1, 4, 1000] {
            assert_eq!(expr.evaluate(x), Ok(Expr::Const(7)));
        }
    }

    #[test]
    fn test_evaluate_variable() {
        assert_eq!(Expr::x().evaluate(4), Ok(Expr::Const(4)));
        assert_eq!(Expr::x().evaluate(-9), Ok(Expr::Const(-9)));
    }

    #[test]
    fn test_evaluate_division() {
        assert_eq!(Expr::div(Expr::int(7), Expr::int(2)).evaluate(0), Ok(Expr::Const(3)));
        assert_eq!(Expr::div(Expr::int(-7), Expr::int(2)).evaluate(0), Ok(Expr::Const(-4)));
        assert_eq!(
            Expr::div(Expr::int(5), Expr::int(0)).evaluate(0),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_evaluate_denominator_depends_on_x() {
        // X / (X - 2)
        let expr = Expr::div(Expr::x(), Expr::sub(Expr::x(), Expr::int(2)));
        assert_eq!(expr.evaluate(4), Ok(Expr::Const(2)));
        assert_eq!(expr.evaluate(2), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_end_to_end() {
        // (2 * X - 1) + 6 / 2
        let expr = Expr::add(
            Expr::sub(Expr::mul(Expr::int(2), Expr::x()), Expr::int(1)),
            Expr::div(Expr::int(6), Expr::int(2)),
        );
        assert_eq!(expr.evaluate(4), Ok(Expr::Const(10)));
    }

    #[test]
    fn test_evaluate_original_polynomial() {
        // (4 + 3) + (X + 1 * (X * X + 1))
        let poly = (Expr::int(4) + Expr::int(3))
            + (Expr::x() + Expr::int(1) * (Expr::x() * Expr::x() + Expr::int(1)));
        assert_eq!(poly.evaluate(2), Ok(Expr::Const(14)));
    }

    #[test]
    fn test_evaluate_overflow() {
        let expr = Expr::mul(Expr::x(), Expr::int(2));
        assert_eq!(expr.evaluate(i64::MAX), Err(EvalError::Overflow));
        let expr = Expr::add(Expr::int(i64::MAX), Expr::int(1));
        assert_eq!(expr.evaluate(0), Err(EvalError::Overflow));
        let expr = Expr::div(Expr::int(i64::MIN), Expr::x());
        assert_eq!(expr.evaluate(-1), Err(EvalError::Overflow));
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let expr = Expr::sub(Expr::x(), Expr::div(Expr::int(8), Expr::x()));
        let before = expr.clone();
        let _ = expr.evaluate(2);
        let _ = expr.evaluate(0);
        assert_eq!(expr, before);
    }

    #[test]
    fn test_evaluate_range() {
        // 6 / X over -1..=1
        let expr = Expr::div(Expr::int(6), Expr::x());
        let values = expr.evaluate_range(-1, 1);
        assert_eq!(
            values,
            vec![
                (-1, Ok(-6)),
                (0, Err(EvalError::DivisionByZero)),
                (1, Ok(6)),
            ]
        );
        assert!(expr.evaluate_range(3, 2).is_empty());
    }
}
