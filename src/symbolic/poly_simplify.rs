//! # Expression Simplification
//!
//! Bottom-up algebraic simplification: both operands of a node are simplified first,
//! then the first matching rule for the operator is applied.
//!
//! ## Rules
//!
//! - **Add**: `0 + x = x`, `x + 0 = x`, `a + b` folded for constants
//! - **Sub**: `x - 0 = x`, `a - b` folded for constants
//! - **Mul**: `0 * x = x * 0 = 0` (takes priority, so `0 * 1 = 0`), `1 * x = x * 1 = x`,
//!   `a * b` folded for constants
//! - **Div**: `0 / x = 0`, `x / 1 = x`, `a / b` folded for constants with floor semantics
//!
//! ## Zero denominators
//!
//! `0 / 0` and `a / 0` are never folded. The `Div` node is kept as it is so that a
//! later `evaluate` reports `DivisionByZero` instead of the error being masked as 0
//! or raised eagerly here. Constant folds that would overflow `i64` are kept unfolded
//! for the same reason, which keeps `simplify` a total function.
//!
//! The result contains no further-reducible pattern under these rules, so
//! `e.simplify().simplify() == e.simplify()`.

use crate::symbolic::poly_engine::Expr;
use crate::symbolic::poly_eval::floor_div;
use log::debug;

impl Expr {
    /// Returns an algebraically reduced equivalent of the expression.
    ///
    /// The input is not modified. For every `x` at which the original evaluates
    /// successfully, the simplified tree evaluates to the same value.
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Var | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    (Expr::Const(0), _) => rhs, // 0 + x = x
                    (_, Expr::Const(0)) => lhs, // x + 0 = x
                    (Expr::Const(a), Expr::Const(b)) => match a.checked_add(*b) {
                        Some(sum) => Expr::Const(sum),
                        None => Expr::Add(Box::new(lhs), Box::new(rhs)),
                    },
                    _ => Expr::Add(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Sub(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    (_, Expr::Const(0)) => lhs, // x - 0 = x
                    (Expr::Const(a), Expr::Const(b)) => match a.checked_sub(*b) {
                        Some(diff) => Expr::Const(diff),
                        None => Expr::Sub(Box::new(lhs), Box::new(rhs)),
                    },
                    _ => Expr::Sub(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Mul(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    (Expr::Const(0), _) | (_, Expr::Const(0)) => Expr::Const(0), // 0 * x = 0
                    (Expr::Const(1), _) => rhs,                                 // 1 * x = x
                    (_, Expr::Const(1)) => lhs,                                 // x * 1 = x
                    (Expr::Const(a), Expr::Const(b)) => match a.checked_mul(*b) {
                        Some(product) => Expr::Const(product),
                        None => Expr::Mul(Box::new(lhs), Box::new(rhs)),
                    },
                    _ => Expr::Mul(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Div(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    (Expr::Const(0), Expr::Const(0)) => {
                        debug!("keeping 0 / 0 unfolded");
                        Expr::Div(Box::new(lhs), Box::new(rhs))
                    }
                    (Expr::Const(0), _) => Expr::Const(0), // 0 / x = 0
                    (_, Expr::Const(1)) => lhs,            // x / 1 = x
                    (Expr::Const(a), Expr::Const(b)) => match floor_div(*a, *b) {
                        Ok(quotient) => Expr::Const(quotient),
                        Err(e) => {
                            debug!("keeping {} / {} unfolded: {}", a, b, e);
                            Expr::Div(Box::new(lhs), Box::new(rhs))
                        }
                    },
                    _ => Expr::Div(Box::new(lhs), Box::new(rhs)),
                }
            }
        }
    }
}
