//! # Rendering
//!
//! Infix text with the minimal parentheses needed to keep the meaning of the tree.
//! `*` and `/` bind tighter than `+` and `-`, and `-` and `/` are left-associative:
//!
//! | node      | left operand wrapped when | right operand wrapped when |
//! |-----------|---------------------------|----------------------------|
//! | `a + b`   | never                     | never                      |
//! | `a - b`   | `Add`                     | `Add`, `Sub`               |
//! | `a * b`   | `Add`, `Sub`              | `Add`, `Sub`               |
//! | `a / b`   | `Add`, `Sub`              | `Add`, `Sub`               |
//!
//! A wrapped operand is printed as `( inner )` with spaces inside the parentheses.

use crate::symbolic::poly_engine::Expr;
use std::fmt;

/// Writes `expr`, wrapped as `( expr )` if `wrap` is set.
fn write_operand(f: &mut fmt::Formatter, expr: &Expr, wrap: bool) -> fmt::Result {
    if wrap {
        write!(f, "( {} )", expr)
    } else {
        write!(f, "{}", expr)
    }
}

fn is_additive(expr: &Expr) -> bool {
    matches!(expr, Expr::Add(_, _) | Expr::Sub(_, _))
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var => write!(f, "X"),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "{} + {}", lhs, rhs),
            Expr::Sub(lhs, rhs) => {
                write_operand(f, lhs, matches!(**lhs, Expr::Add(_, _)))?;
                write!(f, " - ")?;
                write_operand(f, rhs, is_additive(rhs))
            }
            Expr::Mul(lhs, rhs) => {
                write_operand(f, lhs, is_additive(lhs))?;
                write!(f, " * ")?;
                write_operand(f, rhs, is_additive(rhs))
            }
            Expr::Div(lhs, rhs) => {
                write_operand(f, lhs, is_additive(lhs))?;
                write!(f, " / ")?;
                write_operand(f, rhs, is_additive(rhs))
            }
        }
    }
}

impl Expr {
    /// Canonical infix text of the expression, same as `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Fully parenthesized text: every composite node is wrapped, which shows the
    /// exact shape of the tree.
    pub fn sym_to_str(&self) -> String {
        match self {
            Expr::Var => "X".to_string(),
            Expr::Const(val) => val.to_string(),
            Expr::Add(lhs, rhs) => format!("({} + {})", lhs.sym_to_str(), rhs.sym_to_str()),
            Expr::Sub(lhs, rhs) => format!("({} - {})", lhs.sym_to_str(), rhs.sym_to_str()),
            Expr::Mul(lhs, rhs) => format!("({} * {})", lhs.sym_to_str(), rhs.sym_to_str()),
            Expr::Div(lhs, rhs) => format!("({} / {})", lhs.sym_to_str(), rhs.sym_to_str()),
        }
    }
}
