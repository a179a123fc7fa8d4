//! # Polynomial Expression Engine
//!
//! Core expression tree for single-variable integer expressions. Trees are built
//! programmatically (there is no text parser) and are immutable once built: every
//! operation in the `symbolic` module returns a new tree.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! - **Variable**: `Var` - the one free variable, printed as `X`
//! - **Constants**: `Const(i64)` - integer literals
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div` - each node owns both operands
//!
//! ### Key Methods
//! - `evaluate(x)` - substitute `X` and fold to a single `Const` (see `poly_eval`)
//! - `simplify()` - identity rules and constant folding (see `poly_simplify`)
//! - `render()` / `Display` - minimally parenthesized infix text (see `poly_render`)
//!
//! ## Construction
//! Trees can be built with the named constructors or with ordinary operator syntax,
//! since `Expr` implements `std::ops::{Add, Sub, Mul, Div, Neg}`:
//! ```rust
//! use RustedPoly::symbolic::poly_engine::Expr;
//! let p = Expr::int(2) * Expr::x() - Expr::int(1) + Expr::int(6) / Expr::int(2);
//! assert_eq!(p.render(), "2 * X - 1 + 6 / 2");
//! assert_eq!(p.evaluate(4), Ok(Expr::Const(10)));
//! ```

use strum_macros::{Display, EnumIter};

/// Expression tree over the single variable `X`.
///
/// Composite variants own their operands through `Box`, so a tree is acyclic and
/// never shares subtrees. Construction performs no validation: `Div` with a zero
/// denominator is a perfectly good tree and only fails when evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    /// The free variable X
    Var,
    /// Integer literal
    Const(i64),
    /// left + right
    Add(Box<Expr>, Box<Expr>),
    /// left - right
    Sub(Box<Expr>, Box<Expr>),
    /// left * right
    Mul(Box<Expr>, Box<Expr>),
    /// left / right, floor division
    Div(Box<Expr>, Box<Expr>),
}

/// Tag of an `Expr` variant without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ExprKind {
    Var,
    Const,
    Add,
    Sub,
    Mul,
    Div,
}

impl ExprKind {
    /// true for `Var` and `Const`
    pub fn is_leaf(&self) -> bool {
        matches!(self, ExprKind::Var | ExprKind::Const)
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        let lhs = std::mem::replace(self, Expr::Var);
        *self = Expr::Add(lhs.boxed(), rhs.boxed());
    }
}

impl std::ops::SubAssign for Expr {
    fn sub_assign(&mut self, rhs: Self) {
        let lhs = std::mem::replace(self, Expr::Var);
        *self = Expr::Sub(lhs.boxed(), rhs.boxed());
    }
}

impl std::ops::MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        let lhs = std::mem::replace(self, Expr::Var);
        *self = Expr::Mul(lhs.boxed(), rhs.boxed());
    }
}

impl std::ops::DivAssign for Expr {
    fn div_assign(&mut self, rhs: Self) {
        let lhs = std::mem::replace(self, Expr::Var);
        *self = Expr::Div(lhs.boxed(), rhs.boxed());
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1)), Box::new(self))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Const(value)
    }
}

impl Expr {
    //___________________________________CONSTRUCTION____________________________________

    /// The free variable X.
    pub fn x() -> Expr {
        Expr::Var
    }

    /// Integer constant.
    pub fn int(value: i64) -> Expr {
        Expr::Const(value)
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Add(lhs.boxed(), rhs.boxed())
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Sub(lhs.boxed(), rhs.boxed())
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Mul(lhs.boxed(), rhs.boxed())
    }

    /// Division node. A zero denominator is accepted here; it is reported by `evaluate`.
    pub fn div(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Div(lhs.boxed(), rhs.boxed())
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    //___________________________________INSPECTION____________________________________

    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Var => ExprKind::Var,
            Expr::Const(_) => ExprKind::Const,
            Expr::Add(_, _) => ExprKind::Add,
            Expr::Sub(_, _) => ExprKind::Sub,
            Expr::Mul(_, _) => ExprKind::Mul,
            Expr::Div(_, _) => ExprKind::Div,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.kind().is_leaf()
    }

    /// true if expression is exactly `Const(0)`
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Const(0))
    }

    /// true if expression is exactly `Const(1)`
    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Const(1))
    }

    /// Value of a `Const` node, `None` for anything else.
    pub fn as_const(&self) -> Option<i64> {
        match self {
            Expr::Const(value) => Some(*value),
            _ => None,
        }
    }

    /// Both operands of a composite node.
    pub fn operands(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Expr::Var | Expr::Const(_) => None,
            Expr::Add(lhs, rhs) | Expr::Sub(lhs, rhs) | Expr::Mul(lhs, rhs) | Expr::Div(lhs, rhs) => {
                Some((lhs, rhs))
            }
        }
    }

    /// check if the expression contains the variable X
    pub fn contains_variable(&self) -> bool {
        match self {
            Expr::Var => true,
            Expr::Const(_) => false,
            Expr::Add(lhs, rhs) | Expr::Sub(lhs, rhs) | Expr::Mul(lhs, rhs) | Expr::Div(lhs, rhs) => {
                lhs.contains_variable() || rhs.contains_variable()
            }
        }
    }

    /// Number of nodes on the longest root-to-leaf path. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self.operands() {
            None => 1,
            Some((lhs, rhs)) => 1 + lhs.depth().max(rhs.depth()),
        }
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self.operands() {
            None => 1,
            Some((lhs, rhs)) => 1 + lhs.node_count() + rhs.node_count(),
        }
    }

    /// Substitutes X with a constant value throughout the expression.
    ///
    /// Unlike `evaluate` nothing is folded: the shape of the tree is kept and only
    /// the `Var` leaves change.
    pub fn set_variable(&self, value: i64) -> Expr {
        match self {
            Expr::Var => Expr::Const(value),
            Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => Expr::Add(
                Box::new(lhs.set_variable(value)),
                Box::new(rhs.set_variable(value)),
            ),
            Expr::Sub(lhs, rhs) => Expr::Sub(
                Box::new(lhs.set_variable(value)),
                Box::new(rhs.set_variable(value)),
            ),
            Expr::Mul(lhs, rhs) => Expr::Mul(
                Box::new(lhs.set_variable(value)),
                Box::new(rhs.set_variable(value)),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(lhs.set_variable(value)),
                Box::new(rhs.set_variable(value)),
            ),
        }
    }
}
