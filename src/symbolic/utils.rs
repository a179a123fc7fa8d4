//! helpers for generating expression trees, used by tests and benchmarks

use crate::symbolic::poly_engine::{Expr, ExprKind};
use rand::Rng;
use std::ops::RangeInclusive;
use strum::IntoEnumIterator;

/// Builds a random tree of at most `depth` levels.
///
/// Leaves are X or a constant drawn from `const_range`. A small constant range makes
/// the identity rules of `simplify` (0 and 1 operands) and zero denominators show up often.
pub fn random_expr<R: Rng>(
    rng: &mut R,
    depth: usize,
    const_range: RangeInclusive<i64>,
) -> Expr {
    let kind = if depth <= 1 {
        random_leaf_kind(rng)
    } else {
        match rng.random_range(0..6) {
            0 => ExprKind::Var,
            1 => ExprKind::Const,
            2 => ExprKind::Add,
            3 => ExprKind::Sub,
            4 => ExprKind::Mul,
            _ => ExprKind::Div,
        }
    };
    match kind {
        ExprKind::Var => Expr::Var,
        ExprKind::Const => Expr::Const(rng.random_range(const_range)),
        ExprKind::Add | ExprKind::Sub | ExprKind::Mul | ExprKind::Div => {
            let lhs = random_expr(rng, depth - 1, const_range.clone());
            let rhs = random_expr(rng, depth - 1, const_range);
            match kind {
                ExprKind::Add => Expr::add(lhs, rhs),
                ExprKind::Sub => Expr::sub(lhs, rhs),
                ExprKind::Mul => Expr::mul(lhs, rhs),
                _ => Expr::div(lhs, rhs),
            }
        }
    }
}

fn random_leaf_kind<R: Rng>(rng: &mut R) -> ExprKind {
    if rng.random_bool(0.5) {
        ExprKind::Var
    } else {
        ExprKind::Const
    }
}

/// Counts the nodes of each kind in the tree.
pub fn kind_histogram(expr: &Expr) -> Vec<(ExprKind, usize)> {
    fn walk(expr: &Expr, counts: &mut Vec<(ExprKind, usize)>) {
        if let Some(entry) = counts.iter_mut().find(|(kind, _)| *kind == expr.kind()) {
            entry.1 += 1;
        }
        if let Some((lhs, rhs)) = expr.operands() {
            walk(lhs, counts);
            walk(rhs, counts);
        }
    }
    let mut counts: Vec<(ExprKind, usize)> = ExprKind::iter().map(|kind| (kind, 0)).collect();
    walk(expr, &mut counts);
    counts
}
