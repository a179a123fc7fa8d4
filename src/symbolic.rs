///____________________________________________________________________________________________________________________________
/// # Polynomial engine
/// single-variable integer expression trees
/// 1) built programmatically, with named constructors or with operators
/// 2) evaluated at an integer value of X (floor division, errors for zero denominators)
/// 3) simplified with identity rules and constant folding
/// 4) printed as infix text with minimal parentheses
///# Example
/// ```
/// use RustedPoly::symbolic::poly_engine::Expr;
/// use RustedPoly::symbolic::poly_errors::EvalError;
/// // (2 * X - 1) + 6 / 2
/// let poly = Expr::add(
///     Expr::sub(Expr::mul(Expr::int(2), Expr::x()), Expr::int(1)),
///     Expr::div(Expr::int(6), Expr::int(2)),
/// );
/// println!("poly = {}", poly);
/// assert_eq!(poly.evaluate(4), Ok(Expr::Const(10)));
/// // identity rules and constant folding
/// let simplified = Expr::add(Expr::mul(Expr::x(), Expr::int(1)), Expr::int(0)).simplify();
/// assert_eq!(simplified.render(), "X");
/// // 0 / 0 is kept so that evaluation reports it
/// let zero_by_zero = Expr::div(Expr::int(0), Expr::int(0)).simplify();
/// assert_eq!(zero_by_zero.render(), "0 / 0");
/// assert_eq!(zero_by_zero.evaluate(1), Err(EvalError::DivisionByZero));
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod poly_engine;
pub mod poly_errors;
pub mod poly_eval;
pub mod poly_render;
pub mod poly_simplify;
#[cfg(test)]
mod poly_simplify_tests;
///______________________________________________________________________________________________________________________________________________
/// random expression trees and tree statistics for tests and benchmarks
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
