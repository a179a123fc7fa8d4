use crate::symbolic::poly_engine::Expr;
use crate::symbolic::poly_errors::EvalError;
use crate::symbolic::utils::random_expr;
//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn simplified(expr: Expr) -> String {
        expr.simplify().render()
    }

    #[test]
    fn test_leaves_are_unchanged() {
        assert_eq!(Expr::x().simplify(), Expr::Var);
        assert_eq!(Expr::int(0).simplify(), Expr::Const(0));
        assert_eq!(Expr::int(-3).simplify(), Expr::Const(-3));
    }

    #[test]
    fn test_identity_rules() {
        assert_eq!(simplified(Expr::add(Expr::x(), Expr::int(0))), "X");
        assert_eq!(simplified(Expr::add(Expr::int(0), Expr::x())), "X");
        assert_eq!(simplified(Expr::sub(Expr::x(), Expr::int(0))), "X");
        assert_eq!(simplified(Expr::mul(Expr::x(), Expr::int(1))), "X");
        assert_eq!(simplified(Expr::mul(Expr::int(1), Expr::x())), "X");
        assert_eq!(simplified(Expr::mul(Expr::x(), Expr::int(0))), "0");
        assert_eq!(simplified(Expr::mul(Expr::int(0), Expr::x())), "0");
        assert_eq!(simplified(Expr::div(Expr::x(), Expr::int(1))), "X");
        assert_eq!(simplified(Expr::div(Expr::int(0), Expr::x())), "0");
    }

    #[test]
    fn test_sub_has_no_left_zero_rule() {
        assert_eq!(simplified(Expr::sub(Expr::int(0), Expr::x())), "0 - X");
    }

    #[test]
    fn test_constant_folding() {
        assert_eq!(Expr::add(Expr::int(3), Expr::int(5)).simplify(), Expr::Const(8));
        assert_eq!(Expr::sub(Expr::int(5), Expr::int(3)).simplify(), Expr::Const(2));
        assert_eq!(Expr::mul(Expr::int(3), Expr::int(5)).simplify(), Expr::Const(15));
        assert_eq!(Expr::div(Expr::int(6), Expr::int(2)).simplify(), Expr::Const(3));
        assert_eq!(Expr::div(Expr::int(-7), Expr::int(2)).simplify(), Expr::Const(-4));
        assert_eq!(Expr::div(Expr::int(7), Expr::int(-2)).simplify(), Expr::Const(-4));
    }

    #[test]
    fn test_mul_zero_rule_wins() {
        assert_eq!(Expr::mul(Expr::int(0), Expr::int(1)).simplify(), Expr::Const(0));
        assert_eq!(Expr::mul(Expr::int(1), Expr::int(0)).simplify(), Expr::Const(0));
        // the other operand is dropped even if it could not be evaluated
        let expr = Expr::mul(Expr::int(0), Expr::div(Expr::x(), Expr::int(0)));
        assert_eq!(expr.simplify(), Expr::Const(0));
    }

    #[test]
    fn test_nested_simplification() {
        // (4 + 3) + (X + 1 * (X * X + 1))
        let poly = (Expr::int(4) + Expr::int(3))
            + (Expr::x() + Expr::int(1) * (Expr::x() * Expr::x() + Expr::int(1)));
        assert_eq!(simplified(poly), "7 + X + X * X + 1");

        // (2 * X - 1) + 6 / 2
        let expr = Expr::add(
            Expr::sub(Expr::mul(Expr::int(2), Expr::x()), Expr::int(1)),
            Expr::div(Expr::int(6), Expr::int(2)),
        );
        assert_eq!(simplified(expr), "2 * X - 1 + 3");

        // (X * (2 - 1)) + (0 * X) folds to X
        let expr = Expr::add(
            Expr::mul(Expr::x(), Expr::sub(Expr::int(2), Expr::int(1))),
            Expr::mul(Expr::int(0), Expr::x()),
        );
        assert_eq!(expr.simplify(), Expr::Var);
    }

    #[test]
    fn test_zero_over_zero_is_kept() {
        let expr = Expr::div(Expr::int(0), Expr::int(0));
        let simple = expr.simplify();
        assert_eq!(simple, Expr::div(Expr::int(0), Expr::int(0)));
        assert_eq!(simple.render(), "0 / 0");
        assert_eq!(simple.evaluate(1), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_zero_denominator_is_kept() {
        let expr = Expr::div(Expr::int(5), Expr::sub(Expr::int(3), Expr::int(3)));
        let simple = expr.simplify();
        assert_eq!(simple, Expr::div(Expr::int(5), Expr::int(0)));
        assert_eq!(simple.evaluate(0), Err(EvalError::DivisionByZero));

        // (0 * X) / 0 simplifies its numerator to 0 and still keeps the node
        let expr = Expr::div(Expr::mul(Expr::int(0), Expr::x()), Expr::int(0));
        assert_eq!(simplified(expr), "0 / 0");

        // X / 0 is not folded either
        let expr = Expr::div(Expr::x(), Expr::int(0));
        assert_eq!(simplified(expr), "X / 0");
    }

    #[test]
    fn test_overflowing_folds_are_kept() {
        let expr = Expr::add(Expr::int(i64::MAX), Expr::int(1));
        assert_eq!(expr.simplify(), expr);
        assert_eq!(expr.simplify().evaluate(0), Err(EvalError::Overflow));
        let expr = Expr::div(Expr::int(i64::MIN), Expr::int(-1));
        assert_eq!(expr.simplify(), expr);
        let expr = Expr::mul(Expr::int(i64::MAX), Expr::int(2));
        assert_eq!(expr.simplify(), expr);
    }

    #[test]
    fn test_simplify_does_not_mutate() {
        let expr = Expr::add(Expr::mul(Expr::x(), Expr::int(1)), Expr::int(0));
        let before = expr.clone();
        let _ = expr.simplify();
        assert_eq!(expr, before);
    }

    #[test]
    fn test_simplify_is_idempotent_on_random_trees() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..2000 {
            let expr = random_expr(&mut rng, 6, -2..=2);
            let once = expr.simplify();
            let twice = once.simplify();
            assert_eq!(twice.render(), once.render(), "tree: {}", expr.sym_to_str());
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn test_simplify_preserves_value_on_random_trees() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let expr = random_expr(&mut rng, 6, -3..=3);
            let simple = expr.simplify();
            for x in -4..=4 {
                if let Ok(value) = expr.evaluate(x) {
                    assert_eq!(
                        simple.evaluate(x),
                        Ok(value),
                        "tree: {}, simplified: {}, x = {}",
                        expr.sym_to_str(),
                        simple.sym_to_str(),
                        x
                    );
                }
            }
        }
    }

    #[test]
    fn test_simplify_never_grows_the_tree() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let expr = random_expr(&mut rng, 7, -2..=2);
            assert!(expr.simplify().node_count() <= expr.node_count());
        }
    }
}
