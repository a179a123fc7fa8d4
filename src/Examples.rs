//! examples of usage of RustedPoly
/// building, printing, evaluating and simplifying expression trees
pub mod poly_examples;
