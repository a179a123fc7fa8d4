use std::fmt;

/// Error types for evaluation of an expression tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// right operand of a `Div` node evaluated to 0
    DivisionByZero,
    /// result does not fit into i64
    Overflow,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::Overflow => write!(f, "integer overflow"),
        }
    }
}

impl std::error::Error for EvalError {}
