//! Arithmetic Evaluation
//!
//! Evaluates calculator expressions built from numeric literals, the
//! operators `+ - * /`, unary signs and parentheses. Nothing else is
//! accepted: input is parsed, never executed.

pub mod parser;

use thiserror::Error;

pub use parser::{parse, BinaryOp, Expr};

/// Errors raised while parsing or evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("unexpected '{token}' at position {pos}")]
    UnexpectedToken { token: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unbalanced parenthesis at position {pos}")]
    UnbalancedParen { pos: usize },

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("expression nested too deeply (limit {limit})")]
    TooDeep { limit: usize },

    #[error("expression too long (limit {limit} tokens)")]
    TooLong { limit: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NonFinite,
}

/// Capability used by `calc` to turn text into a number.
pub trait ExpressionEvaluator: Send + Sync {
    fn evaluate(&self, text: &str) -> Result<f64, EvalError>;
}

/// The built-in evaluator: parse with [`parse`], then fold the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticEvaluator;

impl ExpressionEvaluator for ArithmeticEvaluator {
    fn evaluate(&self, text: &str) -> Result<f64, EvalError> {
        let expr = parse(text)?;
        evaluate(&expr)
    }
}

/// Evaluate an expression tree.
pub fn evaluate(expr: &Expr) -> Result<f64, EvalError> {
    let value = match expr {
        Expr::Number(n) => *n,
        Expr::Negate(inner) => -evaluate(inner)?,
        Expr::Binary { op, left, right } => {
            apply_binary_op(evaluate(left)?, evaluate(right)?, *op)?
        }
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite)
    }
}

/// Pure binary operator evaluation.
fn apply_binary_op(left: f64, right: f64, op: BinaryOp) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => {
            if right == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(left / right)
            }
        }
    }
}

/// Render a result the way the calculator prints it.
///
/// Integral values print without a fraction and negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
