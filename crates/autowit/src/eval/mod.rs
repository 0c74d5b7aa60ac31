//! Expression evaluation

pub mod binary;
pub mod stmt;
pub mod unary;
pub mod variable;

use crate::ast::Expr;
use crate::environment::Environment;
use crate::error::EvalError;
use crate::field::Fq;

/// Trait for evaluating AST nodes to field values.
///
/// Each expression kind implements this trait; the `Expr` impl dispatches on
/// the variant, so the compiler enforces that every variant is handled.
/// Expressions never mutate the environment — all mutation goes through
/// statement execution.
pub trait Evaluate {
    /// Evaluate this node against the given environment.
    fn eval(&self, env: &Environment) -> Result<Fq, EvalError>;
}

impl Evaluate for Expr {
    fn eval(&self, env: &Environment) -> Result<Fq, EvalError> {
        match self {
            Expr::Number(value) => Ok(value.clone()),
            Expr::Variable(var) => var.eval(env),
            Expr::Unary(expr) => expr.eval(env),
            Expr::Binary(expr) => expr.eval(env),
        }
    }
}

/// Evaluate an expression (convenience wrapper).
pub fn eval_expr(expr: &Expr, env: &Environment) -> Result<Fq, EvalError> {
    expr.eval(env)
}

// Re-export for use by other modules
pub use stmt::{exec_block, exec_stmt, Execute};
