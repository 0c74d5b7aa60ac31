//! Statement and block execution

use num_traits::Zero;
use tracing::{debug, trace};

use super::Evaluate;
use crate::ast::{Block, Stmt};
use crate::context::{AssertionPolicy, EvalContext};
use crate::environment::Environment;
use crate::error::EvalError;
use crate::witness::AssertionRecord;

/// Trait for executing statements against a run's mutable state.
///
/// Statements are the only place the environment mutates; the context
/// accumulates assertion outcomes as they are encountered.
pub trait Execute {
    /// Execute this node, mutating the environment in place.
    fn exec(&self, env: &mut Environment, ctx: &mut EvalContext) -> Result<(), EvalError>;
}

impl Execute for Stmt {
    fn exec(&self, env: &mut Environment, ctx: &mut EvalContext) -> Result<(), EvalError> {
        match self {
            // Bind the value, overwriting any prior binding for the name
            Stmt::Assign(assign) => {
                let value = assign.value.eval(env)?;
                trace!(name = %assign.target, value = %value, "assign");
                env.assign(&assign.target.name, value);
                Ok(())
            }

            // Record the outcome; zero means a violated constraint
            Stmt::Assert(assert) => {
                let value = assert.expr.eval(env)?;
                let record = AssertionRecord::new(assert.expr.to_string(), value.clone());
                debug!(expr = %record.expr, value = %record.value, passed = record.passed, "assertion");
                let failed = !record.passed;
                ctx.record_assertion(record);

                if failed && ctx.policy == AssertionPolicy::Strict {
                    return Err(EvalError::AssertionFailed {
                        expr: assert.expr.to_string(),
                        value,
                    });
                }
                Ok(())
            }

            // Non-zero condition selects the then-block; exactly one branch runs
            Stmt::If(if_else) => {
                let condition = if_else.condition.eval(env)?;
                if condition.is_zero() {
                    if_else.else_block.exec(env, ctx)
                } else {
                    if_else.then_block.exec(env, ctx)
                }
            }

            // Bare expression: evaluate and discard, surfacing the value as
            // log output for PRINT-style diagnostics
            Stmt::Expr(expr) => {
                let value = expr.eval(env)?;
                debug!(expr = %expr, value = %value, "print");
                Ok(())
            }
        }
    }
}

impl Execute for Block {
    /// Execute each statement in sequence; the first error aborts the block.
    fn exec(&self, env: &mut Environment, ctx: &mut EvalContext) -> Result<(), EvalError> {
        for stmt in &self.stmts {
            stmt.exec(env, ctx)?;
        }
        Ok(())
    }
}

/// Execute a statement (convenience wrapper).
///
/// # Errors
///
/// Returns errors from statement execution.
pub fn exec_stmt(
    stmt: &Stmt,
    env: &mut Environment,
    ctx: &mut EvalContext,
) -> Result<(), EvalError> {
    stmt.exec(env, ctx)
}

/// Execute a block of statements in sequence.
///
/// # Errors
///
/// Returns errors from statement execution.
pub fn exec_block(
    block: &Block,
    env: &mut Environment,
    ctx: &mut EvalContext,
) -> Result<(), EvalError> {
    block.exec(env, ctx)
}
