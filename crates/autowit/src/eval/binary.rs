//! Binary operation evaluation

use super::Evaluate;
use crate::ast::{BinOp, BinaryExpr};
use crate::environment::Environment;
use crate::error::EvalError;
use crate::field::Fq;

impl Evaluate for BinaryExpr {
    fn eval(&self, env: &Environment) -> Result<Fq, EvalError> {
        // Operands evaluate left before right, so an error in the left
        // operand is always the one reported.
        let lhs = self.lhs.eval(env)?;
        let rhs = self.rhs.eval(env)?;

        Ok(match self.op {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
        })
    }
}
