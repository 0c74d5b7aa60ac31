//! Unary operation evaluation

use super::Evaluate;
use crate::ast::{UnOp, UnaryExpr};
use crate::environment::Environment;
use crate::error::EvalError;
use crate::field::Fq;

impl Evaluate for UnaryExpr {
    fn eval(&self, env: &Environment) -> Result<Fq, EvalError> {
        let operand = self.operand.eval(env)?;

        Ok(match self.op {
            UnOp::Neg => -operand,
        })
    }
}
