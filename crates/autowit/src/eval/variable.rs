//! Variable lookup

use super::Evaluate;
use crate::ast::Variable;
use crate::environment::Environment;
use crate::error::EvalError;
use crate::field::Fq;

impl Evaluate for Variable {
    /// Look up the variable's binding. A reference with no binding is an
    /// error — a witness containing undefined values is not a valid witness.
    fn eval(&self, env: &Environment) -> Result<Fq, EvalError> {
        env.get(&self.name)
            .cloned()
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: self.name.clone(),
            })
    }
}
