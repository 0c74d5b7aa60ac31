//! Witness output produced by a completed run

use num_traits::Zero;
use serde::Serialize;

use crate::environment::Environment;
use crate::field::Fq;

/// Outcome of a single `ASSERT` statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssertionRecord {
    /// Source rendering of the asserted expression.
    pub expr: String,
    /// The field value the expression produced.
    pub value: Fq,
    /// Whether the constraint held (value non-zero).
    pub passed: bool,
}

impl AssertionRecord {
    /// Record the outcome for an asserted expression and its value.
    pub fn new(expr: impl Into<String>, value: Fq) -> Self {
        let passed = !value.is_zero();
        Self {
            expr: expr.into(),
            value,
            passed,
        }
    }
}

/// The result of executing a program: the final variable bindings and the
/// assertion outcomes in execution order.
///
/// The bindings are the witness a caller persists or inspects downstream to
/// demonstrate a circuit's constraints are satisfiable.
#[derive(Debug, Clone, Serialize)]
pub struct Witness {
    /// Final variable bindings, in first-assignment order.
    pub bindings: Environment,
    /// Assertion outcomes, in execution order.
    pub assertions: Vec<AssertionRecord>,
}

impl Witness {
    /// Whether every assertion in the run passed.
    pub fn satisfied(&self) -> bool {
        self.assertions.iter().all(|record| record.passed)
    }
}
