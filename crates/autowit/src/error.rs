//! Error types for parsing and evaluation

use thiserror::Error;

use crate::field::Fq;

/// Errors produced by the textual front-end.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A token sequence matching none of the one/two/three-token expression
    /// shapes.
    #[error("malformed expression: `{tokens}`")]
    MalformedExpression {
        /// The offending tokens, space-joined.
        tokens: String,
    },

    /// A line matching none of the recognized statement forms.
    #[error("unrecognized statement: `{line}`")]
    UnrecognizedStatement {
        /// The offending source line.
        line: String,
    },
}

/// Errors produced while executing a program.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A variable reference with no binding at the point of evaluation.
    #[error("undefined variable `{name}`")]
    UndefinedVariable {
        /// The unbound name.
        name: String,
    },

    /// An assertion evaluated to zero while the run's policy is strict.
    #[error("assertion failed: `{expr}` evaluated to {value}")]
    AssertionFailed {
        /// Source rendering of the asserted expression.
        expr: String,
        /// The value the expression produced.
        value: Fq,
    },
}

/// Umbrella error for running a program from source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AutowitError {
    /// The front-end rejected the source.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Execution aborted.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Result type alias for autowit operations.
pub type Result<T> = std::result::Result<T, AutowitError>;
