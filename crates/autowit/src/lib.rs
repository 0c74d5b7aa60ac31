//! # Autowit
//!
//! A witness-generating interpreter for a prime-field arithmetic DSL.
//!
//! Autowit executes small line-oriented programs whose only value type is an
//! element of the BN254 base field. Running a program produces a *witness*:
//! the final variable-to-value bindings plus the outcome of every asserted
//! constraint, the trace a caller inspects or persists downstream to show a
//! circuit's constraints are satisfiable.
//!
//! ## Architecture
//!
//! - **Parser**: line-oriented source text to AST
//! - **Evaluator**: tree-walking execution against a mutable environment
//! - **Witness**: final bindings and assertion outcomes
//!
//! ```text
//! Source Lines → [Parser] → Block → [Evaluator] → Witness
//! ```
//!
//! ## Example
//!
//! ```
//! use autowit::Evaluator;
//!
//! let mut evaluator = Evaluator::new();
//! evaluator
//!     .run_lines(&["x = 10", "y = 5", "z = x + y", "ASSERT z"])
//!     .unwrap();
//!
//! let witness = evaluator.into_witness();
//! assert_eq!(witness.bindings.get("z").unwrap().to_string(), "15");
//! assert!(witness.satisfied());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod evaluator;
pub mod field;
pub mod parser;
pub mod witness;

// Re-export main types
pub use ast::{
    Assertion, Assignment, BinOp, BinaryExpr, Block, Expr, IfElse, Stmt, UnOp, UnaryExpr, Variable,
};
pub use context::{AssertionPolicy, EvalContext};
pub use environment::Environment;
pub use error::{AutowitError, EvalError, ParseError, Result};
pub use eval::{eval_expr, exec_block, exec_stmt, Evaluate, Execute};
pub use evaluator::Evaluator;
pub use field::{modulus, Fq};
pub use parser::{parse_expr, parse_program};
pub use witness::{AssertionRecord, Witness};

/// Autowit version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
