//! Program driver: source lines in, witness out
//!
//! Ties the front-end and the execution core together. An `Evaluator` owns
//! one run's environment and context; independent runs get independent
//! evaluators and cannot interfere.

use tracing::debug;

use crate::ast::Block;
use crate::context::{AssertionPolicy, EvalContext};
use crate::environment::Environment;
use crate::error::Result;
use crate::eval::Execute;
use crate::field::Fq;
use crate::parser::parse_program;
use crate::witness::{AssertionRecord, Witness};

/// A single execution run: parses programs and executes them against an
/// owned environment, accumulating the witness.
///
/// # Example
///
/// ```
/// use autowit::Evaluator;
///
/// let mut evaluator = Evaluator::new();
/// evaluator.run_lines(&["x = 3", "y = NEG x"]).unwrap();
///
/// assert!(evaluator.env().contains("y"));
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    env: Environment,
    ctx: EvalContext,
}

impl Evaluator {
    /// Create an evaluator with the default report-and-continue assertion
    /// policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with the given failed-assertion policy.
    pub fn with_policy(policy: AssertionPolicy) -> Self {
        Self {
            env: Environment::new(),
            ctx: EvalContext::with_policy(policy),
        }
    }

    /// Parse and execute a program given as source lines.
    ///
    /// # Errors
    ///
    /// Returns parse errors from the front-end and evaluation errors from
    /// execution; under the strict policy a failed assertion is an error too.
    pub fn run_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        let block = parse_program(lines)?;
        self.run_block(&block)
    }

    /// Parse and execute a program given as one source string, split on
    /// line breaks.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Evaluator::run_lines`].
    pub fn run_source(&mut self, source: &str) -> Result<()> {
        let lines: Vec<&str> = source.lines().collect();
        self.run_lines(&lines)
    }

    /// Execute an already-parsed block.
    ///
    /// # Errors
    ///
    /// Returns evaluation errors from execution.
    pub fn run_block(&mut self, block: &Block) -> Result<()> {
        debug!(statements = block.stmts.len(), "executing block");
        block.exec(&mut self.env, &mut self.ctx)?;
        debug!(
            bindings = self.env.len(),
            assertions = self.ctx.assertions().len(),
            "run complete"
        );
        Ok(())
    }

    /// Look up a variable in the current environment.
    pub fn get(&self, name: &str) -> Option<&Fq> {
        self.env.get(name)
    }

    /// The current variable bindings.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Assertion outcomes recorded so far, in execution order.
    pub fn assertions(&self) -> &[AssertionRecord] {
        self.ctx.assertions()
    }

    /// Consume the evaluator, yielding the witness: the final bindings and
    /// every assertion outcome.
    pub fn into_witness(self) -> Witness {
        Witness {
            bindings: self.env,
            assertions: self.ctx.into_assertions(),
        }
    }
}
