//! Evaluation tests: expressions against an environment, statements against
//! a run's mutable state

use autowit::*;

// Helper to evaluate an expression against bindings
fn eval_with(expr: &Expr, bindings: &[(&str, u64)]) -> std::result::Result<Fq, EvalError> {
    let mut env = Environment::new();
    for (name, value) in bindings {
        env.assign(*name, Fq::from(*value));
    }
    eval_expr(expr, &env)
}

// Helper to execute statements against fresh state
fn exec(stmts: Vec<Stmt>) -> (Environment, EvalContext) {
    let mut env = Environment::new();
    let mut ctx = EvalContext::new();
    exec_block(&Block::new(stmts), &mut env, &mut ctx).unwrap();
    (env, ctx)
}

fn assign(name: &str, value: Expr) -> Stmt {
    Stmt::Assign(Assignment {
        target: Variable::new(name),
        value,
    })
}

// ═══════════════════════════════════════════════════════════════════════
// Expression Evaluation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_number() {
    let expr = Expr::Number(Fq::from(42));
    assert_eq!(eval_with(&expr, &[]).unwrap(), Fq::from(42));
}

#[test]
fn test_eval_variable() {
    let expr = Expr::variable("x");
    assert_eq!(eval_with(&expr, &[("x", 7)]).unwrap(), Fq::from(7));
}

#[test]
fn test_eval_undefined_variable() {
    let expr = Expr::variable("x");
    match eval_with(&expr, &[]).unwrap_err() {
        EvalError::UndefinedVariable { name } => assert_eq!(name, "x"),
        other => panic!("expected UndefinedVariable, got {other:?}"),
    }
}

#[test]
fn test_eval_negation() {
    let expr = Expr::unary(UnOp::Neg, Expr::variable("x"));
    assert_eq!(eval_with(&expr, &[("x", 3)]).unwrap(), -Fq::from(3));
}

#[test]
fn test_eval_binary_operators() {
    let cases = [(BinOp::Add, 15u64), (BinOp::Mul, 50)];
    for (op, expected) in cases {
        let expr = Expr::binary(op, Expr::variable("x"), Expr::variable("y"));
        assert_eq!(
            eval_with(&expr, &[("x", 10), ("y", 5)]).unwrap(),
            Fq::from(expected)
        );
    }

    let expr = Expr::binary(BinOp::Sub, Expr::variable("x"), Expr::variable("y"));
    assert_eq!(eval_with(&expr, &[("x", 10), ("y", 5)]).unwrap(), Fq::from(5));
}

#[test]
fn test_eval_reports_left_operand_error_first() {
    // Both operands are unbound; left-then-right order makes the report
    // deterministic
    let expr = Expr::binary(BinOp::Add, Expr::variable("left"), Expr::variable("right"));
    match eval_with(&expr, &[]).unwrap_err() {
        EvalError::UndefinedVariable { name } => assert_eq!(name, "left"),
        other => panic!("expected UndefinedVariable, got {other:?}"),
    }
}

#[test]
fn test_eval_does_not_mutate_environment() {
    let mut env = Environment::new();
    env.assign("x", Fq::from(1));

    let expr = Expr::binary(BinOp::Add, Expr::variable("x"), Expr::Number(Fq::from(1)));
    eval_expr(&expr, &env).unwrap();

    assert_eq!(env.len(), 1);
    assert_eq!(env.get("x"), Some(&Fq::from(1)));
}

// ═══════════════════════════════════════════════════════════════════════
// Assignment
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_exec_assignment_overwrite_keeps_second_value() {
    let (env, _) = exec(vec![
        assign("x", Expr::Number(Fq::from(1))),
        assign("x", Expr::Number(Fq::from(2))),
    ]);

    assert_eq!(env.get("x"), Some(&Fq::from(2)));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_exec_assignment_sees_prior_bindings() {
    let (env, _) = exec(vec![
        assign("x", Expr::Number(Fq::from(10))),
        assign("y", Expr::binary(BinOp::Add, Expr::variable("x"), Expr::variable("x"))),
    ]);

    assert_eq!(env.get("y"), Some(&Fq::from(20)));
}

// ═══════════════════════════════════════════════════════════════════════
// Conditionals
// ═══════════════════════════════════════════════════════════════════════

fn branch_stmt(condition: u64) -> Stmt {
    Stmt::If(IfElse {
        condition: Expr::Number(Fq::from(condition)),
        then_block: Block::new(vec![assign("taken", Expr::Number(Fq::from(1)))]),
        else_block: Block::new(vec![assign("taken", Expr::Number(Fq::from(0)))]),
    })
}

#[test]
fn test_exec_if_nonzero_takes_then_branch() {
    let (env, _) = exec(vec![branch_stmt(10)]);
    assert_eq!(env.get("taken"), Some(&Fq::from(1)));
}

#[test]
fn test_exec_if_zero_takes_else_branch() {
    let (env, _) = exec(vec![branch_stmt(0)]);
    assert_eq!(env.get("taken"), Some(&Fq::from(0)));
}

#[test]
fn test_exec_if_exactly_one_branch_executes() {
    // Each branch binds a distinct name, so the untaken branch leaves no trace
    let stmt = Stmt::If(IfElse {
        condition: Expr::Number(Fq::from(1)),
        then_block: Block::new(vec![assign("then_ran", Expr::Number(Fq::from(1)))]),
        else_block: Block::new(vec![assign("else_ran", Expr::Number(Fq::from(1)))]),
    });
    let (env, _) = exec(vec![stmt]);

    assert!(env.contains("then_ran"));
    assert!(!env.contains("else_ran"));
}

#[test]
fn test_exec_if_empty_branch_is_noop() {
    let stmt = Stmt::If(IfElse {
        condition: Expr::Number(Fq::from(0)),
        then_block: Block::new(vec![assign("x", Expr::Number(Fq::from(1)))]),
        else_block: Block::default(),
    });
    let (env, _) = exec(vec![stmt]);

    assert!(env.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Assertions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_exec_assert_nonzero_passes() {
    let (_, ctx) = exec(vec![Stmt::Assert(Assertion {
        expr: Expr::Number(Fq::from(15)),
    })]);

    assert_eq!(ctx.assertions().len(), 1);
    assert!(ctx.assertions()[0].passed);
    assert_eq!(ctx.assertions()[0].value, Fq::from(15));
}

#[test]
fn test_exec_assert_zero_is_recorded_failure() {
    let (_, ctx) = exec(vec![
        Stmt::Assert(Assertion {
            expr: Expr::Number(Fq::from(0)),
        }),
        // Execution continues under the default policy
        assign("after", Expr::Number(Fq::from(1))),
    ]);

    assert!(!ctx.assertions()[0].passed);
}

#[test]
fn test_exec_assert_strict_halts_run() {
    let mut env = Environment::new();
    let mut ctx = EvalContext::with_policy(AssertionPolicy::Strict);

    let block = Block::new(vec![
        Stmt::Assert(Assertion {
            expr: Expr::Number(Fq::from(0)),
        }),
        assign("after", Expr::Number(Fq::from(1))),
    ]);
    let err = exec_block(&block, &mut env, &mut ctx).unwrap_err();

    assert!(matches!(err, EvalError::AssertionFailed { .. }));
    assert!(!env.contains("after"));
}

#[test]
fn test_exec_assert_outcomes_in_execution_order() {
    let (_, ctx) = exec(vec![
        Stmt::Assert(Assertion {
            expr: Expr::Number(Fq::from(1)),
        }),
        Stmt::Assert(Assertion {
            expr: Expr::Number(Fq::from(0)),
        }),
        Stmt::Assert(Assertion {
            expr: Expr::Number(Fq::from(2)),
        }),
    ]);

    let passed: Vec<bool> = ctx.assertions().iter().map(|record| record.passed).collect();
    assert_eq!(passed, vec![true, false, true]);
}

// ═══════════════════════════════════════════════════════════════════════
// Bare Expressions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_exec_bare_expression_discards_value() {
    let (env, ctx) = exec(vec![
        assign("x", Expr::Number(Fq::from(1))),
        Stmt::Expr(Expr::variable("x")),
    ]);

    assert_eq!(env.len(), 1);
    assert!(ctx.assertions().is_empty());
}

#[test]
fn test_exec_bare_expression_still_fails_on_undefined() {
    let mut env = Environment::new();
    let mut ctx = EvalContext::new();

    let block = Block::new(vec![Stmt::Expr(Expr::variable("ghost"))]);
    assert!(exec_block(&block, &mut env, &mut ctx).is_err());
}
