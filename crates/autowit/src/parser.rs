//! Line-oriented textual front-end
//!
//! The grammar is intentionally minimal and token-count driven: one statement
//! per logical line, conditional bodies spanning multiple lines delimited by
//! keyword markers. There is no operator precedence and no nesting — each
//! operand of a binary form must itself reduce to exactly one token, so an
//! expression like `a + b * c` cannot be written. Programs that need an
//! intermediate value bind it to a variable first.

use crate::ast::{Assertion, Assignment, Block, Expr, IfElse, Stmt, UnOp, Variable};
use crate::error::ParseError;
use crate::field::Fq;

const ASSERT_KEYWORD: &str = "ASSERT";
const PRINT_KEYWORD: &str = "PRINT";
const IF_KEYWORD: &str = "IF";
const THEN_KEYWORD: &str = "THEN";
const ELSE_KEYWORD: &str = "ELSE";

/// Parse an ordered sequence of source lines into a block.
///
/// Blank lines are skipped. A conditional extends to the end of its logical
/// unit, so an `IF` line consumes every remaining line of the sequence.
///
/// # Errors
///
/// Returns [`ParseError::UnrecognizedStatement`] for a line matching no
/// statement form and [`ParseError::MalformedExpression`] for a token
/// sequence matching no expression shape.
pub fn parse_program<S: AsRef<str>>(lines: &[S]) -> Result<Block, ParseError> {
    let lines: Vec<String> = lines.iter().map(|line| line.as_ref().to_string()).collect();
    parse_lines(&lines)
}

fn parse_lines(lines: &[String]) -> Result<Block, ParseError> {
    let mut stmts = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        i += 1;

        if line.is_empty() {
            continue;
        }

        if let Some(rest) = keyword_rest(line, IF_KEYWORD) {
            // The conditional's logical unit is the remainder of the line
            // plus every remaining line
            stmts.push(parse_conditional(line, rest, &lines[i..])?);
            break;
        }

        stmts.push(parse_statement(line)?);
    }

    Ok(Block::new(stmts))
}

/// Parse a single-line statement: `ASSERT <tokens>`, `PRINT <tokens>`, or
/// `NAME = <tokens>`.
fn parse_statement(line: &str) -> Result<Stmt, ParseError> {
    if let Some(rest) = keyword_rest(line, ASSERT_KEYWORD) {
        let expr = parse_expr(&tokens(rest))?;
        return Ok(Stmt::Assert(Assertion { expr }));
    }

    if let Some(rest) = keyword_rest(line, PRINT_KEYWORD) {
        let expr = parse_expr(&tokens(rest))?;
        return Ok(Stmt::Expr(expr));
    }

    if let Some((name, value)) = line.split_once('=') {
        let name = name.trim();
        // The target must be a single bare name
        if !name.is_empty() && name.split_whitespace().count() == 1 {
            let value = parse_expr(&tokens(value))?;
            return Ok(Stmt::Assign(Assignment {
                target: Variable::new(name),
                value,
            }));
        }
    }

    Err(ParseError::UnrecognizedStatement {
        line: line.to_string(),
    })
}

/// Parse a conditional unit: everything up to the first `THEN` is the
/// condition, the body splits at the first `ELSE` into then-span and
/// else-span, and each span re-parses through the top-level line parser.
/// A missing `ELSE` yields an empty else-block.
fn parse_conditional(line: &str, rest: &str, remaining: &[String]) -> Result<Stmt, ParseError> {
    let mut unit: Vec<String> = Vec::with_capacity(remaining.len() + 1);
    unit.push(rest.to_string());
    unit.extend(remaining.iter().cloned());

    let (condition_lines, body) = split_at_keyword(&unit, THEN_KEYWORD).ok_or_else(|| {
        ParseError::UnrecognizedStatement {
            line: line.to_string(),
        }
    })?;

    let condition_tokens: Vec<&str> = condition_lines
        .iter()
        .flat_map(|line| line.split_whitespace())
        .collect();
    let condition = parse_expr(&condition_tokens)?;

    let (then_lines, else_lines) = match split_at_keyword(&body, ELSE_KEYWORD) {
        Some((then_lines, else_lines)) => (then_lines, else_lines),
        None => (body, Vec::new()),
    };

    Ok(Stmt::If(IfElse {
        condition,
        then_block: parse_lines(&then_lines)?,
        else_block: parse_lines(&else_lines)?,
    }))
}

/// Parse a whitespace-split token list as an expression.
///
/// Shapes, selected by token count alone:
///
/// - 1 token: a field-element literal, or a variable reference when the
///   token does not parse as a decimal literal
/// - 2 tokens: negation; token 0 is discarded as the negation marker
/// - 3 tokens: a binary operation; the middle token selects the operator
///
/// # Errors
///
/// Returns [`ParseError::MalformedExpression`] for any other token count,
/// or a three-token form whose middle token is not `+`, `-`, or `*`.
pub fn parse_expr(tokens: &[&str]) -> Result<Expr, ParseError> {
    match tokens {
        [single] => Ok(match single.parse::<Fq>() {
            Ok(value) => Expr::Number(value),
            // Not a literal, so it names a variable
            Err(_) => Expr::variable(*single),
        }),

        [_, _] => Ok(Expr::unary(UnOp::Neg, parse_expr(&tokens[1..])?)),

        [_, op, _] => {
            let op = lookup_operator(op).ok_or_else(|| malformed(tokens))?;
            Ok(Expr::binary(
                op,
                parse_expr(&tokens[..1])?,
                parse_expr(&tokens[2..3])?,
            ))
        }

        _ => Err(malformed(tokens)),
    }
}

fn lookup_operator(token: &str) -> Option<crate::ast::BinOp> {
    use crate::ast::BinOp;

    match token {
        "+" => Some(BinOp::Add),
        "-" => Some(BinOp::Sub),
        "*" => Some(BinOp::Mul),
        _ => None,
    }
}

fn malformed(tokens: &[&str]) -> ParseError {
    ParseError::MalformedExpression {
        tokens: tokens.join(" "),
    }
}

fn tokens(span: &str) -> Vec<&str> {
    span.split_whitespace().collect()
}

/// Match a leading keyword, returning the remainder of the line. The keyword
/// must be followed by whitespace or end the line, so `IFFY` is not `IF`.
fn keyword_rest<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if rest.is_empty() {
        Some(rest)
    } else if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Split a span of lines at the first occurrence of `keyword` as a
/// standalone word. Tokens before the keyword on its line close the before
/// span; tokens after it open the after span.
fn split_at_keyword(lines: &[String], keyword: &str) -> Option<(Vec<String>, Vec<String>)> {
    for (row, line) in lines.iter().enumerate() {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(col) = words.iter().position(|word| *word == keyword) else {
            continue;
        };

        let mut before: Vec<String> = lines[..row].to_vec();
        let lead = words[..col].join(" ");
        if !lead.is_empty() {
            before.push(lead);
        }

        let mut after = Vec::new();
        let trail = words[col + 1..].join(" ");
        if !trail.is_empty() {
            after.push(trail);
        }
        after.extend(lines[row + 1..].iter().cloned());

        return Some((before, after));
    }
    None
}
