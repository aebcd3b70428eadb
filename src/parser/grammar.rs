// # ========================= GRAMMAR =========================
//
// Upper case names denote token types.
//
// expression: term (('+' | '-') term)*
// term:       factor (('*' | '/') factor)*
// factor:     ('+' | '-') factor | primary
// primary:    NUMBER | '(' expression ')'
//
// Every rule takes the remaining tokens and hands back the node it built
// together with the tokens it did not consume.

use super::ast::*;
use super::error::ParseError;
use super::tokenizer::{Token, TokenType as TT};

pub(crate) type ParseResult<'a, Output> = Result<(Output, &'a [Token]), ParseError>;

/// How many parentheses may be open at once.
pub const MAX_NESTING: usize = 256;

/// Parses a whole line. Tokens left over after the top-level expression are an error.
pub fn parse(input: &[Token]) -> Result<Expression, ParseError> {
    let (tree, rest) = expression(input, 0)?;
    if let Some(token) = rest.first() {
        return Err(unexpected(token, "end of input"));
    }
    tracing::debug!("parsed {}", tree);
    Ok(tree)
}

// expression: term (('+' | '-') term)*
fn expression(input: &[Token], depth: usize) -> ParseResult<Expression> {
    let (first, mut rest) = term(input, depth)?;
    let mut expr = Expression::Simple(first);
    while let Some(op) = rest.first().and_then(add_operator) {
        let (next, after) = term(&rest[1..], depth)?;
        tracing::trace!("expression: {} {}", op, next);
        expr = expr.apply(op, next);
        rest = after;
    }
    Ok((expr, rest))
}

// term: factor (('*' | '/') factor)*
fn term(input: &[Token], depth: usize) -> ParseResult<Term> {
    let (first, mut rest) = factor(input, depth)?;
    let mut chain = Term::Simple(first);
    while let Some(op) = rest.first().and_then(mul_operator) {
        let (next, after) = factor(&rest[1..], depth)?;
        tracing::trace!("term: {} {}", op, next);
        chain = chain.apply(op, next);
        rest = after;
    }
    Ok((chain, rest))
}

// factor: ('+' | '-') factor | primary
//
// The sign prefix is consumed in a loop; each '-' flips the sign once.
fn factor(input: &[Token], depth: usize) -> ParseResult<Factor> {
    let mut negative = false;
    let mut rest = input;
    while let Some(token) = rest.first() {
        match token.typ {
            TT::PLUS => {}
            TT::MINUS => negative = !negative,
            _ => break,
        }
        rest = &rest[1..];
    }
    let (inner, rest) = primary(rest, depth)?;
    if negative {
        Ok((inner.negated(), rest))
    } else {
        Ok((inner, rest))
    }
}

// primary: NUMBER | '(' expression ')'
fn primary(input: &[Token], depth: usize) -> ParseResult<Factor> {
    let Some(token) = input.first() else {
        return Err(ParseError::MissingOperand);
    };
    match token.typ {
        TT::NUMBER => Ok((Factor::number(&token.lexeme), &input[1..])),
        TT::LPAREN => {
            if depth == MAX_NESTING {
                return Err(ParseError::TooDeeplyNested {
                    limit: MAX_NESTING,
                    span: token.span.clone(),
                });
            }
            let (nested, rest) = expression(&input[1..], depth + 1)?;
            match rest.first() {
                Some(closing) if closing.typ == TT::RPAREN => {
                    Ok((Factor::nested(nested), &rest[1..]))
                }
                _ => Err(ParseError::MissingClosingParen {
                    opened_at: token.span.clone(),
                }),
            }
        }
        _ => Err(unexpected(token, "a number or '('")),
    }
}

fn add_operator(token: &Token) -> Option<AddOperator> {
    match token.typ {
        TT::PLUS => Some(AddOperator::Plus),
        TT::MINUS => Some(AddOperator::Minus),
        _ => None,
    }
}

fn mul_operator(token: &Token) -> Option<MulOperator> {
    match token.typ {
        TT::MULTIPLY => Some(MulOperator::Multiply),
        TT::DIVIDE => Some(MulOperator::Divide),
        _ => None,
    }
}

fn unexpected(token: &Token, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.typ,
        expected,
        span: token.span.clone(),
    }
}
