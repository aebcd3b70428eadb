mod parser;
pub use parser::tokenizer::Tokenizer;
pub use parser::{
    parse, tokenize_line, AddOperator, Expression, Factor, LexError, MulOperator, ParseError,
    Payload, Sign, Span, Term, Token, TokenType, MAX_NESTING,
};

mod interpreter;
pub use interpreter::{evaluate, EvalError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Runs one line through the tokenizer, the parser and the interpreter,
/// stopping at the first stage that fails.
pub fn calculate(line: &str) -> Result<i64, Error> {
    let tokens = tokenize_line(line)?;
    let tree = parse(&tokens)?;
    Ok(evaluate(&tree)?)
}
