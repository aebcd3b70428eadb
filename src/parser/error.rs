use super::locations::Span;
use super::tokenizer::TokenType;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("Found an unknown character, '{character}' at {span}")]
    UnknownCharacter { character: char, span: Span },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unexpected token type, {found} at {span}, expected {expected}")]
    UnexpectedToken {
        found: TokenType,
        expected: &'static str,
        span: Span,
    },
    #[error("No tokens left, expected an operand")]
    MissingOperand,
    #[error("Missing closing parenthesis for '(' at {opened_at}")]
    MissingClosingParen { opened_at: Span },
    #[error("Parentheses nested deeper than {limit} levels at {span}")]
    TooDeeplyNested { limit: usize, span: Span },
}
