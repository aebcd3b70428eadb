mod ast;
mod error;
mod grammar;
mod locations;
pub mod tokenizer;

pub use ast::*;
pub use error::{LexError, ParseError};
pub use grammar::{parse, MAX_NESTING};
pub use locations::Span;
pub use tokenizer::{tokenize_line, Token, TokenType};
