use super::error::LexError;
use super::locations::Span;
use const_format::concatcp;
use derivative::Derivative;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Derivative, Clone, Debug)]
#[derivative(PartialEq, Eq)]
pub struct Token {
    pub(crate) typ: TokenType,
    pub(crate) lexeme: String,
    #[derivative(PartialEq = "ignore")]
    pub(crate) span: Span,
}

impl Token {
    pub fn new(typ: TokenType, lexeme: &str) -> Self {
        Self {
            typ,
            lexeme: lexeme.to_string(),
            span: Span::default(),
        }
    }
    pub fn typ(&self) -> TokenType {
        self.typ
    }
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }
    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}')", self.typ, self.lexeme)
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenType {
    NUMBER,
    PLUS,
    MINUS,
    MULTIPLY,
    DIVIDE,
    LPAREN,
    RPAREN,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// What a pattern produces when it matches.
#[derive(Clone, Copy)]
enum Scanned {
    Token(TokenType),
    Whitespace,
}

const S_NUMBER: &str = r"[0-9]+";
const S_PLUS: &str = r"\+";
const S_MINUS: &str = r"-";
const S_MULTIPLY: &str = r"\*";
const S_DIVIDE: &str = r"/";
const S_LPAREN: &str = r"\(";
const S_RPAREN: &str = r"\)";
const S_WHITESPACE: &str = r"\s";

macro_rules! anchored {
    ($t:expr) => {
        concatcp!("^", $t)
    };
}

// Tried in order; the first pattern that matches wins.
static PATTERNS: Lazy<[(Regex, Scanned); 8]> = Lazy::new(|| {
    let compile = |s: &str| Regex::new(s).expect("Error compiling regex.");
    [
        (compile(anchored!(S_NUMBER)), Scanned::Token(TokenType::NUMBER)),
        (compile(anchored!(S_PLUS)), Scanned::Token(TokenType::PLUS)),
        (compile(anchored!(S_MINUS)), Scanned::Token(TokenType::MINUS)),
        (compile(anchored!(S_MULTIPLY)), Scanned::Token(TokenType::MULTIPLY)),
        (compile(anchored!(S_DIVIDE)), Scanned::Token(TokenType::DIVIDE)),
        (compile(anchored!(S_LPAREN)), Scanned::Token(TokenType::LPAREN)),
        (compile(anchored!(S_RPAREN)), Scanned::Token(TokenType::RPAREN)),
        (compile(anchored!(S_WHITESPACE)), Scanned::Whitespace),
    ]
});

pub struct Tokenizer<'a> {
    line: &'a str,
    start: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            start: 0,
            column: 1,
            tokens: vec![],
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while self.start < self.line.len() {
            self.next_match()?;
        }
        tracing::debug!("scanned {} token(s)", self.tokens.len());
        Ok(self.tokens)
    }

    fn next_match(&mut self) -> Result<(), LexError> {
        let line = self.line;
        let rest = &line[self.start..];
        for (regex, scanned) in PATTERNS.iter() {
            if let Some(m) = regex.find(rest) {
                let end = self.start + m.end();
                if let Scanned::Token(typ) = *scanned {
                    self.push(typ, end);
                }
                self.column += m.as_str().chars().count();
                self.start = end;
                return Ok(());
            }
        }
        // `rest` is non-empty here, so there is always a character to report.
        let character = rest.chars().next().unwrap_or_default();
        Err(LexError::UnknownCharacter {
            character,
            span: Span::new(self.start, self.start + character.len_utf8(), self.column),
        })
    }

    fn push(&mut self, typ: TokenType, end: usize) {
        let token = Token {
            typ,
            lexeme: self.line[self.start..end].to_string(),
            span: Span::new(self.start, end, self.column),
        };
        tracing::trace!("token {} at {}", token, token.span);
        self.tokens.push(token);
    }
}

pub fn tokenize_line(line: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(line).tokenize()
}
