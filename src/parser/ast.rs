use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub(crate) fn flip(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Digits exactly as scanned; converted to a value by the interpreter.
    Number(String),
    Nested(Box<Expression>),
}

/// A signed operand. Any run of unary `+`/`-` is folded into `sign`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factor {
    pub(crate) sign: Sign,
    pub(crate) payload: Payload,
}

impl Factor {
    pub(crate) fn number(digits: &str) -> Self {
        Self {
            sign: Sign::Positive,
            payload: Payload::Number(digits.to_string()),
        }
    }
    pub(crate) fn nested(expression: Expression) -> Self {
        Self {
            sign: Sign::Positive,
            payload: Payload::Nested(Box::new(expression)),
        }
    }
    // Stands in for a detached child while a chain is torn down.
    fn placeholder() -> Self {
        Self {
            sign: Sign::Positive,
            payload: Payload::Number(String::new()),
        }
    }
    pub(crate) fn negated(self) -> Self {
        Self {
            sign: self.sign.flip(),
            ..self
        }
    }
    pub fn sign(&self) -> Sign {
        self.sign
    }
    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOperator {
    Multiply,
    Divide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOperator {
    Plus,
    Minus,
}

/// Chains of `*` and `/` lean left: `a*b/c` is `Compound(Compound(Simple(a), *, b), /, c)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Simple(Factor),
    Compound(Box<Term>, MulOperator, Factor),
}

/// Chains of `+` and `-` lean left the same way as [`Term`]. The right operand
/// of a compound expression is always `Expression::Simple`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Simple(Term),
    Compound(Box<Expression>, AddOperator, Box<Expression>),
}

impl Expression {
    pub(crate) fn apply(self, op: AddOperator, term: Term) -> Self {
        Self::Compound(Box::new(self), op, Box::new(Self::Simple(term)))
    }

    /// The innermost term of the left spine, followed by every `(op, right)`
    /// pair from the innermost compound node outwards.
    pub fn spine(&self) -> (&Term, Vec<(AddOperator, &Expression)>) {
        let mut rest = vec![];
        let mut node = self;
        loop {
            match node {
                Self::Simple(term) => {
                    rest.reverse();
                    return (term, rest);
                }
                Self::Compound(left, op, right) => {
                    rest.push((*op, right.as_ref()));
                    node = left;
                }
            }
        }
    }

    fn detach_left(&mut self) -> Option<Self> {
        match self {
            Self::Compound(left, _, _) => Some(std::mem::replace(
                left.as_mut(),
                Self::Simple(Term::Simple(Factor::placeholder())),
            )),
            Self::Simple(_) => None,
        }
    }
}

impl Term {
    pub(crate) fn apply(self, op: MulOperator, factor: Factor) -> Self {
        Self::Compound(Box::new(self), op, factor)
    }

    /// The innermost factor of the left spine, followed by every `(op, right)`
    /// pair from the innermost compound node outwards.
    pub fn spine(&self) -> (&Factor, Vec<(MulOperator, &Factor)>) {
        let mut rest = vec![];
        let mut node = self;
        loop {
            match node {
                Self::Simple(factor) => {
                    rest.reverse();
                    return (factor, rest);
                }
                Self::Compound(left, op, right) => {
                    rest.push((*op, right));
                    node = left;
                }
            }
        }
    }

    fn detach_left(&mut self) -> Option<Self> {
        match self {
            Self::Compound(left, _, _) => Some(std::mem::replace(
                left.as_mut(),
                Self::Simple(Factor::placeholder()),
            )),
            Self::Simple(_) => None,
        }
    }
}

impl fmt::Display for MulOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Multiply => f.write_str("*"),
            Self::Divide => f.write_str("/"),
        }
    }
}

impl fmt::Display for AddOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
        }
    }
}

// Rendering is fully parenthesised so the tree shape is visible.
impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }
        match &self.payload {
            Payload::Number(digits) => f.write_str(digits),
            Payload::Nested(expression) => write!(f, "({expression})"),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, rest) = self.spine();
        for _ in &rest {
            f.write_str("[")?;
        }
        write!(f, "{first}")?;
        for (op, right) in &rest {
            write!(f, " {op} {right}]")?;
        }
        Ok(())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, rest) = self.spine();
        for _ in &rest {
            f.write_str("[")?;
        }
        write!(f, "{first}")?;
        for (op, right) in &rest {
            write!(f, " {op} {right}]")?;
        }
        Ok(())
    }
}

// A long chain nests as deep as it is long, so tearing it down walks the
// left spine in a loop instead of letting each node drop its child.
impl Drop for Term {
    fn drop(&mut self) {
        let mut next = self.detach_left();
        while let Some(mut node) = next {
            next = node.detach_left();
        }
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut next = self.detach_left();
        while let Some(mut node) = next {
            next = node.detach_left();
        }
    }
}
