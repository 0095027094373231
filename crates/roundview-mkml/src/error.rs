use std::fmt;

/// What went wrong while reading a `.mkml` source.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    UnexpectedChar(char),
    UnterminatedString,
    InvalidNumber(String),
    /// A number carried a suffix that is not a length unit.
    UnknownUnit(String),
    /// The parser wanted one thing and found another.
    Expected { expected: &'static str, found: String },
    UnclosedBlock,
    EmptyDocument,
}

/// A parse error with its 1-based source position.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ErrorKind,
    pub line: usize,
    pub col: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnexpectedChar(c) => write!(f, "unexpected character {c:?}"),
            ErrorKind::UnterminatedString => f.write_str("unterminated string literal"),
            ErrorKind::InvalidNumber(s) => write!(f, "invalid number {s:?}"),
            ErrorKind::UnknownUnit(u) => write!(f, "unknown unit {u:?} (expected dp, dip, sp or px)"),
            ErrorKind::Expected { expected, found } => write!(f, "expected {expected}, found {found}"),
            ErrorKind::UnclosedBlock => f.write_str("unclosed '{' block"),
            ErrorKind::EmptyDocument => f.write_str("document contains no views"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mkml parse error at {}:{}: {}", self.line, self.col, self.kind)
    }
}

impl std::error::Error for ParseError {}
