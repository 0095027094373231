use crate::ast::Unit;
use crate::error::{ErrorKind, ParseError};

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Ident(String),
    Str(String),
    Number(f32),
    Dimension(f32, Unit),
    Bool(bool),
    // Punctuation
    Colon,
    LBrace,
    RBrace,
    // Sentinel
    Eof,
}

impl Token {
    /// Short description used in "expected X, found Y" messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Ident(s) => format!("identifier `{s}`"),
            Token::Str(s) => format!("string {s:?}"),
            Token::Number(n) => format!("number {n}"),
            Token::Dimension(n, u) => format!("dimension {n}{u:?}"),
            Token::Bool(b) => format!("`{b}`"),
            Token::Colon => "':'".to_string(),
            Token::LBrace => "'{'".to_string(),
            Token::RBrace => "'}'".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}

/// A token with the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            let (line, col) = (self.line, self.col);
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, line, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn err(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.line, self.col)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            if self.rest().starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else if self.rest().starts_with("/*") {
                self.advance();
                self.advance();
                while !self.rest().starts_with("*/") {
                    if self.advance().is_none() {
                        return; // unterminated; EOF surfaces on the next token
                    }
                }
                self.advance();
                self.advance();
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let Some(ch) = self.peek() else {
            return Ok(Token::Eof);
        };

        match ch {
            ':' => { self.advance(); Ok(Token::Colon) }
            '{' => { self.advance(); Ok(Token::LBrace) }
            '}' => { self.advance(); Ok(Token::RBrace) }
            '"' => self.lex_string(),
            c if c.is_ascii_digit() || c == '-' || c == '.' => self.lex_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.lex_word()),
            other => Err(self.err(ErrorKind::UnexpectedChar(other))),
        }
    }

    fn lex_string(&mut self) -> Result<Token, ParseError> {
        self.advance(); // opening `"`
        let mut s = String::new();
        loop {
            match self.advance() {
                None => return Err(self.err(ErrorKind::UnterminatedString)),
                Some('"') => break,
                Some('\\') => match self.advance() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some(c) => s.push(c),
                    None => return Err(self.err(ErrorKind::UnterminatedString)),
                },
                Some(c) => s.push(c),
            }
        }
        Ok(Token::Str(s))
    }

    /// Number, optionally followed directly by a unit suffix: `12`, `-0.5`, `12dp`.
    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        let digits = &self.src[start..self.pos];
        let value = digits
            .parse::<f32>()
            .map_err(|_| self.err(ErrorKind::InvalidNumber(digits.to_string())))?;

        let suffix_start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.advance();
        }
        let unit = match &self.src[suffix_start..self.pos] {
            "" => return Ok(Token::Number(value)),
            "px" => Unit::Px,
            "dp" | "dip" => Unit::Dp,
            "sp" => Unit::Sp,
            other => return Err(self.err(ErrorKind::UnknownUnit(other.to_string()))),
        };
        Ok(Token::Dimension(value, unit))
    }

    fn lex_word(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        match &self.src[start..self.pos] {
            "true" => Token::Bool(true),
            "false" => Token::Bool(false),
            word => Token::Ident(word.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn dimensions_carry_units() {
        assert_eq!(
            kinds("12dp 3px 4dip 2sp 7"),
            vec![
                Token::Dimension(12.0, Unit::Dp),
                Token::Dimension(3.0, Unit::Px),
                Token::Dimension(4.0, Unit::Dp),
                Token::Dimension(2.0, Unit::Sp),
                Token::Number(7.0),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn booleans_are_keywords() {
        assert_eq!(kinds("true false truth"), vec![
            Token::Bool(true),
            Token::Bool(false),
            Token::Ident("truth".into()),
            Token::Eof,
        ]);
    }

    #[test]
    fn positions_are_one_based() {
        let toks = Lexer::new("A {\n  radius: 4\n}").tokenize().unwrap();
        let radius = toks.iter().find(|t| t.token == Token::Ident("radius".into())).unwrap();
        assert_eq!((radius.line, radius.col), (2, 3));
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let err = Lexer::new("12em").tokenize().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownUnit("em".into()));
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(kinds("/* a */ x // b\n"), vec![Token::Ident("x".into()), Token::Eof]);
    }
}
