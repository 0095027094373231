use crate::ast::{Attr, DslDocument, Node, Value};
use crate::error::{ErrorKind, ParseError};
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| (t.line, t.col))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    /// Look at the token `offset` positions ahead of current without consuming.
    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, kind: ErrorKind) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(kind, line, col)
    }

    fn expected(&self, expected: &'static str) -> ParseError {
        self.err(ErrorKind::Expected { expected, found: self.peek().describe() })
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Token::Ident(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(self.expected("a view name")),
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<DslDocument, ParseError> {
        let mut nodes = Vec::new();
        while self.peek() != &Token::Eof {
            nodes.push(self.parse_node()?);
        }
        if nodes.is_empty() {
            return Err(self.err(ErrorKind::EmptyDocument));
        }
        Ok(DslDocument { nodes })
    }

    // ── Node ──────────────────────────────────────────────────────────────

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        let (line, _) = self.current_pos();
        let view = self.expect_ident()?;

        // Optional inline string content: `RoundImageView "avatar.png"`
        let content = match self.peek() {
            Token::Str(s) => {
                let s = s.clone();
                self.advance();
                Some(s)
            }
            _ => None,
        };

        let (attrs, children) = if self.peek() == &Token::LBrace {
            self.parse_block()?
        } else {
            (Vec::new(), Vec::new())
        };

        Ok(Node { view, content, attrs, children, line })
    }

    // ── Block ─────────────────────────────────────────────────────────────

    /// Parse `{ item* }` where each item is either a `key: value` attribute
    /// or a nested view.
    ///
    /// `Ident ":"` starts an attribute; any other `Ident` starts a view.
    fn parse_block(&mut self) -> Result<(Vec<Attr>, Vec<Node>), ParseError> {
        self.advance(); // `{`
        let mut attrs = Vec::new();
        let mut children = Vec::new();

        loop {
            match self.peek() {
                Token::RBrace => {
                    self.advance();
                    break;
                }
                Token::Eof => return Err(self.err(ErrorKind::UnclosedBlock)),
                Token::Ident(_) if self.peek_ahead(1) == &Token::Colon => {
                    attrs.push(self.parse_attr()?);
                }
                Token::Ident(_) => children.push(self.parse_node()?),
                _ => return Err(self.expected("an attribute (key: value) or a view name")),
            }
        }

        Ok((attrs, children))
    }

    // ── Attr ──────────────────────────────────────────────────────────────

    fn parse_attr(&mut self) -> Result<Attr, ParseError> {
        let (line, _) = self.current_pos();
        let key = self.expect_ident()?;
        self.advance(); // `:`
        let value = self.parse_value()?;
        Ok(Attr { key, value, line })
    }

    // ── Value ─────────────────────────────────────────────────────────────

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let value = match self.peek() {
            Token::Str(s) => Value::Str(s.clone()),
            Token::Number(n) => Value::Number(*n),
            Token::Dimension(n, u) => Value::Dimension(*n, *u),
            Token::Bool(b) => Value::Bool(*b),
            Token::Ident(s) => Value::Ident(s.clone()),
            _ => return Err(self.expected("a value")),
        };
        self.advance();
        Ok(value)
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse a `.mkml` source string into a [`DslDocument`].
pub fn parse_str(src: &str) -> Result<DslDocument, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
