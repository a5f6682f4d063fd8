use crate::{
    errors::errors::{Error, ErrorImpl},
    Line, MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

/// Knobs that change what the scanner accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Let identifiers continue with ASCII digits (`x1`). Off by default, where an identifier
    /// body is letters and underscores only and `x1` scans as `x` followed by `1`.
    pub alphanumeric_identifiers: bool,
}

/// Everything one scan produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    /// Always ends with a single [TokenKind::EOF] token.
    pub tokens: Vec<Token>,
    pub errors: Vec<Error>,
}

impl ScanResult {
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub struct Scanner<'a> {
    source: &'a str,
    options: ScanOptions,
    start: usize,
    current: usize,
    start_line: Line,
    line: Line,
    tokens: Vec<Token>,
    errors: Vec<Error>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner::with_options(source, ScanOptions::default())
    }

    pub fn with_options(source: &'a str, options: ScanOptions) -> Scanner<'a> {
        Scanner {
            source,
            options,
            start: 0,
            current: 0,
            start_line: Line::first(),
            line: Line::first(),
            tokens: vec![],
            errors: vec![],
        }
    }

    pub fn scan_tokens(mut self) -> ScanResult {
        while !self.at_eof() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), None, self.line));

        ScanResult {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) {
        let c = match self.advance() {
            Some(c) => c,
            None => return,
        };

        match c {
            '(' => self.push(TokenKind::OpenParen),
            ')' => self.push(TokenKind::CloseParen),
            '{' => self.push(TokenKind::OpenCurly),
            '}' => self.push(TokenKind::CloseCurly),
            ',' => self.push(TokenKind::Comma),
            '.' => self.push(TokenKind::Dot),
            '-' => self.push(TokenKind::Minus),
            '+' => self.push(TokenKind::Plus),
            ';' => self.push(TokenKind::Semicolon),
            '*' => self.push(TokenKind::Star),
            '!' => self.push_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.push_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.push_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.push_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.match_next('/') {
                    // Line comment; the newline is left for the main loop to count.
                    while matches!(self.peek(), Some(c) if c != '\n') {
                        self.advance();
                    }
                } else {
                    self.push(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line.advance(),
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if is_alpha(c) => self.identifier(),
            c => self.error(ErrorImpl::UnexpectedCharacter { character: c }),
        }
    }

    fn identifier(&mut self) {
        while matches!(self.peek(), Some(c) if self.continues_identifier(c)) {
            self.advance();
        }

        let kind = match RESERVED_LOOKUP.get(self.lexeme()) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        };
        self.push(kind);
    }

    fn number(&mut self) {
        self.consume_digits();

        // A trailing `.` is part of the number even without a fractional digit: `12.`
        if self.peek() == Some('.') {
            self.advance();
            self.consume_digits();
        }

        // Out-of-range runs parse to infinity; report them but keep the token.
        let text = self.lexeme();
        let parsed = text.parse::<f64>();
        if !matches!(parsed, Ok(value) if value.is_finite()) {
            self.error(ErrorImpl::NumberParseError {
                token: text.to_string(),
            });
        }
        let value = parsed.unwrap_or(0.0);

        self.push_literal(TokenKind::Number, Literal::Number(value));
    }

    fn string(&mut self) {
        while matches!(self.peek(), Some(c) if c != '"') {
            if self.advance() == Some('\n') {
                self.line.advance();
            }
        }

        if self.at_eof() {
            self.error(ErrorImpl::UnterminatedString);
            return;
        }

        // The closing quote.
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        self.push_literal(TokenKind::String, Literal::String(value.to_string()));
    }

    fn consume_digits(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn continues_identifier(&self, c: char) -> bool {
        is_alpha(c) || (self.options.alphanumeric_identifiers && c.is_ascii_digit())
    }

    fn push_either(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) {
        let kind = if self.match_next(expected) {
            matched
        } else {
            otherwise
        };
        self.push(kind);
    }

    fn push(&mut self, kind: TokenKind) {
        self.push_token(kind, None);
    }

    fn push_literal(&mut self, kind: TokenKind, literal: Literal) {
        self.push_token(kind, Some(literal));
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.lexeme().to_string();
        self.tokens.push(MK_TOKEN!(kind, lexeme, literal, self.start_line));
    }

    fn error(&mut self, error: ErrorImpl) {
        self.errors.push(Error::new(error, self.line));
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }

        self.current += expected.len_utf8();
        true
    }

    fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn tokenize(source: &str) -> ScanResult {
    Scanner::new(source).scan_tokens()
}

pub fn tokenize_with_options(source: &str, options: ScanOptions) -> ScanResult {
    Scanner::with_options(source, options).scan_tokens()
}
