//! Hand-rolled lexer for Hum source text
//!
//! A pull scanner over a borrowed source buffer: each call to
//! [`Lexer::next_token`] classifies and returns the next token, strictly
//! forward, with no buffering of previous tokens. Lexical failures are
//! ordinary [`TokenKind::Error`] tokens, never panics or `Err` values, so
//! one bad character cannot take down a REPL session.

mod token;

pub use token::{Token, TokenKind};

use hum_log::{trace, Logger};
use std::sync::Arc;

/// Pull scanner state
pub struct Lexer<'src> {
    source: &'src str,
    /// Byte offset of the first byte of the token being scanned
    start: usize,
    /// Byte offset of the next byte to consume
    current: usize,
    /// Current 1-based line number
    line: usize,
    logger: Arc<Logger>,
}

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_identifier_char(byte: u8) -> bool {
    is_identifier_start(byte) || is_digit(byte)
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_logger(source, Logger::noop())
    }

    pub fn with_logger(source: &'src str, logger: Arc<Logger>) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            logger,
        }
    }

    /// Line number the scanner is currently on
    pub fn line(&self) -> usize {
        self.line
    }

    /// Scan and return the next token
    ///
    /// Returns `Eof` once the input is exhausted and keeps returning it on
    /// every call after that.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace();

        self.start = self.current;

        if self.is_at_end() {
            return self.make_token(TokenKind::Eof);
        }

        let byte = self.advance();

        if is_identifier_start(byte) {
            return self.identifier_token();
        }

        if is_digit(byte) {
            return self.number_token();
        }

        match byte {
            b'(' => self.make_token(TokenKind::LeftParen),
            b')' => self.make_token(TokenKind::RightParen),
            b'{' => self.make_token(TokenKind::LeftBrace),
            b'}' => self.make_token(TokenKind::RightBrace),
            b'[' => self.make_token(TokenKind::LeftBracket),
            b']' => self.make_token(TokenKind::RightBracket),
            b',' => self.make_token(TokenKind::Comma),
            b'.' => self.make_token(TokenKind::Dot),
            b':' => {
                if self.match_byte(b'=') {
                    self.make_token(TokenKind::ColonEquals)
                } else if self.match_byte(b':') {
                    self.make_token(TokenKind::ColonColon)
                } else {
                    self.make_token(TokenKind::Colon)
                }
            }
            b'=' => {
                if self.match_byte(b'>') {
                    self.make_token(TokenKind::FatArrow)
                } else {
                    self.make_token(TokenKind::Equals)
                }
            }
            b'-' => {
                if self.match_byte(b'>') {
                    self.make_token(TokenKind::Arrow)
                } else {
                    self.make_token(TokenKind::Minus)
                }
            }
            b'"' => self.string_token(),
            b'#' => self.comment_token(),
            _ => self.error_token("Unexpected character."),
        }
    }

    /// Iterator over the remaining tokens, ending after the `Eof` token
    pub fn tokens(&mut self) -> TokenIter<'_, 'src> {
        TokenIter {
            lexer: self,
            done: false,
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> u8 {
        let byte = self.source.as_bytes()[self.current];
        self.current += 1;
        byte
    }

    fn match_byte(&mut self, expected: u8) -> bool {
        if self.is_at_end() {
            return false;
        }

        if self.source.as_bytes()[self.current] != expected {
            return false;
        }

        self.current += 1;
        true
    }

    fn peek(&self) -> u8 {
        if self.is_at_end() {
            return 0;
        }
        self.source.as_bytes()[self.current]
    }

    fn peek_next(&self) -> u8 {
        if self.current + 1 >= self.source.len() {
            return 0;
        }
        self.source.as_bytes()[self.current + 1]
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                b' ' | b'\r' | b'\t' => {
                    self.current += 1;
                }
                b'\n' => {
                    self.line += 1;
                    self.current += 1;
                }
                _ => return,
            }
        }
    }

    fn string_token(&mut self) -> Token<'src> {
        while self.peek() != b'"' && !self.is_at_end() {
            if self.peek() == b'\n' {
                self.line += 1;
            }
            self.current += 1;
        }

        if self.is_at_end() {
            return self.error_token("Unterminated string.");
        }

        // closing quote
        self.current += 1;
        self.make_token(TokenKind::String)
    }

    // comments run to end of line and are emitted as tokens, not discarded;
    // filtering them is the consumer's call
    fn comment_token(&mut self) -> Token<'src> {
        while self.peek() != b'\n' && !self.is_at_end() {
            self.current += 1;
        }

        self.make_token(TokenKind::Comment)
    }

    fn number_token(&mut self) -> Token<'src> {
        while is_digit(self.peek()) {
            self.current += 1;
        }

        // a fraction requires a digit after the dot, so `1.` stays
        // number-then-dot
        if self.peek() == b'.' && is_digit(self.peek_next()) {
            self.current += 1;
            while is_digit(self.peek()) {
                self.current += 1;
            }
        }

        self.make_token(TokenKind::Number)
    }

    fn identifier_token(&mut self) -> Token<'src> {
        while is_identifier_char(self.peek()) {
            self.current += 1;
        }

        self.make_token(TokenKind::Identifier)
    }

    fn make_token(&self, kind: TokenKind) -> Token<'src> {
        let token = Token {
            kind,
            lexeme: &self.source[self.start..self.current],
            line: self.line,
        };
        trace!(
            self.logger,
            "token {} {:?} at line {}",
            kind.name(),
            token.lexeme,
            token.line
        );
        token
    }

    fn error_token(&self, message: &'static str) -> Token<'src> {
        trace!(
            self.logger,
            "error token {:?} at line {}",
            message,
            self.line
        );
        Token {
            kind: TokenKind::Error,
            lexeme: message,
            line: self.line,
        }
    }
}

/// Yields tokens up to and including the final `Eof`
pub struct TokenIter<'l, 'src> {
    lexer: &'l mut Lexer<'src>,
    done: bool,
}

impl<'l, 'src> Iterator for TokenIter<'l, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.done {
            return None;
        }

        let token = self.lexer.next_token();
        if token.is_eof() {
            self.done = true;
        }
        Some(token)
    }
}
