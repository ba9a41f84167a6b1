use super::token::{Literal, Token, TokenKind};
use crate::error::{LexError, Reporter};

/// Scanner for Lox source text
///
/// A scanner owns one complete source string and is consumed by
/// [`Scanner::scan_tokens`]; scanning cannot be restarted.
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Number of errors reported so far
    errors: usize,
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            errors: 0,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    ///
    /// Lexical errors go to `reporter` and never stop the scan: the returned
    /// vector always ends with an `Eof` token.
    pub fn scan_tokens(mut self, reporter: &mut dyn Reporter) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(reporter);
        }

        self.tokens.push(Token::eof(self.line));

        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.errors,
            lines = self.line,
            "scan finished"
        );

        self.tokens
    }

    fn scan_token(&mut self, reporter: &mut dyn Reporter) {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::BangEqual);
                } else {
                    self.add_token(TokenKind::Bang);
                }
            }
            '=' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::EqualEqual);
                } else {
                    self.add_token(TokenKind::Equal);
                }
            }
            '<' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::LessEqual);
                } else {
                    self.add_token(TokenKind::Less);
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::GreaterEqual);
                } else {
                    self.add_token(TokenKind::Greater);
                }
            }

            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.scan_string(reporter),

            c if c.is_ascii_digit() => self.scan_number(reporter),

            c if is_alpha(c) => self.scan_identifier_or_keyword(),

            _ => self.error(reporter, LexError::UnexpectedCharacter(c)),
        }
    }

    // Stops before the newline so the main loop still counts it.
    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    fn scan_string(&mut self, reporter: &mut dyn Reporter) {
        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error(reporter, LexError::UnterminatedString);
            return;
        }

        self.advance(); // Closing "

        let value: String = self.source[self.start + 1..self.current - 1]
            .iter()
            .collect();
        self.add_literal_token(TokenKind::String, Literal::Str(value));
    }

    fn scan_number(&mut self, reporter: &mut dyn Reporter) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A trailing dot is left alone so `123.abs` stays three tokens
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume .
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text = self.lexeme();
        match text.parse::<f64>() {
            Ok(value) => self.add_literal_token(TokenKind::Number, Literal::Number(value)),
            Err(_) => self.error(reporter, LexError::InvalidNumber(text)),
        }
    }

    fn scan_identifier_or_keyword(&mut self) {
        while is_alpha_numeric(self.peek()) {
            self.advance();
        }

        let kind = TokenKind::keyword(&self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn error(&mut self, reporter: &mut dyn Reporter, error: LexError) {
        self.errors += 1;
        tracing::trace!(line = self.line, %error, "lexical error");
        reporter.report(self.line, &error.to_string());
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.current += 1;
            true
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.lexeme();
        self.tokens.push(Token::new(kind, lexeme, None, self.line));
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme = self.lexeme();
        self.tokens
            .push(Token::new(kind, lexeme, Some(literal), self.line));
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
