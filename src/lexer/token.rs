use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token (empty for `Eof`)
    pub lexeme: String,
    /// Decoded value, present only for number and string literals
    pub literal: Option<Literal>,
    /// Line number where the token was recognized (1-indexed)
    pub line: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, literal: Option<Literal>, line: usize) -> Self {
        Token {
            kind,
            lexeme,
            literal,
            line,
        }
    }

    /// Creates the end-of-input marker for the given line
    pub fn eof(line: usize) -> Self {
        Token::new(TokenKind::Eof, String::new(), None, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {} nil", self.kind, self.lexeme),
        }
    }
}

/// Decoded value of a literal token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// Numeric literal, always a 64-bit float
    Number(f64),
    /// String literal without its surrounding quotes
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Str(s) => write!(f, "{}", s),
        }
    }
}

/// All possible token types in Lox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Single-character tokens
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left brace {
    LeftBrace,
    /// Right brace }
    RightBrace,
    /// Comma delimiter
    Comma,
    /// Dot operator
    Dot,
    /// Minus operator (-)
    Minus,
    /// Plus operator (+)
    Plus,
    /// Semicolon delimiter
    Semicolon,
    /// Slash operator (/)
    Slash,
    /// Star operator (*)
    Star,

    // One or two character tokens
    /// Logical NOT operator (!)
    Bang,
    /// Inequality operator (!=)
    BangEqual,
    /// Assignment operator (=)
    Equal,
    /// Equality operator (==)
    EqualEqual,
    /// Greater than operator (>)
    Greater,
    /// Greater than or equal operator (>=)
    GreaterEqual,
    /// Less than operator (<)
    Less,
    /// Less than or equal operator (<=)
    LessEqual,

    // Literals
    /// Identifier
    Identifier,
    /// String literal
    String,
    /// Number literal
    Number,

    // Keywords
    /// AND keyword
    And,
    /// CLASS keyword
    Class,
    /// ELSE keyword
    Else,
    /// FALSE keyword
    False,
    /// FUN keyword
    Fun,
    /// FOR keyword
    For,
    /// IF keyword
    If,
    /// NIL keyword
    Nil,
    /// OR keyword
    Or,
    /// PRINT keyword
    Print,
    /// RETURN keyword
    Return,
    /// SUPER keyword
    Super,
    /// THIS keyword
    This,
    /// TRUE keyword
    True,
    /// VAR keyword
    Var,
    /// WHILE keyword
    While,

    // Special
    /// End of file marker
    Eof,
}

impl TokenKind {
    /// Check if token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }

    /// Get keyword from string, `None` for anything that is not reserved
    pub fn keyword(s: &str) -> Option<TokenKind> {
        let kind = match s {
            "and" => TokenKind::And,
            "class" => TokenKind::Class,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "fun" => TokenKind::Fun,
            "for" => TokenKind::For,
            "if" => TokenKind::If,
            "nil" => TokenKind::Nil,
            "or" => TokenKind::Or,
            "print" => TokenKind::Print,
            "return" => TokenKind::Return,
            "super" => TokenKind::Super,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "var" => TokenKind::Var,
            "while" => TokenKind::While,
            _ => return None,
        };
        Some(kind)
    }
}

// The variant name doubles as the canonical display form used by the AST
// printer and the driver.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
