//! Lexical analysis for Lox
//!
//! Converts source text into a stream of tokens terminated by `Eof`.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Literal, Token, TokenKind};

use crate::error::Diagnostics;

/// Scans `source` and collects every lexical error that was reported
pub fn scan(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = Scanner::new(source).scan_tokens(&mut diagnostics);
    (tokens, diagnostics)
}
