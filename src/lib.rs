//! # glox - a Lox front end
//!
//! The first stage of a tree-walking interpreter for Lox, a small dynamically
//! typed scripting language: a scanner that turns source text into tokens, the
//! token vocabulary, and an expression tree with a visitor-based printer.
//!
//! ## Quick Start
//!
//! ```rust
//! use glox::{Diagnostics, Scanner, TokenKind};
//!
//! let mut diagnostics = Diagnostics::new();
//! let tokens = Scanner::new("var answer = 42;").scan_tokens(&mut diagnostics);
//!
//! assert!(!diagnostics.had_error());
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```
//!
//! ## Error Reporting
//!
//! Lexical errors never stop a scan. They are handed to a [`Reporter`], which
//! can be a [`Diagnostics`] collector or any `FnMut(usize, &str)` closure:
//!
//! ```rust
//! use glox::Scanner;
//!
//! let mut reports = Vec::new();
//! let mut reporter = |line: usize, message: &str| reports.push(format!("{line}: {message}"));
//! let tokens = Scanner::new("1 @ 2").scan_tokens(&mut reporter);
//!
//! assert_eq!(tokens.len(), 3); // 1, 2, Eof
//! assert_eq!(reports, vec!["1: Unexpected character: @".to_string()]);
//! ```
//!
//! ## Printing Trees
//!
//! ```rust
//! use glox::{AstPrinter, Expr, TokenKind};
//!
//! let expr = Expr::binary(
//!     Expr::unary(TokenKind::Minus, Expr::literal(123.0)),
//!     TokenKind::Star,
//!     Expr::grouping(Expr::literal(45.67)),
//! );
//! assert_eq!(AstPrinter::new().print(&expr), "(Star (Minus 123) (Grouping 45.67))");
//! ```

/// Version of the glox front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod ast;
pub mod error;
pub mod lexer;

// Re-export main types
pub use ast::{AstPrinter, Expr, LiteralValue, Visitor};
pub use error::{Diagnostic, Diagnostics, Error, LexError, Reporter, Result};
pub use lexer::{scan, Literal, Scanner, Token, TokenKind};
