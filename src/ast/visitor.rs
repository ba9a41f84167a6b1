use super::expr::{Expr, LiteralValue};
use crate::lexer::TokenKind;

/// One operation over expression trees
///
/// [`Expr::accept`] picks the method for the node's variant and returns its
/// result. Adding an operation means adding an implementation of this trait.
pub trait Visitor<R> {
    /// Visits `left operator right`
    fn visit_binary(&mut self, left: &Expr, operator: TokenKind, right: &Expr) -> R;

    /// Visits a parenthesized expression
    fn visit_grouping(&mut self, expression: &Expr) -> R;

    /// Visits a literal value
    fn visit_literal(&mut self, value: &LiteralValue) -> R;

    /// Visits `operator right`
    fn visit_unary(&mut self, operator: TokenKind, right: &Expr) -> R;
}
