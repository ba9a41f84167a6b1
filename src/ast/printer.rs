use super::expr::{Expr, LiteralValue};
use super::visitor::Visitor;
use crate::lexer::TokenKind;

/// Renders expressions as fully parenthesized prefix notation
///
/// `-123 * (45.67)` prints as `(Star (Minus 123) (Grouping 45.67))`.
#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    /// Creates a printer
    pub fn new() -> Self {
        AstPrinter
    }

    /// Renders `expr` and all of its descendants
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = String::new();
        out.push('(');
        out.push_str(name);
        for expr in exprs {
            let rendered: String = expr.accept(self);
            out.push(' ');
            out.push_str(&rendered);
        }
        out.push(')');
        out
    }
}

impl Visitor<String> for AstPrinter {
    fn visit_binary(&mut self, left: &Expr, operator: TokenKind, right: &Expr) -> String {
        self.parenthesize(&operator.to_string(), &[left, right])
    }

    fn visit_grouping(&mut self, expression: &Expr) -> String {
        self.parenthesize("Grouping", &[expression])
    }

    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        value.to_string()
    }

    fn visit_unary(&mut self, operator: TokenKind, right: &Expr) -> String {
        self.parenthesize(&operator.to_string(), &[right])
    }
}
