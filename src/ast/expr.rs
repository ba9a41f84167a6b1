use serde::{Deserialize, Serialize};
use std::fmt;

use super::visitor::Visitor;
use crate::lexer::{Literal, TokenKind};

/// Expression node
///
/// Every node owns its children; trees never share or cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Binary operation: `left operator right`
    Binary {
        /// Left operand expression
        left: Box<Expr>,
        /// Operator token kind
        operator: TokenKind,
        /// Right operand expression
        right: Box<Expr>,
    },

    /// Parenthesized expression
    Grouping {
        /// Inner expression
        expression: Box<Expr>,
    },

    /// Literal value
    Literal {
        /// The value, `Nil` for absence of a value
        value: LiteralValue,
    },

    /// Prefix operation: `operator right`
    Unary {
        /// Operator token kind
        operator: TokenKind,
        /// Operand expression
        right: Box<Expr>,
    },
}

impl Expr {
    /// Builds a binary node
    pub fn binary(left: Expr, operator: TokenKind, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Builds a grouping node
    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping {
            expression: Box::new(expression),
        }
    }

    /// Builds a literal node
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Expr::Literal {
            value: value.into(),
        }
    }

    /// Builds a unary node
    pub fn unary(operator: TokenKind, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    /// Dispatches to the visitor method matching this node's variant
    pub fn accept<R, V>(&self, visitor: &mut V) -> R
    where
        V: Visitor<R> + ?Sized,
    {
        match self {
            Expr::Binary {
                left,
                operator,
                right,
            } => visitor.visit_binary(left, *operator, right),
            Expr::Grouping { expression } => visitor.visit_grouping(expression),
            Expr::Literal { value } => visitor.visit_literal(value),
            Expr::Unary { operator, right } => visitor.visit_unary(*operator, right),
        }
    }
}

/// Value held by a literal node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    /// Absence of a value
    Nil,
    /// Boolean value
    Boolean(bool),
    /// Number value
    Number(f64),
    /// String value
    Str(String),
}

impl From<Literal> for LiteralValue {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Number(n) => LiteralValue::Number(n),
            Literal::Str(s) => LiteralValue::Str(s),
        }
    }
}

impl From<f64> for LiteralValue {
    fn from(n: f64) -> Self {
        LiteralValue::Number(n)
    }
}

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        LiteralValue::Boolean(b)
    }
}

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        LiteralValue::Str(s.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(s: String) -> Self {
        LiteralValue::Str(s)
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LiteralValue::Nil => write!(f, "nil"),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::Str(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_box_children() {
        let expr = Expr::unary(TokenKind::Bang, Expr::literal(true));
        match expr {
            Expr::Unary { operator, right } => {
                assert_eq!(operator, TokenKind::Bang);
                assert_eq!(*right, Expr::literal(LiteralValue::Boolean(true)));
            }
            other => panic!("expected unary, got {:?}", other),
        }
    }

    #[test]
    fn test_literal_from_token_literal() {
        assert_eq!(
            LiteralValue::from(Literal::Number(2.5)),
            LiteralValue::Number(2.5)
        );
        assert_eq!(
            LiteralValue::from(Literal::Str("abc".to_string())),
            LiteralValue::Str("abc".to_string())
        );
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(LiteralValue::Nil.to_string(), "nil");
        assert_eq!(LiteralValue::Boolean(false).to_string(), "false");
        assert_eq!(LiteralValue::Number(123.0).to_string(), "123");
        assert_eq!(LiteralValue::Str("x y".to_string()).to_string(), "x y");
    }
}
