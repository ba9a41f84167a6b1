//! Expression trees for Lox
//!
//! Nodes are built by hand for now. New operations over the tree are added as
//! [`Visitor`] implementations such as [`AstPrinter`].

mod expr;
mod printer;
mod visitor;

pub use expr::{Expr, LiteralValue};
pub use printer::AstPrinter;
pub use visitor::Visitor;
