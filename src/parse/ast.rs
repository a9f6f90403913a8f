use crate::{lex::Token, symbol::Symbol};

/// Parse root; owns every node below it.
#[derive(Debug, Default, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, PartialEq)]
pub enum Stmt {
    Let {
        /// The `let` token itself.
        token: Token,
        name: Ident,
        init: Option<Box<Expr>>,
    },
}

#[derive(Debug, PartialEq)]
pub struct Ident {
    pub token: Token,
    pub name: Symbol,
}

/// No expression form is parseable yet, so this stays uninhabited and every
/// `init` is `None`. Growing the grammar means adding variants here; the
/// exhaustive matches downstream will flag every site that must catch up.
#[derive(Debug, PartialEq)]
pub enum Expr {}
