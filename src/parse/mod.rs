pub mod ast;

use crate::lex::{Lexer, Token, TokenKind};
use ast::{Ident, Program, Stmt};

pub struct Parser {
    lexer: Lexer,
    errors: Vec<String>,
    curr: Token,
    peek: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let curr = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            errors: vec![],
            curr,
            peek,
        }
    }

    /// Always returns a `Program`, however malformed the input; callers must
    /// consult `errors()` to learn whether the tree is trustworthy.
    pub fn parse_program(&mut self) -> Program {
        let mut stmts = vec![];
        while !self.eof() {
            if let Some(s) = self.stmt() {
                stmts.push(s);
            }
            self.advance();
        }
        Program { stmts }
    }

    /// Diagnostics in the order they were raised.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn stmt(&mut self) -> Option<Stmt> {
        match self.curr.kind {
            TokenKind::Let => self.let_stmt(),
            // Expression statements are not recognized yet; the token is
            // dropped and the top-level loop moves on.
            _ => None,
        }
    }

    fn let_stmt(&mut self) -> Option<Stmt> {
        let token = self.curr.clone();

        if !self.expect(TokenKind::Identifier) {
            return None;
        }
        let name = Ident {
            token: self.curr.clone(),
            name: self.curr.symbol,
        };

        if !self.expect(TokenKind::Assign) {
            return None;
        }

        // TODO: parse the initializer expression here instead of discarding
        // everything up to the semicolon.
        while !self.check(TokenKind::Semicolon) && !self.eof() {
            self.advance();
        }

        Some(Stmt::Let {
            token,
            name,
            init: None,
        })
    }

    /// The only producer of diagnostics: advances past `peek` when it has
    /// the wanted kind, otherwise records a mismatch and stays put.
    fn expect(&mut self, kind: TokenKind) -> bool {
        if self.peek.kind == kind {
            self.advance();
            true
        } else {
            self.error(kind);
            false
        }
    }

    fn error(&mut self, expected: TokenKind) {
        let t = &self.peek;
        self.errors.push(format!(
            "expected next token to be {}, got {} instead. [{}] line {}, char {}",
            expected, t.kind, t.filename, t.line, t.character
        ));
    }

    fn advance(&mut self) {
        self.curr = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.curr.kind == kind
    }

    fn eof(&self) -> bool {
        self.check(TokenKind::EndOfInput)
    }
}
