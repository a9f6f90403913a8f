use self::{
    lex::Lexer,
    parse::{ast::Program, Parser},
};

pub mod args;
pub mod err;
pub mod lex;
pub mod parse;
pub mod symbol;

pub use args::Args;

pub struct Compiler {}

impl Compiler {
    pub fn new() -> Self {
        Self {}
    }

    /// Runs the front end over `src`. `filename` is only a label carried
    /// into diagnostics; reading files is the caller's job.
    pub fn run(&mut self, src: String, filename: &str) -> err::Result<Program> {
        let lexer = Lexer::new(src, filename);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();

        log::debug!(
            "parsed {} statements, {} diagnostics",
            program.stmts.len(),
            parser.errors().len()
        );

        if parser.errors().is_empty() {
            Ok(program)
        } else {
            for e in parser.errors() {
                println!("{}", e);
            }
            Err(())
        }
    }
}
