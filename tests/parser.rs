use tamarin::{
    lex::Lexer,
    parse::{
        ast::{Program, Stmt},
        Parser,
    },
};

fn parse(input: &str) -> (Program, Vec<String>) {
    let lexer = Lexer::new(input.to_string(), "test.tam");
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    (program, parser.errors().to_vec())
}

fn let_names(program: &Program) -> Vec<String> {
    program
        .stmts
        .iter()
        .map(|s| match s {
            Stmt::Let { name, .. } => name.name.to_string(),
        })
        .collect()
}

#[test]
fn let_statement() {
    let (program, errors) = parse("let x = 5;");

    assert_eq!(errors, Vec::<String>::new());
    assert_eq!(let_names(&program), ["x"]);

    match &program.stmts[0] {
        Stmt::Let { token, name, init } => {
            assert_eq!(token.symbol.to_string(), "let");
            assert_eq!(name.token.symbol.to_string(), "x");
            assert!(init.is_none());
        }
    }
}

#[test]
fn let_statements() {
    let (program, errors) = parse(
        r#"
let x = 5;
let y = 10;
let foobar = 838383;
"#,
    );

    assert!(errors.is_empty());
    assert_eq!(let_names(&program), ["x", "y", "foobar"]);
}

#[test]
fn missing_name() {
    let (program, errors) = parse("let = 5;");

    assert!(program.stmts.is_empty());
    assert_eq!(
        errors,
        ["expected next token to be Identifier, got Assign instead. [test.tam] line 1, char 4"]
    );
}

#[test]
fn missing_assign() {
    let (program, errors) = parse("let x 5;");

    assert!(program.stmts.is_empty());
    assert_eq!(
        errors,
        ["expected next token to be Assign, got Integer instead. [test.tam] line 1, char 6"]
    );
}

#[test]
fn diagnostics_keep_order_and_position() {
    let (program, errors) = parse("let a = 1;\nlet = 2;\nlet b 3;");

    assert_eq!(let_names(&program), ["a"]);
    assert_eq!(
        errors,
        [
            "expected next token to be Identifier, got Assign instead. [test.tam] line 2, char 4",
            "expected next token to be Assign, got Integer instead. [test.tam] line 3, char 6",
        ]
    );
}

#[test]
fn non_let_tokens_produce_no_statements() {
    let (program, errors) = parse("5 + 5; let x = 2;");

    assert!(errors.is_empty());
    assert_eq!(let_names(&program), ["x"]);
}

#[test]
fn terminates_without_semicolon() {
    // The initializer discard stops at end of input instead of spinning.
    let (program, errors) = parse("let x = 5");

    assert!(errors.is_empty());
    assert_eq!(let_names(&program), ["x"]);
}

#[test]
fn terminates_on_garbage() {
    let (program, errors) = parse("@ # $ %\n} } } let let");

    assert_eq!(program.stmts.len(), 0);
    // Two dangling `let`s: one diagnosed against the second `let`, one
    // against end of input.
    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("expected next token to be Identifier, got Let instead."));
    assert!(errors[1].starts_with("expected next token to be Identifier, got EndOfInput instead."));
}

#[test]
fn empty_input() {
    let (program, errors) = parse("");

    assert!(program.stmts.is_empty());
    assert!(errors.is_empty());
}
