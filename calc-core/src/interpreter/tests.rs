use std::{io::Write, path::PathBuf, rc::Rc};

use tempfile::NamedTempFile;

use crate::{
    environment::prelude::Environment,
    lexer::prelude::{LexicalErrorType, Token},
    parser::prelude::ParseErrorType,
    utils::prelude::{Error, NullWarningEmitterIO, VectorWarningEmitterIO, Warning, WarningEmitter}
};

use super::{interpret, interpret_source, read_tokens, run_source, Options};

fn run(src: &str) -> Result<Environment, Error> {
    interpret_source(src, Rc::new(NullWarningEmitterIO), Options::default())
}

fn temp_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file
}

#[test]
fn test_output_is_sorted() -> Result<(), Error> {
    let env = run("b = 2;\na = 1;\nc = a + b;\n")?;

    assert_eq!(env.to_string(), "a = 1\nb = 2\nc = 3\n");

    Ok(())
}

#[test]
fn test_documented_examples() -> Result<(), Error> {
    let env = run(r#"
        sub = 10 - 3 - 2;
        mul = 2 * 3 * 4;
        neg = --5;
        mix = -+5;
        grp = (10 - 3) - 2;
    "#)?;

    assert_eq!(env.get("sub"), Some(9));
    assert_eq!(env.get("mul"), Some(24));
    assert_eq!(env.get("neg"), Some(5));
    assert_eq!(env.get("mix"), Some(-5));
    assert_eq!(env.get("grp"), Some(5));

    Ok(())
}

#[test]
fn test_undefined_variable_summary() {
    let err = run("y = x + 1;").unwrap_err();

    assert!(matches!(err, Error::Eval { .. }));
    assert_eq!(err.summary(), "Variable x was not found.");
}

#[test]
fn test_not_a_valid_program_summary() {
    let err = run("x = 1;\n(x) = 2;").unwrap_err();

    assert_eq!(err.summary(), "Not a valid program");
}

#[test]
fn test_syntax_error_summary() {
    let err = run("x = 1 +;").unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(err.summary(), "Error");
}

#[test]
fn test_undefined_variable_is_found_before_later_syntax_error() {
    let err = run("a = b;\nc = ;").unwrap_err();

    assert_eq!(err.summary(), "Variable b was not found.");
}

#[test]
fn test_smallest_integer() -> Result<(), Error> {
    let env = run("min = -9223372036854775808;\nmax = -(min + 1);")?;

    assert_eq!(env.get("min"), Some(i64::MIN));
    assert_eq!(env.get("max"), Some(i64::MAX));

    assert_eq!(run("x = --9223372036854775808;").unwrap_err().summary(), "Error");

    Ok(())
}

#[test]
fn test_syntax_error_wins_over_undefined_variable_in_one_statement() {
    let err = run("y = x 5;").unwrap_err();

    assert!(matches!(
        &err,
        Error::Parse { error, .. } if matches!(error.error, ParseErrorType::UnexpectedToken { .. })
    ));
    assert_eq!(err.summary(), "Error");
}

#[test]
fn test_leading_zero_reports_and_fails() {
    let warnings = Rc::new(VectorWarningEmitterIO::new());

    let err = interpret_source("a = 1;\nb = 007;\nc = 2;", warnings.clone(), Options::default())
        .unwrap_err();

    assert_eq!(err.summary(), "Error");

    let warnings = warnings.take();
    assert_eq!(warnings.len(), 1);

    match &warnings[0] {
        Warning::Lexical { error, .. } => assert_eq!(error.error, LexicalErrorType::LeadingZero)
    }

    assert!(warnings[0].pretty_string().contains("leading zero"));
}

#[test]
fn test_strict_option() -> Result<(), Error> {
    let env = run("x = 1 # ;")?;
    assert_eq!(env.get("x"), Some(1));

    let strict = Options { strict: true };
    let err = interpret_source("x = 1 # ;", Rc::new(NullWarningEmitterIO), strict).unwrap_err();
    assert_eq!(err.summary(), "Error");

    Ok(())
}

#[test]
fn test_run_source_keeps_store_on_error() -> Result<(), Error> {
    let warnings = WarningEmitter::null();
    let mut env = Environment::new();

    run_source("x = 1;", &mut env, &warnings, Options::default())?;
    assert!(run_source("x = 5; y = z;", &mut env, &warnings, Options::default()).is_err());

    assert_eq!(env.get("x"), Some(1));
    assert!(!env.contains("y"));

    run_source("y = x + 1;", &mut env, &warnings, Options::default())?;
    assert_eq!(env.to_string(), "x = 1\ny = 2\n");

    Ok(())
}

#[test]
fn test_pretty_diagnostic_names_the_variable() {
    let err = run("total = count * 2;").unwrap_err();

    let pretty = err.pretty_string();

    assert!(pretty.contains("Undefined variable"));
    assert!(pretty.contains("count"));
}

#[test]
fn test_pretty_unexpected_end_of_empty_source() {
    let err = Error::Parse {
        path: PathBuf::from("empty.txt"),
        src: String::new(),
        error: crate::parser::prelude::ParseError {
            error: crate::parser::prelude::ParseErrorType::UnexpectedEof,
            span: Default::default(),
        }
    };

    assert!(err.pretty_string().contains("Syntax error"));
}

#[test]
fn test_interpret_file() -> Result<(), Error> {
    let file = temp_file("b = 3;\na = b * 2;\n".as_bytes());

    let env = interpret(file.path().to_path_buf(), Rc::new(NullWarningEmitterIO), Options::default())?;

    assert_eq!(env.to_string(), "a = 6\nb = 3\n");

    Ok(())
}

#[test]
fn test_read_tokens_from_file() -> Result<(), Error> {
    let file = temp_file("é = 1;".as_bytes());

    let (src, tokens) = read_tokens(file.path(), Options::default())?;

    assert_eq!(src, "é = 1;");
    assert_eq!(tokens.tokens(), vec![Token::Equals, Token::Int("1".to_string()), Token::Semicolon, Token::Eof]);

    Ok(())
}

#[test]
fn test_invalid_utf8_is_an_io_error() {
    let file = temp_file(&[b'x', b' ', 0xff, 0xfe]);

    let err = interpret(file.path().to_path_buf(), Rc::new(NullWarningEmitterIO), Options::default())
        .unwrap_err();

    assert!(matches!(err, Error::StdIo { err: std::io::ErrorKind::InvalidData }));
    assert_eq!(err.summary(), "Error");
}

#[test]
fn test_missing_file() {
    let err = interpret(
        PathBuf::from("/this/path/does/not/exist/input.txt"),
        Rc::new(NullWarningEmitterIO),
        Options::default()
    ).unwrap_err();

    assert!(matches!(err, Error::StdIo { err: std::io::ErrorKind::NotFound }));
}
