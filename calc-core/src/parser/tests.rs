use crate::{
    lexer::prelude::{lex_str, Token, TokenStream},
    parser::prelude::{parse_program, Expression, ParseError, ParseErrorType, Parser, Postfix, Primitive},
    utils::prelude::SrcSpan
};

fn parser(input: &str) -> Parser {
    Parser::new(TokenStream::tokenize(lex_str(input)))
}

#[test]
fn test_assignments() -> Result<(), ParseError> {
    let input = r#"
        a = 1;
        b = a + 2;
        c = (a + b) * -3;
    "#;

    let program = parse_program(input)?;

    assert_eq!(program.statements.len(), 3);
    assert_eq!(program.statements[0].identifier.value, "a");
    assert_eq!(program.statements[2].identifier.value, "c");
    assert_eq!(program.to_string(), "a = 1;\nb = (a + 2);\nc = ((a + b) * -3);");

    Ok(())
}

#[test]
fn test_right_associative_sums() -> Result<(), ParseError> {
    let program = parse_program("x = 10 - 3 - 2;")?;

    assert_eq!(program.to_string(), "x = (10 - (3 - 2));");
    assert_eq!(program.postfix(), "x 10 3 2 - - =");

    Ok(())
}

#[test]
fn test_right_associative_products() -> Result<(), ParseError> {
    let program = parse_program("x = 2 * 3 * 4;")?;

    assert_eq!(program.to_string(), "x = (2 * (3 * 4));");
    assert_eq!(program.postfix(), "x 2 3 4 * * =");

    Ok(())
}

#[test]
fn test_precedence() -> Result<(), ParseError> {
    let program = parse_program("x = 1 + 2 * 3 - 4;")?;

    assert_eq!(program.to_string(), "x = (1 + ((2 * 3) - 4));");

    Ok(())
}

#[test]
fn test_parentheses_override_grouping() -> Result<(), ParseError> {
    let program = parse_program("x = (10 - 3) - 2;")?;

    assert_eq!(program.to_string(), "x = ((10 - 3) - 2);");
    assert!(matches!(
        &program.statements[0].value,
        Expression::Infix(infix) if matches!(*infix.left, Expression::Nested { .. })
    ));

    Ok(())
}

#[test]
fn test_prefix() -> Result<(), ParseError> {
    let program = parse_program("x = --5; y = -+5; z = -(a * 2);")?;

    assert_eq!(program.to_string(), "x = --5;\ny = -+5;\nz = -(a * 2);");
    assert_eq!(program.statements[1].value.postfix(), "5 neg");

    Ok(())
}

#[test]
fn test_empty_program() -> Result<(), ParseError> {
    let program = parse_program("   \n  ")?;

    assert!(program.statements.is_empty());

    Ok(())
}

#[test]
fn test_not_a_valid_program() {
    let err = parse_program("x = 1; 5 = x;").unwrap_err();

    assert_eq!(err.error, ParseErrorType::NotAValidProgram { token: Token::Int("5".to_string()) });
    assert_eq!(err.span.start, 7);
}

#[test]
fn test_missing_terminator() {
    let err = parse_program("x = 1").unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::UnexpectedToken { token: Token::Eof, .. }
    ));
}

#[test]
fn test_unbalanced_parentheses() {
    let err = parse_program("x = (1 + 2;").unwrap_err();

    assert_eq!(
        err.error,
        ParseErrorType::UnexpectedToken {
            token: Token::Semicolon,
            expected: vec!["`)`".to_string()]
        }
    );
}

#[test]
fn test_dangling_operator() {
    let err = parse_program("x = 1 + ;").unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::UnexpectedToken { token: Token::Semicolon, .. }
    ));
}

#[test]
fn test_malformed_token_is_rejected() {
    let err = parse_program("x = 012;\ny = 1;").unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::UnexpectedToken { token: Token::Malformed, .. }
    ));
}

#[test]
fn test_literal_out_of_range() {
    let err = parse_program("x = 99999999999999999999;").unwrap_err();

    assert_eq!(
        err.error,
        ParseErrorType::LiteralOutOfRange { literal: "99999999999999999999".to_string() }
    );
}

#[test]
fn test_smallest_integer_literal() -> Result<(), ParseError> {
    let program = parse_program("x = -9223372036854775808;\ny = --9223372036854775808;")?;

    assert_eq!(
        program.statements[0].value,
        Expression::Primitive(Primitive::Int { value: i64::MIN, location: SrcSpan { start: 4, end: 24 } })
    );
    assert_eq!(program.statements[1].value.postfix(), "-9223372036854775808 neg");

    let err = parse_program("x = +9223372036854775808;").unwrap_err();
    assert!(matches!(err.error, ParseErrorType::LiteralOutOfRange { .. }));

    Ok(())
}

#[test]
fn test_statement_iterator_stops_after_error() {
    let mut parser = parser("a = 1; b = ; c = 3;");

    assert!(matches!(parser.next(), Some(Ok(_))));
    assert!(matches!(parser.next(), Some(Err(_))));
    assert!(parser.next().is_none());
}

#[test]
fn test_statement_iterator_yields_in_order() -> Result<(), ParseError> {
    let names = parser("b = 1; a = 2; c = 3;")
        .map(|statement| statement.map(|assignment| assignment.identifier.value))
        .collect::<Result<Vec<String>, ParseError>>()?;

    assert_eq!(names, vec!["b", "a", "c"]);

    Ok(())
}
