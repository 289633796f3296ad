use super::prelude::{lex_str, LexicalError, LexicalErrorType, Token, TokenStream};

fn ident(name: &str) -> Token {
    Token::Ident(name.to_string())
}

fn int(value: &str) -> Token {
    Token::Int(value.to_string())
}

#[test]
fn test_numbers() -> std::result::Result<(), LexicalError> {
    let input = r#"
        10
        0
        1234567
        9 0 1
    "#;

    let mut lexer = lex_str(input);

    let tokens = vec![
        int("10"),
        int("0"),
        int("1234567"),
        int("9"),
        int("0"),
        int("1"),
        Token::Eof,
    ];

    for (idx, token) in tokens.iter().enumerate() {
        let (_, next_token, _) = lexer.next_token()?;

        assert_eq!(
            *token, next_token,
            "Next token does not match expected token ({:?}, {:?}) at {}",
            next_token, token, idx
        );
    }

    Ok(())
}

#[test]
fn test_input() {
    let input = r#"
        a_1 = (x + 10) * -y;
        _tmp=+3-b;
    "#;

    let tokens = vec![
        ident("a_1"),
        Token::Equals,
        Token::LParen,
        ident("x"),
        Token::Plus,
        int("10"),
        Token::RParen,
        Token::Star,
        Token::Minus,
        ident("y"),
        Token::Semicolon,

        ident("_tmp"),
        Token::Equals,
        Token::Plus,
        int("3"),
        Token::Minus,
        ident("b"),
        Token::Semicolon,

        Token::Eof,
    ];

    let stream = TokenStream::tokenize(lex_str(input));

    assert!(stream.errors().is_empty());
    assert_eq!(stream.tokens(), tokens);
}

#[test]
fn test_maximal_munch() {
    let stream = TokenStream::tokenize(lex_str("abc123def 42x"));

    assert_eq!(stream.tokens(), vec![ident("abc123def"), int("42"), ident("x"), Token::Eof]);
}

#[test]
fn test_unrecognized_characters_are_skipped() {
    let stream = TokenStream::tokenize(lex_str("x = 1 $ # 2; @"));

    assert!(stream.errors().is_empty());
    assert_eq!(
        stream.tokens(),
        vec![ident("x"), Token::Equals, int("1"), int("2"), Token::Semicolon, Token::Eof]
    );
}

#[test]
fn test_strict_mode_reports_unrecognized_characters() {
    let stream = TokenStream::tokenize(lex_str("x = 1 $ 2;").strict(true));

    assert_eq!(
        stream.tokens(),
        vec![ident("x"), Token::Equals, int("1"), Token::Malformed, int("2"), Token::Semicolon, Token::Eof]
    );
    assert_eq!(stream.errors().len(), 1);
    assert_eq!(stream.errors()[0].error, LexicalErrorType::UnrecognizedToken { tok: '$' });
    assert_eq!(stream.errors()[0].location.start, 6);
}

#[test]
fn test_leading_zero_skips_rest_of_line() {
    let input = "a = 1;\nb = 007 + c;\nd = 2;";

    let stream = TokenStream::tokenize(lex_str(input));

    let tokens = vec![
        ident("a"),
        Token::Equals,
        int("1"),
        Token::Semicolon,

        ident("b"),
        Token::Equals,
        Token::Malformed,

        ident("d"),
        Token::Equals,
        int("2"),
        Token::Semicolon,

        Token::Eof,
    ];

    assert_eq!(stream.tokens(), tokens);
    assert_eq!(stream.errors().len(), 1);

    let error = stream.errors()[0];
    assert_eq!(error.error, LexicalErrorType::LeadingZero);
    assert_eq!(error.location.start, 11);
    assert_eq!(error.location.end, 19);
}

#[test]
fn test_leading_zero_on_last_line() {
    let stream = TokenStream::tokenize(lex_str("x = 01"));

    assert_eq!(stream.tokens(), vec![ident("x"), Token::Equals, Token::Malformed, Token::Eof]);
}

#[test]
fn test_single_eof() {
    let mut lexer = lex_str("   ");

    assert!(matches!(lexer.next(), Some(Ok((_, Token::Eof, _)))));
    assert!(lexer.is_finished());
    assert!(lexer.next().is_none());

    let stream = TokenStream::tokenize(lex_str(""));
    assert_eq!(stream.tokens(), vec![Token::Eof]);
}

#[test]
fn test_listing() {
    let stream = TokenStream::tokenize(lex_str("x = 5;"));

    let expected = [
        format!("x\t{:>20}", "identifier token"),
        format!("=\t{:>20}", "= token"),
        format!("5\t{:>20}", "literal token"),
        format!(";\t{:>20}", "terminal token"),
        format!("End of file\t{:>20}", "eof token"),
    ];

    assert_eq!(stream.to_string(), format!("{}\n", expected.join("\n")));
}
