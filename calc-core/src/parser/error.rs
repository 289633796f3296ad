use crate::{lexer::prelude::Token, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    /// A statement did not start with an identifier.
    NotAValidProgram { token: Token },
    UnexpectedToken {
        token: Token,
        expected: Vec<String>,
    },
    UnexpectedEof,
    LiteralOutOfRange { literal: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::NotAValidProgram { token } => (
                "Expected an assignment",
                vec![format!("Found {}, but every statement starts with a variable name.", found(token))]
            ),
            ParseErrorType::UnexpectedToken { token, expected } => {
                let messages = std::iter::once(format!("Found {}, expected one of: ", found(token)))
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Not expected this", messages)
            },
            ParseErrorType::UnexpectedEof => ("Unexpected end of file", vec![]),
            ParseErrorType::LiteralOutOfRange { literal } => (
                "Integer literal out of range",
                vec![format!("`{literal}` does not fit in a 64-bit signed integer.")]
            ),
        }
    }
}

fn found(token: &Token) -> String {
    match token {
        Token::Int(value) => format!("the literal `{value}`"),
        Token::Ident(name) => format!("the identifier `{name}`"),
        Token::Malformed => "a malformed token".to_string(),
        Token::Eof => "the end of file".to_string(),
        _ => format!("`{}`", token.as_literal())
    }
}
