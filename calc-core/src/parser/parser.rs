use crate::{lexer::prelude::{lex_str, Spanned, Token, TokenStream}, utils::prelude::SrcSpan};
use super::error::{ParseError, ParseErrorType};
use super::ast::{Assignment, Program};

pub trait Parse
    where Self: Sized,
{
    fn parse(parser: &mut Parser) -> Result<Self, ParseError>;
}

/// Recursive-descent parser over a fully buffered token stream.
///
/// Tokens are taken from the front of the buffer one at a time and are never
/// put back. `current_token` is the single token of lookahead.
#[derive(Debug)]
pub struct Parser {
    pub current_token: Option<Spanned>,

    tokens: TokenStream,
    failed: bool,
}

impl Parser {
    pub fn new(tokens: TokenStream) -> Self {
        let mut parser = Self {
            current_token: None,
            tokens,
            failed: false,
        };

        parser.step();

        parser
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    pub fn next_token(&mut self) -> Option<Spanned> {
        let t = self.current_token.take();
        self.current_token = self.tokens.pop_front();

        t
    }

    /// Another statement follows while anything is buffered behind the
    /// current token. The trailing `Eof` is what ends a well-formed program.
    pub fn has_statements(&self) -> bool {
        !self.failed && !self.tokens.is_empty()
    }

    /// The token after `current_token`.
    pub fn peek_token(&self) -> Option<&Token> {
        self.tokens.front().map(|(_, token, _)| token)
    }

    pub fn current_is(&self, token: &Token) -> bool {
        matches!(&self.current_token, Some((_, tok, _)) if tok == token)
    }

    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let result = Program::parse(self);
        self.failed |= result.is_err();

        result
    }

    pub fn expect_one(&mut self, token: Token) -> Result<(u32, u32), ParseError> {
        match self.current_token.take() {
            Some((start, tok, end)) if tok == token => {
                self.step();
                Ok((start, end))
            },
            Some(t) => {
                let (start, tok, end) = t.clone();
                self.current_token = Some(t);

                parse_error(
                    ParseErrorType::UnexpectedToken {
                        token: tok,
                        expected: vec![format!("`{}`", token.as_literal())],
                    },
                    SrcSpan { start, end }
                )
            },
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }

    pub fn expect_ident(&mut self) -> Result<(u32, String, u32), ParseError> {
        match self.current_token.take() {
            Some((start, Token::Ident(value), end)) => {
                self.step();
                Ok((start, value, end))
            },
            Some(t) => {
                let (start, tok, end) = t.clone();
                self.current_token = Some(t);

                parse_error(
                    ParseErrorType::UnexpectedToken {
                        token: tok,
                        expected: vec!["an identifier".to_string()],
                    },
                    SrcSpan { start, end }
                )
            },
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }
}

/// Yields one assignment at a time so that each can be evaluated before the
/// next one is parsed. Stops after the first error.
impl Iterator for Parser {
    type Item = Result<Assignment, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_statements() {
            return None;
        }

        let result = Assignment::parse(self);
        self.failed |= result.is_err();

        Some(result)
    }
}

pub fn parse_program(src: &str) -> Result<Program, ParseError> {
    let mut parser = Parser::new(TokenStream::tokenize(lex_str(src)));

    parser.parse()
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
