use std::collections::VecDeque;
use std::fmt::Display;

use super::error::LexicalError;
use super::lexer::{LexResult, Spanned};
use super::token::Token;

/// Every token of one input, terminated by a single `Eof`.
///
/// Lexical errors do not stop tokenization: each one leaves a
/// `Token::Malformed` in its place and is kept in `errors` for reporting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    tokens: VecDeque<Spanned>,
    errors: Vec<LexicalError>,
}

impl TokenStream {
    pub fn tokenize(lexer: impl Iterator<Item = LexResult>) -> Self {
        let mut stream = Self::default();

        for result in lexer {
            match result {
                Ok(spanned) => stream.tokens.push_back(spanned),
                Err(err) => {
                    stream.tokens.push_back((err.location.start, Token::Malformed, err.location.end));
                    stream.errors.push(err);
                }
            }
        }

        if !matches!(stream.tokens.back(), Some((_, Token::Eof, _))) {
            let end = stream.tokens.back().map(|(_, _, end)| *end).unwrap_or(0);
            stream.tokens.push_back((end, Token::Eof, end));
        }

        stream
    }

    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<LexicalError> {
        std::mem::take(&mut self.errors)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn front(&self) -> Option<&Spanned> {
        self.tokens.front()
    }

    pub fn pop_front(&mut self) -> Option<Spanned> {
        self.tokens.pop_front()
    }

    pub fn tokens(&self) -> Vec<Token> {
        self.tokens.iter().map(|(_, token, _)| token.clone()).collect()
    }
}

impl Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (_, token, _) in &self.tokens {
            writeln!(f, "{}\t{:>20}", token.as_literal(), token.describe())?;
        }

        Ok(())
    }
}
