#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // <nonzero digit>{<digit>} | 0
    Int(String),
    // (<letter>|_){<letter>|<digit>|_}
    Ident(String),

    Plus, // +
    Minus, // -
    Star, // *
    Equals, // =
    LParen, // (
    RParen, // )
    Semicolon, // ;

    // placeholder left where the lexer had to give up on the input
    Malformed,

    Eof,
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus | Token::Star)
    }

    /// Source text of the token, or a placeholder for tokens that have none.
    pub fn as_literal(&self) -> String {
        match self {
            Token::Int(value) => value.clone(),
            Token::Ident(value) => value.clone(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Equals => "=".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Semicolon => ";".to_string(),
            Token::Malformed => "error".to_string(),
            Token::Eof => "End of file".to_string(),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Token::Int(_) => "literal token",
            Token::Ident(_) => "identifier token",
            Token::Plus => "+ token",
            Token::Minus => "- token",
            Token::Star => "* token",
            Token::Equals => "= token",
            Token::LParen => "( token",
            Token::RParen => ") token",
            Token::Semicolon => "terminal token",
            Token::Malformed => "error token",
            Token::Eof => "eof token",
        }
    }
}
