use std::fmt::Display;

use crate::{
    lexer::prelude::Token,
    parser::prelude::{parse_error, Parse, ParseError, ParseErrorType, Parser},
    utils::prelude::SrcSpan
};

pub trait Postfix {
    fn postfix(&self) -> String;
}

// program -> { <assignment> } eof
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Assignment>,
    pub location: SrcSpan
}

impl Parse for Program {
    fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let mut statements = vec![];

        while parser.has_statements() {
            statements.push(Assignment::parse(parser)?);
        }

        let location = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => first.location.merge(last.location),
            _ => SrcSpan::default()
        };

        Ok(Self {
            statements,
            location
        })
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statements = self.statements.iter()
            .map(|statement| format!("{}", statement))
            .collect::<Vec<String>>();

        write!(f, "{}", statements.join("\n"))
    }
}

impl Postfix for Program {
    fn postfix(&self) -> String {
        self.statements.iter()
            .map(|statement| statement.postfix())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

// assignment -> <identifier> = <expression> ;
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub identifier: Identifier,
    pub value: Expression,
    pub location: SrcSpan
}

impl Parse for Assignment {
    fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        match &parser.current_token {
            Some((_, Token::Ident(_), _)) => {},
            Some((start, token, end)) => return parse_error(
                ParseErrorType::NotAValidProgram { token: token.clone() },
                SrcSpan { start: *start, end: *end }
            ),
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }

        let ident = parser.expect_ident()?;
        let start = ident.0;

        parser.expect_one(Token::Equals)?;

        let value = Expression::parse(parser)?;

        let (_, end) = parser.expect_one(Token::Semicolon)?;

        Ok(Self {
            identifier: ident.into(),
            value,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {};", self.identifier, self.value)
    }
}

impl Postfix for Assignment {
    fn postfix(&self) -> String {
        format!("{} {} =", self.identifier, self.value.postfix())
    }
}

// expression -> <term> [ (+ | -) <expression> ]
// term       -> <factor> [ * <term> ]
// factor     -> ( <expression> ) | - <factor> | + <factor> | <literal> | <identifier>
//
// The continuation recurses into the whole production, so `a - b - c`
// groups as `a - (b - c)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Infix(Infix),
    Prefix(Prefix),
    Primitive(Primitive),
    Nested {
        expression: Box<Expression>,
        location: SrcSpan
    }
}

impl Parse for Expression {
    fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let term = parse_term(parser)?;

        if parser.current_is(&Token::Plus) || parser.current_is(&Token::Minus) {
            return Ok(Self::Infix(Infix::parse_with(parser, term, Expression::parse)?));
        }

        Ok(term)
    }
}

fn parse_term(parser: &mut Parser) -> Result<Expression, ParseError> {
    let factor = parse_factor(parser)?;

    if parser.current_is(&Token::Star) {
        return Ok(Expression::Infix(Infix::parse_with(parser, factor, parse_term)?));
    }

    Ok(factor)
}

fn parse_factor(parser: &mut Parser) -> Result<Expression, ParseError> {
    let expr = match &parser.current_token {
        Some((start, token, end)) => match token {
            Token::LParen => {
                let (start, _) = parser.expect_one(Token::LParen)?;

                let expression = Box::new(Expression::parse(parser)?);

                let (_, end) = parser.expect_one(Token::RParen)?;

                Expression::Nested {
                    expression,
                    location: SrcSpan { start, end }
                }
            },
            Token::Minus | Token::Plus => parse_prefix(parser)?,
            Token::Int(_) => Expression::Primitive(Primitive::parse(parser)?),
            Token::Ident(_) => Expression::Identifier(parser.expect_ident()?.into()),
            _ => return parse_error(
                ParseErrorType::UnexpectedToken {
                    token: token.clone(),
                    expected: vec![
                        "`(`".to_string(),
                        "`-` or `+`".to_string(),
                        "an integer literal".to_string(),
                        "an identifier".to_string(),
                    ]
                },
                SrcSpan { start: *start, end: *end }
            )
        },
        None => return parse_error(
            ParseErrorType::UnexpectedEof,
            SrcSpan { start: 0, end: 0 }
        )
    };

    Ok(expr)
}

// `-9223372036854775808` is read as one literal, its magnitude alone does not fit
fn parse_prefix(parser: &mut Parser) -> Result<Expression, ParseError> {
    let is_min_literal = parser.current_is(&Token::Minus) && matches!(
        parser.peek_token(),
        Some(Token::Int(literal)) if format!("-{literal}").parse::<i64>() == Ok(i64::MIN)
    );

    if !is_min_literal {
        return Ok(Expression::Prefix(Prefix::parse(parser)?));
    }

    let (start, _) = parser.expect_one(Token::Minus)?;
    let end = parser.next_token().map_or(start, |(_, _, end)| end);

    Ok(Expression::Primitive(Primitive::Int {
        value: i64::MIN,
        location: SrcSpan { start, end }
    }))
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Infix(infix) => write!(f, "{infix}"),
            Self::Prefix(prefix) => write!(f, "{prefix}"),
            Self::Primitive(primitive) => write!(f, "{primitive}"),
            // infix nodes print their own parentheses
            Self::Nested { expression, .. } => write!(f, "{expression}")
        }
    }
}

impl Postfix for Expression {
    fn postfix(&self) -> String {
        match self {
            Self::Identifier(ident) => format!("{ident}"),
            Self::Infix(infix) => infix.postfix(),
            Self::Prefix(prefix) => prefix.postfix(),
            Self::Primitive(primitive) => format!("{primitive}"),
            Self::Nested { expression, .. } => expression.postfix()
        }
    }
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Identifier(ident) => ident.location,
            Self::Infix(infix) => infix.location,
            Self::Prefix(prefix) => prefix.location,
            Self::Primitive(primitive) => primitive.location(),
            Self::Nested { location, .. } => *location
        }
    }
}

// identifier -> (<letter> | _) { <letter> | <digit> | _ }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<(u32, String, u32)> for Identifier {
    fn from(value: (u32, String, u32)) -> Self {
        Identifier {
            value: value.1,
            location: SrcSpan { start: value.0, end: value.2 }
        }
    }
}

// infix -> <operand> <operator> <continuation>
#[derive(Debug, Clone, PartialEq)]
pub struct Infix {
    pub left: Box<Expression>,
    pub operator: Token,
    pub right: Box<Expression>,
    pub location: SrcSpan
}

impl Infix {
    /// Consumes the operator under the cursor and parses the right operand
    /// with `continuation`.
    fn parse_with(
        parser: &mut Parser,
        left: Expression,
        continuation: fn(&mut Parser) -> Result<Expression, ParseError>
    ) -> Result<Self, ParseError> {
        let SrcSpan { start, .. } = left.location();

        let operator = match parser.next_token() {
            Some((_, token, _)) if token.is_operator() => token,
            Some((start, token, end)) => return parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec!["an operator".to_string()]
                },
                SrcSpan { start, end }
            ),
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        let right = continuation(parser)?;

        let SrcSpan { end, .. } = right.location();

        Ok(Self {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Infix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.as_literal(), self.right)
    }
}

impl Postfix for Infix {
    fn postfix(&self) -> String {
        format!("{} {} {}", self.left.postfix(), self.right.postfix(), self.operator.as_literal())
    }
}

// prefix -> (- | +) <factor>
#[derive(Debug, Clone, PartialEq)]
pub struct Prefix {
    pub operator: Token,
    pub expression: Box<Expression>,
    pub location: SrcSpan
}

impl Parse for Prefix {
    fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        let (start, operator) = match parser.next_token() {
            Some((start, token, _)) if matches!(token, Token::Minus | Token::Plus) => (start, token),
            Some((start, token, end)) => return parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec!["`-` or `+`".to_string()]
                },
                SrcSpan { start, end }
            ),
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        let expression = parse_factor(parser)?;
        let end = expression.location().end;

        Ok(Self {
            operator,
            expression: Box::new(expression),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.operator.as_literal(), self.expression)
    }
}

impl Postfix for Prefix {
    fn postfix(&self) -> String {
        match self.operator {
            Token::Minus => format!("{} neg", self.expression.postfix()),
            _ => self.expression.postfix()
        }
    }
}

// primitive -> <literal>
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Int {
        value: i64,
        location: SrcSpan
    }
}

impl Parse for Primitive {
    fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        match parser.next_token() {
            Some((start, Token::Int(literal), end)) => {
                let location = SrcSpan { start, end };

                match literal.parse::<i64>() {
                    Ok(value) => Ok(Self::Int { value, location }),
                    Err(_) => parse_error(ParseErrorType::LiteralOutOfRange { literal }, location)
                }
            },
            Some((start, token, end)) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec!["an integer literal".to_string()]
                },
                SrcSpan { start, end }
            ),
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int { value, .. } => write!(f, "{value}")
        }
    }
}

impl Primitive {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Int { location, .. } => *location
        }
    }
}
