use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,

	strict: bool,
	finished: bool,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
			next_ch: None,
            input,

			strict: false,
			finished: false,
        };

        lexer.next_char();
        lexer.next_char();

        lexer
    }

	/// Report unrecognized characters instead of skipping them.
	pub fn strict(mut self, strict: bool) -> Self {
		self.strict = strict;
		self
	}

	pub fn is_finished(&self) -> bool {
		self.finished
	}

    pub fn next_token(&mut self) -> LexResult {
		loop {
			let span = match self.ch {
				Some(ch) => match ch {
					'+' => self.eat_one_char(Token::Plus),
					'-' => self.eat_one_char(Token::Minus),
					'*' => self.eat_one_char(Token::Star),
					'=' => self.eat_one_char(Token::Equals),
					'(' => self.eat_one_char(Token::LParen),
					')' => self.eat_one_char(Token::RParen),
					';' => self.eat_one_char(Token::Semicolon),
					'a'..='z' | 'A'..='Z' | '_' => self.lex_ident(),
					'0'..='9' => return self.lex_number(),
					c if c.is_whitespace() => {
						self.next_char();
						continue;
					},
					c => {
						let start = self.position;
						self.next_char();

						if self.strict {
							return Err(LexicalError {
								error: LexicalErrorType::UnrecognizedToken { tok: c },
								location: SrcSpan::from(start, self.position),
							});
						}

						continue;
					}
				},
				None => {
					self.finished = true;
					(self.position, Token::Eof, self.position)
				}
			};

			return Ok(span);
		}
    }

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		let next = match self.input.next() {
			Some((pos, ch)) => {
				self.position = self.next_position;
				self.next_position = pos;

				Some(ch)
			},
			None => {
				self.position = self.next_position;
				self.next_position += 1;

				None
			}
		};

		self.ch = self.next_ch;
		self.next_ch = next;

		ch
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn lex_ident(&mut self) -> Spanned {
        let start_pos = self.position;
		let mut ident = String::new();

		while let Some(ch) = self.ch {
			if !(ch.is_ascii_alphanumeric() || ch == '_') {
				break;
			}

			ident.push(ch);
			self.next_char();
		}

        (start_pos, Token::Ident(ident), self.position)
	}

	fn lex_number(&mut self) -> LexResult {
		let start_pos = self.position;

		if self.ch == Some('0') {
			if matches!(self.next_ch, Some(ch) if ch.is_ascii_digit()) {
				return Err(self.skip_line(start_pos));
			}

			return Ok(self.eat_one_char(Token::Int("0".to_string())));
		}

		let mut value = String::new();

		while let Some(ch) = self.ch {
			if !ch.is_ascii_digit() {
				break;
			}

			value.push(ch);
			self.next_char();
		}

		Ok((start_pos, Token::Int(value), self.position))
	}

	// Drops everything up to and including the next newline.
	fn skip_line(&mut self, start_pos: u32) -> LexicalError {
		let mut end_pos = self.position;

		while let Some(ch) = self.next_char() {
			if ch == '\n' {
				break;
			}

			end_pos = self.position;
		}

		LexicalError {
			error: LexicalErrorType::LeadingZero,
			location: SrcSpan::from(start_pos, end_pos),
		}
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		Some(self.next_token())
	}
}

pub fn lex_str(src: &str) -> Lexer<impl Iterator<Item = (u32, char)> + '_> {
	Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)))
}

/// Lexes a bare character stream, computing byte offsets on the way.
pub fn lex_chars(stream: impl Iterator<Item = char>) -> Lexer<impl Iterator<Item = (u32, char)>> {
	Lexer::new(stream
		.scan(0, |pos, c| {
			*pos += c.len_utf8() as u32;
			Some((*pos - c.len_utf8() as u32, c))
		})
	)
}
