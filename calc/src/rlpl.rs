use std::io::Write;

use calc_core::lexer::prelude::{lex_str, Token};

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
	crate::repl::exit_on_interrupt()?;

	let stdin = std::io::stdin();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		let input = input.trim_end_matches(&['\n', '\r'][..]);

		match input {
			"" => {},
			".exit" => return Ok(()),
			_ => {
				for res in lex_str(input) {
					match res {
						Ok((start, token, end)) => {
							println!("{:>4}..{:<4} {:?}", start, end, token);

							if token == Token::Eof {
								break;
							}
						},
						Err(err) => {
							let details = err.details();
							let location = err.location;
							println!("[at {}] Lexical Error: {}", location.start, details.0);
							if !details.1.is_empty() {
								println!("{}", details.1.join("\n"));
							}
						}
					}
				}
			}
		}
	}
}
