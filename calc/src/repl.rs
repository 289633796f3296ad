use std::{io::Write, rc::Rc};

use calc_core::{
	environment::prelude::Environment,
	interpreter::prelude::{run_source, Options},
	utils::prelude::WarningEmitter
};

use crate::ConsoleWarningEmitter;

const PROMPT: &str = ">> ";

/// Every line is run as a whole program against one store that lives for
/// the session. A failing line leaves the store untouched.
pub fn start(options: Options) -> std::io::Result<()> {
	exit_on_interrupt()?;

	let stdin = std::io::stdin();
	let warnings = WarningEmitter::new(Rc::new(ConsoleWarningEmitter));
	let mut env = Environment::new();

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
			".vars" => print!("{env}"),
			_ => {
				let before = env.clone();

				match run_source(input, &mut env, &warnings, options) {
					Ok(()) => {
						for (name, value) in env.iter() {
							if before.get(name) != Some(*value) {
								println!("{name} = {value}");
							}
						}
					},
					Err(err) => crate::report(&err)
				}
			}
		}
	}
}

pub(crate) fn exit_on_interrupt() -> std::io::Result<()> {
	ctrlc::set_handler(|| {
		println!();
		std::process::exit(0);
	})
	.map_err(std::io::Error::other)
}
