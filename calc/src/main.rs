mod cli;
mod rlpl;
mod repl;

use std::{path::{Path, PathBuf}, process::ExitCode, rc::Rc};

use clap::{Parser, Subcommand};
use cli::{
    print_failed, print_finished, print_lexing, print_parsing, print_running
};
use calc_core::{
    interpreter::prelude::{interpret, read_tokens, Options},
    lexer::prelude::TokenStream,
    parser::prelude::{Parser as ProgramParser, Postfix},
    utils::prelude::{Error, Warning, WarningEmitter, WarningEmitterIO}
};

const DEFAULT_INPUT: &str = "input.txt";

/// Interpreter for programs made of integer assignments
#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Runs a program and prints the final value of every variable
    Run {
        /// Path of source file
        #[arg(default_value = DEFAULT_INPUT)]
        path: PathBuf,
        /// Treat unrecognized characters as errors
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Prints the token listing of a program
    Tokens {
        /// Path of source file
        #[arg(default_value = DEFAULT_INPUT)]
        path: PathBuf,
        /// Treat unrecognized characters as errors
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Parses a program without running it and prints it fully parenthesized
    Parse {
        /// Path of source file
        #[arg(default_value = DEFAULT_INPUT)]
        path: PathBuf,
        /// Print every statement in postfix order
        #[arg(long, default_value_t = false)]
        postfix: bool,
        /// Print ast instead of parsed source code
        #[arg(long, default_value_t = false)]
        print_ast: bool,
        /// Treat unrecognized characters as errors
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Eval Print Loop
    Repl {
        /// Treat unrecognized characters as errors
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let command = Cli::parse().command.unwrap_or(Command::Run {
        path: PathBuf::from(DEFAULT_INPUT),
        strict: false,
    });

    let result = match command {
        Command::Run { path, strict } => run(path, Options { strict }),
        Command::Tokens { path, strict } => tokens(&path, Options { strict }),
        Command::Parse { path, postfix, print_ast, strict } => parse(&path, postfix, print_ast, Options { strict }),
        Command::Rlpl => rlpl::start().map_err(|err| Error::StdIo { err: err.kind() }),
        Command::Repl { strict } => repl::start(Options { strict }).map_err(|err| Error::StdIo { err: err.kind() }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(path: PathBuf, options: Options) -> Result<(), Error> {
    print_running(&path.display().to_string());
    let start = std::time::Instant::now();

    match interpret(path, Rc::new(ConsoleWarningEmitter), options) {
        Ok(env) => {
            print!("{env}");
            print_finished(start.elapsed());

            Ok(())
        },
        Err(err) => {
            print_failed(start.elapsed());

            Err(err)
        }
    }
}

fn tokens(path: &Path, options: Options) -> Result<(), Error> {
    print_lexing(&path.display().to_string());

    let (src, mut stream) = read_tokens(path, options)?;
    emit_lexical_warnings(path, &src, &mut stream);

    print!("{stream}");

    Ok(())
}

fn parse(path: &Path, postfix: bool, print_ast: bool, options: Options) -> Result<(), Error> {
    print_parsing(&path.display().to_string());

    let (src, mut stream) = read_tokens(path, options)?;
    emit_lexical_warnings(path, &src, &mut stream);

    let program = ProgramParser::new(stream).parse()
        .map_err(|error| Error::Parse { path: path.to_path_buf(), src, error })?;

    if print_ast {
        println!("{:#?}", program);
    } else if postfix {
        println!("{}", program.postfix());
    } else {
        println!("{}", program);
    }

    Ok(())
}

fn emit_lexical_warnings(path: &Path, src: &str, stream: &mut TokenStream) {
    let emitter = WarningEmitter::new(Rc::new(ConsoleWarningEmitter));

    for error in stream.take_errors() {
        emitter.emit(Warning::Lexical {
            path: path.to_path_buf(),
            src: src.to_string(),
            error
        });
    }
}

/// Full diagnostic on stderr, short summary line on stdout.
pub(crate) fn report(err: &Error) {
    let buf_writer = cli::stderr_buffer_writer();
    let mut buf = buf_writer.buffer();

    err.pretty(&mut buf);
    buf_writer
        .print(&buf)
        .expect("Writing error to stderr");

    println!("{}", err.summary());
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleWarningEmitter;

impl WarningEmitterIO for ConsoleWarningEmitter {
    fn emit_warning(&self, warning: Warning) {
        let buffer_writer = crate::cli::stderr_buffer_writer();
        let mut buffer = buffer_writer.buffer();
        warning.pretty(&mut buffer);
        buffer_writer
            .print(&buffer)
            .expect("Writing warning to stderr");
    }
}
