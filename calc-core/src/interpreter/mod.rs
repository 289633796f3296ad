pub mod prelude {
    pub use super::{interpret, interpret_source, read_tokens, run_source, Options};
}

use std::{path::{Path, PathBuf}, rc::Rc};

use utf8_chars::BufReadCharsExt;

use crate::{
    environment::prelude::Environment,
    eval::prelude::eval_assignment,
    lexer::prelude::{lex_chars, lex_str, TokenStream},
    parser::prelude::Parser,
    utils::prelude::{Error, Warning, WarningEmitter, WarningEmitterIO}
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Unrecognized characters become malformed tokens instead of being skipped.
    pub strict: bool,
}

/// Tokenizes the file at `path`, returning its text along with the tokens.
///
/// The file is read as a stream of chars straight into the lexer and is
/// closed before this returns.
pub fn read_tokens(path: &Path, options: Options) -> Result<(String, TokenStream), Error> {
    let file = std::fs::File::open(path)
        .map_err(|err| Error::StdIo { err: err.kind() })?;

    let file_size = file.metadata()
        .map_err(|err| Error::StdIo { err: err.kind() })?.len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut read_error = None;
    let mut reader = std::io::BufReader::new(file);

    let stream = reader.chars()
        .map_while(|c| match c {
            Ok(c) => {
                src.push(c);
                Some(c)
            },
            Err(err) => {
                read_error = Some(err.kind());
                None
            }
        });

    let tokens = TokenStream::tokenize(lex_chars(stream).strict(options.strict));

    drop(reader);

    match read_error {
        Some(err) => Err(Error::StdIo { err }),
        None => Ok((src, tokens))
    }
}

/// Runs the program in the file at `path` against a fresh store.
pub fn interpret(
    path: PathBuf,
    warnings: Rc<dyn WarningEmitterIO>,
    options: Options
) -> Result<Environment, Error> {
    let warnings = WarningEmitter::new(warnings);
    let (src, tokens) = read_tokens(&path, options)?;

    let mut env = Environment::new();
    execute(&path, &src, tokens, &warnings, &mut env)?;

    Ok(env)
}

pub fn interpret_source(
    src: &str,
    warnings: Rc<dyn WarningEmitterIO>,
    options: Options
) -> Result<Environment, Error> {
    let mut env = Environment::new();
    run_source(src, &mut env, &WarningEmitter::new(warnings), options)?;

    Ok(env)
}

/// Runs `src` against an existing store. On error the store is left as it
/// was before the call.
pub fn run_source(
    src: &str,
    env: &mut Environment,
    warnings: &WarningEmitter,
    options: Options
) -> Result<(), Error> {
    let tokens = TokenStream::tokenize(lex_str(src).strict(options.strict));

    let mut scratch = env.clone();
    execute(Path::new("<input>"), src, tokens, warnings, &mut scratch)?;
    *env = scratch;

    Ok(())
}

// Each assignment is evaluated as soon as it is parsed, so an undefined
// variable is reported before a syntax error in a later statement.
fn execute(
    path: &Path,
    src: &str,
    mut tokens: TokenStream,
    warnings: &WarningEmitter,
    env: &mut Environment
) -> Result<(), Error> {
    for error in tokens.take_errors() {
        warnings.emit(Warning::Lexical {
            path: path.to_path_buf(),
            src: src.to_string(),
            error
        });
    }

    for statement in Parser::new(tokens) {
        let assignment = statement.map_err(|error| Error::Parse {
            path: path.to_path_buf(),
            src: src.to_string(),
            error
        })?;

        eval_assignment(&assignment, env).map_err(|error| Error::Eval {
            path: path.to_path_buf(),
            src: src.to_string(),
            error
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests;
