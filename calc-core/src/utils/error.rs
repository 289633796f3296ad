use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::{
    eval::prelude::{EvalError, EvalErrorType},
    parser::prelude::{ParseError, ParseErrorType},
};
use super::diagnostic::{Diagnostic, Label, Level, Location};
use super::src_span::SrcSpan;

/// Everything that ends a run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to parse source code")]
    Parse {
        path: PathBuf,
        src: String,
        error: ParseError
    },
    #[error("evaluation failed")]
    Eval {
        path: PathBuf,
        src: String,
        error: EvalError
    },
    #[error("IO operation failed")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl Error {
    /// The one-line report printed on stdout before exiting.
    pub fn summary(&self) -> String {
        match self {
            Error::Parse { error, .. } => match error.error {
                ParseErrorType::NotAValidProgram { .. } => "Not a valid program".to_string(),
                _ => "Error".to_string()
            },
            Error::Eval { error, .. } => match &error.error {
                EvalErrorType::UndefinedVariable { name } => format!("Variable {name} was not found."),
                EvalErrorType::Overflow => "Error".to_string()
            },
            Error::StdIo { .. } => "Error".to_string()
        }
    }

    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buf);
            writeln!(buf).expect("write new line diagnostic");
        }
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Parse { path, src, error } => {
                let (label, extra) = error.details();
                let text = extra.join("\n");

                let adjusted_location = if matches!(error.error, ParseErrorType::UnexpectedEof) {
                    SrcSpan::point(src.len() as u32)
                } else {
                    error.span
                };

                vec![Diagnostic {
                    title: "Syntax error".into(),
                    text,
                    level: Level::Error,
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: adjusted_location,
                        },
                    }),
                }]
            },
            Error::Eval { path, src, error } => {
                let (label, extra) = error.details();

                let title = match error.error {
                    EvalErrorType::UndefinedVariable { .. } => "Undefined variable",
                    EvalErrorType::Overflow => "Runtime error",
                };

                vec![Diagnostic {
                    title: title.into(),
                    text: extra.join("\n"),
                    level: Level::Error,
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: error.location,
                        },
                    }),
                }]
            },
            Error::StdIo { err } => {
                vec![Diagnostic {
                    title: "Standard IO error".into(),
                    text: format!("{err}"),
                    level: Level::Error,
                    location: None,
                }]
            }
        }
    }
}
