use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    /// A numeral such as `007`. The rest of its line is discarded.
    LeadingZero,
    /// Only raised in strict mode.
    UnrecognizedToken { tok: char },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::LeadingZero => {
                ("Integer literal with a leading zero", vec![
                    "The rest of this line was skipped.".to_string()
                ])
            },
            LexicalErrorType::UnrecognizedToken { tok } => {
                ("Unrecognized character", vec![format!("`{tok}` is not part of the language.")])
            }
        }
    }
}
