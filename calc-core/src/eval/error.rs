use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalErrorType {
    /// A variable was read before anything was assigned to it.
    UndefinedVariable { name: String },
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalError {
    pub error: EvalErrorType,
    pub location: SrcSpan
}

impl EvalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            EvalErrorType::UndefinedVariable { name } => (
                "Variable not found",
                vec![format!("Variable `{name}` is used before it is assigned.")]
            ),
            EvalErrorType::Overflow => (
                "Arithmetic overflow",
                vec!["The result does not fit in a 64-bit signed integer.".to_string()]
            )
        }
    }
}
