use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RunTimeError {
    #[error("Could not find unbound variable {0}")]
    VariableNotFound(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Could not find function {0}")]
    FunctionNotFound(String),
    #[error("Function {name} expects {expected} arguments, but was called with {found}")]
    ArgumentCountMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
}
