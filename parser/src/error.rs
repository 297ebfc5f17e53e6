use std::fmt;

use pest::error::LineColLocation;
use thiserror::Error;

use crate::parse::Rule;

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("{}", render(.0))]
    Syntax(Vec<SyntaxError>),
    #[error("Integer literal {0} does not fit into 64 bits")]
    InvalidLiteral(String),
    #[error("Critical Error in Language Grammar")]
    GrammarError,
}

impl ParsingError {
    /// Line-tagged messages for a failed parse, empty for any other failure.
    pub fn syntax_errors(&self) -> &[SyntaxError] {
        match self {
            ParsingError::Syntax(errors) => errors,
            _ => &[],
        }
    }
}

impl From<pest::error::Error<Rule>> for ParsingError {
    fn from(err: pest::error::Error<Rule>) -> Self {
        let (line, column) = match err.line_col {
            LineColLocation::Pos(pos) => pos,
            LineColLocation::Span(start, _) => start,
        };
        ParsingError::Syntax(vec![SyntaxError {
            line,
            column,
            message: err.variant.message().into_owned(),
        }])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Syntax error at line {}. Message: {}", self.line, self.message)
    }
}

fn render(errors: &[SyntaxError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
