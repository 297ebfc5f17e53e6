use ast::ast::Block;

mod error;
pub(crate) mod macros;
pub(crate) mod parse;

pub use error::{ParsingError, SyntaxError};

/// Parses a whole program. On failure nothing should be evaluated.
pub fn parse(source: &str) -> Result<Block, ParsingError> {
    let res = parse::build_ast(source)?;
    Ok(res)
}
