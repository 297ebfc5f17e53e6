use ast::ast::Block;

mod env;
mod error;
mod eval;
mod sink;

pub use ast::ast::IntType;
pub use env::{Env, Function};
pub use error::RunTimeError;
pub use eval::Evaluator;
pub use sink::{Buffer, Console, Sink, Stream};

pub type RTResult<T> = Result<T, RunTimeError>;

/// Runs `program` printing to standard output.
pub fn eval(program: &Block) -> RTResult<Option<IntType>> {
    run(program, &mut Console)
}

pub fn run(program: &Block, sink: &mut dyn Sink) -> RTResult<Option<IntType>> {
    Evaluator::new(sink).run(program)
}

/// Runs `program` and returns its terminal value together with everything
/// `println` wrote.
pub fn run_captured(program: &Block) -> RTResult<(Option<IntType>, String)> {
    let mut buffer = Buffer::new();
    let result = run(program, &mut buffer)?;
    Ok((result, buffer.into_string()))
}
