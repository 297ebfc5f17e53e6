pub mod ast;
mod display;
