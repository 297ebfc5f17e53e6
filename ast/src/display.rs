use crate::ast::{Block, Expr, Op, Statement};
use core::fmt::{Display, Formatter, Result};

const INDENT: &str = "    ";

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Identifier(name) => write!(f, "{}", name),
            Expr::Literal(val) if *val < 0 => write!(f, "({})", val),
            Expr::Literal(val) => write!(f, "{}", val),
            Expr::BinOp(left, op, right) => write!(f, "({} {} {})", left, op, right),
            Expr::FuncCall(name, args) => write!(
                f,
                "{}({})",
                name,
                args.iter()
                    .map(|arg| format!("{}", arg))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_statement(f, self, 0)
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_statements(f, self, 0)
    }
}

fn write_statements(f: &mut Formatter<'_>, block: &Block, depth: usize) -> Result {
    for stmt in &block.statements {
        write!(f, "{}", INDENT.repeat(depth))?;
        write_statement(f, stmt, depth)?;
        writeln!(f)?;
    }
    Ok(())
}

fn write_braced(f: &mut Formatter<'_>, block: &Block, depth: usize) -> Result {
    writeln!(f, "{{")?;
    write_statements(f, block, depth + 1)?;
    write!(f, "{}}}", INDENT.repeat(depth))
}

fn write_statement(f: &mut Formatter<'_>, stmt: &Statement, depth: usize) -> Result {
    match stmt {
        Statement::Function(name, params, body) => {
            write!(f, "fun {}({}) ", name, params.join(", "))?;
            write_braced(f, body, depth)
        }
        Statement::Variable(name, Some(init)) => write!(f, "var {} = {}", name, init),
        Statement::Variable(name, None) => write!(f, "var {}", name),
        Statement::Assignment(name, expr) => write!(f, "{} = {}", name, expr),
        Statement::WhileLoop(cond, body) => {
            write!(f, "while ({}) ", cond)?;
            write_braced(f, body, depth)
        }
        Statement::IfCond(cond, then, otherwise) => {
            write!(f, "if ({}) ", cond)?;
            write_braced(f, then, depth)?;
            if let Some(otherwise) = otherwise {
                write!(f, " else ")?;
                write_braced(f, otherwise, depth)?;
            }
            Ok(())
        }
        Statement::ReturnExpr(expr) => write!(f, "return {}", expr),
        Statement::Expr(expr) => write!(f, "{}", expr),
    }
}
