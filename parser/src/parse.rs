use crate::error::ParsingError;
use crate::error::ParsingError::GrammarError;
use crate::info_parse;
use ast::ast::{Block, Expr, Op, Statement};
use log::info;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "./CFG.pest"]
struct FunGrammar;

pub fn build_ast(source: &str) -> Result<Block, ParsingError> {
    let mut pairs = FunGrammar::parse(Rule::program, source)?;
    let program = pairs.next().ok_or(GrammarError)?;
    let block = program.into_inner().next().ok_or(GrammarError)?;
    let res = parse_block(block)?;
    info!("Found {} statements", res.statements.len());
    Ok(res)
}

fn parse_block(block: Pair<Rule>) -> Result<Block, ParsingError> {
    info_parse!("Block", &block);
    let statements = block
        .into_inner()
        .map(parse_statement)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Block::new(statements))
}

fn parse_statement(stmt: Pair<Rule>) -> Result<Statement, ParsingError> {
    info_parse!("Statement", &stmt);
    let res = match stmt.as_rule() {
        Rule::function => {
            let mut inner = stmt.into_inner();
            let name = parse_symname(inner.next().ok_or(GrammarError)?);
            let params = inner
                .next()
                .ok_or(GrammarError)?
                .into_inner()
                .map(parse_symname)
                .collect();
            let body = parse_block(inner.next().ok_or(GrammarError)?)?;
            Statement::Function(name, params, body)
        }
        Rule::variable => {
            let mut inner = stmt.into_inner();
            let name = parse_symname(inner.next().ok_or(GrammarError)?);
            let init = inner.next().map(parse_expr).transpose()?;
            Statement::Variable(name, init)
        }
        Rule::assignment => {
            let mut inner = stmt.into_inner();
            let name = parse_symname(inner.next().ok_or(GrammarError)?);
            let expr = parse_expr(inner.next().ok_or(GrammarError)?)?;
            Statement::Assignment(name, expr)
        }
        Rule::while_loop => {
            let mut inner = stmt.into_inner();
            let cond = parse_expr(inner.next().ok_or(GrammarError)?)?;
            let body = parse_block(inner.next().ok_or(GrammarError)?)?;
            Statement::WhileLoop(cond, body)
        }
        Rule::if_cond => {
            let mut inner = stmt.into_inner();
            let cond = parse_expr(inner.next().ok_or(GrammarError)?)?;
            let then = parse_block(inner.next().ok_or(GrammarError)?)?;
            let otherwise = inner.next().map(parse_block).transpose()?;
            Statement::IfCond(cond, then, otherwise)
        }
        Rule::return_expr => {
            let mut inner = stmt.into_inner();
            Statement::ReturnExpr(parse_expr(inner.next().ok_or(GrammarError)?)?)
        }
        _ => Statement::Expr(parse_expr(stmt)?),
    };
    Ok(res)
}

fn parse_expr(expr: Pair<Rule>) -> Result<Expr, ParsingError> {
    info_parse!("Expression", &expr);
    match expr.as_rule() {
        Rule::disjunction
        | Rule::conjunction
        | Rule::equality
        | Rule::relation
        | Rule::additive
        | Rule::multiplicative => {
            let mut inner = expr.into_inner();
            let mut lhs = parse_expr(inner.next().ok_or(GrammarError)?)?;
            while let Some(op) = inner.next() {
                let op = parse_binop(op)?;
                let rhs = parse_expr(inner.next().ok_or(GrammarError)?)?;
                lhs = Expr::binop(lhs, op, rhs);
            }
            Ok(lhs)
        }
        Rule::function_call => {
            let mut inner = expr.into_inner();
            let name = parse_symname(inner.next().ok_or(GrammarError)?);
            let args = inner
                .next()
                .ok_or(GrammarError)?
                .into_inner()
                .map(parse_expr)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::FuncCall(name, args))
        }
        Rule::identifier => Ok(Expr::Identifier(parse_symname(expr))),
        Rule::literal => {
            let num = expr.as_str();
            num.parse()
                .map(Expr::Literal)
                .map_err(|_| ParsingError::InvalidLiteral(num.to_string()))
        }
        _ => Err(GrammarError),
    }
}

fn parse_binop(infixop: Pair<Rule>) -> Result<Op, ParsingError> {
    info_parse!("Binary Operation", &infixop);
    Op::from_symbol(infixop.as_str()).ok_or(GrammarError)
}

fn parse_symname(name: Pair<Rule>) -> String {
    info_parse!("Symbol name", &name);
    name.as_str().to_string()
}
