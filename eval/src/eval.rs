use ast::ast::Op::{Add, And, Div, Eq, Ge, Gt, Le, Lt, Mod, Mul, Neq, Or, Sub};
use ast::ast::{Block, Expr, Op, Statement};
use log::{debug, info};

use crate::env::Env;
use crate::error::RunTimeError;
use crate::sink::Sink;
use crate::{IntType, RTResult};

const PRINTLN: &str = "println";

/// One activation: the top-level program or a single function call.
///
/// `result` is the terminal value. It is set by the first `return` executed
/// and, once set, every block of this activation stops before its next
/// statement.
pub struct Evaluator<'a> {
    env: Env,
    result: Option<IntType>,
    sink: &'a mut dyn Sink,
}

impl<'a> Evaluator<'a> {
    pub fn new(sink: &'a mut dyn Sink) -> Evaluator<'a> {
        Evaluator::with_env(Env::new(), sink)
    }

    pub fn with_env(env: Env, sink: &'a mut dyn Sink) -> Evaluator<'a> {
        Evaluator {
            env,
            result: None,
            sink,
        }
    }

    /// Executes `block` and returns the terminal value, if any.
    pub fn run(&mut self, block: &Block) -> RTResult<Option<IntType>> {
        self.eval_block(block)?;
        Ok(self.result)
    }

    pub fn result(&self) -> Option<IntType> {
        self.result
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    fn eval_block(&mut self, block: &Block) -> RTResult<()> {
        for stmt in &block.statements {
            if self.result.is_some() {
                break;
            }
            self.eval_statement(stmt)?;
        }
        Ok(())
    }

    fn eval_statement(&mut self, stmt: &Statement) -> RTResult<()> {
        debug!("Interpreting statement {}", stmt);
        match stmt {
            Statement::Function(name, params, body) => {
                self.env
                    .register_function(name.clone(), params.clone(), body.clone());
            }
            Statement::Variable(name, init) => {
                let value = match init {
                    Some(e) => self.eval_expr(e)?,
                    None => 0,
                };
                self.env.declare(name.clone(), value);
            }
            // An unbound target faults before the right-hand side runs.
            Statement::Assignment(name, e) => {
                if !self.env.is_bound(name) {
                    return Err(RunTimeError::VariableNotFound(name.clone()));
                }
                let value = self.eval_expr(e)?;
                self.env.assign(name, value)?;
            }
            Statement::IfCond(cond, then, otherwise) => {
                if self.eval_bool(cond)? {
                    self.eval_block(then)?;
                } else if let Some(otherwise) = otherwise {
                    self.eval_block(otherwise)?;
                }
            }
            // The condition is re-checked even after the body returned; only
            // the remaining body statements are skipped.
            Statement::WhileLoop(cond, body) => {
                while self.eval_bool(cond)? {
                    self.eval_block(body)?;
                }
            }
            Statement::ReturnExpr(e) => {
                let value = self.eval_expr(e)?;
                info!("Returning {}", value);
                self.result = Some(value);
            }
            Statement::Expr(e) => {
                self.eval_expr(e)?;
            }
        }
        Ok(())
    }

    fn eval_expr(&mut self, expr: &Expr) -> RTResult<IntType> {
        match expr {
            Expr::Literal(v) => Ok(*v),
            Expr::Identifier(name) => self.env.lookup(name),
            Expr::BinOp(l, op, r) => {
                let lv = self.eval_expr(l)?;
                let rv = self.eval_expr(r)?;
                apply(*op, lv, rv)
            }
            Expr::FuncCall(name, args) if name == PRINTLN => {
                for arg in args {
                    let value = match arg {
                        Expr::Identifier(var) => self.env.lookup(var)?,
                        e => self.eval_expr(e)?,
                    };
                    self.sink.print(value);
                }
                Ok(0)
            }
            Expr::FuncCall(name, args) => self.call(name, args),
        }
    }

    fn eval_bool(&mut self, expr: &Expr) -> RTResult<bool> {
        Ok(truthy(self.eval_expr(expr)?))
    }

    fn call(&mut self, name: &str, args: &[Expr]) -> RTResult<IntType> {
        let function = self
            .env
            .resolve_function(name)
            .ok_or_else(|| RunTimeError::FunctionNotFound(name.to_string()))?;
        if function.params.len() != args.len() {
            return Err(RunTimeError::ArgumentCountMismatch {
                name: name.to_string(),
                expected: function.params.len(),
                found: args.len(),
            });
        }
        let values = args
            .iter()
            .map(|arg| self.eval_expr(arg))
            .collect::<RTResult<Vec<_>>>()?;
        info!("Calling {} with {:?}", name, values);
        let env = self
            .env
            .activation(function.params.iter().cloned().zip(values));
        let mut callee = Evaluator::with_env(env, &mut *self.sink);
        Ok(callee.run(&function.body)?.unwrap_or(0))
    }
}

fn truthy(value: IntType) -> bool {
    value != 0
}

fn from_bool(b: bool) -> IntType {
    if b {
        1
    } else {
        0
    }
}

fn apply(op: Op, lv: IntType, rv: IntType) -> RTResult<IntType> {
    Ok(match op {
        Add => lv.wrapping_add(rv),
        Sub => lv.wrapping_sub(rv),
        Mul => lv.wrapping_mul(rv),
        Div => {
            if rv == 0 {
                return Err(RunTimeError::DivisionByZero);
            }
            lv.wrapping_div(rv)
        }
        Mod => {
            if rv == 0 {
                return Err(RunTimeError::DivisionByZero);
            }
            lv.wrapping_rem(rv)
        }
        Eq => from_bool(lv == rv),
        Neq => from_bool(lv != rv),
        Lt => from_bool(lv < rv),
        Gt => from_bool(lv > rv),
        Le => from_bool(lv <= rv),
        Ge => from_bool(lv >= rv),
        And => from_bool(truthy(lv) && truthy(rv)),
        Or => from_bool(truthy(lv) || truthy(rv)),
    })
}
