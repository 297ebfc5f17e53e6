use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use ast::ast::Block;
use log::debug;

use crate::error::RunTimeError;
use crate::{IntType, RTResult};

/// A declared function: its formal parameters and body.
#[derive(Debug, PartialEq)]
pub struct Function {
    pub params: Vec<String>,
    pub body: Block,
}

type FunctionTable = HashMap<String, Rc<Function>>;

/// Variable bindings of one activation plus a handle to the function table
/// shared by every activation of the same run.
#[derive(Debug, Clone)]
pub struct Env {
    functions: Rc<RefCell<FunctionTable>>,
    vars: HashMap<String, IntType>,
}

impl Env {
    pub fn new() -> Env {
        Env {
            functions: Rc::new(RefCell::new(HashMap::new())),
            vars: HashMap::new(),
        }
    }

    /// Binds `name`, replacing any previous binding.
    pub fn declare(&mut self, name: impl Into<String>, value: IntType) {
        self.vars.insert(name.into(), value);
    }

    pub fn assign(&mut self, name: &str, value: IntType) -> RTResult<()> {
        match self.vars.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RunTimeError::VariableNotFound(name.to_string())),
        }
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn lookup(&self, name: &str) -> RTResult<IntType> {
        self.vars
            .get(name)
            .copied()
            .ok_or_else(|| RunTimeError::VariableNotFound(name.to_string()))
    }

    /// Last registration of a name wins.
    pub fn register_function(&self, name: impl Into<String>, params: Vec<String>, body: Block) {
        let name = name.into();
        debug!("Registering function {}({})", name, params.join(", "));
        (*self.functions)
            .borrow_mut()
            .insert(name, Rc::new(Function { params, body }));
    }

    pub fn resolve_function(&self, name: &str) -> Option<Rc<Function>> {
        (*self.functions).borrow().get(name).cloned()
    }

    /// Environment for a call: a copy of these bindings, overridden by
    /// `bindings`, sharing the same function table.
    pub fn activation<I>(&self, bindings: I) -> Env
    where
        I: IntoIterator<Item = (String, IntType)>,
    {
        let functions = Rc::clone(&self.functions);
        let mut vars = self.vars.clone();
        vars.extend(bindings);
        Env { functions, vars }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
