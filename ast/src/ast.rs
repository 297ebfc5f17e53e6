pub type IntType = i64;

/// An ordered sequence of statements, executed front to back.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Block {
        Block { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl From<Vec<Statement>> for Block {
    fn from(statements: Vec<Statement>) -> Self {
        Block::new(statements)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `fun name(params) { body }`
    Function(String, Vec<String>, Block),
    /// `var name = init`; a missing initializer means zero.
    Variable(String, Option<Expr>),
    Assignment(String, Expr),
    WhileLoop(Expr, Block),
    IfCond(Expr, Block, Option<Block>),
    ReturnExpr(Expr),
    Expr(Expr),
}

impl Statement {
    pub fn var(name: impl Into<String>, init: Expr) -> Statement {
        Statement::Variable(name.into(), Some(init))
    }

    pub fn assign(name: impl Into<String>, expr: Expr) -> Statement {
        Statement::Assignment(name.into(), expr)
    }

    pub fn ret(expr: Expr) -> Statement {
        Statement::ReturnExpr(expr)
    }

    pub fn function<S: Into<String>>(
        name: impl Into<String>,
        params: impl IntoIterator<Item = S>,
        body: impl Into<Block>,
    ) -> Statement {
        Statement::Function(
            name.into(),
            params.into_iter().map(Into::into).collect(),
            body.into(),
        )
    }
}

impl From<Expr> for Statement {
    fn from(expr: Expr) -> Self {
        Statement::Expr(expr)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(String),
    Literal(IntType),
    BinOp(Box<Expr>, Op, Box<Expr>),
    FuncCall(String, Vec<Expr>),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Expr {
        Expr::Identifier(name.into())
    }

    pub fn lit(value: IntType) -> Expr {
        Expr::Literal(value)
    }

    pub fn binop(left: Expr, op: Op, right: Expr) -> Expr {
        Expr::BinOp(Box::new(left), op, Box::new(right))
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::FuncCall(name.into(), args)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Neq,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
}

impl Op {
    pub fn from_symbol(symbol: &str) -> Option<Op> {
        match symbol {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" => Some(Op::Mul),
            "/" => Some(Op::Div),
            "%" => Some(Op::Mod),
            "==" => Some(Op::Eq),
            "!=" => Some(Op::Neq),
            "<" => Some(Op::Lt),
            ">" => Some(Op::Gt),
            "<=" => Some(Op::Le),
            ">=" => Some(Op::Ge),
            "&&" => Some(Op::And),
            "||" => Some(Op::Or),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Mod => "%",
            Op::Eq => "==",
            Op::Neq => "!=",
            Op::Lt => "<",
            Op::Gt => ">",
            Op::Le => "<=",
            Op::Ge => ">=",
            Op::And => "&&",
            Op::Or => "||",
        }
    }
}
