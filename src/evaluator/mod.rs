use std::io::Write;

use crate::{
    ast::{Expr, Program, Stmt},
    environment::Environment,
    error::RuntimeError,
    input::InputSource,
    value::Value,
};

mod assign_stmt;
mod compound_stmt;
mod infix;
mod literal;
mod prefix;
mod program;
mod read_stmt;
mod write_stmt;

pub type EvalResult<T> = Result<T, RuntimeError>;

pub trait Eval {
    fn eval(&self, env: &mut Environment) -> EvalResult<Value>;
}

pub trait Exec {
    fn exec(
        &self,
        env: &mut Environment,
        out: &mut dyn Write,
        input: &mut InputSource,
    ) -> EvalResult<()>;
}

impl Eval for Expr {
    fn eval(&self, env: &mut Environment) -> EvalResult<Value> {
        match self {
            Expr::IntegerLit(v) => Ok(Value::Integer(*v)),
            Expr::RealLit(v) => Ok(Value::Real(*v)),
            Expr::Identifier(name) => literal::eval_identifier(name, env),
            Expr::UnaryOp(op, operand) => prefix::eval_unary_op(*op, operand, env),
            Expr::BinaryOp(op, left, right) => infix::eval_binary_op(*op, left, right, env),
        }
    }
}

impl Exec for Stmt {
    fn exec(
        &self,
        env: &mut Environment,
        out: &mut dyn Write,
        input: &mut InputSource,
    ) -> EvalResult<()> {
        match self {
            Stmt::Assign(target, value) => assign_stmt::exec_assign(target, value, env),
            Stmt::Read(target) => read_stmt::exec_read(target, env, input),
            Stmt::Write(content, is_identifier) => {
                write_stmt::exec_write(content, *is_identifier, env, out)
            }
            Stmt::Compound(stmts) => compound_stmt::exec_compound(stmts, env, out, input),
        }
    }
}

impl Exec for Program {
    fn exec(
        &self,
        env: &mut Environment,
        out: &mut dyn Write,
        input: &mut InputSource,
    ) -> EvalResult<()> {
        self.block.compound.exec(env, out, input)
    }
}
