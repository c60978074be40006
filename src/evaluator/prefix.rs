use super::{EvalResult, Eval};
use crate::{
    ast::Expr,
    environment::Environment,
    error::RuntimeError,
    token::TokenKind,
    value::Value,
};

pub(crate) fn eval_unary_op(op: TokenKind, operand: &Expr, env: &mut Environment) -> EvalResult<Value> {
    match op {
        TokenKind::Minus => Ok(minus_op(operand.eval(env)?)),
        TokenKind::Increment => step_op(operand, 1, env),
        TokenKind::Decrement => step_op(operand, -1, env),
        _ => Err(RuntimeError::UnknownUnaryOperator(op)),
    }
}

fn minus_op(value: Value) -> Value {
    match value {
        Value::Integer(i) => Value::Integer(i.wrapping_neg()),
        Value::Real(r) => Value::Real(-r),
    }
}

/// `++`/`--`: writes the stepped value back into the named slot and yields it.
fn step_op(operand: &Expr, delta: i64, env: &mut Environment) -> EvalResult<Value> {
    let name = match operand {
        Expr::Identifier(name) => name,
        _ => return Err(RuntimeError::IncDecRequiresIdentifier),
    };
    env.update(name, |value| match value {
        Value::Integer(i) => Value::Integer(i.wrapping_add(delta)),
        Value::Real(r) => Value::Real(r + delta as f64),
    })
}
