use super::{EvalResult, Eval};
use crate::{
    ast::Expr,
    environment::Environment,
    error::RuntimeError,
    token::TokenKind,
    value::Value,
};

pub(crate) fn eval_binary_op(
    op: TokenKind,
    left: &Expr,
    right: &Expr,
    env: &mut Environment,
) -> EvalResult<Value> {
    let left = left.eval(env)?;
    let right = right.eval(env)?;

    use TokenKind::*;
    match op {
        Plus | Minus | Multiply | Divide => match (left, right) {
            (Value::Integer(l), Value::Integer(r)) => integer_infix_op(l, op, r),
            _ => Ok(real_infix_op(left.as_real(), op, right.as_real())),
        },
        Mod => {
            let l = left.as_integer_strict()?;
            let r = right.as_integer_strict()?;
            if r == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Value::Integer(l.wrapping_rem(r)))
        }
        Power => match (left, right) {
            (Value::Integer(_), Value::Integer(_)) => Err(RuntimeError::PowerRequiresReal),
            _ => Ok(Value::Real(left.as_real().powf(right.as_real()))),
        },
        _ => Err(RuntimeError::UnmatchedBinaryOperator(op)),
    }
}

fn integer_infix_op(left: i64, op: TokenKind, right: i64) -> EvalResult<Value> {
    let value = match op {
        TokenKind::Plus => left.wrapping_add(right),
        TokenKind::Minus => left.wrapping_sub(right),
        TokenKind::Multiply => left.wrapping_mul(right),
        TokenKind::Divide => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            // truncates toward zero
            left.wrapping_div(right)
        }
        _ => return Err(RuntimeError::UnmatchedBinaryOperator(op)),
    };
    Ok(Value::Integer(value))
}

fn real_infix_op(left: f64, op: TokenKind, right: f64) -> Value {
    Value::Real(match op {
        TokenKind::Plus => left + right,
        TokenKind::Minus => left - right,
        TokenKind::Multiply => left * right,
        _ => left / right,
    })
}
