use super::EvalResult;
use crate::{environment::Environment, value::Value};

pub(crate) fn eval_identifier(name: &str, env: &Environment) -> EvalResult<Value> {
    env.get(name)
}
