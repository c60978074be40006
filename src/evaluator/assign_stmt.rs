use tracing::debug;

use super::{EvalResult, Eval};
use crate::{ast::Expr, environment::Environment};

pub(crate) fn exec_assign(target: &str, value: &Expr, env: &mut Environment) -> EvalResult<()> {
    let value = value.eval(env)?;
    let stored = env.assign(target, value)?;
    debug!(slot = target, %value, %stored, "assign");
    Ok(())
}
