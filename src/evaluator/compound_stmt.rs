use std::io::Write;

use super::{EvalResult, Exec};
use crate::{ast::Stmt, environment::Environment, input::InputSource};

pub(crate) fn exec_compound(
    stmts: &[Stmt],
    env: &mut Environment,
    out: &mut dyn Write,
    input: &mut InputSource,
) -> EvalResult<()> {
    for stmt in stmts {
        stmt.exec(env, out, input)?;
    }
    Ok(())
}
