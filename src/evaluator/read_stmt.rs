use tracing::debug;

use super::EvalResult;
use crate::{environment::Environment, input::InputSource};

pub(crate) fn exec_read(
    target: &str,
    env: &mut Environment,
    input: &mut InputSource,
) -> EvalResult<()> {
    // the slot decides how the word is parsed
    let var_type = env.var_type(target)?;
    let value = input.read_value(var_type)?;
    env.assign(target, value)?;
    debug!(slot = target, %value, "read");
    Ok(())
}
