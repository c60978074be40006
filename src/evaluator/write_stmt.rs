use std::io::Write;

use tracing::debug;

use super::EvalResult;
use crate::environment::Environment;

pub(crate) fn exec_write(
    content: &str,
    is_identifier: bool,
    env: &Environment,
    out: &mut dyn Write,
) -> EvalResult<()> {
    if is_identifier {
        let value = env.get(content)?;
        debug!(identifier = content, %value, "write");
        writeln!(out, "{}", value)?;
    } else {
        debug!(literal = content, "write");
        writeln!(out, "{}", content)?;
    }
    Ok(())
}
