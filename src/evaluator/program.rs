use std::io::Write;

use tracing::debug;

use super::{EvalResult, Exec};
use crate::{ast::Program, environment::Environment, input::InputSource};

impl Program {
    /// Runs the program against a freshly initialised environment built from
    /// its declarations and hands that environment back.
    pub fn run(&self, out: &mut dyn Write, input: &mut InputSource) -> EvalResult<Environment> {
        let mut env = self.block.environment();
        debug!(program = %self.name, slots = env.len(), "run");
        self.exec(&mut env, out, input)?;
        Ok(env)
    }
}
