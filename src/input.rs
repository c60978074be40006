use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

use crate::{
    error::RuntimeError,
    value::{Value, VarType},
};

/// Whitespace-separated words feeding `READ` statements. Words may span
/// lines; a line is only pulled from the reader once the previous one is used up.
pub struct InputSource<'a> {
    reader:  Box<dyn BufRead + 'a>,
    pending: VecDeque<String>,
}

impl<'a> InputSource<'a> {
    pub fn new(reader: impl BufRead + 'a) -> InputSource<'a> {
        InputSource {
            reader:  Box::new(reader),
            pending: VecDeque::new(),
        }
    }

    pub fn empty() -> InputSource<'static> {
        InputSource::new(io::empty())
    }

    pub fn next_word(&mut self) -> Result<String, RuntimeError> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Ok(word);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(RuntimeError::EndOfInput);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Reads one word and parses it as the given variant.
    pub fn read_value(&mut self, var_type: VarType) -> Result<Value, RuntimeError> {
        let word = self.next_word()?;
        let value = match var_type {
            VarType::Integer => word.parse::<i64>().map(Value::Integer).ok(),
            VarType::Real => word.parse::<f64>().map(Value::Real).ok(),
        };
        value.ok_or(RuntimeError::InvalidInput(var_type, word))
    }
}
