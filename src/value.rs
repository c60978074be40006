use derive_more::{Display, Unwrap};

use crate::error::RuntimeError;

/// Declared type of a slot. Fixed for the lifetime of the slot.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    #[display(fmt = "INTEGER")]
    Integer,
    #[display(fmt = "REAL")]
    Real,
}

impl VarType {
    pub fn default_value(self) -> Value {
        match self {
            VarType::Integer => Value::Integer(0),
            VarType::Real => Value::Real(0.0),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Unwrap)]
pub enum Value {
    #[display(fmt = "{}", _0)]
    Integer(i64),
    #[display(fmt = "{}", _0)]
    Real(f64),
}

impl Value {
    pub fn var_type(&self) -> VarType {
        match self {
            Value::Integer(_) => VarType::Integer,
            Value::Real(_) => VarType::Real,
        }
    }

    /// Widens an integer to real.
    pub fn as_real(&self) -> f64 {
        match *self {
            Value::Integer(i) => i as f64,
            Value::Real(r) => r,
        }
    }

    pub fn as_integer_strict(&self) -> Result<i64, RuntimeError> {
        match *self {
            Value::Integer(i) => Ok(i),
            Value::Real(_) => Err(RuntimeError::ModRequiresInteger),
        }
    }

    /// Converts to the given variant: reals truncate toward zero, integers widen.
    pub fn coerce_to(self, target: VarType) -> Value {
        match (self, target) {
            (Value::Integer(i), VarType::Real) => Value::Real(i as f64),
            (Value::Real(r), VarType::Integer) => Value::Integer(r as i64),
            (value, _) => value,
        }
    }
}
