use std::{collections::HashMap, fmt::Display};

use crate::{
    error::RuntimeError,
    value::{Value, VarType},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    /// Environment
    ///
    /// One slot per declared identifier. A slot keeps the variant it was
    /// declared with; every write is coerced back to it.
    slots: HashMap<String, Value>,

    /// Declaration order, for the end-of-run dump.
    order: Vec<String>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment::default()
    }

    /// Creates the slot with the type's default value. Returns false if the
    /// name is already declared.
    pub fn declare(&mut self, name: &str, var_type: VarType) -> bool {
        if self.slots.contains_key(name) {
            return false;
        }
        self.slots.insert(name.to_string(), var_type.default_value());
        self.order.push(name.to_string());
        true
    }

    pub fn get(&self, name: &str) -> Result<Value, RuntimeError> {
        self.slots
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndeclaredIdentifier(name.to_string()))
    }

    pub fn var_type(&self, name: &str) -> Result<VarType, RuntimeError> {
        self.get(name).map(|value| value.var_type())
    }

    /// Overwrites an existing slot, converting `value` to the slot's variant.
    /// Returns the value as stored.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<Value, RuntimeError> {
        let slot = self
            .slots
            .get_mut(name)
            .ok_or_else(|| RuntimeError::UndeclaredIdentifier(name.to_string()))?;
        *slot = value.coerce_to(slot.var_type());
        Ok(*slot)
    }

    /// Read-modify-write on one slot.
    pub fn update<F>(&mut self, name: &str, f: F) -> Result<Value, RuntimeError>
    where
        F: FnOnce(Value) -> Value,
    {
        let current = self.get(name)?;
        self.assign(name, f(current))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Slots in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.slots.get(name).map(|value| (name.as_str(), *value)))
    }

    pub fn keys(&self) -> Vec<String> {
        self.order.clone()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{} is {}", name, value)?;
        }
        Ok(())
    }
}
