use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Names are upper-cased by the lexer, so lookups are effectively
/// case-insensitive. An undefined variable is a NameError, never a
/// default value.
#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, Val>,
}

impl Var {
    pub const MAX_VARIABLES: usize = 1000;

    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn fetch(&self, var_name: &str) -> Result<Val> {
        match self.vars.get(var_name) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(NameError; "UNDEFINED VARIABLE")),
        }
    }

    /// Create-or-update; creation past capacity is a CapacityError.
    pub fn store(&mut self, var_name: &str, value: Val) -> Result<()> {
        if !self.vars.contains_key(var_name) && self.vars.len() >= Var::MAX_VARIABLES {
            return Err(error!(CapacityError; "TOO MANY VARIABLES"));
        }
        self.vars.insert(var_name.to_string(), value);
        Ok(())
    }

    /// Read-only snapshot sorted by name, for inspection tooling.
    pub fn snapshot(&self) -> Vec<(String, Val)> {
        let mut vars: Vec<(String, Val)> = self
            .vars
            .iter()
            .map(|(name, val)| (name.clone(), val.clone()))
            .collect();
        vars.sort_by(|a, b| a.0.cmp(&b.0));
        vars
    }
}
