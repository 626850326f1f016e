use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

pub const SIGIL: char = '$';
pub const NAMESPACE: char = '.';

/// True for names of the form `$.name`.
pub fn is_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next() == Some(SIGIL) && chars.next() == Some(NAMESPACE)
}

/// ## Variable memory

#[derive(Debug, Clone)]
pub struct Var {
    vars: HashMap<String, f64>,
}

impl Default for Var {
    fn default() -> Var {
        let mut vars = HashMap::new();
        vars.insert("$.var".to_string(), 0.0);
        Var { vars }
    }
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn contains(&self, var_name: &str) -> bool {
        self.vars.contains_key(var_name)
    }

    pub fn fetch(&self, var_name: &str) -> Option<f64> {
        self.vars.get(var_name).copied()
    }

    pub fn store(&mut self, var_name: &str, value: f64) -> Result<()> {
        debug_assert!(is_var_name(var_name));
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                if self.vars.len() >= u16::max_value() as usize {
                    return Err(error!(OutOfMemory; "TOO MANY VARIABLES"));
                }
                self.vars.insert(var_name.to_string(), value);
            }
        }
        Ok(())
    }

    pub fn remove(&mut self, var_name: &str) -> Option<f64> {
        self.vars.remove(var_name)
    }
}
