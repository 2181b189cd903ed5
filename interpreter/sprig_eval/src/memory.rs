//! The symbol table: one process-wide mapping from name to value.
//!
//! Shadowing is a caller-side discipline, not a transaction: callers that
//! rebind a name for a bounded scope (loop index variables, the arguments
//! collection of an algorithm call) save the prior binding with [`shadow`]
//! and hand it back to [`restore`] when the scope ends.
//!
//! [`shadow`]: Memory::shadow
//! [`restore`]: Memory::restore

use rustc_hash::FxHashMap;

use crate::value::Value;

#[derive(Default)]
pub struct Memory {
    map: FxHashMap<String, Value>,
}

impl Memory {
    pub fn new() -> Self {
        Memory::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.map.insert(name.into(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.map.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Rebind `name`, returning the prior binding for a later [`restore`].
    ///
    /// [`restore`]: Memory::restore
    pub fn shadow(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.map.insert(name.into(), value)
    }

    /// Reinstate what [`shadow`] returned: the prior value, or remove the
    /// name if it was unbound before.
    ///
    /// [`shadow`]: Memory::shadow
    pub fn restore(&mut self, name: &str, prior: Option<Value>) {
        match prior {
            Some(value) => self.set(name, value),
            None => {
                self.map.remove(name);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
