use std::collections::BTreeMap;
use std::fmt::Display;

/// Variable store of one run.
///
/// A name enters the store on its first assignment and is never removed.
/// Iteration is in ascending name order.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    store: BTreeMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.store.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    /// Stores `value` under `name`, returning the value it replaced.
    pub fn set(&mut self, name: String, value: i64) -> Option<i64> {
        self.store.insert(name, value)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &i64)> {
        self.store.iter()
    }
}

/// One `name = value` line per variable.
impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in &self.store {
            writeln!(f, "{name} = {value}")?;
        }

        Ok(())
    }
}
