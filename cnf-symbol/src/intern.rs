//! Interning of symbol names.

use std::collections::HashSet;

use crate::Name;

/// Hands out one shared allocation per distinct name.
#[derive(Clone, Debug, Default)]
pub struct NameInterner {
    set: HashSet<Name>,
}

impl NameInterner {
    /// Creates an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared name equal to `value`, allocating it on first use.
    pub fn get_or_intern<T>(&mut self, value: T) -> Name
    where
        T: AsRef<str>,
    {
        if let Some(name) = self.set.get(value.as_ref()) {
            return name.clone();
        }
        let name: Name = value.as_ref().into();
        self.set.insert(name.clone());
        name
    }

    /// Returns the number of distinct names.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Checks whether no name was interned yet.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
