use std::collections::HashMap;
use std::hash::Hash;

/// Maps symbols to dense indices.
#[derive(Clone, Debug)]
pub(crate) struct SymbolInterner<S> {
    ids: HashMap<S, usize>,
    symbols: Vec<S>,
}

impl<S> SymbolInterner<S>
where
    S: Hash + Eq + Clone,
{
    pub(crate) fn new() -> Self {
        SymbolInterner {
            ids: HashMap::new(),
            symbols: vec![],
        }
    }

    pub(crate) fn intern(&mut self, sym: &S) -> usize {
        if let Some(&id) = self.ids.get(sym) {
            return id;
        }
        let id = self.symbols.len();
        self.ids.insert(sym.clone(), id);
        self.symbols.push(sym.clone());
        id
    }

    pub(crate) fn get(&self, sym: &S) -> Option<usize> {
        self.ids.get(sym).copied()
    }

    pub(crate) fn resolve(&self, id: usize) -> &S {
        &self.symbols[id]
    }

    pub(crate) fn len(&self) -> usize {
        self.symbols.len()
    }
}
