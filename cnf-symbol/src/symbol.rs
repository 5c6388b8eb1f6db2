//! The tagged symbol type.

use std::fmt;
use std::rc::Rc;

use crate::{Name, Pretty};

/// A grammar symbol during normalization.
///
/// Two symbols are equal iff their tags and payloads are equal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Symbol {
    /// A symbol of the source grammar.
    Original(Name),
    /// Forces its payload into terminal position. The rule `Terminal(a) -> a`
    /// accompanies every such symbol.
    Terminal(Rc<Symbol>),
    /// Stands for the suffix of a long rule body. The suffix is the identity, so two
    /// different suffixes never share a symbol.
    Binarized(Rc<[Symbol]>),
    /// The unique start symbol.
    Start,
}

impl Symbol {
    /// Wraps a name of the source grammar.
    pub fn original(name: impl Into<Name>) -> Self {
        Symbol::Original(name.into())
    }

    /// Marks a symbol as forced-terminal.
    pub fn terminal(sym: Symbol) -> Self {
        Symbol::Terminal(Rc::new(sym))
    }

    /// Creates the symbol standing for the given body suffix.
    pub fn binarized(suffix: &[Symbol]) -> Self {
        Symbol::Binarized(suffix.into())
    }

    /// Returns `true` for symbols introduced by normalization.
    pub fn is_synthetic(&self) -> bool {
        !matches!(self, Symbol::Original(_))
    }

    /// Returns the name of an original symbol.
    pub fn name(&self) -> Option<&Name> {
        match self {
            Symbol::Original(name) => Some(name),
            _ => None,
        }
    }

    /// Renders this symbol into its display-only form.
    ///
    /// Originals render to their bare name, forced terminals to `T` followed by their
    /// payload, binarized symbols to the tuple of their suffix and the start symbol
    /// to `start`.
    pub fn to_pretty(&self) -> Pretty {
        match self {
            Symbol::Original(name) => Pretty::Text(name.clone()),
            Symbol::Terminal(sym) => {
                Pretty::text(format!("{}{}", Pretty::TERMINAL_PREFIX, sym.to_pretty()))
            }
            Symbol::Binarized(suffix) => {
                Pretty::Tuple(suffix.iter().map(Symbol::to_pretty).collect())
            }
            Symbol::Start => Pretty::text(Pretty::START),
        }
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::original(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.to_pretty(), f)
    }
}
