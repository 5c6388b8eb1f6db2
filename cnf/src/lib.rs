//! Chomsky normal form and CYK parsing of context-free grammars.

pub use cnf_cyk as cyk;
#[cfg(feature = "load")]
pub use cnf_load as load;
pub use cnf_normalize as normalize;

pub use cnf_cyk::{recognize, DerivationTree, Derivations};
pub use cnf_grammar::*;
#[cfg(feature = "load")]
pub use cnf_load::{read_symbols, LoadError, RuleSetLoadExt};
pub use cnf_normalize::{start_symbol, CnfNormalizeExt};
pub use cnf_symbol::NameInterner;

/// Normalizes `rules` and returns every derivation of `input` from `start` in the
/// normalized grammar.
pub fn parse(rules: &RuleSet<Name>, start: &str, input: &[Name]) -> Derivations<Pretty> {
    let cnf = rules.to_cnf(start);
    let input: Vec<Pretty> = input.iter().map(|name| Pretty::Text(name.clone())).collect();
    recognize(&cnf, &input, &start_symbol())
}
