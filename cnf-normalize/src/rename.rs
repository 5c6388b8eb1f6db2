use cnf_grammar::RuleSet;
use cnf_symbol::{Name, Symbol};

/// Wraps every symbol in [`Symbol::Original`].
pub fn rename(rules: &RuleSet<Name>) -> RuleSet<Symbol> {
    rules.map_symbols(|name| Symbol::Original(name.clone()))
}
