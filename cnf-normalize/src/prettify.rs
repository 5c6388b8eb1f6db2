use std::collections::BTreeMap;

use log::warn;

use cnf_grammar::RuleSet;
use cnf_symbol::{Pretty, Symbol};

/// Renders every symbol with [`Symbol::to_pretty`].
pub fn prettify(rules: &RuleSet<Symbol>) -> RuleSet<Pretty> {
    let mut rendered: BTreeMap<Pretty, &Symbol> = BTreeMap::new();
    for sym in rules.lhs_symbols().chain(rules.body_symbols()) {
        let pretty = sym.to_pretty();
        match rendered.get(&pretty) {
            Some(&other) if other != sym => {
                warn!("{:?} and {:?} both render as {}", other, sym, pretty);
            }
            Some(_) => {}
            None => {
                rendered.insert(pretty, sym);
            }
        }
    }
    rules.map_symbols(Symbol::to_pretty)
}
