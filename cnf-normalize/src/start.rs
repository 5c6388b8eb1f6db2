use log::warn;

use cnf_grammar::RuleSet;
use cnf_symbol::Symbol;

/// Adds the rule `Start -> start`.
///
/// The start symbol never occurs on a right-hand side, whether or not `start` does.
/// A `start` without productions is declared as a nonterminal anyway, so that it is
/// not mistaken for a terminal later on.
pub fn introduce_start(rules: &RuleSet<Symbol>, start: &str) -> RuleSet<Symbol> {
    let start = Symbol::original(start);
    let mut result = rules.clone();
    if !result.contains_lhs(&start) {
        warn!("start symbol {} has no productions", start);
        result.declare(start.clone());
    }
    result.add_rule(Symbol::Start, [start]);
    result
}
