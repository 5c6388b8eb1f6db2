use std::collections::BTreeSet;

use log::trace;
use rpds::RedBlackTreeSet;

use cnf_grammar::{Rhs, RuleSet};
use cnf_symbol::Symbol;

/// Replaces every body that consists of a single nonterminal with that
/// nonterminal's own bodies, following chains of such bodies.
///
/// Every chain carries the set of left-hand sides already expanded on it. A symbol
/// is never expanded twice on one chain, which ends cycles of unit bodies.
pub fn eliminate_unit(rules: &RuleSet<Symbol>) -> RuleSet<Symbol> {
    let mut result = RuleSet::new();
    for lhs in rules.lhs_symbols() {
        let seen = RedBlackTreeSet::new().insert(lhs.clone());
        expand(rules, lhs, &seen, result.declare(lhs.clone()));
    }
    result
}

fn expand(
    rules: &RuleSet<Symbol>,
    lhs: &Symbol,
    seen: &RedBlackTreeSet<Symbol>,
    out: &mut BTreeSet<Rhs<Symbol>>,
) {
    let alternatives = match rules.rhs_of(lhs) {
        Some(alternatives) => alternatives,
        None => return,
    };
    for rhs in alternatives {
        match &rhs[..] {
            [target] if rules.contains_lhs(target) => {
                if seen.contains(target) {
                    continue;
                }
                trace!("unit chain {} -> {}", lhs, target);
                expand(rules, target, &seen.insert(target.clone()), out);
            }
            _ => {
                out.insert(rhs.clone());
            }
        }
    }
}
