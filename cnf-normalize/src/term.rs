use log::debug;

use cnf_grammar::RuleSet;
use cnf_symbol::Symbol;

/// Replaces every terminal `a` on a right-hand side with `Terminal(a)`, and adds the
/// rule `Terminal(a) -> a`.
///
/// A symbol is a terminal iff it is not a left-hand side.
pub fn enforce_terminal_bodies(rules: &RuleSet<Symbol>) -> RuleSet<Symbol> {
    let force = |sym: &Symbol| {
        if rules.contains_lhs(sym) {
            sym.clone()
        } else {
            Symbol::terminal(sym.clone())
        }
    };
    let mut result = RuleSet::new();
    for (lhs, alternatives) in rules.iter() {
        let new_alternatives = result.declare(lhs.clone());
        for rhs in alternatives {
            new_alternatives.insert(rhs.iter().map(&force).collect());
        }
    }
    let terminals = rules.terminals();
    debug!("forcing {} terminals", terminals.len());
    for terminal in terminals {
        result.add_rule(Symbol::terminal(terminal.clone()), [terminal.clone()]);
    }
    result
}
