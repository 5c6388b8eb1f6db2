use cnf_grammar::RuleSet;
use cnf_symbol::Symbol;

/// Splits every body longer than two symbols into a right-associated chain.
///
/// `A -> x y z w` becomes `A -> x (y z w)`, `(y z w) -> y (z w)` and
/// `(z w) -> z w`, where `(..)` is the binarized symbol of that suffix. Each
/// derivation of the original body corresponds to exactly one derivation of the chain.
pub fn binarize(rules: &RuleSet<Symbol>) -> RuleSet<Symbol> {
    let mut result = RuleSet::new();
    for (lhs, alternatives) in rules.iter() {
        result.declare(lhs.clone());
        for rhs in alternatives {
            if rhs.len() <= 2 {
                result.add_rule(lhs.clone(), rhs.iter().cloned());
                continue;
            }
            result.add_rule(
                lhs.clone(),
                [rhs[0].clone(), Symbol::binarized(&rhs[1..])],
            );
            let last = rhs.len() - 2;
            for i in 1..last {
                result.add_rule(
                    Symbol::binarized(&rhs[i..]),
                    [rhs[i].clone(), Symbol::binarized(&rhs[i + 1..])],
                );
            }
            result.add_rule(Symbol::binarized(&rhs[last..]), rhs[last..].iter().cloned());
        }
    }
    result
}
