//! Elimination of empty bodies.

use std::collections::{BTreeSet, HashMap};

use bit_vec::BitVec;
use log::{debug, trace};

use cnf_grammar::{Rhs, RuleSet};
use cnf_symbol::Symbol;

/// The set of nullable left-hand sides, in the form of a bit vector indexed by
/// the position of each left-hand side.
struct Nullable<'a> {
    index: HashMap<&'a Symbol, usize>,
    nullable: BitVec,
}

impl<'a> Nullable<'a> {
    /// Iterates to a fixed point. A symbol is nullable if all symbols of one of its
    /// bodies are nullable, which includes the empty body.
    fn new(rules: &'a RuleSet<Symbol>) -> Self {
        let index = rules
            .lhs_symbols()
            .enumerate()
            .map(|(i, lhs)| (lhs, i))
            .collect();
        let mut this = Nullable {
            index,
            nullable: BitVec::from_elem(rules.len(), false),
        };
        let mut changed = true;
        while changed {
            changed = false;
            for (i, (_lhs, alternatives)) in rules.iter().enumerate() {
                if this.nullable[i] {
                    continue;
                }
                let derives_empty = alternatives
                    .iter()
                    .any(|rhs| rhs.iter().all(|sym| this.contains(sym)));
                if derives_empty {
                    this.nullable.set(i, true);
                    changed = true;
                }
            }
        }
        this
    }

    fn contains(&self, sym: &Symbol) -> bool {
        self.index.get(sym).map_or(false, |&i| self.nullable[i])
    }

    fn count(&self) -> usize {
        self.nullable.iter().filter(|&bit| bit).count()
    }
}

/// Returns the symbols from which the empty string is derivable.
pub fn nullable_symbols(rules: &RuleSet<Symbol>) -> BTreeSet<Symbol> {
    let nullable = Nullable::new(rules);
    rules
        .lhs_symbols()
        .filter(|lhs| nullable.contains(lhs))
        .cloned()
        .collect()
}

/// Returns every way of dropping or keeping each nullable occurrence in `rhs`,
/// including `rhs` itself and, if every symbol is nullable, the empty body.
pub fn drop_or_keep<S, F>(rhs: &[S], is_nullable: &F) -> Vec<Rhs<S>>
where
    S: Clone,
    F: Fn(&S) -> bool,
{
    let (first, rest) = match rhs.split_first() {
        Some(split) => split,
        None => return vec![Rhs::new()],
    };
    let tails = drop_or_keep(rest, is_nullable);
    let mut variants = Vec::with_capacity(tails.len() * 2);
    for tail in tails {
        if is_nullable(first) {
            variants.push(tail.clone());
        }
        let mut kept = Rhs::with_capacity(tail.len() + 1);
        kept.push(first.clone());
        kept.extend(tail);
        variants.push(kept);
    }
    variants
}

/// Removes all empty bodies.
///
/// Each body with nullable symbols gains every non-empty variant with some of them
/// dropped. Then the empty bodies go. A left-hand side left without bodies derived
/// nothing but the empty string, so it is removed along with every body that
/// mentions it.
pub fn eliminate_nullable(rules: &RuleSet<Symbol>) -> RuleSet<Symbol> {
    let nullable = Nullable::new(rules);
    debug!("{} nullable symbols", nullable.count());
    let mut result = rules.clone();
    let is_nullable = |sym: &Symbol| nullable.contains(sym);
    for rule in rules.rules() {
        if !rule.rhs.iter().any(is_nullable) {
            continue;
        }
        for variant in drop_or_keep(rule.rhs, &is_nullable) {
            if !variant.is_empty() {
                result.add_rule(rule.lhs.clone(), variant);
            }
        }
    }
    // Only nullable symbols have empty bodies.
    result.retain(|_lhs, rhs| !rhs.is_empty());
    prune_without_bodies(&mut result);
    result
}

fn prune_without_bodies(rules: &mut RuleSet<Symbol>) {
    loop {
        let empty: BTreeSet<Symbol> = rules
            .iter()
            .filter(|(_lhs, alternatives)| alternatives.is_empty())
            .map(|(lhs, _alternatives)| lhs.clone())
            .collect();
        if empty.is_empty() {
            break;
        }
        debug!("removing {} symbols without bodies", empty.len());
        for lhs in &empty {
            trace!("removing {}", lhs);
            rules.remove_lhs(lhs);
        }
        rules.retain(|_lhs, rhs| !rhs.iter().any(|sym| empty.contains(sym)));
    }
}
