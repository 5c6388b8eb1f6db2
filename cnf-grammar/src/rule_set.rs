//! Definitions of the rule set type and its right-hand sides.

use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::fmt;

use smallvec::SmallVec;

use crate::rule_builder::RuleBuilder;
use crate::rule_ref::RuleRef;
use cnf_symbol::Symbol;

/// A rule's right-hand side. Bodies in Chomsky normal form never spill to the heap.
pub type Rhs<S> = SmallVec<[S; 2]>;

/// Context-free grammar as a mapping from left-hand sides to sets of right-hand sides.
///
/// A left-hand side may map to an empty set, which declares a nonterminal without
/// productions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "S: serde::Serialize",
        deserialize = "S: Ord + serde::Deserialize<'de>"
    ))
)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RuleSet<S = Symbol> {
    rules: BTreeMap<S, BTreeSet<Rhs<S>>>,
}

impl<S> Default for RuleSet<S> {
    fn default() -> Self {
        RuleSet {
            rules: BTreeMap::new(),
        }
    }
}

impl<S> RuleSet<S> {
    /// Creates an empty rule set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of left-hand sides.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Checks whether there are no left-hand sides.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the number of rules, counting each alternative separately.
    pub fn num_rules(&self) -> usize {
        self.rules.values().map(BTreeSet::len).sum()
    }

    /// Iterates over left-hand sides in order.
    pub fn lhs_symbols(&self) -> btree_map::Keys<'_, S, BTreeSet<Rhs<S>>> {
        self.rules.keys()
    }

    /// Iterates over left-hand sides together with their alternatives.
    pub fn iter(&self) -> btree_map::Iter<'_, S, BTreeSet<Rhs<S>>> {
        self.rules.iter()
    }

    /// Iterates over all rules, one per alternative.
    pub fn rules(&self) -> impl Iterator<Item = RuleRef<'_, S>> {
        self.rules.iter().flat_map(|(lhs, alternatives)| {
            alternatives
                .iter()
                .map(move |rhs| RuleRef { lhs, rhs: &rhs[..] })
        })
    }
}

impl<S> RuleSet<S>
where
    S: Ord + Clone,
{
    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: impl Into<S>) -> RuleBuilder<'_, S> {
        RuleBuilder::new(self).rule(lhs)
    }

    /// Makes `lhs` a left-hand side, with no alternatives unless it already had some.
    pub fn declare(&mut self, lhs: S) -> &mut BTreeSet<Rhs<S>> {
        self.rules.entry(lhs).or_default()
    }

    /// Adds an alternative. Returns `false` if the rule was already present.
    pub fn add_rule<I>(&mut self, lhs: S, rhs: I) -> bool
    where
        I: IntoIterator<Item = S>,
    {
        self.declare(lhs).insert(rhs.into_iter().collect())
    }

    /// Checks whether `sym` is a left-hand side.
    pub fn contains_lhs(&self, sym: &S) -> bool {
        self.rules.contains_key(sym)
    }

    /// Checks whether the given rule is present.
    pub fn contains_rule(&self, lhs: &S, rhs: &[S]) -> bool {
        self.rules
            .get(lhs)
            .map_or(false, |alternatives| alternatives.contains(rhs))
    }

    /// Returns the alternatives of `lhs`.
    pub fn rhs_of(&self, lhs: &S) -> Option<&BTreeSet<Rhs<S>>> {
        self.rules.get(lhs)
    }

    /// Removes a left-hand side together with its alternatives.
    pub fn remove_lhs(&mut self, lhs: &S) -> Option<BTreeSet<Rhs<S>>> {
        self.rules.remove(lhs)
    }

    /// Retains only the rules for which the predicate holds. Left-hand sides stay
    /// declared even when they lose all alternatives.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&S, &[S]) -> bool,
    {
        for (lhs, alternatives) in self.rules.iter_mut() {
            alternatives.retain(|rhs| f(lhs, &rhs[..]));
        }
    }

    /// Returns every symbol that occurs on some right-hand side.
    pub fn body_symbols(&self) -> BTreeSet<&S> {
        self.rules
            .values()
            .flatten()
            .flat_map(|rhs| rhs.iter())
            .collect()
    }

    /// Returns every right-hand side symbol that is not a left-hand side.
    pub fn terminals(&self) -> BTreeSet<&S> {
        let mut terminals = self.body_symbols();
        terminals.retain(|sym| !self.contains_lhs(sym));
        terminals
    }

    /// Returns the rule set with every symbol mapped through `f`. Rules that become
    /// equal under the mapping are merged.
    pub fn map_symbols<T, F>(&self, mut f: F) -> RuleSet<T>
    where
        T: Ord + Clone,
        F: FnMut(&S) -> T,
    {
        let mut result = RuleSet::new();
        for (lhs, alternatives) in &self.rules {
            let new_alternatives = result.declare(f(lhs));
            for rhs in alternatives {
                new_alternatives.insert(rhs.iter().map(&mut f).collect());
            }
        }
        result
    }
}

impl<S> FromIterator<(S, Vec<S>)> for RuleSet<S>
where
    S: Ord + Clone,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
    {
        let mut rules = RuleSet::new();
        for (lhs, rhs) in iter {
            rules.add_rule(lhs, rhs);
        }
        rules
    }
}

/// Prints one line per left-hand side, e.g. `S -> a S b | ε`.
impl<S: fmt::Display> fmt::Display for RuleSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (lhs, alternatives) in &self.rules {
            write!(f, "{} ->", lhs)?;
            for (i, rhs) in alternatives.iter().enumerate() {
                if i != 0 {
                    f.write_str(" |")?;
                }
                if rhs.is_empty() {
                    f.write_str(" ε")?;
                }
                for sym in rhs {
                    write!(f, " {}", sym)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
